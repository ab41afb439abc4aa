/// Region composition: folds a normalized result recognized from a sub-area
/// of the screen into a parent result as one more region.
///
/// Appends only. Overlapping regions are kept as they are; resolving overlap
/// is left to the renderer.
use crate::geometry::{FractionalPosition, FractionalSize, Resolution};
use crate::ocr_result::scalable::{NormalizedItem, NormalizedResult, OcrRegion};

/// Where a sub-capture sits inside the parent frame, fractional scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionPlacement {
    pub position: FractionalPosition,
    pub size: FractionalSize,
}

impl RegionPlacement {
    pub fn new(position: FractionalPosition, size: FractionalSize) -> Self {
        Self { position, size }
    }
}

/// Append `sub_result` to `parent` as a new region at `placement`.
///
/// With `global_scaling` the items are rewritten into the parent frame before
/// they are appended; otherwise they stay in the sub-region's local frame and
/// the renderer applies the region transform at draw time.
///
/// Only the first region of `sub_result` is used. A sub-result without
/// regions still appends an (empty) region.
pub fn compose(
    parent: &mut NormalizedResult,
    sub_result: NormalizedResult,
    placement: RegionPlacement,
    global_scaling: bool,
) {
    let sub_id = sub_result.id;
    let extra_regions = sub_result.ocr_regions.len().saturating_sub(1);
    let items = sub_result
        .ocr_regions
        .into_iter()
        .next()
        .map(|region| region.results)
        .unwrap_or_default();

    if extra_regions > 0 {
        tracing::debug!(sub_id, extra_regions, "ignoring regions past the first");
    }

    let results: Vec<NormalizedItem> = if global_scaling {
        items
            .into_iter()
            .map(|item| NormalizedItem {
                bounds: item
                    .bounds
                    .into_parent_frame(placement.position, placement.size),
                ..item
            })
            .collect()
    } else {
        items
    };

    tracing::debug!(
        parent_id = parent.id,
        sub_id,
        items = results.len(),
        global_scaling,
        "region composed"
    );

    parent.ocr_regions.push(OcrRegion {
        position: placement.position,
        size: placement.size,
        results,
    });
}

/// Accumulates sub-results into one aggregate and hands out the finished
/// value once, so a half-built aggregate is never shared.
#[derive(Debug, Clone)]
pub struct RegionComposer {
    result: NormalizedResult,
    global_scaling: bool,
}

impl RegionComposer {
    pub fn new(id: i64, context_resolution: Resolution) -> Self {
        Self::from_result(NormalizedResult::new(id, context_resolution))
    }

    /// Continue from an existing result; its regions are kept first.
    pub fn from_result(parent: NormalizedResult) -> Self {
        Self {
            result: parent,
            global_scaling: true,
        }
    }

    pub fn global_scaling(mut self, enabled: bool) -> Self {
        self.global_scaling = enabled;
        self
    }

    pub fn compose(&mut self, sub_result: NormalizedResult, placement: RegionPlacement) -> &mut Self {
        compose(&mut self.result, sub_result, placement, self.global_scaling);
        self
    }

    pub fn region_count(&self) -> usize {
        self.result.ocr_regions.len()
    }

    pub fn build(self) -> NormalizedResult {
        self.result
    }
}
