use crate::geometry::calculators::{angle_degrees, height_pct, position, width_pct};
use crate::geometry::{PercentDimensions, Resolution};
use crate::ocr_result::raw::{RawItem, RawRecognitionResult};
use crate::ocr_result::scalable::{NormalizedBox, NormalizedItem, NormalizedResult, OcrRegion};

/// Convert a pixel-space recognition result into the normalized model.
///
/// The whole capture becomes region zero (`{0,0}` / `{1,1}`) and items keep
/// their order.
pub fn normalize(raw: &RawRecognitionResult) -> NormalizedResult {
    let resolution = raw.context_resolution;
    let results: Vec<NormalizedItem> = raw
        .results
        .iter()
        .map(|item| normalize_item(item, resolution))
        .collect();

    tracing::debug!(
        id = raw.id,
        items = results.len(),
        width = resolution.width,
        height = resolution.height,
        "recognition result normalized"
    );

    NormalizedResult {
        id: raw.id,
        context_resolution: resolution,
        ocr_regions: vec![OcrRegion::full_frame(results)],
    }
}

fn normalize_item(item: &RawItem, resolution: Resolution) -> NormalizedItem {
    let vertical = item.quad.top_edge_vertical();
    let horizontal = item.quad.top_edge_horizontal();

    NormalizedItem {
        text: item.text.clone(),
        score: item.score,
        bounds: NormalizedBox {
            position: position(item.quad.top_left, resolution),
            dimensions: Some(PercentDimensions {
                width: width_pct(vertical, horizontal, resolution),
                height: height_pct(&item.quad, resolution),
            }),
            angle_degrees: Some(angle_degrees(vertical, horizontal)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{FractionalPosition, FractionalSize, QuadBox};

    fn item(text: &str, quad: QuadBox) -> RawItem {
        RawItem {
            text: text.to_string(),
            score: 0.9,
            quad,
        }
    }

    #[test]
    fn single_full_frame_region_in_order() {
        let raw = RawRecognitionResult {
            id: 42,
            context_resolution: Resolution::new(1000.0, 1000.0),
            results: vec![
                item("first", QuadBox::from_rect(0.0, 0.0, 10.0, 10.0)),
                item("second", QuadBox::from_rect(100.0, 100.0, 200.0, 100.0)),
                item("third", QuadBox::from_rect(500.0, 900.0, 50.0, 20.0)),
            ],
        };

        let result = normalize(&raw);
        assert_eq!(result.id, 42);
        assert_eq!(result.ocr_regions.len(), 1);

        let region = &result.ocr_regions[0];
        assert_eq!(region.position, FractionalPosition::new(0.0, 0.0));
        assert_eq!(region.size, FractionalSize::new(1.0, 1.0));

        let texts: Vec<&str> = region.results.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn scenario_box_geometry() {
        let raw = RawRecognitionResult {
            id: 1,
            context_resolution: Resolution::new(1000.0, 1000.0),
            results: vec![item("t", QuadBox::from_rect(100.0, 100.0, 200.0, 100.0))],
        };

        let result = normalize(&raw);
        let b = result.ocr_regions[0].results[0].bounds;
        assert!((b.position.left - 10.0).abs() < 1e-9);
        assert!((b.position.top - 10.0).abs() < 1e-9);
        assert_eq!(b.angle_degrees, Some(0.0));

        let dims = b.dimensions.unwrap();
        assert!((dims.width - 20.0).abs() < 1e-9);
        assert!((dims.height - 10.0).abs() < 1e-9);
    }

    #[test]
    fn empty_result_still_has_region_zero() {
        let raw = RawRecognitionResult {
            id: 5,
            context_resolution: Resolution::new(640.0, 480.0),
            results: Vec::new(),
        };
        let result = normalize(&raw);
        assert_eq!(result.ocr_regions.len(), 1);
        assert_eq!(result.item_count(), 0);
    }
}
