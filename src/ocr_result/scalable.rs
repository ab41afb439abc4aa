use serde::{Deserialize, Serialize};

use crate::errors::OverlayResult;
use crate::geometry::{
    FractionalPosition, FractionalSize, PercentDimensions, PercentPosition, Resolution,
};

/// Resolution-independent OCR result handed to the overlay renderer.
///
/// Region geometry is fractional (0–1), item boxes are percent (0–100).
/// Nothing is clamped: boxes protruding past the frame keep values below 0 or
/// above 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub id: i64,
    pub context_resolution: Resolution,
    #[serde(default)]
    pub ocr_regions: Vec<OcrRegion>,
}

/// A sub-area of the result's coordinate space holding its own items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrRegion {
    pub position: FractionalPosition,
    pub size: FractionalSize,
    #[serde(default)]
    pub results: Vec<NormalizedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub text: String,
    pub score: f64,
    #[serde(rename = "box")]
    pub bounds: NormalizedBox,
}

/// Position, scale and rotation of one text box, 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBox {
    pub position: PercentPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<PercentDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_degrees: Option<f64>,
}

impl NormalizedResult {
    /// An empty result with no regions yet.
    pub fn new(id: i64, context_resolution: Resolution) -> Self {
        Self {
            id,
            context_resolution,
            ocr_regions: Vec::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.ocr_regions.iter().map(|r| r.results.len()).sum()
    }

    pub fn to_json(&self) -> OverlayResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl OcrRegion {
    /// Region covering the whole frame.
    pub fn full_frame(results: Vec<NormalizedItem>) -> Self {
        Self {
            position: FractionalPosition::default(),
            size: FractionalSize::default(),
            results,
        }
    }
}

impl NormalizedBox {
    /// This box re-expressed in the frame that contains its region.
    /// Missing dimensions are treated as `{0, 0}` and become explicit.
    pub fn into_parent_frame(self, origin: FractionalPosition, size: FractionalSize) -> Self {
        Self {
            position: self.position.into_parent_frame(origin, size),
            dimensions: Some(self.dimensions.unwrap_or_default().into_parent_frame(size)),
            angle_degrees: self.angle_degrees,
        }
    }
}
