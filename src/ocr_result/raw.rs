use serde::{Deserialize, Serialize};

use crate::errors::OverlayResult;
use crate::geometry::{QuadBox, Resolution};

/// Pixel-space output of an external recognition engine for one capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecognitionResult {
    pub id: i64,
    pub context_resolution: Resolution,
    #[serde(default)]
    pub results: Vec<RawItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    pub text: String,
    /// Confidence in `0.0 ..= 1.0`.
    pub score: f64,
    #[serde(rename = "box")]
    pub quad: QuadBox,
}

impl RawRecognitionResult {
    /// Decode the engine adapter's JSON payload. Missing required fields are
    /// rejected here, before anything reaches the geometry code.
    pub fn from_json(payload: &str) -> OverlayResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_engine_payload() {
        let payload = r#"{
            "id": 7,
            "context_resolution": { "width": 1280, "height": 720 },
            "results": [{
                "text": "hello",
                "score": 0.92,
                "box": {
                    "top_left": { "x": 10, "y": 20 },
                    "top_right": { "x": 110, "y": 20 },
                    "bottom_right": { "x": 110, "y": 50 },
                    "bottom_left": { "x": 10, "y": 50 }
                }
            }]
        }"#;

        let raw = RawRecognitionResult::from_json(payload).unwrap();
        assert_eq!(raw.id, 7);
        assert_eq!(raw.context_resolution, Resolution::new(1280.0, 720.0));
        assert_eq!(raw.results.len(), 1);
        assert_eq!(raw.results[0].text, "hello");
        assert_eq!(raw.results[0].quad.top_right.x, 110.0);
    }

    #[test]
    fn rejects_item_without_box() {
        let payload = r#"{
            "id": 1,
            "context_resolution": { "width": 10, "height": 10 },
            "results": [{ "text": "x", "score": 1.0 }]
        }"#;
        assert!(RawRecognitionResult::from_json(payload).is_err());
    }
}
