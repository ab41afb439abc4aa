use serde::{Deserialize, Serialize};

use crate::errors::OverlayResult;
use crate::geometry::{FractionalPosition, FractionalSize};

/// A screen sub-area to capture and recognize, stored on the fractional
/// (0–1) scale so it applies to any capture size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRegionTemplate {
    pub id: String,
    pub ocr_template_id: String,
    pub position: FractionalPosition,
    pub size: FractionalSize,
    /// Degrees.
    #[serde(default)]
    pub angle: f64,
}

/// Fields accepted when creating a target region. A missing id is generated,
/// a missing angle is 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetRegionInput {
    #[serde(default)]
    pub id: Option<String>,
    pub ocr_template_id: String,
    pub position: FractionalPosition,
    pub size: FractionalSize,
    #[serde(default)]
    pub angle: Option<f64>,
}

/// A target region projected onto a concrete image, in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPosition {
    pub top: i64,
    pub left: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelRegion {
    pub id: String,
    pub ocr_template_id: String,
    pub position: PixelPosition,
    pub size: PixelSize,
    /// Passed through untouched; the rectangle itself is not rotated.
    pub angle: f64,
}

/// Size of the image a template is projected onto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl TargetRegionTemplate {
    pub fn create(input: TargetRegionInput) -> Self {
        Self {
            id: input.id.unwrap_or_else(generate_id),
            ocr_template_id: input.ocr_template_id,
            position: input.position,
            size: input.size,
            angle: input.angle.unwrap_or(0.0),
        }
    }

    pub fn from_json(payload: &str) -> OverlayResult<Self> {
        let input: TargetRegionInput = serde_json::from_str(payload)?;
        Ok(Self::create(input))
    }

    /// Project onto an image of `image_size`. There is no inverse.
    pub fn to_pixels(&self, image_size: ImageSize) -> PixelRegion {
        let width = f64::from(image_size.width);
        let height = f64::from(image_size.height);

        PixelRegion {
            id: self.id.clone(),
            ocr_template_id: self.ocr_template_id.clone(),
            position: PixelPosition {
                left: round_half_up(self.position.left * width),
                top: round_half_up(self.position.top * height),
            },
            size: PixelSize {
                width: round_half_up(self.size.width * width),
                height: round_half_up(self.size.height * height),
            },
            angle: self.angle,
        }
    }

    pub fn is_rotated(&self) -> bool {
        self.angle != 0.0
    }
}

pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// Halves round toward +inf, so -2.5 becomes -2. `value + 0.5` is avoided:
// for 0.49999999999999994 the sum rounds up to exactly 1.0.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(top: f64, left: f64, width: f64, height: f64) -> TargetRegionTemplate {
        TargetRegionTemplate::create(TargetRegionInput {
            id: Some("r1".into()),
            ocr_template_id: "t1".into(),
            position: FractionalPosition::new(top, left),
            size: FractionalSize::new(width, height),
            angle: None,
        })
    }

    #[test]
    fn create_fills_defaults() {
        let r = TargetRegionTemplate::create(TargetRegionInput {
            ocr_template_id: "t1".into(),
            ..Default::default()
        });
        assert!(uuid::Uuid::parse_str(&r.id).is_ok());
        assert_eq!(r.angle, 0.0);
        assert!(!r.is_rotated());
    }

    #[test]
    fn projects_to_rounded_pixels() {
        let px = region(0.25, 0.1, 0.5, 0.333).to_pixels(ImageSize::new(1920, 1080));
        assert_eq!(px.position, PixelPosition { top: 270, left: 192 });
        assert_eq!(px.size, PixelSize { width: 960, height: 360 });
        assert_eq!(px.id, "r1");
        assert_eq!(px.ocr_template_id, "t1");
    }

    #[test]
    fn angle_passes_through() {
        let mut r = region(0.0, 0.0, 1.0, 1.0);
        r.angle = 12.5;
        assert!(r.is_rotated());
        let px = r.to_pixels(ImageSize::new(100, 50));
        assert_eq!(px.angle, 12.5);
        assert_eq!(px.size, PixelSize { width: 100, height: 50 });
    }

    #[test]
    fn doubling_image_size_doubles_pixels() {
        let r = region(0.125, 0.375, 0.25, 0.5);
        let small = r.to_pixels(ImageSize::new(640, 360));
        let large = r.to_pixels(ImageSize::new(1280, 720));

        assert!((large.position.top - 2 * small.position.top).abs() <= 1);
        assert!((large.position.left - 2 * small.position.left).abs() <= 1);
        assert!((large.size.width - 2 * small.size.width).abs() <= 1);
        assert!((large.size.height - 2 * small.size.height).abs() <= 1);
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-0.5), 0);
    }

    #[test]
    fn largest_double_below_half_rounds_down() {
        let just_below_half = 0.49999999999999994_f64;
        assert!(just_below_half < 0.5);
        assert_eq!(round_half_up(just_below_half), 0);

        let px = region(0.0, just_below_half, 0.0, 0.0).to_pixels(ImageSize::new(1, 1));
        assert_eq!(px.position.left, 0);
    }

    #[test]
    fn decodes_with_optional_fields() {
        let r = TargetRegionTemplate::from_json(
            r#"{"ocr_template_id":"abc","position":{"top":0.1,"left":0.2},"size":{"width":0.3,"height":0.4}}"#,
        )
        .unwrap();
        assert_eq!(r.ocr_template_id, "abc");
        assert_eq!(r.angle, 0.0);
        assert!(!r.id.is_empty());
    }
}
