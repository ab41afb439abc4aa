/// The model uses two percentage scales side by side:
///
///   - fractional `0.0 ..= 1.0` for region and target-region geometry,
///   - percent `0.0 ..= 100.0` for item-level box position and dimensions.
///
/// Each scale has its own types here, and the functions in this module are
/// the only places where a value crosses from one to the other.
use serde::{Deserialize, Serialize};

/// Region/template position, fractional 0–1 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FractionalPosition {
    pub top: f64,
    pub left: f64,
}

/// Region/template size, fractional 0–1 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FractionalSize {
    /// The whole frame.
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Item box position, percent 0–100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentPosition {
    pub top: f64,
    pub left: f64,
}

/// Item box dimensions, percent 0–100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentDimensions {
    pub width: f64,
    pub height: f64,
}

impl FractionalPosition {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Same point on the percent scale.
    pub fn to_percent(self) -> PercentPosition {
        PercentPosition {
            top: fraction_to_percent(self.top),
            left: fraction_to_percent(self.left),
        }
    }
}

impl FractionalSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl PercentPosition {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Re-express a position local to a sub-region in the frame that contains
    /// the sub-region.
    pub fn into_parent_frame(self, origin: FractionalPosition, size: FractionalSize) -> Self {
        let origin = origin.to_percent();
        Self {
            top: origin.top + self.top * size.height,
            left: origin.left + self.left * size.width,
        }
    }
}

impl PercentDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimensions local to a sub-region, expressed in the containing frame.
    pub fn into_parent_frame(self, size: FractionalSize) -> Self {
        Self {
            width: self.width * size.width,
            height: self.height * size.height,
        }
    }
}

pub fn fraction_to_percent(value: f64) -> f64 {
    value * 100.0
}

/// `part / whole` on the percent scale. `None` when `whole` cannot be used as
/// a basis (zero, negative or NaN).
pub fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole > 0.0 {
        Some(part / whole * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_origin_becomes_percent() {
        let p = FractionalPosition::new(0.2, 0.35).to_percent();
        assert!((p.top - 20.0).abs() < 1e-9);
        assert!((p.left - 35.0).abs() < 1e-9);
    }

    #[test]
    fn percent_of_rejects_unusable_basis() {
        assert_eq!(percent_of(10.0, 0.0), None);
        assert_eq!(percent_of(10.0, -5.0), None);
        assert_eq!(percent_of(10.0, f64::NAN), None);
        assert_eq!(percent_of(50.0, 200.0), Some(25.0));
    }

    #[test]
    fn identity_region_keeps_local_coordinates() {
        let pos = PercentPosition::new(12.5, 40.0)
            .into_parent_frame(FractionalPosition::default(), FractionalSize::default());
        assert_eq!(pos, PercentPosition::new(12.5, 40.0));

        let dims = PercentDimensions::new(8.0, 3.0).into_parent_frame(FractionalSize::default());
        assert_eq!(dims, PercentDimensions::new(8.0, 3.0));
    }
}
