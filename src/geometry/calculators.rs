//! Box geometry derived from the four pixel corners of a recognized text box.
//!
//! Every function here is total: degenerate boxes and unusable resolutions
//! produce a fallback value instead of an error or NaN.
use crate::geometry::scale::{percent_of, PercentPosition};
use crate::geometry::types::{Point, QuadBox, Resolution};

/// Position of the top-left corner relative to the resolution, 0–100 scale.
/// An axis with a non-positive resolution keeps the raw pixel coordinate.
pub fn position(top_left: Point, resolution: Resolution) -> PercentPosition {
    PercentPosition {
        top: percent_of(top_left.y, resolution.height).unwrap_or(top_left.y),
        left: percent_of(top_left.x, resolution.width).unwrap_or(top_left.x),
    }
}

/// Rotation of the top edge in degrees.
///
/// `vertical_distance` is `top_right.y - top_left.y` and is negated first so
/// that an upward tilt on screen counts as positive. The result is then
/// negated again when that negated distance is positive. Returns 0 when
/// either absolute distance is not strictly positive.
pub fn angle_degrees(vertical_distance: f64, horizontal_distance: f64) -> f64 {
    let vertical_distance = -vertical_distance;
    let negative_rotation = vertical_distance > 0.0;
    let vertical_distance = vertical_distance.abs();

    let usable = |d: f64| d.is_finite() && d > 0.0;
    if !usable(vertical_distance) || !usable(horizontal_distance) {
        return 0.0;
    }

    let degrees = (vertical_distance / horizontal_distance).atan().to_degrees();
    if negative_rotation {
        -degrees
    } else {
        degrees
    }
}

/// Length of the top edge relative to the resolution width, 0–100 scale.
///
/// Uses the hypotenuse so rotated boxes are not undercounted. Falls back to
/// the raw `horizontal_distance` when the width cannot be used as a basis or
/// the percentage comes out zero.
pub fn width_pct(vertical_distance: f64, horizontal_distance: f64, resolution: Resolution) -> f64 {
    let top_edge = vertical_distance.abs().hypot(horizontal_distance);
    match percent_of(top_edge, resolution.width) {
        Some(pct) if pct.is_finite() && pct != 0.0 => pct,
        _ => horizontal_distance,
    }
}

/// Length of the left edge relative to the resolution height, 0–100 scale.
/// Falls back to the raw edge length in pixels for a non-positive height.
pub fn height_pct(quad: &QuadBox, resolution: Resolution) -> f64 {
    let QuadBox {
        top_left,
        bottom_left,
        ..
    } = quad;
    let vertical = (top_left.y - bottom_left.y).abs();
    let horizontal = (top_left.x - bottom_left.x).abs();
    let left_edge = vertical.hypot(horizontal);
    percent_of(left_edge, resolution.height).unwrap_or(left_edge)
}
