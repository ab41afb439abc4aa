use serde::{Deserialize, Serialize};

/// A pixel coordinate. Origin is the top-left of the capture, Y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel resolution of the image a result was recognized in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
}

impl Resolution {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Four pixel corners of a recognized text box. Not necessarily axis-aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadBox {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl QuadBox {
    /// Axis-aligned box from its top-left corner and pixel size.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top_left: Point::new(left, top),
            top_right: Point::new(left + width, top),
            bottom_right: Point::new(left + width, top + height),
            bottom_left: Point::new(left, top + height),
        }
    }

    /// `top_right.y - top_left.y`, positive when the top edge slopes down.
    pub fn top_edge_vertical(&self) -> f64 {
        self.top_right.y - self.top_left.y
    }

    /// `top_right.x - top_left.x`.
    pub fn top_edge_horizontal(&self) -> f64 {
        self.top_right.x - self.top_left.x
    }
}
