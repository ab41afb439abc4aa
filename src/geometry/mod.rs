pub mod calculators;
pub mod scale;
pub mod types;

pub use scale::{
    FractionalPosition, FractionalSize, PercentDimensions, PercentPosition,
};
pub use types::{Point, QuadBox, Resolution};
