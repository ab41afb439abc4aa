pub mod composer;
pub mod normalizer;
pub mod raw;
pub mod scalable;

pub use composer::{compose, RegionComposer, RegionPlacement};
pub use normalizer::normalize;
pub use raw::{RawItem, RawRecognitionResult};
pub use scalable::{NormalizedBox, NormalizedItem, NormalizedResult, OcrRegion};
