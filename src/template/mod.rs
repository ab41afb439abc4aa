pub mod ocr_template;
pub mod target_region;

pub use ocr_template::OcrTemplate;
pub use target_region::{
    ImageSize, PixelPosition, PixelRegion, PixelSize, TargetRegionInput, TargetRegionTemplate,
};
