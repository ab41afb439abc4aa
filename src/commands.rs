use std::path::Path;

use crate::config::OcrConfig;
use crate::errors::{OverlayError, OverlayResult};
use crate::geometry::Resolution;
use crate::ocr_result::{normalize, RawRecognitionResult, RegionComposer, RegionPlacement};
use crate::template::{ImageSize, OcrTemplate, TargetRegionTemplate};

/// Normalize an engine result stored as JSON and return the renderer JSON.
pub fn normalize_file(path: &Path) -> OverlayResult<String> {
    let payload = std::fs::read_to_string(path)?;
    let raw = RawRecognitionResult::from_json(&payload)?;
    let result = normalize(&raw);
    tracing::info!(
        path = %path.display(),
        id = result.id,
        items = result.item_count(),
        "normalized"
    );
    result.to_json_pretty()
}

/// Project a target region stored as JSON onto an image of `width`×`height`.
pub fn project_file(path: &Path, width: &str, height: &str) -> OverlayResult<String> {
    let payload = std::fs::read_to_string(path)?;
    let region = TargetRegionTemplate::from_json(&payload)?;
    let image_size = ImageSize::new(parse_dimension(width)?, parse_dimension(height)?);
    let pixels = region.to_pixels(image_size);
    Ok(serde_json::to_string_pretty(&pixels)?)
}

/// Compose one engine result per target region of a template into a single
/// result for a `width`×`height` screen. Results pair with regions by order.
pub fn compose_files(
    template_path: &Path,
    width: &str,
    height: &str,
    raw_paths: &[String],
    config: &OcrConfig,
) -> OverlayResult<String> {
    let template = OcrTemplate::from_json(&std::fs::read_to_string(template_path)?)?;
    if template.target_regions.len() != raw_paths.len() {
        return Err(OverlayError::Template(format!(
            "template '{}' has {} target regions but {} results were given",
            template.name,
            template.target_regions.len(),
            raw_paths.len()
        )));
    }

    let resolution = Resolution::new(
        f64::from(parse_dimension(width)?),
        f64::from(parse_dimension(height)?),
    );
    let mut composer = RegionComposer::new(0, resolution).global_scaling(config.global_scaling);
    for (target, raw_path) in template.target_regions.iter().zip(raw_paths) {
        let raw = RawRecognitionResult::from_json(&std::fs::read_to_string(raw_path)?)?;
        composer.compose(
            normalize(&raw),
            RegionPlacement::new(target.position, target.size),
        );
    }
    composer.build().to_json_pretty()
}

fn parse_dimension(value: &str) -> OverlayResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| OverlayError::Config(format!("invalid image dimension '{value}': {e}")))
}

pub const USAGE: &str = "usage:
  ocr-overlay normalize <raw_result.json>
  ocr-overlay pixels <target_region.json> <width> <height>
  ocr-overlay compose <template.json> <width> <height> <raw_result.json>...";

/// Dispatch one command line (without the program name).
pub fn dispatch(args: &[String], config: &OcrConfig) -> OverlayResult<String> {
    match args {
        [cmd, path] if cmd == "normalize" => normalize_file(Path::new(path)),
        [cmd, path, width, height] if cmd == "pixels" => project_file(Path::new(path), width, height),
        [cmd, path, width, height, raw_paths @ ..] if cmd == "compose" => {
            compose_files(Path::new(path), width, height, raw_paths, config)
        }
        _ => Err(OverlayError::Config(USAGE.to_string())),
    }
}
