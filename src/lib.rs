pub mod commands;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod ocr_result;
pub mod recognition;
pub mod template;

pub use errors::{OverlayError, OverlayResult};
pub use ocr_result::{
    compose, normalize, NormalizedResult, RawRecognitionResult, RegionComposer, RegionPlacement,
};
pub use template::{ImageSize, OcrTemplate, PixelRegion, TargetRegionTemplate};

/// Command-line entry point. Returns the process exit code.
pub fn run() -> i32 {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load .env file if present (ignore error if not found)
    let _ = dotenvy::dotenv();

    let config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config; using defaults");
            config::AppConfig::default()
        }
    };
    tracing::debug!(
        adapter = %config.ocr.active_adapter,
        language = %config.ocr.language_code,
        "starting"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match commands::dispatch(&args, &config.ocr) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{e}");
            1
        }
    }
}
