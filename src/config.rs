use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{OverlayError, OverlayResult};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Must match the name of a registered recognition adapter.
    #[serde(default = "default_adapter")]
    pub active_adapter: String,
    #[serde(default = "default_language")]
    pub language_code: String,
    /// Rewrite sub-region items into the full-screen frame when composing.
    /// When false the renderer applies each region's transform itself.
    #[serde(default = "default_true")]
    pub global_scaling: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            active_adapter: default_adapter(),
            language_code: default_language(),
            global_scaling: true,
        }
    }
}

fn default_adapter() -> String {
    "ppocr".to_string()
}

fn default_language() -> String {
    "ja-JP".to_string()
}

fn default_true() -> bool {
    true
}

fn resolve_config_path() -> OverlayResult<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join(CONFIG_FILE);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Ok(candidate);
            }
        }
    }

    let cwd = std::env::current_dir()?;
    let candidate = cwd.join(CONFIG_FILE);
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "config found in working directory");
        return Ok(candidate);
    }

    if let Some(dir) = dirs::config_dir() {
        let candidate = dir.join("ocr-overlay").join(CONFIG_FILE);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config found in user config directory");
            return Ok(candidate);
        }
    }

    Err(OverlayError::Config(
        "config.toml not found next to executable, in working directory or user config directory"
            .into(),
    ))
}

pub fn parse_config(content: &str) -> OverlayResult<AppConfig> {
    Ok(toml::from_str(content)?)
}

pub fn load_config() -> OverlayResult<AppConfig> {
    let path = resolve_config_path()?;
    let content = std::fs::read_to_string(&path)?;
    let config = parse_config(&content)?;
    tracing::info!(
        path = %path.display(),
        adapter = %config.ocr.active_adapter,
        global_scaling = config.ocr.global_scaling,
        "config loaded"
    );
    Ok(config)
}
