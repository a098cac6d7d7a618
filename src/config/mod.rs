//! Configuration management for Letterbox

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Result, LetterboxError};

pub mod layout;
pub mod size;

pub use layout::*;
pub use size::*;

/// JPEG quality used when neither the CLI nor a settings file sets one
pub const DEFAULT_QUALITY: u8 = 75;

/// Optional settings loaded from a TOML or YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name of the source subdirectory under the base directory
    pub input_dir: String,

    /// Name of the output subdirectory under the base directory
    pub output_dir: String,

    /// JPEG quality (1-100)
    pub quality: u8,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: INPUT_DIR_NAME.to_string(),
            output_dir: OUTPUT_DIR_NAME.to_string(),
            quality: DEFAULT_QUALITY,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| LetterboxError::config(
                format!("Failed to read settings file {:?}: {}", path.as_ref(), e)
            ))?;

        let extension = path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let settings: Self = match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content)
                .map_err(|e| LetterboxError::config(format!("TOML parsing error: {}", e)))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| LetterboxError::config(format!("YAML parsing error: {}", e)))?,
            _ => return Err(LetterboxError::config(
                "Unsupported settings file format. Use .toml or .yaml"
            )),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        validate_quality(self.quality)
            .map_err(|e| LetterboxError::config(e.to_string()))?;

        if self.input_dir.trim().is_empty() || self.output_dir.trim().is_empty() {
            return Err(LetterboxError::config("Directory names must not be empty"));
        }

        Ok(())
    }
}

/// Check a JPEG quality value
pub fn validate_quality(quality: u8) -> Result<()> {
    if quality == 0 || quality > 100 {
        return Err(LetterboxError::invalid_argument(
            format!("Quality must be between 1 and 100, got {}", quality)
        ));
    }
    Ok(())
}
