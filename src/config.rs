//! Calculator configuration parameters
//!
//! Tunables for the wizard and the care schedule export.
//! Values can be overridden from a JSON file or from command-line flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Hard ceiling for accepted ages.  The configured bound may be lower.
pub const MAX_SUPPORTED_AGE_YEARS: f64 = 30.0;

/// Output encoding for the care schedule export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

/// Core calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    // --- Wizard ---
    /// Largest accepted chronological age in years (inclusive)
    pub max_age_years: f64,

    // --- Export ---
    /// Care schedule encoding
    pub export_format: ExportFormat,
    /// Directory the care schedule is written to
    pub export_dir: PathBuf,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_age_years: MAX_SUPPORTED_AGE_YEARS,
            export_format: ExportFormat::Text,
            export_dir: PathBuf::from("."),
        }
    }
}

impl CalculatorConfig {
    /// Reject out-of-range values rather than clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_age_years.is_finite() || self.max_age_years <= 0.0 {
            return Err(ConfigError::Invalid("max_age_years must be a positive number"));
        }
        if self.max_age_years > MAX_SUPPORTED_AGE_YEARS {
            return Err(ConfigError::Invalid("max_age_years must not exceed 30"));
        }
        Ok(())
    }
}
