//! # Calculator Settings
//!
//! Display configuration for a [`Calculator`](crate::calculator::Calculator).
//! Settings are plain JSON; every field has a default, so a partial file
//! (or `{}`) is valid.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::Settings;
//!
//! let settings = Settings::from_json_str(r#"{ "precision": 2 }"#).unwrap();
//! assert_eq!(settings.precision, 2);
//! assert_eq!(settings.history_separator, "\n");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::DEFAULT_PRECISION;

/// Largest precision accepted; beyond this f64 carries no meaningful digits
pub const MAX_PRECISION: usize = 15;

/// Formatting and history rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fractional digits kept for non-integer results
    pub precision: usize,

    /// Text placed between history records when rendering the trail
    pub history_separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            precision: DEFAULT_PRECISION,
            history_separator: "\n".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Settings::from_json_str(&json)
    }

    /// Check that every field is within range.
    pub fn validate(&self) -> CalcResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CalcError::invalid_input(
                "precision",
                self.precision.to_string(),
                format!("Precision must be at most {}", MAX_PRECISION),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.precision, 6);
        assert_eq!(settings.history_separator, "\n");
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json_str(r#"{ "history_separator": " | " }"#).unwrap();
        assert_eq!(settings.precision, DEFAULT_PRECISION);
        assert_eq!(settings.history_separator, " | ");
    }

    #[test]
    fn test_precision_out_of_range() {
        let err = Settings::from_json_str(r#"{ "precision": 40 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json_str("{ precision: ").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/keypad-settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
