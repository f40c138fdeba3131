//! # Theme Error Types
//!
//! This module provides the error types for the theme configuration engine.
//! Every failure is reported synchronously to the caller and leaves the
//! current configuration untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// An enum-valued field received a value outside its defined set.
    #[error("Invalid value '{value}' for {field} (expected one of: {expected})")]
    InvalidValue {
        /// The configuration field that was rejected.
        field: &'static str,
        /// The offending value.
        value: String,
        /// Comma separated list of accepted values.
        expected: String,
    },

    /// A color override is not a hex color.
    #[error("Invalid color '{value}' for {field}: {details}")]
    InvalidColor {
        /// The configuration field that was rejected.
        field: &'static str,
        /// The offending value.
        value: String,
        /// Details about the parse failure.
        details: String,
    },

    /// Theme configuration file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A startup configuration source could not be parsed.
    #[error("Failed to parse theme configuration: {details}")]
    ConfigParse {
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid value error listing the accepted values.
    pub fn invalid_value(field: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(
        field: &'static str,
        value: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::InvalidColor {
            field,
            value: value.into(),
            details: details.into(),
        }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a configuration parse error.
    pub fn parse_error(details: impl ToString) -> Self {
        Self::ConfigParse {
            details: details.to_string(),
        }
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        Self::parse_error(err)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_lists_expected() {
        let err = ThemeError::invalid_value("mode", "sepia", &["light", "dark"]);
        assert_eq!(
            err.to_string(),
            "Invalid value 'sepia' for mode (expected one of: light, dark)"
        );
    }
}
