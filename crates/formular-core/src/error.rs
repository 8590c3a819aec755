//! Error types for configuration parsing.
//!
//! Rendering itself never fails: missing keys fall back to defaults and
//! absent values render as empty fragments. The only fallible boundary is
//! turning caller-supplied JSON text into a [`crate::Config`].

use std::fmt;

/// Error type for configuration parsing.
#[derive(Debug)]
pub enum ConfigError {
    /// JSON parsing error
    Json(serde_json::Error),
    /// The document parsed but was not a JSON object
    NotAnObject,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::NotAnObject => write!(f, "configuration must be a JSON object"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::NotAnObject => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
