//! Unified error type for the hslswatch-lib crate.
//!
//! Color conversion and scanning are total and never fail; only the
//! configuration layer and JSON rendering for hosts produce errors.

use std::fmt;

/// Unified error type for hslswatch-lib operations.
#[derive(Debug)]
pub enum HslSwatchError {
    /// Standard I/O error (config read/write).
    Io(std::io::Error),
    /// Configuration validation error.
    Config(String),
    /// Serializing results for the host failed.
    Json(serde_json::Error),
}

impl fmt::Display for HslSwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HslSwatchError::Io(e) => write!(f, "I/O error: {e}"),
            HslSwatchError::Config(e) => write!(f, "Config error: {e}"),
            HslSwatchError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for HslSwatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HslSwatchError::Io(e) => Some(e),
            HslSwatchError::Json(e) => Some(e),
            HslSwatchError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for HslSwatchError {
    fn from(e: std::io::Error) -> Self {
        HslSwatchError::Io(e)
    }
}

impl From<serde_json::Error> for HslSwatchError {
    fn from(e: serde_json::Error) -> Self {
        HslSwatchError::Json(e)
    }
}

/// Crate-level Result alias using [`HslSwatchError`].
pub type Result<T> = std::result::Result<T, HslSwatchError>;
