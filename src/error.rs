//! Error types for the goldberg sandbox.
//!
//! The only fallible surface is loading and saving scene layout files;
//! everything else is pre-clamped slider input or engine-internal.

use std::fmt;

/// Errors that can occur while loading or saving a scene layout.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the layout file.
    Io(std::io::Error),
    /// The layout file is not valid JSON for a `SceneConfig`.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read scene layout: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid scene layout: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
