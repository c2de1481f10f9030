//! Error types for loading configuration documents
//!
//! The validation engine itself never fails: every problem with the document's
//! content becomes a [`Violation`](crate::Violation). Only the loader boundary
//! produces errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while resolving and decoding a configuration document
#[derive(Error, Debug)]
pub enum LoadError {
    /// The configuration path does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be decoded
    #[error("{format} parsing error: {message}")]
    Parse {
        /// Name of the document format that failed ("YAML", "JSON", "TOML")
        format: &'static str,
        message: String,
    },
}

impl LoadError {
    /// Create a parse error for the given format
    pub fn parse_error(format: &'static str, message: impl Into<String>) -> Self {
        LoadError::Parse {
            format,
            message: message.into(),
        }
    }

    /// Check if the document was found but could not be decoded
    pub fn is_parse_error(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::parse_error("JSON", err.to_string())
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        LoadError::parse_error("YAML", err.to_string())
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(err: toml::de::Error) -> Self {
        LoadError::parse_error("TOML", err.to_string())
    }
}

/// Result type alias for loading operations
pub type Result<T> = std::result::Result<T, LoadError>;
