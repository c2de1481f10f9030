//! Error types for the CLI shell

use thiserror::Error;

/// Errors raised while rendering validation results
#[derive(Error, Debug)]
pub enum CliError {
    /// Serialization of the report failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing the report failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Serialization(format!("YAML error: {}", err))
    }
}
