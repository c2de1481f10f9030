//! Configuration document loading
//!
//! Resolves a path to a decoded [`ConfigTree`]. The decoder is chosen from
//! the file extension: `.json` and `.toml` get their own decoders, anything
//! else is read as YAML (which also accepts most JSON).

use std::fmt;
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::ConfigTree;

/// Document formats the loader can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick a format from a path's extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => DocumentFormat::Json,
            "toml" => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Yaml => write!(f, "yaml"),
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Decode an in-memory document
pub fn parse_config_str(content: &str, format: DocumentFormat) -> Result<ConfigTree> {
    match format {
        DocumentFormat::Yaml => {
            let mut value: serde_yaml::Value = serde_yaml::from_str(content)?;
            value.apply_merge()?;
            serde_json::to_value(value)
                .map_err(|e| LoadError::parse_error("YAML", format!("conversion error: {}", e)))
        }
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Toml => {
            let value: toml::Value = toml::from_str(content)?;
            serde_json::to_value(value)
                .map_err(|e| LoadError::parse_error("TOML", format!("conversion error: {}", e)))
        }
    }
}

/// Read and decode the configuration document at `path`
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigTree> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path.display(), %format, bytes = content.len(), "Loaded configuration document");
    parse_config_str(&content, format)
}
