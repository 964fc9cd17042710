//! Format-agnostic configuration loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        let content = io::read_text(path)?;
        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        };

        match format {
            "TOML" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            "JSON" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
            _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        }
    }
}
