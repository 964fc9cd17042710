//! Error types for pugdoc-fs

use std::path::PathBuf;

/// Result type for pugdoc-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enumerating or loading files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Search root does not exist or is not a directory: {path}")]
    InvalidRoot { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
