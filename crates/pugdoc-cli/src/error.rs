//! Error types for pugdoc-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Blocks(#[from] pugdoc_blocks::Error),

    #[error(transparent)]
    Fs(#[from] pugdoc_fs::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode result as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `check` found problems; they have already been reported.
    #[error("check failed: {count} file(s) with errors")]
    CheckFailed { count: usize },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
