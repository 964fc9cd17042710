//! Error types for pugdoc-blocks

use std::fmt;

use pugdoc_fs::NormalizedPath;

use crate::extractor::{ScanErrorKind, UNTERMINATED_MESSAGE};

pub type Result<T> = std::result::Result<T, Error>;

/// What made a block malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A start marker appeared while a block was open.
    NestedStart,
    /// Content dedented to or below the opening line before an end marker.
    Dedent { required: usize, found: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::NestedStart => {
                write!(f, "found @pugdoc while a block is still open")
            }
            MalformedReason::Dedent { required, found } => write!(
                f,
                "line is indented {found} but the block opened at indent {required}"
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Maybe forgot to close a block with @endpugdoc? ({reason})\n{excerpt}\nat {path}:{line}")]
    MalformedBlock {
        path: NormalizedPath,
        line: usize,
        reason: MalformedReason,
        excerpt: String,
    },

    #[error(
        "Maybe forgot to close a block with @endpugdoc? ({})\n{excerpt}\nat {path}:{line}",
        UNTERMINATED_MESSAGE
    )]
    UnterminatedBlock {
        path: NormalizedPath,
        line: usize,
        excerpt: String,
    },

    #[error(transparent)]
    Source(#[from] pugdoc_fs::Error),
}

impl Error {
    /// Build the path-tagged error for a scan failure.
    pub(crate) fn from_scan(
        path: &NormalizedPath,
        kind: ScanErrorKind,
        line: usize,
        excerpt: String,
    ) -> Self {
        let path = path.clone();
        match kind.reason() {
            Some(reason) => Error::MalformedBlock {
                path,
                line,
                reason,
                excerpt,
            },
            None => Error::UnterminatedBlock {
                path,
                line,
                excerpt,
            },
        }
    }

    /// Path of the offending file, when the error is tied to one.
    pub fn path(&self) -> Option<&NormalizedPath> {
        match self {
            Error::MalformedBlock { path, .. } | Error::UnterminatedBlock { path, .. } => {
                Some(path)
            }
            Error::Source(_) => None,
        }
    }

    /// Zero-based line index of a structural error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedBlock { line, .. } | Error::UnterminatedBlock { line, .. } => {
                Some(*line)
            }
            Error::Source(_) => None,
        }
    }

    /// Returns `true` for block-structure errors, as opposed to I/O.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Error::Source(_))
    }
}
