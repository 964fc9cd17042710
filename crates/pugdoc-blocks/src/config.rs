//! Run configuration
//!
//! Loaded from `pugdoc.toml` (or any format `ConfigStore` understands);
//! every field falls back to its default when omitted.

use std::fmt;
use std::str::FromStr;

use pugdoc_fs::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE, FileSet, NormalizedPath};
use serde::{Deserialize, Serialize};

/// Source lines shown on each side of a failing line.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// What a run does when one file has malformed blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first structural error; no result is returned.
    #[default]
    Abort,

    /// Skip the offending file, keep its error, continue with the rest.
    Collect,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "collect" | "continue" => Ok(ErrorPolicy::Collect),
            _ => Err(format!("unknown error policy '{s}' (expected abort or collect)")),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => write!(f, "abort"),
            ErrorPolicy::Collect => write!(f, "collect"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Glob patterns selecting template files, relative to the root.
    pub include: Vec<String>,
    /// Glob patterns removing files from the selection.
    pub exclude: Vec<String>,
    pub error_policy: ErrorPolicy,
    /// Lines of context around the failing line in error excerpts.
    pub context_lines: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect(),
            error_policy: ErrorPolicy::default(),
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

impl RunConfig {
    /// File set for these patterns under `root`.
    pub fn file_set(&self, root: impl Into<NormalizedPath>) -> FileSet {
        FileSet::new(root)
            .with_include(self.include.iter().cloned())
            .with_exclude(self.exclude.iter().cloned())
    }
}
