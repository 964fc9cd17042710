//! Template file discovery and loading for pugdoc
//!
//! Enumerates template files under a root directory using include and
//! exclude glob sets, and loads them as [`SourceFile`] records for the
//! block extractor.

pub mod config;
pub mod discover;
pub mod error;
pub mod io;
pub mod path;
pub mod source;

pub use config::ConfigStore;
pub use discover::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE, Discovered, FileSet};
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use source::SourceFile;
