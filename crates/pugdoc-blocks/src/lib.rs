//! Documentation block extraction from pug templates.
//!
//! Templates carry their documentation inside line comments, delimited by
//! two literal markers:
//!
//! ```text
//! //- @pugdoc
//! //- Button component.
//! //- @endpugdoc
//! ```
//!
//! This crate finds those blocks, strips the marker syntax, and re-emits
//! every block as a `/** ... */` comment so the concatenated text can be
//! handed to a JSDoc-style documentation generator.
//!
//! The pipeline, leaf first:
//!
//! - [`marker`] classifies lines and strips marker syntax.
//! - [`indent`] measures leading whitespace for the dedent guard.
//! - [`extractor`] is the per-file state machine that opens and closes blocks.
//! - [`synth`] wraps a block's lines into comment syntax.
//! - [`file`] runs the extractor over one file.
//! - [`run`] runs [`file`] over a whole file set.
//!
//! # Example
//! ```
//! use pugdoc_blocks::{SourceFile, process_file};
//!
//! let file = SourceFile::in_memory(
//!     "views/button.pug",
//!     "//- @pugdoc\n//- Button component.\n//- @endpugdoc\nbutton.btn",
//! );
//! let result = process_file(&file).unwrap();
//! assert_eq!(result.blocks.len(), 1);
//! assert_eq!(result.raw, "/**Button component.*/");
//! ```

pub mod config;
pub mod error;
pub mod excerpt;
pub mod extractor;
pub mod file;
pub mod indent;
pub mod marker;
pub mod run;
pub mod synth;

pub use config::{DEFAULT_CONTEXT_LINES, ErrorPolicy, RunConfig};
pub use error::{Error, MalformedReason, Result};
pub use extractor::{Block, ScanError, ScanErrorKind, Scanner, extract_blocks};
pub use file::{FileResult, process_file, process_file_with};
pub use marker::{END_MARKER, START_MARKER, markers_balanced};
pub use pugdoc_fs::{NormalizedPath, SourceFile};
pub use run::{RunResult, Runner, run};
pub use synth::synthesize;
