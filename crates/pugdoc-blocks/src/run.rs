//! Run aggregation across a file set.
//!
//! Files are processed one after another in enumeration order, so
//! `files` and `raw` always follow that order. Files that cannot be read
//! are logged and skipped. Structural errors follow the configured
//! [`ErrorPolicy`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pugdoc_fs::SourceFile;
use serde::{Serialize, Serializer};

use crate::config::{DEFAULT_CONTEXT_LINES, ErrorPolicy, RunConfig};
use crate::file::{FileResult, process_file_with};
use crate::{Error, Result};

/// Result of one extraction run.
#[derive(Debug, Default, Serialize)]
pub struct RunResult {
    /// Files with at least one block, in enumeration order.
    pub files: Vec<FileResult>,
    /// Every file's `raw`, concatenated in enumeration order.
    pub raw: String,
    /// Files that were skipped: unreadable ones, plus malformed ones when
    /// the policy is [`ErrorPolicy::Collect`].
    #[serde(serialize_with = "serialize_errors")]
    pub errors: Vec<Error>,
    /// The run stopped early because cancellation was requested.
    pub cancelled: bool,
}

impl RunResult {
    /// Total number of blocks across all files.
    pub fn block_count(&self) -> usize {
        self.files.iter().map(|f| f.blocks.len()).sum()
    }

    fn append(&mut self, file: FileResult) {
        self.raw.push_str(&file.raw);
        self.files.push(file);
    }
}

fn serialize_errors<S: Serializer>(errors: &[Error], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// Drives the file aggregator over a sequence of files.
#[derive(Debug, Clone)]
pub struct Runner {
    policy: ErrorPolicy,
    context_lines: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            policy: ErrorPolicy::default(),
            context_lines: DEFAULT_CONTEXT_LINES,
            cancel: None,
        }
    }
}

impl Runner {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            policy: config.error_policy,
            context_lines: config.context_lines,
            cancel: None,
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check `flag` between files and stop once it is set.
    ///
    /// A file that is already being scanned is always finished.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Process every file as produced by the enumeration collaborator.
    ///
    /// `Err` items are enumeration failures for a single file; they are
    /// logged, recorded in [`RunResult::errors`], and skipped regardless
    /// of policy.
    pub fn run<I>(&self, files: I) -> Result<RunResult>
    where
        I: IntoIterator<Item = pugdoc_fs::Result<SourceFile>>,
    {
        let mut result = RunResult::default();

        for file in files {
            if self.cancelled() {
                tracing::info!(files = result.files.len(), "Run cancelled");
                result.cancelled = true;
                break;
            }

            let file = match file {
                Ok(file) => file,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping file that could not be loaded");
                    result.errors.push(Error::Source(e));
                    continue;
                }
            };

            match process_file_with(&file, self.context_lines) {
                Ok(processed) if processed.is_empty() => {
                    tracing::trace!(path = %file.path, "No blocks");
                }
                Ok(processed) => result.append(processed),
                Err(e) => match self.policy {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Collect => {
                        tracing::warn!(path = %file.path, line = ?e.line(), "Skipping malformed file");
                        result.errors.push(e);
                    }
                },
            }
        }

        tracing::info!(
            files = result.files.len(),
            blocks = result.block_count(),
            skipped = result.errors.len(),
            "Extraction finished"
        );
        Ok(result)
    }

    /// [`Runner::run`] over records that are already loaded.
    pub fn run_files<I>(&self, files: I) -> Result<RunResult>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        self.run(files.into_iter().map(Ok))
    }
}

/// Run with `config` over already-enumerated files.
pub fn run<I>(files: I, config: &RunConfig) -> Result<RunResult>
where
    I: IntoIterator<Item = pugdoc_fs::Result<SourceFile>>,
{
    Runner::new(config).run(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = Runner::default().run_files(Vec::new()).unwrap();
        assert!(result.files.is_empty());
        assert_eq!(result.raw, "");
        assert!(!result.cancelled);
    }

    #[test]
    fn test_flag_set_before_start_processes_nothing() {
        let flag = Arc::new(AtomicBool::new(true));
        let files = vec![SourceFile::in_memory(
            "a.pug",
            "//- @pugdoc\n//- a\n//- @endpugdoc",
        )];

        let result = Runner::default().with_cancel(flag).run_files(files).unwrap();
        assert!(result.cancelled);
        assert!(result.files.is_empty());
    }
}
