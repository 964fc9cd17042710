//! Per-file aggregation.

use pugdoc_fs::{NormalizedPath, SourceFile};
use serde::Serialize;

use crate::config::DEFAULT_CONTEXT_LINES;
use crate::excerpt::render_excerpt;
use crate::extractor::{Block, ScanError, Scanner};
use crate::marker::markers_balanced;
use crate::{Error, Result};

/// Blocks found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub basename: String,
    pub base: NormalizedPath,
    pub path: NormalizedPath,
    /// Blocks in order of appearance.
    pub blocks: Vec<Block>,
    /// Every block's `raw`, concatenated in block order.
    pub raw: String,
}

impl FileResult {
    fn new(file: &SourceFile) -> Self {
        Self {
            basename: file.basename.clone(),
            base: file.base.clone(),
            path: file.path.clone(),
            blocks: Vec::new(),
            raw: String::new(),
        }
    }

    fn push(&mut self, block: Block) {
        self.raw.push_str(block.raw());
        self.blocks.push(block);
    }

    /// Returns `true` if the file had no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Extract every block from one file.
///
/// A file without blocks yields an empty result; callers decide whether
/// to keep it. Scan failures come back tagged with the file's path and
/// an excerpt of the surrounding lines.
pub fn process_file(file: &SourceFile) -> Result<FileResult> {
    process_file_with(file, DEFAULT_CONTEXT_LINES)
}

/// [`process_file`] with a custom number of excerpt context lines.
pub fn process_file_with(file: &SourceFile, context_lines: usize) -> Result<FileResult> {
    if !markers_balanced(&file.content) {
        tracing::debug!(path = %file.path, "Start and end markers are unbalanced");
    }

    let lines: Vec<&str> = file.content.lines().collect();
    let mut result = FileResult::new(file);

    if let Err(err) = scan_into(&lines, &mut result) {
        let excerpt = render_excerpt(&lines, err.line, context_lines);
        return Err(Error::from_scan(&file.path, err.kind, err.line, excerpt));
    }

    tracing::debug!(path = %file.path, blocks = result.blocks.len(), "Processed file");
    Ok(result)
}

fn scan_into(lines: &[&str], result: &mut FileResult) -> std::result::Result<(), ScanError> {
    let mut scanner = Scanner::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(block) = scanner.consume_line(index, line)? {
            tracing::trace!(path = %result.path, start = block.start_line(), "Found block");
            result.push(block);
        }
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MalformedReason;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_without_markers_is_empty() {
        let file = SourceFile::in_memory("views/plain.pug", "div\n  p hello\n");
        let result = process_file(&file).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.raw, "");
        assert_eq!(result.basename, "plain.pug");
    }

    #[test]
    fn test_raw_concatenates_blocks_in_order() {
        let content = "\
//- @pugdoc
//- first
//- @endpugdoc
mixin first()
  p first
//- @pugdoc
//- second
//- @endpugdoc
mixin second()
  p second
";
        let result = process_file(&SourceFile::in_memory("mixins.pug", content)).unwrap();
        assert_eq!(result.blocks.len(), 2);
        assert_eq!(result.raw, "/**first*//**second*/");
        assert_eq!(result.blocks[1].start_line(), 5);
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "//- @pugdoc\r\n//- Card.\r\n//- @endpugdoc\r\n";
        let result = process_file(&SourceFile::in_memory("card.pug", content)).unwrap();
        assert_eq!(result.blocks[0].lines(), ["Card."]);
    }

    #[test]
    fn test_scan_error_tagged_with_path() {
        let content = "//- @pugdoc\n  text\n//- @pugdoc\n  more";
        let err = process_file(&SourceFile::in_memory("views/bad.pug", content)).unwrap_err();

        match err {
            Error::MalformedBlock {
                path, line, reason, ..
            } => {
                assert_eq!(path.as_str(), "views/bad.pug");
                assert_eq!(line, 2);
                assert_eq!(reason, MalformedReason::NestedStart);
            }
            other => panic!("expected malformed block, got {other:?}"),
        }
    }
}
