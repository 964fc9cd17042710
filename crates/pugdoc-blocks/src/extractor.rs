//! Block extraction state machine.
//!
//! [`Scanner`] consumes a file one line at a time. It is either idle or
//! holding one open block; a start marker opens a block, an end marker
//! closes it, and everything in between becomes payload.
//!
//! While a block is open, the indentation of the opening line acts as a
//! guard. A content line indented less than the opening line, or at the
//! same width without being a comment line itself, means the block was
//! never closed, and the scan fails at that line instead of swallowing
//! unrelated template code. End markers are recognized before the guard
//! applies.

use std::fmt;

use serde::Serialize;

use crate::error::MalformedReason;
use crate::indent::leading_whitespace_width;
use crate::marker::{
    is_block_end, is_block_start, is_comment_line, strip_comment_leader, strip_end_marker,
    strip_start_marker,
};
use crate::synth::synthesize;

/// One extracted documentation block.
///
/// Blocks only exist once both markers were seen and cannot be changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    start_line: usize,
    end_line: usize,
    lines: Vec<String>,
    raw: String,
}

impl Block {
    /// Zero-based index of the line holding the start marker.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Zero-based index of the line holding the end marker.
    pub fn end_line(&self) -> usize {
        self.end_line
    }

    /// Payload lines with marker syntax removed, in source order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The block rendered as a documentation comment.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    NestedStart,
    Dedent { required: usize, found: usize },
    Unterminated,
}

/// Text shown for a block still open at the end of the file.
pub const UNTERMINATED_MESSAGE: &str = "end of file inside a block";

impl ScanErrorKind {
    /// The malformed-block reason, or `None` for an unterminated block.
    pub fn reason(self) -> Option<MalformedReason> {
        match self {
            ScanErrorKind::NestedStart => Some(MalformedReason::NestedStart),
            ScanErrorKind::Dedent { required, found } => {
                Some(MalformedReason::Dedent { required, found })
            }
            ScanErrorKind::Unterminated => None,
        }
    }
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => fmt::Display::fmt(&reason, f),
            None => f.write_str(UNTERMINATED_MESSAGE),
        }
    }
}

impl std::error::Error for ScanErrorKind {}

/// A scan failure at a zero-based line index.
///
/// Carries no path; the file aggregator attaches one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
}

#[derive(Debug)]
struct OpenBlock {
    start_line: usize,
    required_indent: usize,
    lines: Vec<String>,
}

impl OpenBlock {
    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Keep what is left of a marker line, unless nothing is.
    fn push_residue(&mut self, residue: String) {
        if !residue.trim().is_empty() {
            self.lines.push(residue);
        }
    }

    fn close(self, end_line: usize) -> Block {
        Block {
            start_line: self.start_line,
            end_line,
            raw: synthesize(&self.lines),
            lines: self.lines,
        }
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Open(OpenBlock),
}

/// Per-file scan cursor.
///
/// Feed lines in file order with [`Scanner::consume_line`], then call
/// [`Scanner::finish`]. A scanner that returned an error has dropped its
/// open block and must not be fed further lines of the same file.
#[derive(Debug, Default)]
pub struct Scanner {
    state: State,
    last_line: Option<usize>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a block is open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Advance the state machine by one line.
    ///
    /// Returns the block closed by this line, if any. Lines that are
    /// blank after trimming are ignored entirely.
    pub fn consume_line(&mut self, index: usize, line: &str) -> Result<Option<Block>, ScanError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        self.last_line = Some(index);

        let open = match &mut self.state {
            State::Open(open) => open,
            State::Idle => {
                if is_block_start(trimmed) {
                    let mut open = OpenBlock {
                        start_line: index,
                        required_indent: leading_whitespace_width(line),
                        lines: Vec::new(),
                    };
                    open.push_residue(strip_start_marker(trimmed));
                    tracing::trace!(line = index, indent = open.required_indent, "Block opened");
                    self.state = State::Open(open);
                }
                return Ok(None);
            }
        };

        if is_block_start(trimmed) {
            self.state = State::Idle;
            return Err(ScanError {
                kind: ScanErrorKind::NestedStart,
                line: index,
            });
        }

        if is_block_end(trimmed) {
            open.push_residue(strip_end_marker(trimmed));
            return Ok(self.close(index));
        }

        let found = leading_whitespace_width(line);
        let required = open.required_indent;
        if found < required || (found == required && !is_comment_line(trimmed)) {
            self.state = State::Idle;
            return Err(ScanError {
                kind: ScanErrorKind::Dedent { required, found },
                line: index,
            });
        }

        let payload = match strip_comment_leader(line) {
            Some(rest) => rest.to_string(),
            None => line.to_string(),
        };
        open.push(payload);
        Ok(None)
    }

    fn close(&mut self, end_line: usize) -> Option<Block> {
        match std::mem::take(&mut self.state) {
            State::Open(open) => {
                let block = open.close(end_line);
                tracing::trace!(start = block.start_line, end = end_line, "Block closed");
                Some(block)
            }
            State::Idle => None,
        }
    }

    /// End the scan. Fails if a block is still open.
    pub fn finish(self) -> Result<(), ScanError> {
        match self.state {
            State::Idle => Ok(()),
            State::Open(open) => Err(ScanError {
                kind: ScanErrorKind::Unterminated,
                line: self.last_line.unwrap_or(open.start_line),
            }),
        }
    }
}

/// Scan a sequence of lines and return every closed block in order.
pub fn extract_blocks<'a, I>(lines: I) -> Result<Vec<Block>, ScanError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = Scanner::new();
    let mut blocks = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        if let Some(block) = scanner.consume_line(index, line)? {
            blocks.push(block);
        }
    }
    scanner.finish()?;
    Ok(blocks)
}
