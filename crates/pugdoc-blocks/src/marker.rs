//! Line classification and marker stripping.
//!
//! A line is a block start or end purely by substring search for the
//! marker token; the comment leader (`//` or `//-`) that usually precedes
//! it is removed together with the token.

use regex::Regex;
use std::sync::LazyLock;

/// Token that opens a documentation block.
pub const START_MARKER: &str = "@pugdoc";

/// Token that closes a documentation block.
pub const END_MARKER: &str = "@endpugdoc";

/// Start token, optionally preceded by a comment leader, plus trailing blanks.
static START_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?://-?[ \t]*)?@pugdoc[ \t]*").expect("Invalid start marker regex")
});

static END_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?://-?[ \t]*)?@endpugdoc[ \t]*").expect("Invalid end marker regex")
});

/// Returns `true` if the line contains the start marker.
pub fn is_block_start(line: &str) -> bool {
    line.contains(START_MARKER)
}

/// Returns `true` if the line contains the end marker.
pub fn is_block_end(line: &str) -> bool {
    line.contains(END_MARKER)
}

/// Remove the start marker and its adjacent comment leader.
///
/// A comment leader opening the line is removed as well, for markers
/// that trail other text. Everything else on the line is kept as is,
/// including surrounding whitespace.
///
/// ```
/// use pugdoc_blocks::marker::strip_start_marker;
///
/// assert_eq!(strip_start_marker("//- @pugdoc Button"), "Button");
/// assert_eq!(strip_start_marker("//- @pugdoc"), "");
/// ```
pub fn strip_start_marker(line: &str) -> String {
    let stripped = START_MARKER_REGEX.replace_all(line, "");
    match strip_comment_leader(&stripped) {
        Some(rest) => rest.to_string(),
        None => stripped.into_owned(),
    }
}

/// Remove the end marker and its adjacent comment leader, then trim.
pub fn strip_end_marker(line: &str) -> String {
    let stripped = END_MARKER_REGEX.replace_all(line, "");
    strip_comment_leader(&stripped)
        .unwrap_or(&*stripped)
        .trim()
        .to_string()
}

/// Returns the text after a leading `//` or `//-` comment leader.
///
/// Indentation before the leader and blanks right after it are dropped.
/// Returns `None` when the line does not start with a comment leader.
pub fn strip_comment_leader(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let rest = rest
        .strip_prefix("//-")
        .or_else(|| rest.strip_prefix("//"))?;
    Some(rest.trim_start_matches([' ', '\t']))
}

/// Returns `true` if the line, after indentation, starts with a comment leader.
pub fn is_comment_line(line: &str) -> bool {
    strip_comment_leader(line).is_some()
}

/// Quick check that start and end tokens occur equally often.
///
/// Content without any marker counts as balanced. A balanced file can
/// still be malformed; only the scan decides that.
pub fn markers_balanced(content: &str) -> bool {
    content.matches(START_MARKER).count() == content.matches(END_MARKER).count()
}
