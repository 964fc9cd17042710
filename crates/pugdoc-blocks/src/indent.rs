//! Indentation width for the dedent guard.

/// Number of leading space or tab characters.
///
/// Tabs and spaces both count as one; this is the length of the leading
/// run, not a column. Blank lines measure 0.
pub fn leading_whitespace_width(line: &str) -> usize {
    let width = line.chars().take_while(|c| matches!(c, ' ' | '\t')).count();
    if width == line.chars().count() { 0 } else { width }
}
