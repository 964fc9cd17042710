//! Source excerpts for error messages.

/// Render the lines around `index` with a `^` rule under the failing line.
///
/// `context` lines are shown on each side, clamped to the file. The rule
/// has one caret per character of the failing line.
pub fn render_excerpt<S: AsRef<str>>(lines: &[S], index: usize, context: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let index = index.min(lines.len() - 1);
    let first = index.saturating_sub(context);
    let last = index.saturating_add(context).min(lines.len() - 1);

    let mut out: Vec<String> = Vec::with_capacity(last - first + 2);
    for (i, line) in lines[first..=last].iter().enumerate() {
        let line = line.as_ref();
        out.push(line.to_string());
        if first + i == index {
            out.push("^".repeat(line.chars().count()));
        }
    }
    out.join("\n")
}
