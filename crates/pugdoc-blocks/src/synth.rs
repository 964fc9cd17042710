//! Comment synthesis.

/// Opening token of a documentation comment.
pub const COMMENT_OPEN: &str = "/**";

/// Closing token of a documentation comment.
pub const COMMENT_CLOSE: &str = "*/";

/// Join payload lines with newlines and wrap them in `/** ... */`.
///
/// ```
/// use pugdoc_blocks::synthesize;
///
/// assert_eq!(synthesize(&["a", "b"]), "/**a\nb*/");
/// ```
pub fn synthesize<S: AsRef<str>>(lines: &[S]) -> String {
    let body = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    format!("{COMMENT_OPEN}{body}{COMMENT_CLOSE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block() {
        assert_eq!(synthesize::<&str>(&[]), "/***/");
    }

    #[test]
    fn test_whitespace_untouched() {
        assert_eq!(
            synthesize(&["  name: button", "\tdescription:  x "]),
            "/**  name: button\n\tdescription:  x */"
        );
    }
}
