//! Loaded template file records

use serde::Serialize;

use crate::NormalizedPath;

/// One template file as handed to the block extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Full path of the file.
    pub path: NormalizedPath,
    /// Final path component, e.g. `button.pug`.
    pub basename: String,
    /// Directory the matching include pattern is anchored at.
    pub base: NormalizedPath,
    /// File text.
    #[serde(skip)]
    pub content: String,
}

impl SourceFile {
    pub fn new(
        path: impl Into<NormalizedPath>,
        base: impl Into<NormalizedPath>,
        content: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let basename = path.file_name().unwrap_or_default().to_string();
        Self {
            path,
            basename,
            base: base.into(),
            content: content.into(),
        }
    }

    /// Build a record for content that did not come from discovery.
    ///
    /// The base is the parent directory of `path`.
    pub fn in_memory(path: &str, content: impl Into<String>) -> Self {
        let path = NormalizedPath::new(path);
        let base = path.parent().unwrap_or_else(|| NormalizedPath::new("."));
        Self::new(path, base, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_derived_from_path() {
        let file = SourceFile::new("views/mixins/button.pug", "views", "");
        assert_eq!(file.basename, "button.pug");
        assert_eq!(file.base.as_str(), "views");
    }

    #[test]
    fn test_in_memory_base_is_parent() {
        assert_eq!(SourceFile::in_memory("a/b/c.pug", "").base.as_str(), "a/b");
        assert_eq!(SourceFile::in_memory("c.pug", "").base.as_str(), ".");
        assert_eq!(SourceFile::in_memory("/c.pug", "").base.as_str(), "/");
    }
}
