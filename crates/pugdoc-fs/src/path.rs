//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A path normalized to use forward slashes internally.
///
/// Template paths end up in error messages and in the structured run
/// result, so they are kept in one stable textual form regardless of
/// platform and converted to native form only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let segment = segment.trim_start_matches("./");
        if segment.is_empty() || segment == "." {
            return self.clone();
        }
        if self.inner.is_empty() || self.inner == "." {
            return Self {
                inner: segment.to_string(),
            };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            None => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Strip `base` from the front of this path.
    ///
    /// Returns `None` when this path does not live under `base`.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<&str> {
        let base = base.inner.trim_end_matches('/');
        if base.is_empty() || base == "." {
            return Some(self.inner.trim_start_matches("./"));
        }
        let rest = self.inner.strip_prefix(base)?;
        if rest.is_empty() {
            Some("")
        } else {
            rest.strip_prefix('/')
        }
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl<'de> Deserialize<'de> for NormalizedPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_normalized() {
        let path = NormalizedPath::new("views\\mixins\\button.pug");
        assert_eq!(path.as_str(), "views/mixins/button.pug");
    }

    #[test]
    fn test_file_name_and_extension() {
        let path = NormalizedPath::new("views/button.pug");
        assert_eq!(path.file_name(), Some("button.pug"));
        assert_eq!(path.extension(), Some("pug"));
        assert_eq!(NormalizedPath::new("views/.hidden").extension(), None);
    }

    #[test]
    fn test_relative_to() {
        let base = NormalizedPath::new("/project/views");
        let path = NormalizedPath::new("/project/views/mixins/button.pug");
        assert_eq!(path.relative_to(&base), Some("mixins/button.pug"));
        assert_eq!(
            NormalizedPath::new("/project/viewsx/a.pug").relative_to(&base),
            None
        );
    }

    #[test]
    fn test_join_with_dot_root() {
        let root = NormalizedPath::new(".");
        assert_eq!(root.join("views").as_str(), "views");
        assert_eq!(NormalizedPath::new("/a/").join("b").as_str(), "/a/b");
    }
}
