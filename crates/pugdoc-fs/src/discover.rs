//! Glob-based template discovery
//!
//! A [`FileSet`] walks a root directory and keeps the regular files whose
//! root-relative path matches at least one include pattern and no exclude
//! pattern. Entries are visited sorted by file name at every directory
//! level, so every run sees the same enumeration order.

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result, SourceFile, io};

/// Template files picked up when no include pattern is given.
pub const DEFAULT_INCLUDE: &[&str] = &["**/*.pug"];

/// Dependency directories skipped when no exclude pattern is given.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "**/node_modules/**",
    "**/bower_components/**",
    "**/jspm_packages/**",
];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A discovered file and the directory its include pattern is anchored at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    pub path: NormalizedPath,
    pub base: NormalizedPath,
}

/// Include/exclude glob sets evaluated under a root directory.
#[derive(Debug, Clone)]
pub struct FileSet {
    root: NormalizedPath,
    include: Vec<String>,
    exclude: Vec<String>,
}

struct IncludePattern {
    pattern: Pattern,
    base: NormalizedPath,
}

impl FileSet {
    /// Create a file set with the default include and exclude patterns.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            include: DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Replace the include patterns. An empty list keeps the defaults.
    pub fn with_include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if !patterns.is_empty() {
            self.include = patterns;
        }
        self
    }

    /// Replace the exclude patterns.
    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Walk the root and return every matching file in walk order.
    pub fn discover(&self) -> Result<Vec<Discovered>> {
        let native_root = self.root.to_native();
        if !native_root.is_dir() {
            return Err(Error::InvalidRoot { path: native_root });
        }

        let includes = self
            .include
            .iter()
            .map(|raw| {
                Ok(IncludePattern {
                    pattern: compile(raw)?,
                    base: self.root.join(&glob_base(raw)),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let excludes = self
            .exclude
            .iter()
            .map(|raw| compile(raw))
            .collect::<Result<Vec<_>>>()?;

        let mut found = Vec::new();
        for entry in WalkDir::new(&native_root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %self.root, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = NormalizedPath::new(entry.path());
            let Some(relative) = path.relative_to(&self.root) else {
                continue;
            };
            let relative = NormalizedPath::new(relative);

            if excludes
                .iter()
                .any(|p| p.matches_with(relative.as_str(), MATCH_OPTIONS))
            {
                tracing::trace!(path = %relative, "Excluded");
                continue;
            }

            if let Some(include) = includes
                .iter()
                .find(|p| p.pattern.matches_with(relative.as_str(), MATCH_OPTIONS))
            {
                found.push(Discovered {
                    path: self.root.join(relative.as_str()),
                    base: include.base.clone(),
                });
            }
        }

        tracing::debug!(root = %self.root, count = found.len(), "Discovered template files");
        Ok(found)
    }

    /// Discover files and load each one lazily.
    ///
    /// A file that cannot be read yields an `Err` for that file only; the
    /// iterator keeps going with the rest.
    pub fn sources(&self) -> Result<impl Iterator<Item = Result<SourceFile>> + use<>> {
        let discovered = self.discover()?;
        Ok(discovered.into_iter().map(|found| {
            let content = io::read_text(&found.path)?;
            Ok(SourceFile::new(found.path, found.base, content))
        }))
    }
}

fn compile(raw: &str) -> Result<Pattern> {
    Pattern::new(raw.trim_start_matches("./")).map_err(|e| Error::InvalidPattern {
        pattern: raw.to_string(),
        message: e.msg.to_string(),
    })
}

/// Literal directory prefix of a glob, before its first wildcard component.
fn glob_base(pattern: &str) -> String {
    let pattern = pattern.trim_start_matches("./");
    let components: Vec<&str> = pattern.split('/').collect();
    let literal: Vec<&str> = components
        .iter()
        .take_while(|c| !c.contains(['*', '?', '[']))
        .copied()
        .collect();

    if literal.len() == components.len() {
        // A plain file path; its base is the containing directory.
        literal[..literal.len() - 1].join("/")
    } else {
        literal.join("/")
    }
}
