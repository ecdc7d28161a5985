// src/clones/types.rs
//! Value types describing a detected clone and where it occurs.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque fingerprint of a duplicated fragment.
///
/// Two clones with equal ids are the same logical duplicate. Ids are assigned
/// by the detector; the registry only compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CloneId(String);

impl CloneId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CloneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CloneId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One site where a clone's text appears.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CloneFile {
    name: PathBuf,
    start_line: usize,
}

impl CloneFile {
    #[must_use]
    pub fn new(name: impl Into<PathBuf>, start_line: usize) -> Self {
        Self {
            name: name.into(),
            start_line,
        }
    }

    #[must_use]
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// 1-based line on which the occurrence starts.
    #[must_use]
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Last line covered by a fragment of `lines` lines starting here.
    #[must_use]
    pub fn end_line(&self, lines: usize) -> usize {
        self.start_line + lines.saturating_sub(1)
    }

    /// `name:start_line`, used to label occurrences in reports.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}:{}", self.name.display(), self.start_line)
    }
}

/// A fragment of source text found at two or more locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeClone {
    id: CloneId,
    files: Vec<CloneFile>,
    lines: usize,
    tokens: usize,
    fragment: String,
}

impl CodeClone {
    /// Creates a freshly detected clone.
    ///
    /// Callers must supply at least one occurrence and a positive line count;
    /// the registry relies on both and does not re-check them in release builds.
    #[must_use]
    pub fn new(id: CloneId, files: Vec<CloneFile>, lines: usize, tokens: usize) -> Self {
        debug_assert!(!files.is_empty(), "a clone needs at least one occurrence");
        debug_assert!(lines > 0, "a clone spans at least one line");
        Self {
            id,
            files,
            lines,
            tokens,
            fragment: String::new(),
        }
    }

    /// Attaches the duplicated text, shown by verbose and PMD reports.
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = fragment.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> &CloneId {
        &self.id
    }

    /// Occurrences in the order they were detected (and merged).
    #[must_use]
    pub fn files(&self) -> &[CloneFile] {
        &self.files
    }

    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.lines
    }

    #[must_use]
    pub fn number_of_tokens(&self) -> usize {
        self.tokens
    }

    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Appends an occurrence. Only the registry merges into a clone.
    pub(crate) fn push_file(&mut self, file: CloneFile) {
        self.files.push(file);
    }

    /// Lines this clone contributes as redundant copies: every occurrence
    /// after the first.
    #[must_use]
    pub fn duplicated_lines(&self) -> usize {
        self.lines * self.files.len().saturating_sub(1)
    }
}
