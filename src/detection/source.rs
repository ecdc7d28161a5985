// src/detection/source.rs
//! A scanned file, split into lines and prepared for window hashing.

use crate::error::{CopyDetectError, Result};
use regex::Regex;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$[A-Za-z_][A-Za-z0-9_]*").unwrap_or_else(|_| panic!("Invalid Regex"))
});

#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    raw: Vec<String>,
    normalized: Vec<String>,
    hashes: Vec<u64>,
}

impl SourceFile {
    /// Reads and prepares a file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path, fuzzy: bool) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CopyDetectError::io(e, path))?;
        Ok(Self::from_content(path, &content, fuzzy))
    }

    #[must_use]
    pub fn from_content(path: impl Into<PathBuf>, content: &str, fuzzy: bool) -> Self {
        let raw: Vec<String> = content.lines().map(str::to_string).collect();
        let normalized: Vec<String> = raw.iter().map(|l| normalize_line(l, fuzzy)).collect();
        let hashes = normalized.iter().map(|l| hash_line(l)).collect();
        Self {
            path: path.into(),
            raw,
            normalized,
            hashes,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines, counted towards the scanned total.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.raw.len()
    }

    pub(crate) fn hashes(&self) -> &[u64] {
        &self.hashes
    }

    pub(crate) fn normalized(&self) -> &[String] {
        &self.normalized
    }

    /// Original text of lines `start..start + len` (0-based).
    #[must_use]
    pub fn raw_fragment(&self, start: usize, len: usize) -> String {
        self.raw[start..start + len].join("\n")
    }

    /// Normalized text of lines `start..start + len` (0-based).
    #[must_use]
    pub fn normalized_fragment(&self, start: usize, len: usize) -> String {
        self.normalized[start..start + len].join("\n")
    }

    /// True if line `index` (0-based) is empty after normalization.
    pub(crate) fn is_blank(&self, index: usize) -> bool {
        self.normalized[index].is_empty()
    }

    /// True if the window starts or ends on a blank line. Such a window
    /// would pad a clone with lines that carry no code.
    pub(crate) fn has_blank_edge(&self, start: usize, len: usize) -> bool {
        self.is_blank(start) || self.is_blank(start + len - 1)
    }
}

/// Trims a line and collapses inner whitespace. With `fuzzy`, every
/// `$variable` becomes `$_` so renamed copies still match.
#[must_use]
pub fn normalize_line(line: &str, fuzzy: bool) -> String {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    if fuzzy {
        VARIABLE_RE.replace_all(&collapsed, "$$_").into_owned()
    } else {
        collapsed
    }
}

fn hash_line(line: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    line.hash(&mut hasher);
    hasher.finish()
}
