// src/clones/map.rs
//! The clone registry.
//!
//! Clones arrive one at a time from a detector. The first clone seen for an
//! id becomes the canonical entry; later clones with the same id are merged
//! into it by appending their occurrences. Running totals are updated on
//! every add so reporting never has to walk the entries again.

use super::types::{CloneId, CodeClone};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Insertion-ordered, id-deduplicated store of clones plus duplication totals.
#[derive(Debug, Clone, Default)]
pub struct CodeCloneMap {
    entries: Vec<CodeClone>,
    by_id: HashMap<CloneId, usize>,
    duplicated_lines: usize,
    scanned_lines: usize,
    largest_size: usize,
    files_with_clones: HashSet<PathBuf>,
}

impl CodeCloneMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clone, merging it into the existing entry for its id.
    ///
    /// The duplicated-line total grows by the incoming clone's own
    /// `lines * (occurrences - 1)`, not by a recount of the merged entry.
    /// Re-adding an id with several occurrences therefore counts the overlap
    /// again; reports depend on that arithmetic staying as it is.
    pub fn add(&mut self, clone: CodeClone) {
        let lines = clone.number_of_lines();
        self.duplicated_lines += clone.duplicated_lines();
        self.largest_size = self.largest_size.max(lines);

        for file in clone.files() {
            if !self.files_with_clones.contains(file.name()) {
                self.files_with_clones.insert(file.name().to_path_buf());
            }
        }

        match self.by_id.get(clone.id()).copied() {
            Some(index) => {
                let existing = &mut self.entries[index];
                debug_assert_eq!(
                    existing.number_of_lines(),
                    lines,
                    "clone {} changed length between detections",
                    clone.id()
                );
                for file in clone.files() {
                    existing.push_file(file.clone());
                }
            }
            None => {
                self.by_id.insert(clone.id().clone(), self.entries.len());
                self.entries.push(clone);
            }
        }
    }

    /// Adds `lines` to the total number of scanned lines.
    pub fn add_to_scanned_lines(&mut self, lines: usize) {
        self.scanned_lines += lines;
    }

    /// Share of scanned lines that are duplicated, in percent.
    ///
    /// A run that scanned nothing reports `100.0`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.scanned_lines > 0 {
            self.duplicated_lines as f64 / self.scanned_lines as f64 * 100.0
        } else {
            100.0
        }
    }

    /// [`percentage`](Self::percentage) with two decimals, e.g. `"25.00%"`.
    #[must_use]
    pub fn percentage_string(&self) -> String {
        format!("{:.2}%", self.percentage())
    }

    /// Duplicated lines per distinct clone; `0.0` for an empty registry.
    #[must_use]
    pub fn average_size(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.duplicated_lines as f64 / self.entries.len() as f64
    }

    #[must_use]
    pub fn largest_size(&self) -> usize {
        self.largest_size
    }

    /// Number of distinct clones.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn number_of_files_with_clones(&self) -> usize {
        self.files_with_clones.len()
    }

    #[must_use]
    pub fn number_of_duplicated_lines(&self) -> usize {
        self.duplicated_lines
    }

    /// Total scanned lines.
    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.scanned_lines
    }

    /// Canonical entries in first-discovery order.
    #[must_use]
    pub fn clones(&self) -> &[CodeClone] {
        &self.entries
    }

    /// Looks up the canonical entry for an id.
    #[must_use]
    pub fn get(&self, id: &CloneId) -> Option<&CodeClone> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeClone> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CodeCloneMap {
    type Item = &'a CodeClone;
    type IntoIter = std::slice::Iter<'a, CodeClone>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<CodeClone> for CodeCloneMap {
    fn extend<I: IntoIterator<Item = CodeClone>>(&mut self, iter: I) {
        for clone in iter {
            self.add(clone);
        }
    }
}
