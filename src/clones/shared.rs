// src/clones/shared.rs
//! Thread-safe front for [`CodeCloneMap`].
//!
//! The id lookup and the merge-or-insert that follows must happen as one
//! step, so every mutation takes the lock for its whole duration.

use super::map::CodeCloneMap;
use super::types::CodeClone;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct SharedCloneMap {
    inner: Mutex<CodeCloneMap>,
}

impl SharedCloneMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, clone: CodeClone) {
        self.lock().add(clone);
    }

    pub fn add_to_scanned_lines(&self, lines: usize) {
        self.lock().add_to_scanned_lines(lines);
    }

    /// Runs `f` with exclusive access, e.g. to feed a detector a batch.
    pub fn with<R>(&self, f: impl FnOnce(&mut CodeCloneMap) -> R) -> R {
        f(&mut *self.lock())
    }

    /// Returns the registry for sequential reporting.
    #[must_use]
    pub fn into_inner(self) -> CodeCloneMap {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic inside `add` leaves only fully applied updates behind.
    fn lock(&self) -> MutexGuard<'_, CodeCloneMap> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
