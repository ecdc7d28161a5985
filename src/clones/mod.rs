// src/clones/mod.rs
//! Clone registry: collects detected clones, merges repeats of the same
//! fragment and keeps the totals used for duplication reporting.

pub mod map;
pub mod shared;
pub mod types;

pub use map::CodeCloneMap;
pub use shared::SharedCloneMap;
pub use types::{CloneFile, CloneId, CodeClone};
