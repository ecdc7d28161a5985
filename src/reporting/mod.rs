// src/reporting/mod.rs
//! Read-only renderings of a finished [`CodeCloneMap`](crate::clones::CodeCloneMap).

pub mod console;
pub mod pmd;

pub use console::{format_report, print_report};
pub use pmd::{format_pmd, write_pmd};
