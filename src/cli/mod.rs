// src/cli/mod.rs
//! Command-line surface: argument parsing and the scan handler.

pub mod args;
pub mod builder;
pub mod handlers;

pub use args::{help_text, version_text, Cli};
pub use builder::ArgumentsBuilder;
pub use handlers::handle_scan;
