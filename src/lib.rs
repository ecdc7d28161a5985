pub mod cli;
pub mod clones;
pub mod config;
pub mod detection;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod reporting;
pub mod tokens;
pub mod utils;
