use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

// Help and version are plain flags so that the builder, not clap, decides
// what a run with `--help` returns.
#[derive(Parser, Debug)]
#[command(
    name = "copydetect",
    version,
    about = "Copy/paste detector",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Directories or files to scan
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
    /// Include files with this suffix (repeatable; .php is always included)
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Vec<String>,
    /// Exclude this path from the scan (repeatable)
    #[arg(long, value_name = "PATH")]
    pub exclude: Vec<String>,
    /// Write the result in PMD-CPD XML format to FILE
    #[arg(long = "log-pmd", value_name = "FILE")]
    pub log_pmd: Option<PathBuf>,
    /// Fuzz variable names
    #[arg(long)]
    pub fuzzy: bool,
    /// Minimum number of identical lines [default: 5]
    #[arg(long, value_name = "N")]
    pub min_lines: Option<usize>,
    /// Minimum number of identical tokens [default: 70]
    #[arg(long, value_name = "N")]
    pub min_tokens: Option<usize>,
    /// Head equality for fuzzy matching [default: 10]
    #[arg(long, value_name = "N")]
    pub head_equality: Option<usize>,
    /// Edit distance for fuzzy matching [default: 5]
    #[arg(long, value_name = "N")]
    pub edit_distance: Option<usize>,
    /// Fail when duplication exceeds this percentage (0-100)
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub max_percentage: Option<f64>,
    /// Detection algorithm [default: rabin-karp]
    #[arg(long, value_name = "NAME")]
    pub algorithm: Option<String>,
    /// Print progress and the duplicated code
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub verbose: bool,
    /// Print help
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub help: bool,
    /// Print version
    #[arg(long, action = ArgAction::SetTrue)]
    pub version: bool,
}

/// Renders the usage text shown for `--help`.
#[must_use]
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

/// `copydetect <version>`, shown for `--version`.
#[must_use]
pub fn version_text() -> String {
    format!("copydetect {}", env!("CARGO_PKG_VERSION"))
}
