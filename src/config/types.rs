use serde::Deserialize;
use std::path::PathBuf;

/// Suffix that is always scanned, whatever `--suffix` adds.
pub const DEFAULT_SUFFIX: &str = ".php";
pub const DEFAULT_MIN_LINES: usize = 5;
pub const DEFAULT_MIN_TOKENS: usize = 70;
pub const DEFAULT_HEAD_EQUALITY: usize = 10;
pub const DEFAULT_EDIT_DISTANCE: usize = 5;
pub const DEFAULT_MAX_PERCENTAGE: f64 = 0.0;
pub const DEFAULT_ALGORITHM: &str = "rabin-karp";

/// The run configuration consumed by the scan driver.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    /// Directories or files to scan.
    pub directories: Vec<PathBuf>,
    /// File name suffixes to include; always starts with `.php`.
    pub suffixes: Vec<String>,
    /// Paths to leave out of the scan.
    pub exclude: Vec<String>,
    /// Where to write the PMD-CPD XML log, if anywhere.
    pub pmd_cpd_xml_logfile: Option<PathBuf>,
    /// Minimum clone length in lines.
    pub lines_threshold: usize,
    /// Minimum clone length in tokens.
    pub tokens_threshold: usize,
    /// Duplication percentage above which the run fails.
    pub max_percentage: f64,
    pub fuzzy: bool,
    pub verbose: bool,
    pub help: bool,
    pub version: bool,
    pub algorithm: String,
    pub edit_distance: usize,
    pub head_equality: usize,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            suffixes: vec![DEFAULT_SUFFIX.to_string()],
            exclude: Vec::new(),
            pmd_cpd_xml_logfile: None,
            lines_threshold: DEFAULT_MIN_LINES,
            tokens_threshold: DEFAULT_MIN_TOKENS,
            max_percentage: DEFAULT_MAX_PERCENTAGE,
            fuzzy: false,
            verbose: false,
            help: false,
            version: false,
            algorithm: DEFAULT_ALGORITHM.to_string(),
            edit_distance: DEFAULT_EDIT_DISTANCE,
            head_equality: DEFAULT_HEAD_EQUALITY,
        }
    }
}

/// Project defaults read from `copydetect.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub scan: ScanSection,
    pub detection: DetectionSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Extra suffixes, added after `.php`.
    pub suffixes: Vec<String>,
    pub exclude: Vec<String>,
}

/// Detection defaults; anything left out falls back to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetectionSection {
    pub min_lines: Option<usize>,
    pub min_tokens: Option<usize>,
    pub head_equality: Option<usize>,
    pub edit_distance: Option<usize>,
    pub max_percentage: Option<f64>,
    pub algorithm: Option<String>,
    pub fuzzy: Option<bool>,
}
