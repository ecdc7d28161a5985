// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::{load_config_file, parse_toml, CONFIG_FILE_NAME};
pub use self::types::{
    Arguments, ConfigFile, DetectionSection, ScanSection, DEFAULT_ALGORITHM,
    DEFAULT_EDIT_DISTANCE, DEFAULT_HEAD_EQUALITY, DEFAULT_MAX_PERCENTAGE, DEFAULT_MIN_LINES,
    DEFAULT_MIN_TOKENS, DEFAULT_SUFFIX,
};
use crate::error::ConfigError;

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the invariants a run relies on.
    ///
    /// # Errors
    /// Returns error if no path is given (unless help or version was
    /// requested) or the percentage threshold is outside `[0, 100]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_percentage(self.max_percentage)?;
        if self.directories.is_empty() && !self.help && !self.version {
            return Err(ConfigError::new("No directory specified"));
        }
        Ok(())
    }
}

/// Rejects thresholds outside `[0, 100]` (NaN included).
///
/// # Errors
/// Returns error if `value` is out of range.
pub fn check_percentage(value: f64) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::new(
            "Maximum percentage allowed must be between 0 and 100",
        ))
    }
}
