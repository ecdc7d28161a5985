// src/cli/builder.rs
//! Turns an argument vector into the run configuration.

use super::args::Cli;
use crate::config::{
    self, Arguments, ConfigFile, DEFAULT_ALGORITHM, DEFAULT_EDIT_DISTANCE, DEFAULT_HEAD_EQUALITY,
    DEFAULT_MAX_PERCENTAGE, DEFAULT_MIN_LINES, DEFAULT_MIN_TOKENS, DEFAULT_SUFFIX,
};
use crate::error::ConfigError;
use clap::Parser;
use std::ffi::OsString;

/// Builds [`Arguments`] from the command line, on top of optional
/// `copydetect.toml` defaults. Command-line values win.
#[derive(Debug, Clone, Default)]
pub struct ArgumentsBuilder {
    defaults: ConfigFile,
}

impl ArgumentsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config_file(mut self, defaults: ConfigFile) -> Self {
        self.defaults = defaults;
        self
    }

    /// Parses `argv` (program name first, like `std::env::args_os`).
    ///
    /// # Errors
    /// Returns error if clap rejects the arguments, no path is given without
    /// `--help`/`--version`, or `--max-percentage` is outside `[0, 100]`.
    pub fn build<I, T>(&self, argv: I) -> Result<Arguments, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(argv).map_err(ConfigError::from_parser)?;
        let detection = &self.defaults.detection;

        let max_percentage = cli
            .max_percentage
            .or(detection.max_percentage)
            .unwrap_or(DEFAULT_MAX_PERCENTAGE);
        config::check_percentage(max_percentage)?;

        let mut suffixes = vec![DEFAULT_SUFFIX.to_string()];
        for suffix in self.defaults.scan.suffixes.iter().chain(&cli.suffix) {
            if !suffixes.contains(suffix) {
                suffixes.push(suffix.clone());
            }
        }

        let mut exclude = self.defaults.scan.exclude.clone();
        exclude.extend(cli.exclude);

        let args = Arguments {
            directories: cli.paths,
            suffixes,
            exclude,
            pmd_cpd_xml_logfile: cli.log_pmd,
            lines_threshold: cli
                .min_lines
                .or(detection.min_lines)
                .unwrap_or(DEFAULT_MIN_LINES),
            tokens_threshold: cli
                .min_tokens
                .or(detection.min_tokens)
                .unwrap_or(DEFAULT_MIN_TOKENS),
            max_percentage,
            fuzzy: cli.fuzzy || detection.fuzzy.unwrap_or(false),
            verbose: cli.verbose,
            help: cli.help,
            version: cli.version,
            algorithm: cli
                .algorithm
                .or_else(|| detection.algorithm.clone())
                .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string()),
            edit_distance: cli
                .edit_distance
                .or(detection.edit_distance)
                .unwrap_or(DEFAULT_EDIT_DISTANCE),
            head_equality: cli
                .head_equality
                .or(detection.head_equality)
                .unwrap_or(DEFAULT_HEAD_EQUALITY),
        };

        args.validate()?;
        Ok(args)
    }
}
