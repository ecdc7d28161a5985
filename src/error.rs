// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// A run configuration could not be built. The run never starts.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConfigError {
    message: String,
    code: Option<i32>,
    #[source]
    source: Option<clap::Error>,
}

impl ConfigError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Wraps an error raised by the option parser, keeping its exit code.
    #[must_use]
    pub fn from_parser(err: clap::Error) -> Self {
        Self {
            message: first_line(&err.to_string()),
            code: Some(err.exit_code()),
            source: Some(err),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error code reported by the underlying parser, if any.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

// clap renders "error: <msg>" followed by usage hints; keep the message only.
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}

#[derive(Debug, Error)]
pub enum CopyDetectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Unknown detection algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl CopyDetectError {
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CopyDetectError>;
