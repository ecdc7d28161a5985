// src/exit.rs
//! Standardized process exit codes for `copydetect`.
//!
//! Provides a stable contract for scripts and CI jobs.

use crate::error::CopyDetectError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CopyDetectExit {
    /// Scan completed and duplication is within the allowed threshold.
    Success = 0,
    /// Generic error (e.g. IO, unreadable path, report write failure).
    Error = 1,
    /// The run configuration could not be built from the arguments.
    InvalidInput = 2,
    /// Duplication exceeded `--max-percentage`.
    DuplicationExceeded = 3,
}

impl CopyDetectExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed run to its exit code.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CopyDetectError>() {
            Some(CopyDetectError::Config(_)) => Self::InvalidInput,
            _ if err.downcast_ref::<crate::error::ConfigError>().is_some() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for CopyDetectExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_exit_codes_distinct() {
        let codes = [
            CopyDetectExit::Success.code(),
            CopyDetectExit::Error.code(),
            CopyDetectExit::InvalidInput.code(),
            CopyDetectExit::DuplicationExceeded.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_config_errors_map_to_invalid_input() {
        let err = anyhow::Error::new(CopyDetectError::from(ConfigError::new("No directory specified")));
        assert_eq!(CopyDetectExit::for_error(&err), CopyDetectExit::InvalidInput);

        let err = anyhow::Error::new(ConfigError::new("bad"));
        assert_eq!(CopyDetectExit::for_error(&err), CopyDetectExit::InvalidInput);

        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(CopyDetectExit::for_error(&err), CopyDetectExit::Error);
    }
}
