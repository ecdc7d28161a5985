// src/detection/mod.rs
//! Clone detection: turns prepared source files into [`CodeClone`]s fed to
//! a [`CodeCloneMap`].
//!
//! [`CodeClone`]: crate::clones::CodeClone

pub mod rabin_karp;
pub mod source;

pub use rabin_karp::RabinKarp;
pub use source::SourceFile;

use crate::clones::CodeCloneMap;
use crate::config::Arguments;
use crate::error::{CopyDetectError, Result};
use tracing::debug;

pub const RABIN_KARP: &str = "rabin-karp";

/// A clone detection algorithm.
///
/// Implementations emit every clone they find through `map.add` in a stable
/// order, so that two runs over the same files produce the same registry.
pub trait Detector: Send + Sync {
    fn name(&self) -> &'static str;

    fn detect(&self, files: &[SourceFile], map: &mut CodeCloneMap);
}

/// Picks the detector named by `--algorithm`.
///
/// # Errors
/// Returns error if no detector has that name.
pub fn for_arguments(args: &Arguments) -> Result<Box<dyn Detector>> {
    match args.algorithm.as_str() {
        RABIN_KARP => {
            if args.fuzzy {
                debug!(
                    head_equality = args.head_equality,
                    edit_distance = args.edit_distance,
                    "fuzzy mode: variable names are ignored, edit-distance settings unused by {RABIN_KARP}"
                );
            }
            Ok(Box::new(RabinKarp::new(
                args.lines_threshold,
                args.tokens_threshold,
            )))
        }
        other => Err(CopyDetectError::UnknownAlgorithm(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_algorithm() {
        let detector = for_arguments(&Arguments::new()).unwrap();
        assert_eq!(detector.name(), "rabin-karp");
    }

    #[test]
    fn test_unknown_algorithm() {
        let args = Arguments {
            algorithm: "suffix-tree".to_string(),
            ..Arguments::new()
        };
        let err = for_arguments(&args).err().unwrap();
        assert!(matches!(err, CopyDetectError::UnknownAlgorithm(name) if name == "suffix-tree"));
    }
}
