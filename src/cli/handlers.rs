// src/cli/handlers.rs
use crate::clones::{CodeCloneMap, SharedCloneMap};
use crate::config::Arguments;
use crate::detection::{self, Detector, SourceFile};
use crate::discovery;
use crate::exit::CopyDetectExit;
use crate::reporting;
use crate::tokens::Tokenizer;
use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs a full scan: discover, detect, report, and decide the exit status.
///
/// # Errors
/// Returns error if the algorithm is unknown, a path is missing, or the
/// PMD log cannot be written.
pub fn handle_scan(args: &Arguments) -> Result<CopyDetectExit> {
    let start = Instant::now();
    let detector = detection::for_arguments(args)?;
    if args.tokens_threshold > 0 && !Tokenizer::is_available() {
        warn!("tokenizer unavailable; no fragment can reach --min-tokens");
    }

    let files = discovery::discover(args)?;
    info!(files = files.len(), algorithm = detector.name(), "scanning");

    let clones = scan(&files, detector.as_ref(), args.fuzzy);
    reporting::print_report(&clones, args.verbose);

    if let Some(path) = &args.pmd_cpd_xml_logfile {
        reporting::write_pmd(&clones, path)?;
        info!(path = %path.display(), "PMD-CPD log written");
    }

    debug!(elapsed_ms = start.elapsed().as_millis(), "scan finished");
    Ok(exit_status(&clones, args.max_percentage))
}

/// Loads `files` in parallel, then runs `detector` over them in order.
///
/// Unreadable files are skipped with a warning and do not count towards
/// the scanned lines.
#[must_use]
pub fn scan(files: &[PathBuf], detector: &dyn Detector, fuzzy: bool) -> CodeCloneMap {
    let registry = SharedCloneMap::new();

    let sources: Vec<SourceFile> = files
        .par_iter()
        .filter_map(|path| match SourceFile::load(path, fuzzy) {
            Ok(source) => {
                registry.add_to_scanned_lines(source.line_count());
                Some(source)
            }
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                None
            }
        })
        .collect();

    registry.with(|map| detector.detect(&sources, map));
    registry.into_inner()
}

/// Fails the run when there are clones and duplication is above `max_percentage`.
#[must_use]
pub fn exit_status(clones: &CodeCloneMap, max_percentage: f64) -> CopyDetectExit {
    if !clones.is_empty() && clones.percentage() > max_percentage {
        eprintln!(
            "{}",
            format!(
                "Duplication {} exceeds the allowed {max_percentage:.2}%",
                clones.percentage_string()
            )
            .red()
        );
        CopyDetectExit::DuplicationExceeded
    } else {
        CopyDetectExit::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clones::{CloneFile, CloneId, CodeClone};

    fn with_percentage(duplicated: usize, scanned: usize) -> CodeCloneMap {
        let mut map = CodeCloneMap::new();
        map.add(CodeClone::new(
            CloneId::from("x"),
            vec![CloneFile::new("a", 1), CloneFile::new("b", 1)],
            duplicated,
            0,
        ));
        map.add_to_scanned_lines(scanned);
        map
    }

    #[test]
    fn test_exit_status_threshold() {
        let map = with_percentage(10, 100);
        assert_eq!(exit_status(&map, 0.0), CopyDetectExit::DuplicationExceeded);
        assert_eq!(exit_status(&map, 9.99), CopyDetectExit::DuplicationExceeded);
        assert_eq!(exit_status(&map, 10.0), CopyDetectExit::Success);
        assert_eq!(exit_status(&map, 50.0), CopyDetectExit::Success);
    }

    #[test]
    fn test_empty_registry_passes() {
        assert_eq!(exit_status(&CodeCloneMap::new(), 0.0), CopyDetectExit::Success);
    }
}
