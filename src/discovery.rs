// src/discovery.rs
use crate::config::Arguments;
use crate::error::{CopyDetectError, Result};
use crate::utils::normalize_path;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Collects the files to scan from the configured paths.
///
/// Files are kept when their name ends with one of the suffixes and no
/// exclude entry matches their path. The result is sorted and free of
/// duplicates so that clone order is reproducible.
///
/// # Errors
/// Returns error if a configured path does not exist.
pub fn discover(args: &Arguments) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in &args.directories {
        if !root.exists() {
            return Err(CopyDetectError::io(
                io::Error::new(io::ErrorKind::NotFound, "path does not exist"),
                root,
            ));
        }
        if root.is_file() {
            if has_suffix(root, &args.suffixes) && !is_excluded(root, &args.exclude) {
                files.push(root.clone());
            }
            continue;
        }
        files.extend(walk_directory(root, args));
    }

    files.sort();
    files.dedup();
    debug!(count = files.len(), "files discovered");
    Ok(files)
}

fn walk_directory(root: &Path, args: &Arguments) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_excluded(e.path(), &args.exclude));

    let (paths, error_count) = accumulate_walker(walker, &args.suffixes);
    if error_count > 0 {
        warn!(
            root = %root.display(),
            "Encountered {error_count} errors during file walk"
        );
    }
    paths
}

fn accumulate_walker<I>(walker: I, suffixes: &[String]) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && has_suffix(entry.path(), suffixes) {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                debug!("walk error: {e}");
                errors += 1;
            }
        }
    }
    (paths, errors)
}

fn has_suffix(path: &Path, suffixes: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    suffixes.iter().any(|s| name.ends_with(s.as_str()))
}

/// True if an exclude entry names this path or one of its ancestors.
/// Entries match whole path components, anywhere in the path.
fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    if excludes.is_empty() {
        return false;
    }
    let p = normalize_path(path);
    let p = p.trim_start_matches("./");
    excludes.iter().any(|raw| {
        let ex = raw.replace('\\', "/");
        let ex = ex.trim_start_matches("./").trim_matches('/');
        if ex.is_empty() {
            return false;
        }
        p == ex
            || p.starts_with(&format!("{ex}/"))
            || p.ends_with(&format!("/{ex}"))
            || p.contains(&format!("/{ex}/"))
    })
}
