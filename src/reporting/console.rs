// src/reporting/console.rs
//! Human-readable clone report for the terminal.

use crate::clones::{CodeClone, CodeCloneMap};
use colored::Colorize;
use std::fmt::Write;

/// Prints the report to stdout.
pub fn print_report(map: &CodeCloneMap, verbose: bool) {
    print!("{}", format_report(map, verbose));
}

/// Renders the clone list followed by the duplication summary.
#[must_use]
pub fn format_report(map: &CodeCloneMap, verbose: bool) -> String {
    let mut out = String::new();

    if map.is_empty() {
        writeln!(out, "{}", "No clones found.".green()).ok();
        return out;
    }

    writeln!(
        out,
        "Found {} {} with {} duplicated lines in {} files:",
        map.count(),
        pluralize("clone", map.count()),
        map.number_of_duplicated_lines(),
        map.number_of_files_with_clones()
    )
    .ok();
    writeln!(out).ok();

    for clone in map {
        write_clone(&mut out, clone, verbose);
    }

    write_summary(&mut out, map);
    out
}

fn write_clone(out: &mut String, clone: &CodeClone, verbose: bool) {
    let lines = clone.number_of_lines();
    for (i, file) in clone.files().iter().enumerate() {
        let location = format!(
            "{}:{}-{}",
            file.name().display(),
            file.start_line(),
            file.end_line(lines)
        );
        if i == 0 {
            writeln!(out, "  - {} ({lines} lines)", location.yellow()).ok();
        } else {
            writeln!(out, "    {}", location.yellow()).ok();
        }
    }

    if verbose && !clone.fragment().is_empty() {
        writeln!(out).ok();
        for line in clone.fragment().lines() {
            writeln!(out, "    {}", line.dimmed()).ok();
        }
    }
    writeln!(out).ok();
}

fn write_summary(out: &mut String, map: &CodeCloneMap) {
    writeln!(
        out,
        "{} duplicated lines out of {} total lines of code.",
        map.percentage_string().bold(),
        map.number_of_lines()
    )
    .ok();
    writeln!(
        out,
        "Average size of duplication is {} lines, largest clone has {} of lines",
        average_lines(map),
        map.largest_size()
    )
    .ok();
}

// Whole lines, truncated toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn average_lines(map: &CodeCloneMap) -> usize {
    map.average_size() as usize
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
