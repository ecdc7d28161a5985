// src/detection/rabin_karp.rs
//! Exact clone detection with a rolling hash over line windows.
//!
//! Every window of `min_lines` consecutive normalized lines gets a
//! polynomial hash that is updated in O(1) as the window slides. The first
//! location of each hash is remembered; when a later window hashes the same,
//! the lines are compared to rule out collisions and the match is grown for
//! as long as both sites keep agreeing.

use super::source::SourceFile;
use super::Detector;
use crate::clones::{CloneFile, CloneId, CodeClone, CodeCloneMap};
use crate::tokens::Tokenizer;
use crate::utils::compute_sha256;
use std::collections::HashMap;
use tracing::debug;

const BASE: u64 = 1_000_003;

/// Window start: (file index, 0-based line).
type Site = (usize, usize);

#[derive(Debug, Clone)]
pub struct RabinKarp {
    min_lines: usize,
    min_tokens: usize,
}

impl RabinKarp {
    #[must_use]
    pub fn new(min_lines: usize, min_tokens: usize) -> Self {
        Self {
            min_lines: min_lines.max(1),
            min_tokens,
        }
    }

    fn confirms(&self, files: &[SourceFile], earlier: Site, later: Site) -> bool {
        let (ef, el) = earlier;
        let (lf, ll) = later;
        if ef == lf && el + self.min_lines > ll {
            return false;
        }
        let a = &files[ef].normalized()[el..el + self.min_lines];
        let b = &files[lf].normalized()[ll..ll + self.min_lines];
        a == b
    }

    /// Length of the confirmed match, grown past `min_lines`. A match
    /// inside one file never runs into its own second occurrence, and
    /// trailing blank lines are given back.
    fn extend(&self, files: &[SourceFile], earlier: Site, later: Site) -> usize {
        let (ef, el) = earlier;
        let (lf, ll) = later;
        let a = files[ef].normalized();
        let b = files[lf].normalized();

        let mut len = self.min_lines;
        while el + len < a.len()
            && ll + len < b.len()
            && a[el + len] == b[ll + len]
            && (ef != lf || el + len < ll)
        {
            len += 1;
        }
        while len > self.min_lines && a[el + len - 1].is_empty() {
            len -= 1;
        }
        len
    }

    fn build_clone(
        &self,
        files: &[SourceFile],
        earlier: Site,
        later: Site,
        len: usize,
    ) -> Option<CodeClone> {
        let source = &files[earlier.0];
        let fragment = source.raw_fragment(earlier.1, len);
        let tokens = Tokenizer::count(&fragment);
        if tokens < self.min_tokens {
            return None;
        }
        let id = CloneId::new(compute_sha256(&source.normalized_fragment(earlier.1, len)));
        let sites = vec![
            CloneFile::new(source.path(), earlier.1 + 1),
            CloneFile::new(files[later.0].path(), later.1 + 1),
        ];
        Some(CodeClone::new(id, sites, len, tokens).with_fragment(fragment))
    }
}

impl Detector for RabinKarp {
    fn name(&self) -> &'static str {
        super::RABIN_KARP
    }

    fn detect(&self, files: &[SourceFile], map: &mut CodeCloneMap) {
        let mut seen: HashMap<u64, Site> = HashMap::new();

        for (index, file) in files.iter().enumerate() {
            let windows = window_hashes(file.hashes(), self.min_lines);
            let mut line = 0;
            while line < windows.len() {
                if file.has_blank_edge(line, self.min_lines) {
                    line += 1;
                    continue;
                }
                let here = (index, line);
                match seen.get(&windows[line]).copied() {
                    Some(earlier) if self.confirms(files, earlier, here) => {
                        let len = self.extend(files, earlier, here);
                        if let Some(clone) = self.build_clone(files, earlier, here, len) {
                            debug!(
                                file = %file.path().display(),
                                line = line + 1,
                                lines = len,
                                "clone found"
                            );
                            map.add(clone);
                            line += len;
                            continue;
                        }
                        line += 1;
                    }
                    Some(_) => line += 1,
                    None => {
                        seen.insert(windows[line], here);
                        line += 1;
                    }
                }
            }
        }
    }
}

/// Rolling hashes of every `width`-line window; empty if the input is shorter.
fn window_hashes(lines: &[u64], width: usize) -> Vec<u64> {
    if width == 0 || lines.len() < width {
        return Vec::new();
    }

    let top = (1..width).fold(1u64, |acc, _| acc.wrapping_mul(BASE));
    let mut hash = lines[..width]
        .iter()
        .fold(0u64, |acc, &h| acc.wrapping_mul(BASE).wrapping_add(h));

    let mut out = Vec::with_capacity(lines.len() - width + 1);
    out.push(hash);
    for i in width..lines.len() {
        hash = hash
            .wrapping_sub(lines[i - width].wrapping_mul(top))
            .wrapping_mul(BASE)
            .wrapping_add(lines[i]);
        out.push(hash);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "function total($items) {\n    $sum = 0;\n    foreach ($items as $item) {\n        $sum += $item->price;\n    }\n    return $sum;\n}";

    fn detect(files: &[SourceFile], min_lines: usize) -> CodeCloneMap {
        let mut map = CodeCloneMap::new();
        RabinKarp::new(min_lines, 0).detect(files, &mut map);
        map
    }

    #[test]
    fn test_window_hashes_roll() {
        let lines = [3, 1, 4, 1, 5, 9, 2, 6];
        let rolled = window_hashes(&lines, 3);
        assert_eq!(rolled.len(), 6);
        for (i, h) in rolled.iter().enumerate() {
            let direct = window_hashes(&lines[i..i + 3], 3);
            assert_eq!(*h, direct[0]);
        }
        assert!(window_hashes(&lines, 9).is_empty());
    }

    #[test]
    fn test_detects_copy_across_files() {
        let a = SourceFile::from_content("a.php", &format!("<?php\n{BLOCK}\n"), false);
        let b = SourceFile::from_content("b.php", &format!("<?php\n// copy\n\n{BLOCK}\necho 1;\n"), false);
        let map = detect(&[a, b], 5);

        assert_eq!(map.count(), 1);
        let clone = &map.clones()[0];
        assert_eq!(clone.number_of_lines(), 7);
        let sites: Vec<_> = clone.files().iter().map(CloneFile::id).collect();
        assert_eq!(sites, vec!["a.php:2", "b.php:4"]);
        assert_eq!(map.number_of_duplicated_lines(), 7);
        assert!(clone.fragment().starts_with("function total"));
    }

    #[test]
    fn test_three_copies_merge_into_one_entry() {
        let files: Vec<_> = ["a.php", "b.php", "c.php"]
            .iter()
            .map(|name| SourceFile::from_content(*name, BLOCK, false))
            .collect();
        let map = detect(&files, 5);

        assert_eq!(map.count(), 1);
        assert_eq!(map.clones()[0].files().len(), 4);
        assert_eq!(map.number_of_duplicated_lines(), 14);
        assert_eq!(map.number_of_files_with_clones(), 3);
    }

    #[test]
    fn test_copy_within_one_file() {
        let content = format!("{BLOCK}\n\n{BLOCK}\n");
        let file = SourceFile::from_content("a.php", &content, false);
        let map = detect(&[file], 5);

        assert_eq!(map.count(), 1);
        let sites: Vec<_> = map.clones()[0].files().iter().map(CloneFile::id).collect();
        assert_eq!(sites, vec!["a.php:1", "a.php:9"]);
    }

    #[test]
    fn test_repeated_lines_do_not_overlap_themselves() {
        let content = "x();\n".repeat(8);
        let file = SourceFile::from_content("a.php", &content, false);
        let map = detect(&[file], 3);

        for clone in &map {
            let starts: Vec<_> = clone.files().iter().map(CloneFile::start_line).collect();
            assert!(starts[0] + clone.number_of_lines() <= starts[1]);
        }
    }

    #[test]
    fn test_short_fragments_are_ignored() {
        let a = SourceFile::from_content("a.php", "a();\nb();\nc();\n", false);
        let b = SourceFile::from_content("b.php", "a();\nb();\nc();\n", false);
        assert!(detect(&[a, b], 5).is_empty());
    }

    #[test]
    fn test_blank_windows_are_ignored() {
        let a = SourceFile::from_content("a.php", "\n\n\n\n\n\n", false);
        let b = SourceFile::from_content("b.php", "\n\n\n\n\n\n", false);
        assert!(detect(&[a, b], 3).is_empty());
    }

    #[test]
    fn test_blank_lines_do_not_reach_min_lines() {
        let body = "a1();\na2();\na3();\na4();";
        let a = SourceFile::from_content("a.php", &format!("x();\n\n{body}\n"), false);
        let b = SourceFile::from_content("b.php", &format!("y();\n\n{body}\n"), false);
        assert!(detect(&[a, b], 5).is_empty());
    }

    #[test]
    fn test_clone_starts_and_ends_on_code() {
        let body = "a1();\na2();\na3();\na4();\na5();";
        let a = SourceFile::from_content("a.php", &format!("x();\n\n{body}\n\n\nz();\n"), false);
        let b = SourceFile::from_content("b.php", &format!("y();\n\n{body}\n\n\nw();\n"), false);
        let map = detect(&[a, b], 5);

        assert_eq!(map.count(), 1);
        let clone = &map.clones()[0];
        assert_eq!(clone.number_of_lines(), 5);
        let sites: Vec<_> = clone.files().iter().map(CloneFile::id).collect();
        assert_eq!(sites, vec!["a.php:3", "b.php:3"]);
        assert_eq!(map.number_of_duplicated_lines(), 5);
        assert_eq!(map.largest_size(), 5);
    }

    #[test]
    fn test_fuzzy_matches_renamed_variables() {
        let renamed = BLOCK.replace("$sum", "$acc").replace("$items", "$rows");
        let exact = [
            SourceFile::from_content("a.php", BLOCK, false),
            SourceFile::from_content("b.php", &renamed, false),
        ];
        assert!(detect(&exact, 5).is_empty());

        let fuzzy = [
            SourceFile::from_content("a.php", BLOCK, true),
            SourceFile::from_content("b.php", &renamed, true),
        ];
        assert_eq!(detect(&fuzzy, 5).count(), 1);
    }

    #[test]
    fn test_token_threshold() {
        let files = [
            SourceFile::from_content("a.php", BLOCK, false),
            SourceFile::from_content("b.php", BLOCK, false),
        ];
        let mut map = CodeCloneMap::new();
        RabinKarp::new(5, 1_000_000).detect(&files, &mut map);
        assert!(map.is_empty());
    }
}
