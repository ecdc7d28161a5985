// src/reporting/pmd.rs
//! PMD-CPD XML log of the registry's entries.

use crate::clones::{CodeClone, CodeCloneMap};
use crate::error::{CopyDetectError, Result};
use crate::utils::normalize_path;
use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

/// Renders the registry as a `<pmd-cpd>` document.
#[must_use]
pub fn format_pmd(map: &CodeCloneMap) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<pmd-cpd>\n");
    for clone in map {
        // Writing into a String cannot fail.
        write_duplication(&mut out, clone).ok();
    }
    out.push_str("</pmd-cpd>\n");
    out
}

/// Writes the PMD-CPD log to `path`.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_pmd(map: &CodeCloneMap, path: &Path) -> Result<()> {
    fs::write(path, format_pmd(map)).map_err(|e| CopyDetectError::io(e, path))
}

fn write_duplication(out: &mut String, clone: &CodeClone) -> fmt::Result {
    writeln!(
        out,
        "  <duplication lines=\"{}\" tokens=\"{}\">",
        clone.number_of_lines(),
        clone.number_of_tokens()
    )?;
    for file in clone.files() {
        writeln!(
            out,
            "    <file path=\"{}\" line=\"{}\"/>",
            escape_attr(&normalize_path(file.name())),
            file.start_line()
        )?;
    }
    writeln!(
        out,
        "    <codefragment><![CDATA[{}]]></codefragment>",
        clone.fragment().replace("]]>", "]]]]><![CDATA[>")
    )?;
    out.push_str("  </duplication>\n");
    Ok(())
}

fn escape_attr(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clones::{CloneFile, CloneId};
    use tempfile::TempDir;

    fn sample() -> CodeCloneMap {
        let mut map = CodeCloneMap::new();
        map.add(
            CodeClone::new(
                CloneId::from("a"),
                vec![CloneFile::new("a&b.php", 4), CloneFile::new("c.php", 9)],
                5,
                72,
            )
            .with_fragment("if ($a[1]]>0) {}"),
        );
        map
    }

    #[test]
    fn test_document_shape() {
        let xml = format_pmd(&sample());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<pmd-cpd>\n"));
        assert!(xml.contains("<duplication lines=\"5\" tokens=\"72\">"));
        assert!(xml.contains("<file path=\"a&amp;b.php\" line=\"4\"/>"));
        assert!(xml.contains("<file path=\"c.php\" line=\"9\"/>"));
        assert!(xml.contains("<![CDATA[if ($a[1]]]]><![CDATA[>0) {}]]>"));
        assert!(xml.ends_with("</pmd-cpd>\n"));
    }

    #[test]
    fn test_empty_document() {
        let xml = format_pmd(&CodeCloneMap::new());
        assert!(!xml.contains("<duplication"));
        assert!(xml.contains("<pmd-cpd>\n</pmd-cpd>"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cpd.xml");
        write_pmd(&sample(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), format_pmd(&sample()));
    }
}
