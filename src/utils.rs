// src/utils.rs
use sha2::{Digest, Sha256};

/// Hex SHA-256 fingerprint of a fragment, used as the clone id.
/// CRLF and CR are read as LF first, so a fragment keeps its id across
/// line-ending styles.
#[must_use]
pub fn compute_sha256(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Path as text with `/` separators, for exclude matching and reports.
#[must_use]
pub fn normalize_path(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_ignores_line_endings() {
        assert_eq!(compute_sha256("a\r\nb"), compute_sha256("a\nb"));
        assert_eq!(compute_sha256("a\rb"), compute_sha256("a\nb"));
        assert_ne!(compute_sha256("a\nb"), compute_sha256("a\nc"));
        assert_eq!(compute_sha256("").len(), 64);
    }
}
