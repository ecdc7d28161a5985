// src/config/io.rs
use super::types::ConfigFile;
use crate::error::ConfigError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "copydetect.toml";

/// Loads `copydetect.toml` from `dir`. A missing file yields the defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_config_file(dir: &Path) -> Result<ConfigFile, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    match fs::read_to_string(&path) {
        Ok(content) => parse_toml(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::new(format!(
            "Cannot read {}: {e}",
            path.display()
        ))),
    }
}

/// Parses the contents of a `copydetect.toml`.
///
/// # Errors
/// Returns error on invalid TOML or mistyped values.
pub fn parse_toml(content: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::new(format!("Invalid {CONFIG_FILE_NAME}: {}", e.message())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let file = load_config_file(dir.path()).unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn test_parse_sections() {
        let file = parse_toml(
            r#"
            [scan]
            suffixes = [".inc"]
            exclude = ["vendor"]

            [detection]
            min_lines = 8
            max_percentage = 12.5
            fuzzy = true
            "#,
        )
        .unwrap();
        assert_eq!(file.scan.suffixes, vec![".inc"]);
        assert_eq!(file.scan.exclude, vec!["vendor"]);
        assert_eq!(file.detection.min_lines, Some(8));
        assert_eq!(file.detection.min_tokens, None);
        assert_eq!(file.detection.max_percentage, Some(12.5));
        assert_eq!(file.detection.fuzzy, Some(true));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = parse_toml("[detection]\nalgorithm = \"rabin-karp\"\n").unwrap();
        assert!(file.scan.suffixes.is_empty());
        assert_eq!(file.detection.algorithm.as_deref(), Some("rabin-karp"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let err = parse_toml("[detection]\nmin_lines = \"five\"\n").unwrap_err();
        assert!(err.message().starts_with("Invalid copydetect.toml"));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[scan]\nsuffixes = [\".phtml\"]\n").unwrap();
        let file = load_config_file(dir.path()).unwrap();
        assert_eq!(file.scan.suffixes, vec![".phtml"]);
    }
}
