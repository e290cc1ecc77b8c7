//! Configuration file loading for pgn-tool.
//!
//! Settings come from `pgn-tool.toml` in the current directory. Every field is
//! optional and a missing file yields the defaults.

use chess_pgn::StringifyOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Main tool configuration.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct ToolConfig {
    /// Opening catalog file. The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Which optional move fields `stringify` writes.
    #[serde(default)]
    pub stringify: StringifyOptions,
}

impl ToolConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(toml::from_str(&content)?)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("pgn-tool.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
catalog = "data/eco.pgn"

[stringify]
glyph_codes = false
annotations = true
variations = false
"#;

        let config: ToolConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("data/eco.pgn")));
        assert!(!config.stringify.glyph_codes);
        assert!(config.stringify.annotations);
        assert!(!config.stringify.variations);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: ToolConfig = toml::from_str("").unwrap();

        assert!(config.catalog.is_none());
        assert_eq!(config.stringify, StringifyOptions::default());
    }

    #[test]
    fn test_partial_stringify_table_keeps_defaults() {
        let toml_content = r#"
[stringify]
annotations = false
"#;

        let config: ToolConfig = toml::from_str(toml_content).unwrap();

        assert!(config.stringify.glyph_codes);
        assert!(!config.stringify.annotations);
        assert!(config.stringify.variations);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err: ConfigError = toml::from_str::<ToolConfig>("catalog = [")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "catalog = \"openings.txt\"").unwrap();

        let config = ToolConfig::load_from(file.path()).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("openings.txt")));
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ToolConfig::load_from(&dir.path().join("pgn-tool.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(ToolConfig::config_path(), PathBuf::from("pgn-tool.toml"));
    }
}
