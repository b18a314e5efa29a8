//! Configuration for the color matcher
//!
//! The matcher has deliberately few knobs: where the learned confidence
//! table lives and how many colors to try per facelet before declaring a
//! scan error.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use facelet_match::MatcherConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = MatcherConfig::from_json_file(Path::new("matcher.json"))?;
//!
//! // Or use defaults
//! let config = MatcherConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::matcher::DEFAULT_ATTEMPTS;
use crate::table::DEFAULT_TABLE_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Matcher configuration.
///
/// Can be serialized to/from JSON for reproducible scan setups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Path to the learned confidence table
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,

    /// Maximum number of color options explored per facelet
    #[serde(default = "default_attempts")]
    pub n_attempts: u32,
}

fn default_table_path() -> PathBuf {
    PathBuf::from(DEFAULT_TABLE_PATH)
}

fn default_attempts() -> u32 {
    DEFAULT_ATTEMPTS
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            table_path: default_table_path(),
            n_attempts: default_attempts(),
        }
    }
}

impl MatcherConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatcherConfig::default();
        assert_eq!(config.table_path, PathBuf::from("scan.tbl"));
        assert_eq!(config.n_attempts, 3);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MatcherConfig {
            table_path: PathBuf::from("/data/tables/scan.tbl"),
            n_attempts: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MatcherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.table_path, config.table_path);
        assert_eq!(back.n_attempts, config.n_attempts);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join("facelet_match_config_test.json");
        let config = MatcherConfig {
            table_path: PathBuf::from("tables/night.tbl"),
            n_attempts: 4,
        };
        config.to_json_file(&path).unwrap();
        let back = MatcherConfig::from_json_file(&path).unwrap();
        assert_eq!(back.table_path, config.table_path);
        assert_eq!(back.n_attempts, config.n_attempts);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: MatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.table_path, PathBuf::from("scan.tbl"));
        assert_eq!(config.n_attempts, 3);
    }
}
