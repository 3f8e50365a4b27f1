//! Application configuration
//!
//! Read from `config.ron` in the platform config directory, falling back
//! to `./config.ron` and then to built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::{RecordStore, StoreError, DEFAULT_LEDGER_FILE, DELIMITER};

/// Config file name
pub const CONFIG_FILE: &str = "config.ron";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backing file for the ledger, relative to the working directory
    pub ledger_file: PathBuf,
    /// Populate the table from the ledger file at startup
    pub load_on_start: bool,
    /// Choices for the Year selector, first is the default
    pub years: Vec<String>,
    /// Choices for the Color selector
    pub colors: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger_file: PathBuf::from(DEFAULT_LEDGER_FILE),
            load_on_start: true,
            years: ["2020", "2021", "2022", "2023", "2024"]
                .into_iter()
                .map(String::from)
                .collect(),
            colors: ["Black", "White", "Blue", "Red"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl AppConfig {
    /// Where the config file is looked up first
    pub fn config_path() -> PathBuf {
        use directories::ProjectDirs;

        if let Some(proj_dirs) = ProjectDirs::from("com", "mobileledger", "MobileLedger") {
            proj_dirs.config_dir().join(CONFIG_FILE)
        } else {
            PathBuf::from(CONFIG_FILE)
        }
    }

    /// Load from the first config file found, or use defaults
    pub fn load() -> Self {
        let candidates = [Self::config_path(), PathBuf::from(CONFIG_FILE)];

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from(path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Parse and validate RON text. Missing keys take their defaults.
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Selector lists must be non-empty and must not contain the delimiter
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (what, options) in [("years", &self.years), ("colors", &self.colors)] {
            if options.is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", what)));
            }
            if let Some(bad) = options
                .iter()
                .find(|o| o.trim().is_empty() || o.contains(DELIMITER))
            {
                return Err(ConfigError::Invalid(format!(
                    "{} option {:?} is blank or contains '{}'",
                    what, bad, DELIMITER
                )));
            }
        }
        Ok(())
    }

    /// Build the record store this config points at
    pub fn open_store(&self) -> Result<RecordStore, StoreError> {
        if self.load_on_start {
            RecordStore::open(&self.ledger_file)
        } else {
            Ok(RecordStore::new(&self.ledger_file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ledger_file, PathBuf::from("Mobile.txt"));
        assert_eq!(config.years.first().map(String::as_str), Some("2020"));
        assert_eq!(config.colors, vec!["Black", "White", "Blue", "Red"]);
        assert!(config.load_on_start);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_ron_str(r#"(ledger_file: "phones.txt", load_on_start: false)"#).unwrap();
        assert_eq!(config.ledger_file, PathBuf::from("phones.txt"));
        assert!(!config.load_on_start);
        assert_eq!(config.years, AppConfig::default().years);
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        assert!(matches!(
            AppConfig::from_ron_str("(ledger_file: 42"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_empty_and_delimited_options() {
        assert!(matches!(
            AppConfig::from_ron_str("(years: [])"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_ron_str(r#"(colors: ["Black", "Rose!Gold"])"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            AppConfig::load_from(&dir.path().join(CONFIG_FILE)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_open_store_honors_load_on_start() {
        let dir = TempDir::new().unwrap();
        let ledger = dir.path().join("Mobile.txt");
        fs::write(&ledger, "Bob!Pixel8!699!128GB!2024!Blue\n").unwrap();

        let mut config = AppConfig {
            ledger_file: ledger,
            ..AppConfig::default()
        };
        assert_eq!(config.open_store().unwrap().len(), 1);

        config.load_on_start = false;
        assert!(config.open_store().unwrap().is_empty());
    }
}
