//! Configuration file support for Stride.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/stride/config.toml`.
//! The file is optional; every field has a default.

use crate::{Error, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Report output configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Find the config file at the standard path, if one exists
    ///
    /// Callers load it with `load_from` once logging is set up, so the
    /// choice of file can be logged.
    pub fn locate() -> Option<PathBuf> {
        Self::default_config_path().filter(|path| path.exists())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path, if a config directory is known
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("stride").join("config.toml"))
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        tracing::Level::from_str(&self.logging.level).map_err(|_| {
            Error::Config(format!("Unknown log level: {}", self.logging.level))
        })?;
        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "warn"); // default
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Csv;
        config.logging.level = "debug".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
