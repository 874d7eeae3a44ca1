//! Front-end settings loaded from `monster.toml`

use monster_core::config::{load_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "monster.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Seed for a reproducible session, entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Fallback filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            enabled: default_enabled(),
            directory: default_directory(),
            file_name: default_file_name(),
            level: default_level(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
fn default_directory() -> PathBuf {
    std::env::temp_dir().join("monster")
}
fn default_file_name() -> String {
    "monster.log".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load from `path`, or from `monster.toml` if it exists, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings: Settings = match path {
            Some(path) => load_toml(path)?,
            None => {
                let default_path = Path::new(DEFAULT_SETTINGS_FILE);
                if default_path.exists() {
                    load_toml(default_path)?
                } else {
                    Settings::default()
                }
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.logging.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_core::config::parse_toml;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.seed.is_none());
        assert!(settings.logging.enabled);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_settings() {
        let toml = r#"
seed = 1234

[logging]
enabled = false
directory = "/tmp/monster-logs"
level = "debug"
"#;

        let settings: Settings = parse_toml(toml).unwrap();
        assert_eq!(settings.seed, Some(1234));
        assert!(!settings.logging.enabled);
        assert_eq!(settings.logging.directory, PathBuf::from("/tmp/monster-logs"));
        // Unset keys keep their defaults
        assert_eq!(settings.logging.file_name, "monster.log");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings: Settings = parse_toml("").unwrap();
        assert!(settings.seed.is_none());
        assert!(settings.logging.enabled);
    }

    #[test]
    fn test_rejects_unknown_level() {
        let settings: Settings = parse_toml("[logging]\nlevel = \"loud\"").unwrap();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("no/such/monster.toml")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
