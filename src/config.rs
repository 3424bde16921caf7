use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        let mut config: AppConfig = if !config_path.exists() {
            Self::default()
        } else {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file at {:?}", config_path))?;
            Self::from_toml_str(&content)?
        };

        config.apply_env_overrides(std::env::var("ZONEMAP_LOG_LEVEL").ok());

        Ok(config)
    }

    /// Applies `ZONEMAP_LOG_LEVEL`; a value that is not a level name is ignored.
    pub fn apply_env_overrides(&mut self, log_level: Option<String>) {
        if let Some(level) = log_level
            && LevelFilter::from_str(level.trim()).is_ok()
        {
            self.log_level = Some(level);
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Log level to install, `warn` when nothing is configured.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        match &self.log_level {
            None => Ok(LevelFilter::Warn),
            Some(level) => LevelFilter::from_str(level.trim())
                .map_err(|_| anyhow::anyhow!("Invalid log_level {:?} in config file", level)),
        }
    }

    fn get_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "zonemap", "zonemap")
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        let config = AppConfig::from_toml_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);

        let config = AppConfig::from_toml_str("log_level = \"TRACE\"").unwrap();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn test_defaults_to_warn() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.log_level, None);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            log_level: Some("loud".to_string()),
        };
        let err = config.level_filter().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_malformed_file() {
        assert!(AppConfig::from_toml_str("log_level = ").is_err());
    }

    #[test]
    fn test_env_var_override() {
        let mut config = AppConfig::from_toml_str("log_level = \"info\"").unwrap();
        config.apply_env_overrides(Some("error".to_string()));
        assert_eq!(config.log_level.as_deref(), Some("error"));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Error);
    }

    #[test]
    fn test_invalid_env_var_is_ignored() {
        let mut config = AppConfig::from_toml_str("log_level = \"info\"").unwrap();
        config.apply_env_overrides(Some("bogus".to_string()));
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);

        let mut config = AppConfig::default();
        config.apply_env_overrides(Some("bogus".to_string()));
        assert_eq!(config.log_level, None);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_missing_env_var_keeps_file_value() {
        let mut config = AppConfig::from_toml_str("log_level = \"trace\"").unwrap();
        config.apply_env_overrides(None);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Trace);
    }
}
