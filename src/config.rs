use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
default_model = "gemini-2.0-flash-exp"
api_key = "test-key"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gemini-2.0-flash-exp"));
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.default_model.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(r#"default_model = "gemini-1.5-pro""#).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gemini-1.5-pro"));
        assert!(config.api_key.is_none());
    }
}
