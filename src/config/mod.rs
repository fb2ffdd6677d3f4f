pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig, StorageConfig, UiConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptdeck")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.storage.persist);
        assert!(config.logging.enabled);
        assert_eq!(config.ui.max_history, 1000);
        assert_eq!(config.ui.timestamp_format, "%H:%M");
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            persist = false
            data_dir = "/tmp/deck"

            [ui]
            max_history = 50
            "#,
        )
        .unwrap();
        assert!(!config.storage.persist);
        assert_eq!(config.storage.history_dir(), PathBuf::from("/tmp/deck"));
        assert_eq!(config.ui.max_history, 50);
        assert_eq!(config.ui.timestamp_format, "%H:%M");
    }
}
