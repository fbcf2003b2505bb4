// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file under the
//! platform config directory.
//!
//! A malformed file never aborts startup: `load` falls back to defaults and
//! reports a warning key the caller can surface as a notification.

pub mod defaults;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PixGrid";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// API key for the image search endpoint.
    pub api_key: Option<String>,
    /// Search endpoint override, mainly for self-hosted mirrors.
    pub endpoint: Option<String>,
    /// Results per page, clamped to the API's accepted range.
    pub per_page: Option<u8>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            api_key: None,
            endpoint: None,
            per_page: Some(defaults::DEFAULT_PER_PAGE),
            theme_mode: ThemeMode::System,
        }
    }
}

impl Config {
    /// Effective page size with range clamping applied.
    pub fn per_page(&self) -> u8 {
        self.per_page
            .unwrap_or(defaults::DEFAULT_PER_PAGE)
            .clamp(defaults::MIN_PER_PAGE, defaults::MAX_PER_PAGE)
    }

    /// Effective endpoint.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(defaults::DEFAULT_ENDPOINT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when the file is missing
/// or unreadable. The second element is a notification key describing why the
/// defaults were used, if anything went wrong.
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default settings");
            (Config::default(), Some("notification-config-load-error"))
        }
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            api_key: Some("abc123".to_string()),
            endpoint: Some("https://example.test/api/".to_string()),
            per_page: Some(24),
            theme_mode: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.api_key, config.api_key);
        assert_eq!(loaded.endpoint, config.endpoint);
        assert_eq!(loaded.per_page, config.per_page);
        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn per_page_is_clamped_to_api_range() {
        let mut config = Config::default();
        assert_eq!(config.per_page(), defaults::DEFAULT_PER_PAGE);

        config.per_page = Some(1);
        assert_eq!(config.per_page(), defaults::MIN_PER_PAGE);

        config.per_page = Some(255);
        assert_eq!(config.per_page(), defaults::MAX_PER_PAGE);
    }

    #[test]
    fn default_endpoint_is_used_when_unset() {
        let config = Config::default();
        assert_eq!(config.endpoint(), defaults::DEFAULT_ENDPOINT);
    }
}
