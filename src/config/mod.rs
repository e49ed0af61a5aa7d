// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Theme persistence
//!
//! The stored theme mode is one of exactly `"light"` or `"dark"`. Absent or
//! unrecognized values fall back to `"light"` so a hand-edited file can never
//! leave the application without a usable theme.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Persisted theme preference ("light" or "dark").
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Root configuration structure mirroring `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Accepts unknown theme values by falling back to the default instead of
/// rejecting the whole file.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        "dark" => ThemeMode::Dark,
        "light" => ThemeMode::Light,
        _ => default_theme_mode(),
    })
}

/// Loads the configuration from the resolved config directory.
///
/// Returns the configuration together with an optional i18n warning key when
/// the file exists but could not be read or parsed. A missing file is not a
/// warning; it simply yields the defaults.
pub fn load(dir_override: Option<&Path>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(dir_override) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|err| Error::Config(err.to_string()))
}

/// Saves the configuration to the resolved config directory, creating the
/// directory if needed.
pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    let path = config_file_path(dir_override)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).map_err(|err| Error::Config(err.to_string()))?;
    fs::write(path, contents)?;
    Ok(())
}

fn config_file_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    paths::config_dir(dir_override).map(|dir| dir.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_defaults_to_light_theme() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let (config, warning) = load(Some(dir.path()));
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert!(warning.is_none());
    }

    #[test]
    fn dark_theme_round_trips() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unrecognized_theme_value_falls_back_to_light() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[general]\ntheme-mode = \"sepia\"\n").expect("Failed to write config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn malformed_file_yields_warning_and_defaults() {
        let dir = tempdir().expect("Failed to create temporary directory");
        fs::write(dir.path().join("settings.toml"), "general = not toml").unwrap();

        let (config, warning) = load(Some(dir.path()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
