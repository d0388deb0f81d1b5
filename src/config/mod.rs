// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language and theme mode
//! - `[deck]` - Language pair, boundary policy and data source
//! - `[notifications]` - Error toast timeout
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `FLASHDECK_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use flashdeck::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("id".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::deck::{BoundaryPolicy, LanguagePair};
use crate::error::{Error, Result};
use crate::i18n::UiKey;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Interface language tag (e.g. "pt", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// What is studied and how the deck behaves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeckConfig {
    #[serde(default)]
    pub language_pair: LanguagePair,

    #[serde(default)]
    pub boundary_policy: BoundaryPolicy,

    /// `embedded`, a directory, or an http(s) base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(
        default = "default_error_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_timeout_secs: Option<u32>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            error_timeout_secs: default_error_timeout_secs(),
        }
    }
}

impl NotificationsConfig {
    /// Configured timeout, clamped to the supported range.
    #[must_use]
    pub fn error_timeout_secs(&self) -> u32 {
        self.error_timeout_secs
            .unwrap_or(DEFAULT_ERROR_TIMEOUT_SECS)
            .clamp(MIN_ERROR_TIMEOUT_SECS, MAX_ERROR_TIMEOUT_SECS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub deck: DeckConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_error_timeout_secs() -> Option<u32> {
    Some(DEFAULT_ERROR_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). An unreadable or invalid
/// file yields the default config plus a warning to show the user.
pub fn load() -> (Config, Option<UiKey>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<UiKey>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring {}: {err}", path.display());
                    return (Config::default(), Some(UiKey::ErrorsConfigLoad));
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
