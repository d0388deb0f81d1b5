// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::deck::{Card, CategoryFilter, LanguagePair};
use crate::error::Error;
use crate::feedback::Difficulty;
use crate::i18n::{LocaleTables, UiLanguage};
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The three locale tables finished loading.
    LocaleLoaded(LocaleTables),
    /// A word list finished loading (or failed).
    WordListLoaded {
        pair: LanguagePair,
        result: Result<Vec<Card>, Error>,
    },
    CategorySelected(CategoryFilter),
    LanguagePairSelected(LanguagePair),
    UiLanguageSelected(UiLanguage),
    Shuffle,
    Previous,
    Next,
    Flip,
    Rate(Difficulty),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Toast expiry and the shuffle confirmation
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional interface language override in BCP-47 form (e.g. `pt`, `en-US`).
    pub lang: Option<String>,
    /// Optional language pair tag (e.g. `portuguese-to-english`).
    pub pair: Option<String>,
    /// Optional data source: a directory or an `http(s)://` base URL.
    pub source: Option<String>,
    /// Optional data directory override (for local storage).
    /// Takes precedence over `FLASHDECK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLASHDECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
