// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Three independent locale tables exist per interface language:
//!
//! - interface strings (`translations/{lang}.json`, nested)
//! - per-word definitions (`data/definitions/{lang}.json`, flat)
//! - per-category names (`data/categories/{lang}.json`, flat)
//!
//! Lookups merge them at render time and fall back to the untranslated value
//! (or the key path, for interface strings) when an entry is missing.
//!
//! # Features
//!
//! - Interface language resolved from CLI, stored preference, config, or system settings
//! - Runtime language switching
//! - Typed keys ([`UiKey`]) checked against every loaded table

pub mod keys;
pub mod locale;
pub mod table;

pub use keys::UiKey;
pub use locale::{Locale, LocaleTables};
pub use table::{Fallback, FlatTable, UiStrings};

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Interface languages shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UiLanguage {
    #[default]
    Portuguese,
    English,
    Indonesian,
}

impl UiLanguage {
    pub const ALL: [UiLanguage; 3] = [
        UiLanguage::Portuguese,
        UiLanguage::English,
        UiLanguage::Indonesian,
    ];

    /// Short tag used in file names and in persisted storage.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            UiLanguage::Portuguese => "pt",
            UiLanguage::English => "en",
            UiLanguage::Indonesian => "id",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            UiLanguage::Portuguese => "Português",
            UiLanguage::English => "English",
            UiLanguage::Indonesian => "Bahasa Indonesia",
        }
    }

    /// Parses a BCP-47 tag, ignoring region and script (`pt-BR` -> Portuguese).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-");
        let lang: LanguageIdentifier = normalized.parse().ok()?;
        match lang.language.as_str() {
            "pt" => Some(UiLanguage::Portuguese),
            "en" => Some(UiLanguage::English),
            "id" | "in" => Some(UiLanguage::Indonesian),
            _ => None,
        }
    }
}

impl fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// Picks the interface language from the available sources, most specific first:
///
/// 1. CLI `--lang`
/// 2. `uiLanguage` from local storage
/// 3. `general.language` from `settings.toml`
/// 4. OS locale
///
/// Returns `None` when no source names a supported language.
pub fn resolve_locale(
    cli_lang: Option<&str>,
    stored: Option<&str>,
    configured: Option<&str>,
) -> Option<UiLanguage> {
    [cli_lang, stored, configured]
        .into_iter()
        .flatten()
        .find_map(UiLanguage::from_tag)
        .or_else(|| sys_locale::get_locale().as_deref().and_then(UiLanguage::from_tag))
}
