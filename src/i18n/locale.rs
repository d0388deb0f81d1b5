// SPDX-License-Identifier: MPL-2.0
//! The active locale: one interface language plus its three tables.

use super::{Fallback, FlatTable, UiKey, UiLanguage, UiStrings};
use crate::loader::assets;

/// The three tables for one interface language, as produced by the loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleTables {
    pub language: UiLanguage,
    pub ui: UiStrings,
    pub definitions: FlatTable,
    pub categories: FlatTable,
}

/// Locale used for every string the application renders.
#[derive(Debug, Clone)]
pub struct Locale {
    tables: LocaleTables,
    fallback: Fallback,
}

impl Default for Locale {
    fn default() -> Self {
        Self::embedded(UiLanguage::default())
    }
}

impl Locale {
    #[must_use]
    pub fn new(tables: LocaleTables) -> Self {
        Self {
            tables,
            fallback: Fallback::default(),
        }
    }

    /// Builds a locale from the tables compiled into the binary.
    ///
    /// A table that fails to parse is left empty.
    #[must_use]
    pub fn embedded(language: UiLanguage) -> Self {
        Self::new(assets::locale_tables(language))
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replaces the tables, e.g. after a language switch finished loading.
    pub fn replace_tables(&mut self, tables: LocaleTables) {
        self.tables = tables;
    }

    #[must_use]
    pub fn language(&self) -> UiLanguage {
        self.tables.language
    }

    #[must_use]
    pub fn tr(&self, key: UiKey) -> String {
        self.tables.ui.lookup(key, self.fallback)
    }

    /// Localized definition of `word`, or the definition shipped with the card.
    #[must_use]
    pub fn definition<'a>(&'a self, word: &str, original: &'a str) -> &'a str {
        self.tables.definitions.get_or(word, original)
    }

    /// Localized name of `category`, or the category itself.
    #[must_use]
    pub fn category<'a>(&'a self, category: &'a str) -> &'a str {
        self.tables.categories.get_or(category, category)
    }

    #[must_use]
    pub fn tables(&self) -> &LocaleTables {
        &self.tables
    }
}
