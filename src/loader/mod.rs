// SPDX-License-Identifier: MPL-2.0
//! Loading word lists and locale tables from a [`DataSource`].
//!
//! All paths are relative to the source root and use the same layout as the
//! bundled `assets/` folder:
//!
//! ```text
//! data/{pair}.json               word list, one per language pair
//! translations/{lang}.json       nested interface strings
//! data/definitions/{lang}.json   word -> definition
//! data/categories/{lang}.json    category -> name
//! ```

pub mod assets;

use crate::deck::{parse_word_list, Card, LanguagePair};
use crate::error::{FetchError, Result};
use crate::i18n::{FlatTable, LocaleTables, UiLanguage, UiStrings};
use std::fmt;
use std::path::PathBuf;

/// Where word lists and locale tables are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Files compiled into the binary.
    #[default]
    Embedded,
    /// A directory laid out like `assets/`.
    Directory(PathBuf),
    /// An HTTP(S) base URL laid out like `assets/`.
    Remote(String),
}

impl DataSource {
    /// Interprets a `--source` / `data_source` value.
    ///
    /// `embedded` (or an empty string) selects the bundled files, anything
    /// starting with `http://` or `https://` is a remote base URL, and
    /// everything else is a directory.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("embedded") {
            DataSource::Embedded
        } else if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Remote(value.trim_end_matches('/').to_string())
        } else {
            DataSource::Directory(PathBuf::from(value))
        }
    }

    /// Reads the file at `relative`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] for a missing file (or HTTP 404),
    /// [`FetchError::Status`] for other non-success responses and
    /// [`FetchError::Transport`] / [`crate::error::Error::Io`] when the read
    /// itself fails.
    pub async fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        match self {
            DataSource::Embedded => assets::get(relative)
                .map(|bytes| bytes.into_owned())
                .ok_or_else(|| FetchError::NotFound(relative.to_string()).into()),
            DataSource::Directory(root) => Ok(tokio::fs::read(root.join(relative)).await?),
            DataSource::Remote(base) => {
                let url = format!("{base}/{relative}");
                let response = reqwest::get(&url).await?;
                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Err(FetchError::NotFound(url).into());
                }
                let bytes = response.error_for_status()?.bytes().await?;
                Ok(bytes.to_vec())
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Embedded => write!(f, "embedded"),
            DataSource::Directory(path) => write!(f, "{}", path.display()),
            DataSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

#[must_use]
pub fn translations_path(language: UiLanguage) -> String {
    format!("translations/{}.json", language.tag())
}

#[must_use]
pub fn definitions_path(language: UiLanguage) -> String {
    format!("data/definitions/{}.json", language.tag())
}

#[must_use]
pub fn categories_path(language: UiLanguage) -> String {
    format!("data/categories/{}.json", language.tag())
}

/// Fetches and parses the word list for `pair`.
///
/// # Errors
///
/// Returns the fetch error, or [`crate::error::Error::Parse`] if the file is
/// not a JSON array of cards.
pub async fn load_word_list(source: DataSource, pair: LanguagePair) -> Result<Vec<Card>> {
    let bytes = source.fetch(pair.file_path()).await?;
    let cards = parse_word_list(&bytes)?;
    log::info!("Loaded {} cards for {} from {source}", cards.len(), pair.tag());
    Ok(cards)
}

/// Fetches the three locale tables for `language`, one after the other.
///
/// Never fails: a table that cannot be fetched or parsed is logged and left
/// empty, so lookups fall back to untranslated values.
pub async fn load_locale(source: DataSource, language: UiLanguage) -> LocaleTables {
    let ui = match fetch_table(&source, &translations_path(language), UiStrings::from_json).await {
        Ok(ui) => {
            let missing = ui.missing_keys();
            if !missing.is_empty() {
                log::warn!(
                    "Translations for {} are missing {} keys",
                    language.tag(),
                    missing.len()
                );
            }
            ui
        }
        Err(err) => {
            log::error!("Error loading translations for {}: {err}", language.tag());
            UiStrings::default()
        }
    };

    let definitions =
        match fetch_table(&source, &definitions_path(language), FlatTable::from_json).await {
            Ok(table) => table,
            Err(err) => {
                log::error!("Error loading definitions for {}: {err}", language.tag());
                FlatTable::default()
            }
        };

    let categories =
        match fetch_table(&source, &categories_path(language), FlatTable::from_json).await {
            Ok(table) => table,
            Err(err) => {
                log::error!("Error loading categories for {}: {err}", language.tag());
                FlatTable::default()
            }
        };

    LocaleTables {
        language,
        ui,
        definitions,
        categories,
    }
}

async fn fetch_table<T>(
    source: &DataSource,
    relative: &str,
    parse: fn(&[u8]) -> Result<T>,
) -> Result<T> {
    let bytes = source.fetch(relative).await?;
    parse(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::i18n::UiKey;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &std::path::Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(path, contents).expect("write file");
    }

    #[test]
    fn parse_recognises_each_source_kind() {
        assert_eq!(DataSource::parse(""), DataSource::Embedded);
        assert_eq!(DataSource::parse("Embedded"), DataSource::Embedded);
        assert_eq!(
            DataSource::parse("https://example.org/deck/"),
            DataSource::Remote("https://example.org/deck".into())
        );
        assert_eq!(
            DataSource::parse("/srv/decks"),
            DataSource::Directory(PathBuf::from("/srv/decks"))
        );
    }

    #[tokio::test]
    async fn embedded_word_list_loads() {
        let cards = load_word_list(DataSource::Embedded, LanguagePair::English)
            .await
            .expect("bundled list");
        assert!(!cards.is_empty());
    }

    #[tokio::test]
    async fn directory_word_list_loads() {
        let dir = tempdir().expect("tempdir");
        write(
            dir.path(),
            "data/indonesian.json",
            r#"[{"word":"kucing","definition":"hewan","translation":"gato","category":"Hewan"}]"#,
        );

        let cards = load_word_list(
            DataSource::Directory(dir.path().to_path_buf()),
            LanguagePair::Indonesian,
        )
        .await
        .expect("list");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].word, "kucing");
    }

    #[tokio::test]
    async fn missing_word_list_is_not_found() {
        let dir = tempdir().expect("tempdir");
        let err = load_word_list(
            DataSource::Directory(dir.path().to_path_buf()),
            LanguagePair::English,
        )
        .await
        .expect_err("missing file");
        assert!(matches!(err, Error::Fetch(FetchError::NotFound(_))));
        assert_eq!(err.ui_key(), UiKey::ErrorsNotFound);
    }

    #[tokio::test]
    async fn malformed_word_list_is_parse_error() {
        let dir = tempdir().expect("tempdir");
        write(dir.path(), "data/english.json", "{ not json");
        let err = load_word_list(
            DataSource::Directory(dir.path().to_path_buf()),
            LanguagePair::English,
        )
        .await
        .expect_err("bad json");
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn locale_tables_degrade_independently() {
        let dir = tempdir().expect("tempdir");
        write(
            dir.path(),
            "translations/en.json",
            r#"{"interface":{"next":"Next"}}"#,
        );
        write(dir.path(), "data/categories/en.json", "[1, 2, 3]");

        let tables = load_locale(
            DataSource::Directory(dir.path().to_path_buf()),
            UiLanguage::English,
        )
        .await;

        assert_eq!(tables.language, UiLanguage::English);
        assert_eq!(tables.ui.get("interface.next"), Some("Next"));
        assert!(tables.definitions.is_empty());
        assert!(tables.categories.is_empty());
    }

    #[tokio::test]
    async fn embedded_locale_matches_sync_tables() {
        let tables = load_locale(DataSource::Embedded, UiLanguage::Indonesian).await;
        assert_eq!(tables, assets::locale_tables(UiLanguage::Indonesian));
    }
}
