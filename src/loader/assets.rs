// SPDX-License-Identifier: MPL-2.0
//! Word lists and locale tables compiled into the binary.

use crate::i18n::{FlatTable, LocaleTables, UiLanguage, UiStrings};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

/// Bytes of a bundled file, addressed like a data-source path.
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(path).map(|file| file.data)
}

/// Locale tables for `language` built from the bundled files.
///
/// Used before any data source has answered, so the first frame is already
/// translated. A table that fails to parse is left empty.
pub(crate) fn locale_tables(language: UiLanguage) -> LocaleTables {
    let ui = get(&super::translations_path(language))
        .and_then(|bytes| UiStrings::from_json(&bytes).ok())
        .unwrap_or_default();
    let definitions = get(&super::definitions_path(language))
        .and_then(|bytes| FlatTable::from_json(&bytes).ok())
        .unwrap_or_default();
    let categories = get(&super::categories_path(language))
        .and_then(|bytes| FlatTable::from_json(&bytes).ok())
        .unwrap_or_default();

    LocaleTables {
        language,
        ui,
        definitions,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{parse_word_list, LanguagePair};

    #[test]
    fn every_pair_has_a_bundled_word_list() {
        for pair in LanguagePair::ALL {
            let bytes = get(pair.file_path()).expect("bundled word list");
            let cards = parse_word_list(&bytes).expect("valid word list");
            assert!(!cards.is_empty(), "{} is empty", pair.tag());
        }
    }

    #[test]
    fn every_language_has_bundled_tables() {
        for language in UiLanguage::ALL {
            let tables = locale_tables(language);
            assert!(!tables.ui.is_empty());
            assert!(!tables.definitions.is_empty());
            assert!(!tables.categories.is_empty());
        }
    }

    #[test]
    fn unknown_path_is_none() {
        assert!(get("data/klingon.json").is_none());
    }
}
