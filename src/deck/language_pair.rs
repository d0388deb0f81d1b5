// SPDX-License-Identifier: MPL-2.0
//! Word lists available for study, one per language pair.

use crate::i18n::UiKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguagePair {
    /// English words with Portuguese translations.
    #[default]
    English,
    /// Indonesian words with Portuguese translations.
    Indonesian,
    PortugueseToEnglish,
    PortugueseToIndonesian,
}

impl LanguagePair {
    pub const ALL: [LanguagePair; 4] = [
        LanguagePair::English,
        LanguagePair::Indonesian,
        LanguagePair::PortugueseToEnglish,
        LanguagePair::PortugueseToIndonesian,
    ];

    /// Tag used on the command line, in `settings.toml` and in feedback keys.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LanguagePair::English => "english",
            LanguagePair::Indonesian => "indonesian",
            LanguagePair::PortugueseToEnglish => "portuguese-to-english",
            LanguagePair::PortugueseToIndonesian => "portuguese-to-indonesian",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pair| pair.tag() == tag.trim())
    }

    /// Word-list path relative to the data source root.
    #[must_use]
    pub const fn file_path(self) -> &'static str {
        match self {
            LanguagePair::English => "data/english.json",
            LanguagePair::Indonesian => "data/indonesian.json",
            LanguagePair::PortugueseToEnglish => "data/portuguese-to-english.json",
            LanguagePair::PortugueseToIndonesian => "data/portuguese-to-indonesian.json",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> UiKey {
        match self {
            LanguagePair::English => UiKey::LanguagesEnglishToPortuguese,
            LanguagePair::Indonesian => UiKey::LanguagesIndonesianToPortuguese,
            LanguagePair::PortugueseToEnglish => UiKey::LanguagesPortugueseToEnglish,
            LanguagePair::PortugueseToIndonesian => UiKey::LanguagesPortugueseToIndonesian,
        }
    }

    /// Flag of the language the words are written in.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            LanguagePair::English => "🇺🇸",
            LanguagePair::Indonesian => "🇮🇩",
            LanguagePair::PortugueseToEnglish | LanguagePair::PortugueseToIndonesian => "🇧🇷",
        }
    }
}
