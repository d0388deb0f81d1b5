// SPDX-License-Identifier: MPL-2.0
//! Typed keys for every UI string the application renders.
//!
//! Translation files are nested JSON objects; a key's [`path`](UiKey::path)
//! is the dotted route from the root object to its string leaf.

/// A UI string known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiKey {
    AppTitle,
    AppSubtitle,

    InterfaceLanguage,
    InterfaceUiLanguage,
    InterfaceCategory,
    InterfaceAllCategories,
    InterfaceWords,
    InterfaceShuffle,
    InterfaceShuffled,
    InterfacePrevious,
    InterfaceNext,
    InterfaceFlip,
    InterfaceShowWordAgain,
    InterfaceLoading,

    CardDefinition,
    CardTranslation,

    FeedbackTitle,
    FeedbackEasy,
    FeedbackMedium,
    FeedbackHard,

    StatsTotalCards,
    StatsStudied,
    StatsCategoryProgress,

    LanguagesEnglishToPortuguese,
    LanguagesIndonesianToPortuguese,
    LanguagesPortugueseToEnglish,
    LanguagesPortugueseToIndonesian,

    ErrorsLoadFailed,
    ErrorsNotFound,
    ErrorsInvalidData,
    ErrorsNoCards,
    ErrorsConfigLoad,
    ErrorsStorageRead,
    ErrorsStorageWrite,
}

impl UiKey {
    pub const ALL: [UiKey; 34] = [
        UiKey::AppTitle,
        UiKey::AppSubtitle,
        UiKey::InterfaceLanguage,
        UiKey::InterfaceUiLanguage,
        UiKey::InterfaceCategory,
        UiKey::InterfaceAllCategories,
        UiKey::InterfaceWords,
        UiKey::InterfaceShuffle,
        UiKey::InterfaceShuffled,
        UiKey::InterfacePrevious,
        UiKey::InterfaceNext,
        UiKey::InterfaceFlip,
        UiKey::InterfaceShowWordAgain,
        UiKey::InterfaceLoading,
        UiKey::CardDefinition,
        UiKey::CardTranslation,
        UiKey::FeedbackTitle,
        UiKey::FeedbackEasy,
        UiKey::FeedbackMedium,
        UiKey::FeedbackHard,
        UiKey::StatsTotalCards,
        UiKey::StatsStudied,
        UiKey::StatsCategoryProgress,
        UiKey::LanguagesEnglishToPortuguese,
        UiKey::LanguagesIndonesianToPortuguese,
        UiKey::LanguagesPortugueseToEnglish,
        UiKey::LanguagesPortugueseToIndonesian,
        UiKey::ErrorsLoadFailed,
        UiKey::ErrorsNotFound,
        UiKey::ErrorsInvalidData,
        UiKey::ErrorsNoCards,
        UiKey::ErrorsConfigLoad,
        UiKey::ErrorsStorageRead,
        UiKey::ErrorsStorageWrite,
    ];

    /// Dotted path of this key inside a translation file.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            UiKey::AppTitle => "app.title",
            UiKey::AppSubtitle => "app.subtitle",
            UiKey::InterfaceLanguage => "interface.language",
            UiKey::InterfaceUiLanguage => "interface.uiLanguage",
            UiKey::InterfaceCategory => "interface.category",
            UiKey::InterfaceAllCategories => "interface.allCategories",
            UiKey::InterfaceWords => "interface.words",
            UiKey::InterfaceShuffle => "interface.shuffle",
            UiKey::InterfaceShuffled => "interface.shuffled",
            UiKey::InterfacePrevious => "interface.previous",
            UiKey::InterfaceNext => "interface.next",
            UiKey::InterfaceFlip => "interface.flip",
            UiKey::InterfaceShowWordAgain => "interface.showWordAgain",
            UiKey::InterfaceLoading => "interface.loading",
            UiKey::CardDefinition => "card.definition",
            UiKey::CardTranslation => "card.translation",
            UiKey::FeedbackTitle => "feedback.title",
            UiKey::FeedbackEasy => "feedback.easy",
            UiKey::FeedbackMedium => "feedback.medium",
            UiKey::FeedbackHard => "feedback.hard",
            UiKey::StatsTotalCards => "stats.totalCards",
            UiKey::StatsStudied => "stats.studied",
            UiKey::StatsCategoryProgress => "stats.categoryProgress",
            UiKey::LanguagesEnglishToPortuguese => "languages.englishToPortuguese",
            UiKey::LanguagesIndonesianToPortuguese => "languages.indonesianToPortuguese",
            UiKey::LanguagesPortugueseToEnglish => "languages.portugueseToEnglish",
            UiKey::LanguagesPortugueseToIndonesian => "languages.portugueseToIndonesian",
            UiKey::ErrorsLoadFailed => "errors.loadFailed",
            UiKey::ErrorsNotFound => "errors.notFound",
            UiKey::ErrorsInvalidData => "errors.invalidData",
            UiKey::ErrorsNoCards => "errors.noCards",
            UiKey::ErrorsConfigLoad => "errors.configLoad",
            UiKey::ErrorsStorageRead => "errors.storageRead",
            UiKey::ErrorsStorageWrite => "errors.storageWrite",
        }
    }
}
