// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the deck, the locale
//! and local storage.
//!
//! The `App` struct owns every piece of state and translates messages into
//! side effects like word-list loading or rating persistence.

mod message;
pub mod paths;
pub mod storage;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::deck::{DeckState, LanguagePair};
use crate::feedback::{Difficulty, KeyValueStore};
use crate::i18n::{self, Locale, UiKey};
use crate::loader::DataSource;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::{Duration, Instant};
use storage::{LocalStorage, UI_LANGUAGE_KEY};

/// Root Iced application state.
pub struct App {
    locale: Locale,
    deck: DeckState,
    source: DataSource,
    storage: LocalStorage,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Stored rating of the card on screen.
    rating: Option<Difficulty>,
    /// A word list is in flight.
    loading: bool,
    /// When the deck was last shuffled, while the confirmation shows.
    shuffled_at: Option<Instant>,
    /// Pair shown in the selector; follows the last requested load.
    selected_pair: LanguagePair,
    rng: StdRng,
    deck_requested: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.locale.language())
            .field("pair", &self.deck.pair())
            .field("deck_len", &self.deck.len())
            .field("index", &self.deck.index())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            deck: DeckState::default(),
            source: DataSource::default(),
            storage: LocalStorage::default(),
            notifications: notifications::Manager::default(),
            theme_mode: ThemeMode::default(),
            rating: None,
            loading: false,
            shuffled_at: None,
            selected_pair: LanguagePair::default(),
            rng: StdRng::from_os_rng(),
            deck_requested: false,
        }
    }
}

impl App {
    /// Reads config and storage, resolves the interface language and starts
    /// loading its tables. The word list follows once they arrive.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (storage, storage_warning) = LocalStorage::load();

        let language = i18n::resolve_locale(
            flags.lang.as_deref(),
            storage.get(UI_LANGUAGE_KEY),
            config.general.language.as_deref(),
        )
        .unwrap_or_default();

        let pair = match flags.pair.as_deref() {
            Some(tag) => LanguagePair::from_tag(tag).unwrap_or_else(|| {
                log::warn!("Unknown language pair '{tag}'");
                config.deck.language_pair
            }),
            None => config.deck.language_pair,
        };

        let source = flags
            .source
            .as_deref()
            .or(config.deck.data_source.as_deref())
            .map(DataSource::parse)
            .unwrap_or_default();
        log::info!(
            "Starting with interface {}, pair {}, data from {source}",
            language.tag(),
            pair.tag()
        );

        let error_timeout = Duration::from_secs(u64::from(config.notifications.error_timeout_secs()));
        let mut app = App {
            locale: Locale::embedded(language),
            deck: DeckState::new(pair, config.deck.boundary_policy),
            source,
            storage,
            notifications: notifications::Manager::new(error_timeout),
            theme_mode: config.general.theme_mode,
            selected_pair: pair,
            loading: true,
            ..Self::default()
        };

        for key in [config_warning, storage_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = update::request_locale(&app.source, language);
        (app, task)
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.locale.tr(UiKey::AppTitle),
            self.locale.tr(UiKey::AppSubtitle)
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.shuffled_at.is_some(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            locale: &mut self.locale,
            deck: &mut self.deck,
            source: &self.source,
            storage: &mut self.storage,
            notifications: &mut self.notifications,
            rating: &mut self.rating,
            loading: &mut self.loading,
            shuffled_at: &mut self.shuffled_at,
            selected_pair: &mut self.selected_pair,
            rng: &mut self.rng,
            deck_requested: &mut self.deck_requested,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            locale: &self.locale,
            deck: &self.deck,
            selected_pair: self.selected_pair,
            rating: self.rating,
            loading: self.loading,
            shuffled: self.shuffled_at.is_some(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{BoundaryPolicy, Card, CategoryFilter};
    use crate::error::{Error, FetchError};
    use crate::feedback::{feedback_key, load_rating};
    use crate::i18n::{LocaleTables, UiLanguage};
    use crate::ui::notifications::Severity;
    use tempfile::{tempdir, TempDir};

    fn card(word: &str, category: &str) -> Card {
        Card {
            word: word.into(),
            definition: format!("{word} definition"),
            translation: format!("{word} translation"),
            category: Some(category.into()),
        }
    }

    fn sample_cards() -> Vec<Card> {
        vec![
            card("run", "Verbos"),
            card("I", "Pronomes"),
            card("walk", "Verbos"),
            card("big", "Adjetivos"),
        ]
    }

    /// App with storage in a temp dir and a seeded RNG.
    fn test_app() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let (storage, warning) = LocalStorage::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        let app = App {
            storage,
            rng: StdRng::seed_from_u64(7),
            ..App::default()
        };
        (app, dir)
    }

    fn loaded_app(pair: LanguagePair, cards: Vec<Card>) -> (App, TempDir) {
        let (mut app, dir) = test_app();
        let _ = app.update(Message::WordListLoaded {
            pair,
            result: Ok(cards),
        });
        (app, dir)
    }

    #[test]
    fn first_locale_load_requests_the_word_list() {
        let (mut app, _dir) = test_app();
        app.selected_pair = LanguagePair::Indonesian;
        assert!(!app.deck_requested);

        let _ = app.update(Message::LocaleLoaded(LocaleTables {
            language: UiLanguage::English,
            ..LocaleTables::default()
        }));

        assert!(app.deck_requested);
        assert!(app.loading);
        assert_eq!(app.locale.language(), UiLanguage::English);
    }

    #[test]
    fn later_locale_loads_keep_the_deck() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        app.deck_requested = true;
        let _ = app.update(Message::Next);

        let _ = app.update(Message::LocaleLoaded(LocaleTables {
            language: UiLanguage::Indonesian,
            ..LocaleTables::default()
        }));

        assert!(!app.loading);
        assert_eq!(app.deck.index(), 1);
        assert_eq!(app.locale.language(), UiLanguage::Indonesian);
    }

    #[test]
    fn word_list_loaded_installs_deck() {
        let (app, _dir) = loaded_app(LanguagePair::PortugueseToEnglish, sample_cards());
        assert_eq!(app.deck.len(), 4);
        assert_eq!(app.deck.pair(), LanguagePair::PortugueseToEnglish);
        assert_eq!(app.selected_pair, LanguagePair::PortugueseToEnglish);
        assert!(!app.loading);
    }

    #[test]
    fn failed_load_keeps_previous_deck_and_shows_error() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        let _ = app.update(Message::LanguagePairSelected(LanguagePair::Indonesian));
        assert_eq!(app.selected_pair, LanguagePair::Indonesian);
        assert!(app.loading);

        let _ = app.update(Message::WordListLoaded {
            pair: LanguagePair::Indonesian,
            result: Err(Error::Fetch(FetchError::NotFound("data/indonesian.json".into()))),
        });

        assert_eq!(app.deck.len(), 4);
        assert_eq!(app.deck.pair(), LanguagePair::English);
        assert_eq!(app.selected_pair, LanguagePair::English);
        assert!(!app.loading);
        let toast = app.notifications.visible().next().expect("error toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.key(), UiKey::ErrorsNotFound);
    }

    #[test]
    fn successful_load_clears_earlier_load_errors() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::WordListLoaded {
            pair: LanguagePair::English,
            result: Err(Error::Parse("expected array".into())),
        });
        assert!(app.notifications.has_notifications());

        let _ = app.update(Message::WordListLoaded {
            pair: LanguagePair::English,
            result: Ok(sample_cards()),
        });
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn empty_word_list_disables_navigation() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, Vec::new());
        let nav = app.deck.navigation();
        assert!(!nav.has_next);
        assert!(!nav.has_previous);

        let _ = app.update(Message::Next);
        let _ = app.update(Message::Flip);
        let _ = app.update(Message::Shuffle);
        let _ = app.update(Message::Rate(Difficulty::Easy));

        assert!(!app.deck.is_flipped());
        assert!(app.shuffled_at.is_none());
        assert!(app.rating.is_none());
        assert!(app.storage.is_empty());
    }

    #[test]
    fn next_and_previous_move_through_the_deck() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        let _ = app.update(Message::Next);
        let _ = app.update(Message::Next);
        assert_eq!(app.deck.index(), 2);
        let _ = app.update(Message::Previous);
        assert_eq!(app.deck.index(), 1);
    }

    #[test]
    fn next_at_last_card_follows_boundary_policy() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        for _ in 0..10 {
            let _ = app.update(Message::Next);
        }
        assert_eq!(app.deck.index(), 3);

        app.deck.set_policy(BoundaryPolicy::Wrap);
        let _ = app.update(Message::Next);
        assert_eq!(app.deck.index(), 0);
    }

    #[test]
    fn category_selection_filters_and_resets_index() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        let _ = app.update(Message::Next);
        let _ = app.update(Message::CategorySelected(CategoryFilter::Category("Verbos".into())));
        assert_eq!(app.deck.len(), 2);
        assert_eq!(app.deck.index(), 0);
        assert!(app.deck.cards().all(|c| c.category() == Some("Verbos")));

        let _ = app.update(Message::CategorySelected(CategoryFilter::All));
        assert_eq!(app.deck.len(), 4);
    }

    #[test]
    fn flip_marks_card_studied() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        let _ = app.update(Message::Flip);
        assert!(app.deck.is_flipped());
        assert_eq!(app.deck.progress().studied, 1);

        let _ = app.update(Message::Next);
        assert!(!app.deck.is_flipped());
    }

    #[test]
    fn shuffle_keeps_cards_and_shows_confirmation_until_it_expires() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        let _ = app.update(Message::Next);

        let start = Instant::now();
        update::handle_shuffle(&mut app.update_context(), start);
        assert_eq!(app.deck.index(), 0);
        assert_eq!(app.shuffled_at, Some(start));

        let mut words: Vec<_> = app.deck.cards().map(|c| c.word.clone()).collect();
        words.sort();
        assert_eq!(words, vec!["I", "big", "run", "walk"]);

        update::handle_tick(&mut app.update_context(), start + Duration::from_millis(500));
        assert!(app.shuffled_at.is_some());
        update::handle_tick(
            &mut app.update_context(),
            start + Duration::from_millis(config::SHUFFLE_FEEDBACK_MS),
        );
        assert!(app.shuffled_at.is_none());
    }

    #[test]
    fn rating_is_persisted_and_reselected() {
        let (mut app, dir) = loaded_app(LanguagePair::PortugueseToEnglish, sample_cards());
        let _ = app.update(Message::Next);
        let _ = app.update(Message::Rate(Difficulty::Easy));
        assert_eq!(app.rating, Some(Difficulty::Easy));

        let stored = app
            .storage
            .get(&feedback_key(LanguagePair::PortugueseToEnglish, 1))
            .expect("stored record");
        assert!(stored.contains("\"easy\""));
        assert!(stored.contains("\"I\""));

        let _ = app.update(Message::Next);
        assert_eq!(app.rating, None);
        let _ = app.update(Message::Previous);
        assert_eq!(app.rating, Some(Difficulty::Easy));

        let (reloaded, warning) = LocalStorage::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        let record = load_rating(&reloaded, LanguagePair::PortugueseToEnglish, 1).expect("record");
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.word, "I");
    }

    #[test]
    fn later_rating_overwrites_earlier_one() {
        let (mut app, _dir) = loaded_app(LanguagePair::English, sample_cards());
        let _ = app.update(Message::Rate(Difficulty::Hard));
        let _ = app.update(Message::Rate(Difficulty::Medium));
        let record = load_rating(&app.storage, LanguagePair::English, 0).expect("record");
        assert_eq!(record.difficulty, Difficulty::Medium);
        assert_eq!(app.storage.len(), 1);
    }

    #[test]
    fn ui_language_change_is_stored() {
        let (mut app, dir) = test_app();
        let _ = app.update(Message::UiLanguageSelected(UiLanguage::Indonesian));
        assert_eq!(app.storage.get(UI_LANGUAGE_KEY), Some("id"));

        let (reloaded, _) = LocalStorage::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(reloaded.get(UI_LANGUAGE_KEY), Some("id"));
    }

    #[test]
    fn title_combines_app_title_and_subtitle() {
        let app = App {
            locale: Locale::embedded(UiLanguage::English),
            ..App::default()
        };
        assert_eq!(app.title(), "Flashdeck - Vocabulary flashcards");
    }

    #[test]
    fn notification_dismiss_removes_toast() {
        let (mut app, _dir) = test_app();
        app.notifications.push(Notification::warning(UiKey::ErrorsConfigLoad));
        let id = app.notifications.visible().next().expect("toast").id();
        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications.has_notifications());
    }
}
