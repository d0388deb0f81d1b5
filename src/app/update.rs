// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every state change goes through [`update`]. Loads run as tasks and come
//! back as messages; a superseded load that resolves late still applies.

use super::storage::{LocalStorage, UI_LANGUAGE_KEY};
use super::Message;
use crate::config::SHUFFLE_FEEDBACK_MS;
use crate::deck::{Card, DeckState, LanguagePair};
use crate::error::Error;
use crate::feedback::{self, Difficulty, Feedback, KeyValueStore};
use crate::i18n::{Locale, LocaleTables, UiKey, UiLanguage};
use crate::loader::{self, DataSource};
use crate::ui::notifications::{self, Notification};
use chrono::Utc;
use iced::Task;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub locale: &'a mut Locale,
    pub deck: &'a mut DeckState,
    pub source: &'a DataSource,
    pub storage: &'a mut LocalStorage,
    pub notifications: &'a mut notifications::Manager,
    pub rating: &'a mut Option<Difficulty>,
    pub loading: &'a mut bool,
    pub shuffled_at: &'a mut Option<Instant>,
    pub selected_pair: &'a mut LanguagePair,
    pub rng: &'a mut StdRng,
    /// Set once the first word list has been requested.
    pub deck_requested: &'a mut bool,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::LocaleLoaded(tables) => handle_locale_loaded(ctx, tables),
        Message::WordListLoaded { pair, result } => {
            handle_word_list_loaded(ctx, pair, result);
            Task::none()
        }
        Message::CategorySelected(filter) => {
            ctx.deck.filter_by_category(filter);
            refresh_rating(ctx);
            Task::none()
        }
        Message::LanguagePairSelected(pair) => request_word_list(ctx, pair),
        Message::UiLanguageSelected(language) => handle_ui_language_selected(ctx, language),
        Message::Shuffle => {
            handle_shuffle(ctx, Instant::now());
            Task::none()
        }
        Message::Previous => {
            if ctx.deck.previous() {
                refresh_rating(ctx);
            }
            Task::none()
        }
        Message::Next => {
            if ctx.deck.next() {
                refresh_rating(ctx);
            }
            Task::none()
        }
        Message::Flip => {
            ctx.deck.flip();
            Task::none()
        }
        Message::Rate(difficulty) => {
            handle_rate(ctx, difficulty);
            Task::none()
        }
        Message::Notification(notification_message) => {
            ctx.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::Tick(now) => {
            handle_tick(ctx, now);
            Task::none()
        }
    }
}

/// Starts loading the locale tables for `language`.
pub fn request_locale(source: &DataSource, language: UiLanguage) -> Task<Message> {
    let source = source.clone();
    Task::perform(loader::load_locale(source, language), Message::LocaleLoaded)
}

/// Starts loading the word list for `pair`; the selector shows `pair` at once.
pub fn request_word_list(ctx: &mut UpdateContext<'_>, pair: LanguagePair) -> Task<Message> {
    *ctx.selected_pair = pair;
    *ctx.loading = true;
    *ctx.deck_requested = true;
    let source = ctx.source.clone();
    Task::perform(loader::load_word_list(source, pair), move |result| {
        Message::WordListLoaded { pair, result }
    })
}

fn handle_locale_loaded(ctx: &mut UpdateContext<'_>, tables: LocaleTables) -> Task<Message> {
    log::info!("Interface language is now {}", tables.language.tag());
    ctx.locale.replace_tables(tables);
    if *ctx.deck_requested {
        Task::none()
    } else {
        let pair = *ctx.selected_pair;
        request_word_list(ctx, pair)
    }
}

fn handle_word_list_loaded(
    ctx: &mut UpdateContext<'_>,
    pair: LanguagePair,
    result: Result<Vec<Card>, Error>,
) {
    *ctx.loading = false;
    match result {
        Ok(cards) => {
            ctx.notifications.clear_load_errors();
            ctx.deck.load(pair, cards);
            *ctx.selected_pair = pair;
            refresh_rating(ctx);
        }
        Err(err) => {
            log::error!("Error loading {}: {err}", pair.tag());
            ctx.notifications.push(Notification::error(err.ui_key()));
            // The previous deck stays, so the selector goes back to it.
            *ctx.selected_pair = ctx.deck.pair();
        }
    }
}

fn handle_ui_language_selected(ctx: &mut UpdateContext<'_>, language: UiLanguage) -> Task<Message> {
    ctx.storage.set(UI_LANGUAGE_KEY, language.tag().to_string());
    if let Some(key) = ctx.storage.save() {
        ctx.notifications.push(Notification::warning(key));
    }
    request_locale(ctx.source, language)
}

pub(super) fn handle_shuffle(ctx: &mut UpdateContext<'_>, now: Instant) {
    if ctx.deck.is_empty() {
        return;
    }
    ctx.deck.shuffle(&mut *ctx.rng);
    *ctx.shuffled_at = Some(now);
    refresh_rating(ctx);
}

fn handle_rate(ctx: &mut UpdateContext<'_>, difficulty: Difficulty) {
    let Some(card) = ctx.deck.current() else {
        return;
    };
    let record = Feedback::new(difficulty, card.word.clone(), Utc::now());
    let pair = ctx.deck.pair();
    let index = ctx.deck.index();

    if let Err(err) = feedback::rate(&mut *ctx.storage, pair, index, &record) {
        log::error!("Error recording rating: {err}");
        ctx.notifications
            .push(Notification::error(UiKey::ErrorsStorageWrite));
        return;
    }
    *ctx.rating = Some(difficulty);
    if let Some(key) = ctx.storage.save() {
        ctx.notifications.push(Notification::warning(key));
    }
}

pub(super) fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.notifications.tick_at(now);
    if let Some(at) = *ctx.shuffled_at {
        if now.saturating_duration_since(at) >= Duration::from_millis(SHUFFLE_FEEDBACK_MS) {
            *ctx.shuffled_at = None;
        }
    }
}

/// Re-reads the stored rating for the card now on screen.
fn refresh_rating(ctx: &mut UpdateContext<'_>) {
    *ctx.rating = if ctx.deck.is_empty() {
        None
    } else {
        feedback::load_rating(&*ctx.storage, ctx.deck.pair(), ctx.deck.index())
            .map(|record| record.difficulty)
    };
}
