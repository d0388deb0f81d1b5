// SPDX-License-Identifier: MPL-2.0
//! Per-card difficulty ratings.
//!
//! A rating is stored under `feedback-{pair}-{index}` where `index` is the
//! card's position in the deck at the time it was rated. The value is a JSON
//! record `{"difficulty", "timestamp", "word"}`. The last write for a key
//! wins and records never expire.

use crate::deck::LanguagePair;
use crate::i18n::UiKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// String key-value storage the ratings are written to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn label_key(self) -> UiKey {
        match self {
            Difficulty::Easy => UiKey::FeedbackEasy,
            Difficulty::Medium => UiKey::FeedbackMedium,
            Difficulty::Hard => UiKey::FeedbackHard,
        }
    }
}

/// Stored rating record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub difficulty: Difficulty,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub word: String,
}

impl Feedback {
    #[must_use]
    pub fn new(difficulty: Difficulty, word: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            difficulty,
            timestamp: at.timestamp_millis(),
            word: word.into(),
        }
    }

    #[must_use]
    pub fn rated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

#[must_use]
pub fn feedback_key(pair: LanguagePair, index: usize) -> String {
    format!("feedback-{}-{index}", pair.tag())
}

/// Records `feedback` for the card at deck position `index`.
pub fn rate<S: KeyValueStore + ?Sized>(
    store: &mut S,
    pair: LanguagePair,
    index: usize,
    feedback: &Feedback,
) -> crate::error::Result<()> {
    let value = serde_json::to_string(feedback)?;
    store.set(&feedback_key(pair, index), value);
    Ok(())
}

/// Reads the rating stored for deck position `index`.
///
/// A record that does not parse counts as no rating.
pub fn load_rating<S: KeyValueStore + ?Sized>(
    store: &S,
    pair: LanguagePair,
    index: usize,
) -> Option<Feedback> {
    let key = feedback_key(pair, index);
    let raw = store.get(&key)?;
    match serde_json::from_str(raw) {
        Ok(feedback) => Some(feedback),
        Err(err) => {
            log::warn!("Ignoring malformed feedback record {key}: {err}");
            None
        }
    }
}
