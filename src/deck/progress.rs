// SPDX-License-Identifier: MPL-2.0
//! Study progress figures shown under the card.

use std::collections::BTreeSet;

/// Positions (into the loaded word list) of cards whose back has been shown.
///
/// Grows monotonically; only a new process starts from an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudySet {
    positions: BTreeSet<usize>,
}

impl StudySet {
    /// Records `position`; returns `true` if it was not studied before.
    pub fn insert(&mut self, position: usize) -> bool {
        self.positions.insert(position)
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Figures derived from the deck and the study set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    /// 1-based position of the current card, 0 for an empty deck.
    pub position: usize,
    pub deck_len: usize,
    /// Fill of the progress bar, 0.0 to 100.0.
    pub percent: f32,
    pub total_cards: usize,
    pub studied: usize,
    /// Share of the current deck that has been studied, rounded.
    pub category_percent: u32,
}

impl Progress {
    /// `studied_in_deck` counts studied cards that belong to the current deck.
    #[must_use]
    pub fn compute(
        index: usize,
        deck_len: usize,
        total_cards: usize,
        studied: usize,
        studied_in_deck: usize,
    ) -> Self {
        if deck_len == 0 {
            return Self {
                total_cards,
                studied,
                ..Self::default()
            };
        }
        let position = index + 1;
        Self {
            position,
            deck_len,
            percent: position as f32 / deck_len as f32 * 100.0,
            total_cards,
            studied,
            category_percent: percent_rounded(studied_in_deck, deck_len),
        }
    }

    /// "{position} / {deck_len}".
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.position, self.deck_len)
    }
}

fn percent_rounded(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
