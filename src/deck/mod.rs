// SPDX-License-Identifier: MPL-2.0
//! Deck state: the loaded word list, the filtered deck, the current position
//! and what has been studied.
//!
//! [`DeckState`] owns all of it. The operations it exposes are thin wrappers
//! over the pure functions in the submodules, which operate on slices and
//! can be tested in isolation.

pub mod card;
pub mod filter;
pub mod language_pair;
pub mod navigation;
pub mod progress;
pub mod shuffle;

pub use card::{parse_word_list, Card};
pub use filter::{categories, category_icon, filter_positions, CategoryFilter};
pub use language_pair::LanguagePair;
pub use navigation::{BoundaryPolicy, NavigationInfo};
pub use progress::{Progress, StudySet};

use rand::Rng;
use std::collections::HashMap;

/// Everything the presenter needs to know about the deck.
#[derive(Debug, Clone, Default)]
pub struct DeckState {
    pair: LanguagePair,
    /// The full list as loaded for `pair`.
    cards: Vec<Card>,
    /// Positions into `cards`, in display order.
    deck: Vec<usize>,
    index: usize,
    filter: CategoryFilter,
    flipped: bool,
    policy: BoundaryPolicy,
    /// Studied positions, kept per pair so switching back keeps them.
    studied: HashMap<LanguagePair, StudySet>,
}

impl DeckState {
    #[must_use]
    pub fn new(pair: LanguagePair, policy: BoundaryPolicy) -> Self {
        Self {
            pair,
            policy,
            ..Self::default()
        }
    }

    /// Installs a freshly loaded word list.
    ///
    /// The category filter survives if the new list still has that category;
    /// otherwise it falls back to [`CategoryFilter::All`].
    pub fn load(&mut self, pair: LanguagePair, cards: Vec<Card>) {
        self.pair = pair;
        self.cards = cards;
        if let CategoryFilter::Category(name) = &self.filter {
            if !self.cards.iter().any(|c| c.category() == Some(name.as_str())) {
                self.filter = CategoryFilter::All;
            }
        }
        self.rebuild();
    }

    /// Recomputes the deck for `filter` in list order.
    pub fn filter_by_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.rebuild();
    }

    /// Permutes the current deck and returns to its first card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle::shuffle(&mut self.deck, rng);
        self.show(0);
    }

    /// Moves forward; returns `false` if the position did not change.
    pub fn next(&mut self) -> bool {
        match navigation::next_index(self.index, self.deck.len(), self.policy) {
            Some(index) => {
                self.show(index);
                true
            }
            None => false,
        }
    }

    /// Moves backward; returns `false` if the position did not change.
    pub fn previous(&mut self) -> bool {
        match navigation::previous_index(self.index, self.deck.len(), self.policy) {
            Some(index) => {
                self.show(index);
                true
            }
            None => false,
        }
    }

    /// Turns the current card over. Showing the back marks it studied.
    ///
    /// Returns the new flip state; an empty deck never flips.
    pub fn flip(&mut self) -> bool {
        let Some(position) = self.current_position() else {
            return false;
        };
        self.flipped = !self.flipped;
        if self.flipped {
            self.studied.entry(self.pair).or_default().insert(position);
        }
        self.flipped
    }

    pub fn set_policy(&mut self, policy: BoundaryPolicy) {
        self.policy = policy;
    }

    #[must_use]
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    #[must_use]
    pub fn pair(&self) -> LanguagePair {
        self.pair
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Position within the deck.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Size of the loaded list, regardless of the filter.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Position of the current card in the loaded list.
    #[must_use]
    pub fn current_position(&self) -> Option<usize> {
        self.deck.get(self.index).copied()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.current_position().and_then(|pos| self.cards.get(pos))
    }

    /// Cards of the deck in display order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.deck.iter().filter_map(|&pos| self.cards.get(pos))
    }

    /// Category options for the loaded list.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        categories(&self.cards)
    }

    #[must_use]
    pub fn studied(&self) -> Option<&StudySet> {
        self.studied.get(&self.pair)
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationInfo {
        NavigationInfo::new(self.index, self.deck.len(), self.policy)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        let studied = self.studied();
        let studied_count = studied.map_or(0, StudySet::len);
        let studied_in_deck = studied.map_or(0, |set| {
            self.deck.iter().filter(|&&pos| set.contains(pos)).count()
        });
        Progress::compute(
            self.index,
            self.deck.len(),
            self.cards.len(),
            studied_count,
            studied_in_deck,
        )
    }

    fn rebuild(&mut self) {
        self.deck = filter_positions(&self.cards, &self.filter);
        self.show(0);
    }

    fn show(&mut self, index: usize) {
        self.index = index;
        self.flipped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(word: &str, category: &str) -> Card {
        Card {
            word: word.to_string(),
            definition: format!("definition of {word}"),
            translation: format!("tradução de {word}"),
            category: Some(category.to_string()),
        }
    }

    fn loaded(policy: BoundaryPolicy) -> DeckState {
        let mut deck = DeckState::new(LanguagePair::English, policy);
        deck.load(
            LanguagePair::English,
            vec![
                card("red", "Colors"),
                card("dog", "Animals"),
                card("blue", "Colors"),
                card("cat", "Animals"),
                card("green", "Colors"),
            ],
        );
        deck
    }

    #[test]
    fn new_deck_is_empty_and_disabled() {
        let deck = DeckState::new(LanguagePair::English, BoundaryPolicy::Clamp);
        assert!(deck.is_empty());
        assert!(deck.current().is_none());
        let nav = deck.navigation();
        assert!(!nav.has_next && !nav.has_previous);
    }

    #[test]
    fn loading_zero_cards_keeps_navigation_disabled() {
        let mut deck = DeckState::new(LanguagePair::English, BoundaryPolicy::Wrap);
        deck.load(LanguagePair::Indonesian, Vec::new());
        assert!(deck.is_empty());
        assert!(!deck.next());
        assert!(!deck.previous());
        assert!(!deck.flip());
        assert_eq!(deck.progress().position_label(), "0 / 0");
    }

    #[test]
    fn next_at_last_is_noop_when_clamped() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        while deck.next() {}
        assert_eq!(deck.index(), 4);
        assert!(!deck.next());
        assert_eq!(deck.index(), 4);
        assert!(!deck.navigation().has_next);
    }

    #[test]
    fn next_at_last_wraps_to_first() {
        let mut deck = loaded(BoundaryPolicy::Wrap);
        for _ in 0..4 {
            assert!(deck.next());
        }
        assert!(deck.next());
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn previous_at_first_is_noop_when_clamped() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        assert!(!deck.previous());
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn filter_keeps_only_category_and_all_restores() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        deck.next();
        deck.filter_by_category(CategoryFilter::Category("Animals".into()));
        assert_eq!(deck.index(), 0);
        let words: Vec<_> = deck.cards().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["dog", "cat"]);

        deck.filter_by_category(CategoryFilter::All);
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.current().map(|c| c.word.as_str()), Some("red"));
    }

    #[test]
    fn shuffle_permutes_current_deck_and_resets_index() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        deck.filter_by_category(CategoryFilter::Category("Colors".into()));
        deck.next();
        let mut before: Vec<_> = deck.cards().cloned().collect();

        deck.shuffle(&mut StdRng::seed_from_u64(99));

        let mut after: Vec<_> = deck.cards().cloned().collect();
        assert_eq!(deck.index(), 0);
        assert_eq!(after.len(), before.len());
        before.sort_by(|a, b| a.word.cmp(&b.word));
        after.sort_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(before, after);
    }

    #[test]
    fn flip_marks_studied_and_navigation_unflips() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        assert!(deck.flip());
        assert!(deck.is_flipped());
        assert_eq!(deck.progress().studied, 1);

        assert!(!deck.flip());
        assert_eq!(deck.progress().studied, 1);

        deck.flip();
        deck.next();
        assert!(!deck.is_flipped());
    }

    #[test]
    fn category_progress_counts_studied_cards_in_deck() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        // Study "red" and "dog".
        deck.flip();
        deck.next();
        deck.flip();

        deck.filter_by_category(CategoryFilter::Category("Colors".into()));
        let progress = deck.progress();
        assert_eq!(progress.studied, 2);
        assert_eq!(progress.total_cards, 5);
        assert_eq!(progress.deck_len, 3);
        assert_eq!(progress.category_percent, 33);
    }

    #[test]
    fn study_set_is_kept_per_pair() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        deck.flip();
        deck.load(LanguagePair::Indonesian, vec![card("merah", "Warna")]);
        assert_eq!(deck.progress().studied, 0);

        deck.load(LanguagePair::English, vec![card("red", "Colors")]);
        assert_eq!(deck.progress().studied, 1);
    }

    #[test]
    fn reload_keeps_filter_only_if_category_still_exists() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        deck.filter_by_category(CategoryFilter::Category("Animals".into()));

        deck.load(LanguagePair::English, vec![card("cow", "Animals"), card("sky", "Nature")]);
        assert_eq!(deck.filter(), &CategoryFilter::Category("Animals".into()));
        assert_eq!(deck.len(), 1);

        deck.load(LanguagePair::Indonesian, vec![card("langit", "Alam")]);
        assert_eq!(deck.filter(), &CategoryFilter::All);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn categories_come_from_full_list() {
        let mut deck = loaded(BoundaryPolicy::Clamp);
        deck.filter_by_category(CategoryFilter::Category("Animals".into()));
        assert_eq!(deck.categories(), vec!["Colors", "Animals"]);
    }
}
