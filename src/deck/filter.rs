// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the loaded word list.

use super::Card;

/// Which cards of the loaded list make up the deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => card.category() == Some(name.as_str()),
        }
    }
}

/// Positions (into `cards`) of the cards matching `filter`, in list order.
#[must_use]
pub fn filter_positions(cards: &[Card], filter: &CategoryFilter) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| filter.matches(card))
        .map(|(pos, _)| pos)
        .collect()
}

/// Distinct non-empty categories, in order of first occurrence.
#[must_use]
pub fn categories(cards: &[Card]) -> Vec<&str> {
    let mut seen = Vec::new();
    for category in cards.iter().filter_map(Card::category) {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Icon shown next to a category name.
#[must_use]
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Pronomes" => "👤",
        "Adjetivos" => "🎨",
        "Verbos" => "⚡",
        "Substantivos" => "📦",
        "Advérbios" => "🔄",
        "Preposições" | "Relative Pronouns" => "🔗",
        "Conjunções" | "Reciprocal Pronouns" => "🤝",
        "Interjeições" => "❗",
        "Artigos" => "📄",
        "Numerais" => "🔢",
        "Possessive Adjectives" => "🏠",
        "Personal Pronouns" => "👥",
        "Demonstrative Pronouns" => "👉",
        "Interrogative Pronouns" => "❓",
        "Indefinite Pronouns" => "❔",
        "Reflexive Pronouns" => "🪞",
        "Intensive Pronouns" => "💪",
        "Distributive Pronouns" => "📊",
        _ => ALL_CATEGORIES_ICON,
    }
}

/// Icon for the "all categories" entry and for categories without their own.
pub const ALL_CATEGORIES_ICON: &str = "📚";
