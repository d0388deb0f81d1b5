// SPDX-License-Identifier: MPL-2.0
use serde::{Deserialize, Serialize};

/// One vocabulary entry as stored in a word-list file.
///
/// Cards carry no identifier; a card is identified by its position in the
/// list it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub word: String,
    pub definition: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Card {
    /// Category name, treating an empty string like an absent category.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Parses a word-list file: a JSON array of cards.
pub fn parse_word_list(bytes: &[u8]) -> crate::error::Result<Vec<Card>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cards_with_and_without_category() {
        let cards = parse_word_list(
            br#"[
                {"word":"cat","definition":"small feline","translation":"gato","category":"Animals"},
                {"word":"run","definition":"move fast","translation":"correr"}
            ]"#,
        )
        .expect("valid word list");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].category(), Some("Animals"));
        assert_eq!(cards[1].category(), None);
    }

    #[test]
    fn empty_category_counts_as_none() {
        let card = Card {
            word: "a".into(),
            definition: "b".into(),
            translation: "c".into(),
            category: Some(String::new()),
        };
        assert_eq!(card.category(), None);
    }

    #[test]
    fn empty_array_is_a_valid_word_list() {
        assert!(parse_word_list(b"[]").expect("valid").is_empty());
    }

    #[test]
    fn object_is_not_a_word_list() {
        assert!(parse_word_list(br#"{"word":"cat"}"#).is_err());
    }
}
