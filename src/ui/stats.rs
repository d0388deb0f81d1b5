// SPDX-License-Identifier: MPL-2.0
//! Position indicator, progress bar and study statistics.

use crate::app::Message;
use crate::deck::{category_icon, filter::ALL_CATEGORIES_ICON, CategoryFilter, DeckState};
use crate::i18n::{Locale, UiKey};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{progress_bar, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub locale: &'a Locale,
    pub deck: &'a DeckState,
}

/// Icon, category name and deck size, e.g. "⚡ Verbs (12 words)".
/// `None` while the deck is empty.
#[must_use]
pub fn category_info(deck: &DeckState, locale: &Locale) -> Option<String> {
    if deck.is_empty() {
        return None;
    }
    let (icon, name) = match deck.filter() {
        CategoryFilter::All => (
            ALL_CATEGORIES_ICON,
            locale.tr(UiKey::InterfaceAllCategories),
        ),
        CategoryFilter::Category(name) => {
            (category_icon(name), locale.category(name).to_string())
        }
    };
    Some(format!(
        "{icon} {name} ({} {})",
        deck.len(),
        locale.tr(UiKey::InterfaceWords)
    ))
}

pub fn category_line<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    category_info(ctx.deck, ctx.locale)
        .map(|info| Text::new(info).size(typography::BODY).into())
}

/// "p / n" above a progress bar.
pub fn progress<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let progress = ctx.deck.progress();
    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(progress.position_label()).size(typography::CAPTION))
        .push(
            Container::new(
                progress_bar(0.0..=100.0, progress.percent).girth(sizing::PROGRESS_BAR_HEIGHT),
            )
            .width(Length::Fixed(sizing::CARD_WIDTH)),
        )
        .into()
}

/// Total cards, studied cards and the studied share of the current deck.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let progress = ctx.deck.progress();
    let row = Row::new()
        .spacing(spacing::XL)
        .push(stat(
            ctx.locale.tr(UiKey::StatsTotalCards),
            progress.total_cards.to_string(),
        ))
        .push(stat(
            ctx.locale.tr(UiKey::StatsStudied),
            progress.studied.to_string(),
        ))
        .push(stat(
            ctx.locale.tr(UiKey::StatsCategoryProgress),
            format!("{}%", progress.category_percent),
        ));

    Container::new(row)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::panel)
        .into()
}

fn stat<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(value).size(typography::TITLE_SM))
        .push(Text::new(label).size(typography::CAPTION))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{BoundaryPolicy, Card, LanguagePair};
    use crate::i18n::UiLanguage;

    fn deck() -> DeckState {
        let card = |word: &str, category: &str| Card {
            word: word.into(),
            definition: String::new(),
            translation: String::new(),
            category: Some(category.into()),
        };
        let mut deck = DeckState::new(LanguagePair::English, BoundaryPolicy::Clamp);
        deck.load(
            LanguagePair::English,
            vec![card("run", "Verbos"), card("I", "Pronomes"), card("go", "Verbos")],
        );
        deck
    }

    #[test]
    fn info_for_all_categories_counts_whole_list() {
        let locale = Locale::embedded(UiLanguage::English);
        assert_eq!(
            category_info(&deck(), &locale).as_deref(),
            Some("📚 All categories (3 words)")
        );
    }

    #[test]
    fn info_for_category_uses_localized_name() {
        let locale = Locale::embedded(UiLanguage::English);
        let mut deck = deck();
        deck.filter_by_category(CategoryFilter::Category("Verbos".into()));
        let info = category_info(&deck, &locale).expect("deck has cards");
        assert!(info.starts_with("⚡ "));
        assert!(info.ends_with("(2 words)"));
        assert_eq!(info, format!("⚡ {} (2 words)", locale.category("Verbos")));
    }

    #[test]
    fn info_is_hidden_for_empty_deck() {
        let locale = Locale::embedded(UiLanguage::English);
        let empty = DeckState::new(LanguagePair::English, BoundaryPolicy::Clamp);
        assert_eq!(category_info(&empty, &locale), None);

        let mut filtered = deck();
        filtered.load(LanguagePair::English, Vec::new());
        assert_eq!(category_info(&filtered, &locale), None);
    }
}
