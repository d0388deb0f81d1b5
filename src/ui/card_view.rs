// SPDX-License-Identifier: MPL-2.0
//! The flashcard itself: word on the front, definition and translation on
//! the back. Clicking anywhere on the card flips it.

use crate::app::Message;
use crate::deck::{category_icon, DeckState};
use crate::i18n::{Locale, UiKey};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub locale: &'a Locale,
    pub deck: &'a DeckState,
    pub loading: bool,
}

/// Localized text for the current card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPresentation<'a> {
    pub word: &'a str,
    pub definition: &'a str,
    pub translation: &'a str,
    /// Icon and localized name of the card's category.
    pub category: Option<(&'static str, &'a str)>,
    pub flipped: bool,
}

impl<'a> CardPresentation<'a> {
    /// `None` when the deck is empty.
    #[must_use]
    pub fn new(deck: &'a DeckState, locale: &'a Locale) -> Option<Self> {
        let card = deck.current()?;
        Some(Self {
            word: &card.word,
            definition: locale.definition(&card.word, &card.definition),
            translation: &card.translation,
            category: card
                .category()
                .map(|name| (category_icon(name), locale.category(name))),
            flipped: deck.is_flipped(),
        })
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(card) = CardPresentation::new(ctx.deck, ctx.locale) else {
        let key = if ctx.loading {
            UiKey::InterfaceLoading
        } else {
            UiKey::ErrorsNoCards
        };
        return face(
            Column::new()
                .push(Text::new(ctx.locale.tr(key)).size(typography::TITLE_MD))
                .align_x(alignment::Horizontal::Center),
            false,
        );
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    if let Some((icon, name)) = card.category {
        content = content.push(
            Container::new(Text::new(format!("{icon} {name}")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::badge),
        );
    }

    if card.flipped {
        content = content
            .push(Text::new(card.word).size(typography::TITLE_MD))
            .push(labeled(ctx.locale.tr(UiKey::CardDefinition), card.definition))
            .push(labeled(ctx.locale.tr(UiKey::CardTranslation), card.translation));
    } else {
        content = content.push(Text::new(card.word).size(typography::DISPLAY));
    }

    let surface = face(content, card.flipped);
    button(surface)
        .on_press(Message::Flip)
        .padding(0)
        .style(styles::button::card_surface)
        .into()
}

fn face<'a>(content: Column<'a, Message>, flipped: bool) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card(flipped))
        .into()
}

fn labeled<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            text(label)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }),
        )
        .push(
            container(Text::new(value).size(typography::BODY_LG))
                .align_x(alignment::Horizontal::Center),
        )
        .into()
}
