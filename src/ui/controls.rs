// SPDX-License-Identifier: MPL-2.0
//! Selectors above the card and the button rows below it.

use crate::app::Message;
use crate::deck::{category_icon, filter::ALL_CATEGORIES_ICON, CategoryFilter, DeckState, LanguagePair};
use crate::feedback::Difficulty;
use crate::i18n::{Locale, UiKey, UiLanguage};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, Column, Row, Text};
use iced::{alignment, Color, Element, Length};

pub struct ViewContext<'a> {
    pub locale: &'a Locale,
    pub deck: &'a DeckState,
    /// Pair shown in the selector; may differ from the deck's while loading.
    pub selected_pair: LanguagePair,
    /// Stored rating of the current card.
    pub rating: Option<Difficulty>,
    /// The shuffle confirmation is still showing.
    pub shuffled: bool,
}

/// Language pair option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOption {
    pub pair: LanguagePair,
    label: String,
}

impl std::fmt::Display for PairOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Category option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    label: String,
}

impl std::fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[must_use]
pub fn pair_options(locale: &Locale) -> Vec<PairOption> {
    LanguagePair::ALL
        .into_iter()
        .map(|pair| PairOption {
            pair,
            label: format!("{} {}", pair.flag(), locale.tr(pair.label_key())),
        })
        .collect()
}

/// "All categories" followed by the categories of the loaded list.
#[must_use]
pub fn category_options(deck: &DeckState, locale: &Locale) -> Vec<CategoryOption> {
    let all = CategoryOption {
        filter: CategoryFilter::All,
        label: format!(
            "{ALL_CATEGORIES_ICON} {}",
            locale.tr(UiKey::InterfaceAllCategories)
        ),
    };
    std::iter::once(all)
        .chain(deck.categories().into_iter().map(|name| CategoryOption {
            filter: CategoryFilter::Category(name.to_string()),
            label: format!("{} {}", category_icon(name), locale.category(name)),
        }))
        .collect()
}

/// Pair, category and interface-language selectors.
pub fn selectors<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pairs = pair_options(ctx.locale);
    let selected_pair = pairs.iter().find(|o| o.pair == ctx.selected_pair).cloned();
    let pair_picker = pick_list(pairs, selected_pair, |option| {
        Message::LanguagePairSelected(option.pair)
    })
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

    let categories = category_options(ctx.deck, ctx.locale);
    let selected_category = categories
        .iter()
        .find(|o| &o.filter == ctx.deck.filter())
        .cloned();
    let category_picker = pick_list(categories, selected_category, |option| {
        Message::CategorySelected(option.filter)
    })
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

    let language_picker = pick_list(
        UiLanguage::ALL,
        Some(ctx.locale.language()),
        Message::UiLanguageSelected,
    )
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

    Row::new()
        .spacing(spacing::MD)
        .push(labeled(ctx.locale.tr(UiKey::InterfaceLanguage), pair_picker))
        .push(labeled(ctx.locale.tr(UiKey::InterfaceCategory), category_picker))
        .push(labeled(ctx.locale.tr(UiKey::InterfaceUiLanguage), language_picker))
        .wrap()
        .into()
}

/// Previous, shuffle, flip and next.
pub fn navigation<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let nav = ctx.deck.navigation();
    let has_cards = !ctx.deck.is_empty();

    let shuffle_key = if ctx.shuffled {
        UiKey::InterfaceShuffled
    } else {
        UiKey::InterfaceShuffle
    };
    let flip_key = if ctx.deck.is_flipped() {
        UiKey::InterfaceShowWordAgain
    } else {
        UiKey::InterfaceFlip
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(control(
            format!("← {}", ctx.locale.tr(UiKey::InterfacePrevious)),
            nav.has_previous.then_some(Message::Previous),
        ))
        .push(control(
            format!("🔀 {}", ctx.locale.tr(shuffle_key)),
            has_cards.then_some(Message::Shuffle),
        ))
        .push(control(
            ctx.locale.tr(flip_key),
            has_cards.then_some(Message::Flip),
        ))
        .push(control(
            format!("{} →", ctx.locale.tr(UiKey::InterfaceNext)),
            nav.has_next.then_some(Message::Next),
        ))
        .into()
}

/// Easy, medium and hard rating buttons.
pub fn feedback<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let has_cards = !ctx.deck.is_empty();
    let buttons = Difficulty::ALL.into_iter().fold(
        Row::new().spacing(spacing::SM),
        |row, difficulty| {
            row.push(
                button(Text::new(ctx.locale.tr(difficulty.label_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .on_press_maybe(has_cards.then_some(Message::Rate(difficulty)))
                    .style(styles::button::rating(
                        accent(difficulty),
                        ctx.rating == Some(difficulty),
                    )),
            )
        },
    );

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.locale.tr(UiKey::FeedbackTitle)).size(typography::BODY))
        .push(buttons)
        .into()
}

#[must_use]
pub fn accent(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => palette::SUCCESS_500,
        Difficulty::Medium => palette::WARNING_500,
        Difficulty::Hard => palette::ERROR_500,
    }
}

fn control<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe(on_press)
        .style(styles::button::primary)
        .into()
}

fn labeled<'a>(label: String, picker: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(picker)
        .into()
}
