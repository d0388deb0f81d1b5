// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One screen, top to bottom: selectors, category line, card, controls,
//! rating buttons and statistics. Toasts float above everything.

use super::Message;
use crate::deck::{DeckState, LanguagePair};
use crate::feedback::Difficulty;
use crate::i18n::{Locale, UiKey};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::{card_view, controls, stats};
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub locale: &'a Locale,
    pub deck: &'a DeckState,
    pub selected_pair: LanguagePair,
    pub rating: Option<Difficulty>,
    pub loading: bool,
    pub shuffled: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let control_ctx = controls::ViewContext {
        locale: ctx.locale,
        deck: ctx.deck,
        selected_pair: ctx.selected_pair,
        rating: ctx.rating,
        shuffled: ctx.shuffled,
    };
    let stats_ctx = stats::ViewContext {
        locale: ctx.locale,
        deck: ctx.deck,
    };

    let header = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.locale.tr(UiKey::AppTitle)).size(typography::TITLE_MD))
        .push(Text::new(ctx.locale.tr(UiKey::AppSubtitle)).size(typography::BODY));

    let card = card_view::view(card_view::ViewContext {
        locale: ctx.locale,
        deck: ctx.deck,
        loading: ctx.loading,
    });

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(controls::selectors(&control_ctx));

    if let Some(line) = stats::category_line(&stats_ctx) {
        content = content.push(line);
    }

    if ctx.loading && !ctx.deck.is_empty() {
        content = content.push(Text::new(ctx.locale.tr(UiKey::InterfaceLoading)).size(typography::CAPTION));
    }

    content = content
        .push(card)
        .push(stats::progress(&stats_ctx))
        .push(controls::navigation(&control_ctx))
        .push(controls::feedback(&control_ctx))
        .push(stats::view(&stats_ctx));

    let main = Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.locale).map(Message::Notification);

    Stack::new().push(main).push(toasts).into()
}
