// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The card face. Front and back differ only in accent border.
pub fn card(flipped: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let accent = if flipped {
            palette::SUCCESS_500
        } else {
            palette::PRIMARY_500
        };

        container::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            text_color: Some(extended.background.weak.text),
            ..Default::default()
        }
    }
}

/// Pill-shaped category badge.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette::PRIMARY_600),
        ..Default::default()
    }
}

/// Muted panel behind the statistics row.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
