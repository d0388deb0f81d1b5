// SPDX-License-Identifier: MPL-2.0
//! Button styles for the deck controls.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navigation, shuffle and flip buttons.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, text_color) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, palette::WHITE)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, palette::WHITE),
        button::Status::Disabled => {
            let muted = if theme.extended_palette().is_dark {
                palette::GRAY_700
            } else {
                palette::GRAY_200
            };
            (muted, palette::GRAY_400, palette::GRAY_400)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: if status == button::Status::Disabled {
            shadow::NONE
        } else {
            shadow::MD
        },
        snap: true,
    }
}

/// Difficulty rating button in `accent`, filled when it is the stored rating.
pub fn rating(accent: Color, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let filled = selected || status == button::Status::Hovered;
        let text_color = if filled {
            palette::WHITE
        } else {
            theme.palette().text
        };

        button::Style {
            background: filled.then_some(Background::Color(accent)),
            text_color,
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button wrapping the card face, so clicking the card flips it.
pub fn card_surface(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
