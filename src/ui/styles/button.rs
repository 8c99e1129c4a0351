// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless button used for the logo and the reset control.
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(
            palette::SURFACE_700,
        )),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::TEXT_PRIMARY,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        snap: true,
        ..Default::default()
    }
}

/// Facility list row. Highlighted rows belong to the selected facility or
/// to the highlighted country.
pub fn row(highlighted: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (highlighted, status) {
            (true, _) => palette::SURFACE_700,
            (false, button::Status::Hovered | button::Status::Pressed) => palette::SURFACE_900,
            (false, _) => Color {
                a: opacity::TRANSPARENT,
                ..palette::SURFACE_900
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::TEXT_PRIMARY,
            border: Border {
                color: if highlighted {
                    palette::ACCENT_400
                } else {
                    Color::TRANSPARENT
                },
                width: if highlighted { 1.0 } else { 0.0 },
                radius: radius::SM.into(),
            },
            snap: true,
            ..Default::default()
        }
    }
}

/// Country cell inside a list row: text-like, underlined color on hover.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
        _ => palette::TEXT_PRIMARY,
    };

    button::Style {
        background: None,
        text_color,
        snap: true,
        ..Default::default()
    }
}
