// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::facility::Status;
use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header bar and list background.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_900)),
        text_color: Some(palette::TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Floating panel drawn over the map.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::SURFACE_950
        })),
        text_color: Some(palette::TEXT_PRIMARY),
        border: Border {
            color: palette::SURFACE_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Floating label showing the hovered item.
pub fn tooltip_label(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill showing a facility status.
pub fn status_chip(status: Status) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(theme::status_chip_background(status))),
        text_color: Some(theme::status_color(status)),
        border: Border {
            color: theme::status_color(status),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Round status dot used by the list and the legend.
pub fn status_dot(status: Status) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(theme::status_color(status))),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
