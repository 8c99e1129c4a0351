// SPDX-License-Identifier: MPL-2.0
//! Status colors and shared color helpers for the map and the panels.

use crate::facility::Status;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Application theme: the dashboard is always dark.
pub fn app_theme() -> Theme {
    Theme::custom(
        "Facility Map".to_string(),
        iced::theme::Palette {
            background: palette::SURFACE_950,
            text: palette::TEXT_PRIMARY,
            primary: palette::ACCENT_400,
            success: palette::HEALTHY_500,
            warning: palette::AT_RISK_500,
            danger: palette::CRITICAL_500,
        },
    )
}

/// Solid color of a status dot.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Healthy => palette::HEALTHY_500,
        Status::AtRisk => palette::AT_RISK_500,
        Status::Critical => palette::CRITICAL_500,
    }
}

/// Translucent halo drawn behind a marker.
pub fn status_glow(status: Status) -> Color {
    Color {
        a: opacity::GLOW,
        ..status_color(status)
    }
}

/// Background of a status chip.
pub fn status_chip_background(status: Status) -> Color {
    Color {
        a: opacity::CHIP,
        ..status_color(status)
    }
}

pub fn muted_text_color() -> Color {
    palette::TEXT_MUTED
}

/// Color of the selected marker's annotation and of highlighted rows.
pub fn highlight_color() -> Color {
    palette::ACCENT_400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_a_distinct_color() {
        let colors: Vec<Color> = Status::ALL.iter().map(|s| status_color(*s)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn glow_is_translucent_status_color() {
        let glow = status_glow(Status::Critical);
        let solid = status_color(Status::Critical);
        assert_eq!((glow.r, glow.g, glow.b), (solid.r, solid.g, solid.b));
        assert!(glow.a < 1.0);
    }
}
