// SPDX-License-Identifier: MPL-2.0
//! Header clock for a fixed UTC offset.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use iced::widget::{Column, Text};
use iced::{alignment::Horizontal, Element};

/// Offset `hours` east of UTC. Out-of-range values fall back to UTC.
#[must_use]
pub fn fixed_offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

/// Time of day, e.g. `10:04:05`.
#[must_use]
pub fn format_time(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset).format("%H:%M:%S").to_string()
}

/// Calendar date, e.g. `Tue, 2 December 2025`.
#[must_use]
pub fn format_date(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset).format("%a, %-d %B %Y").to_string()
}

/// Signed hour offset as shown after `UTC`, e.g. `+7` or `-5`.
#[must_use]
pub fn offset_label(hours: i32) -> String {
    format!("{hours:+}")
}

pub fn view<'a, Message: 'a>(
    i18n: &I18n,
    now: DateTime<Utc>,
    utc_offset_hours: i32,
) -> Element<'a, Message> {
    let offset = fixed_offset(utc_offset_hours);
    let label = offset_label(utc_offset_hours);
    let zone = i18n.tr_with_args("clock-utc-offset", &[("offset", label.as_str())]);

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Right)
        .push(
            Text::new(format!("{} {}", format_time(now, offset), zone))
                .size(typography::TITLE_SM),
        )
        .push(
            Text::new(format_date(now, offset))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        )
        .into()
}
