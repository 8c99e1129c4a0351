// SPDX-License-Identifier: MPL-2.0
//! Overlay in the corner of the map describing the current selection.

use crate::facility::{FacilityRecord, Status};
use crate::i18n::fluent::I18n;
use crate::selection::SelectionController;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Vertical;
use iced::widget::{container, Column, Row, Space, Text};
use iced::{Element, Length};

/// What the panel shows for a given selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailContent<'a> {
    /// Nothing selected: explain the marker colors.
    Legend,
    Facility(&'a FacilityRecord),
    /// A country picked from the list, without a facility.
    Region(&'a str),
}

#[must_use]
pub fn content(selection: &SelectionController) -> DetailContent<'_> {
    match (selection.selected_record(), selection.selected_country()) {
        (Some(record), _) => DetailContent::Facility(record),
        (None, Some(country)) => DetailContent::Region(country),
        (None, None) => DetailContent::Legend,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a SelectionController,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = match content(ctx.selection) {
        DetailContent::Legend => build_legend(ctx.i18n),
        DetailContent::Facility(record) => build_facility(ctx.i18n, record),
        DetailContent::Region(country) => Text::new(country).size(typography::TITLE_SM).into(),
    };

    container(body)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::DETAIL_PANEL_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn status_line<'a, Message: 'a>(i18n: &I18n, status: Status) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            container(Space::new())
                .width(Length::Fixed(sizing::STATUS_DOT))
                .height(Length::Fixed(sizing::STATUS_DOT))
                .style(styles::container::status_dot(status)),
        )
        .push(Text::new(i18n.tr(status.i18n_key())).size(typography::BODY))
        .into()
}

fn build_legend<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut legend = Column::new().spacing(spacing::XS).push(
        Text::new(i18n.tr("detail-legend-title"))
            .size(typography::CAPTION)
            .color(theme::muted_text_color()),
    );
    for status in Status::ALL {
        legend = legend.push(status_line(i18n, status));
    }
    legend.into()
}

fn labelled<'a, Message: 'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(2.0)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn build_facility<'a, Message: 'a>(
    i18n: &I18n,
    record: &'a FacilityRecord,
) -> Element<'a, Message> {
    let chip = container(Text::new(i18n.tr(record.status.i18n_key())).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::status_chip(record.status));

    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(record.code.as_str()).size(typography::TITLE_MD))
        .push(chip);

    let lon = format!("{:.2}", record.coordinates.lon);
    let lat = format!("{:.2}", record.coordinates.lat);
    let coordinates = i18n.tr_with_args(
        "detail-coordinates-value",
        &[("lon", lon.as_str()), ("lat", lat.as_str())],
    );

    let mut column = Column::new().spacing(spacing::SM).push(title);
    if !record.description.is_empty() {
        column = column.push(labelled(
            i18n.tr("detail-description"),
            record.description.clone(),
        ));
    }
    column
        .push(labelled(i18n.tr("detail-country"), record.country.clone()))
        .push(labelled(i18n.tr("detail-customer"), record.company.clone()))
        .push(labelled(i18n.tr("detail-coordinates"), coordinates))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ViewportAnimator;
    use crate::facility::test_support::directory;
    use crate::selection::FocusPolicy;
    use std::time::Instant;

    #[test]
    fn legend_when_nothing_selected() {
        let selection = SelectionController::new(directory(), FocusPolicy::default());
        assert_eq!(content(&selection), DetailContent::Legend);
    }

    #[test]
    fn facility_details_when_selected() {
        let mut selection = SelectionController::new(directory(), FocusPolicy::default());
        selection
            .select_facility("SG", &mut ViewportAnimator::default(), Instant::now())
            .unwrap();
        match content(&selection) {
            DetailContent::Facility(record) => assert_eq!(record.code, "SG"),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn region_name_when_country_only() {
        let mut selection = SelectionController::new(directory(), FocusPolicy::default());
        selection.select_country_only("Thailand");
        assert_eq!(content(&selection), DetailContent::Region("Thailand"));
    }
}
