// SPDX-License-Identifier: MPL-2.0
//! Tabular list of facilities below the map.
//!
//! Each row selects its facility when pressed. The country cell is a
//! separate target that highlights the country only, leaving the camera
//! where it is.

use crate::facility::FacilityRecord;
use crate::i18n::fluent::I18n;
use crate::selection::{HoverTarget, SelectionController};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Vertical;
use iced::widget::{button, container, mouse_area, scrollable, Column, Row, Space, Text};
use iced::{Element, Length};

/// Relative column widths: status, customer, country, office, description.
const COLUMN_PORTIONS: [u16; 5] = [2, 3, 2, 2, 5];

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a SelectionController,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    RowPressed(String),
    CountryPressed(String),
    RowEntered(String),
    RowExited(String),
    CountryEntered(String),
    CountryExited(String),
    ResetPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectFacility(String),
    SelectCountry(String),
    Hover(HoverTarget),
    Unhover(HoverTarget),
    Reset,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::RowPressed(code) => Event::SelectFacility(code),
        Message::CountryPressed(country) => Event::SelectCountry(country),
        Message::RowEntered(code) => Event::Hover(HoverTarget::Facility(code)),
        Message::RowExited(code) => Event::Unhover(HoverTarget::Facility(code)),
        Message::CountryEntered(country) => Event::Hover(HoverTarget::Region(country)),
        Message::CountryExited(country) => Event::Unhover(HoverTarget::Region(country)),
        Message::ResetPressed => Event::Reset,
    }
}

/// Whether a row is drawn highlighted: it is the selected facility, or it
/// sits in the highlighted country.
#[must_use]
pub fn is_row_highlighted(selection: &SelectionController, record: &FacilityRecord) -> bool {
    selection.is_selected(&record.code) || selection.is_country_highlighted(&record.country)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XXS);
    for record in ctx.selection.directory() {
        rows = rows.push(build_row(&ctx, record));
    }

    let body: Element<'a, Message> = if ctx.selection.directory().is_empty() {
        Text::new(ctx.i18n.tr("list-empty"))
            .color(theme::muted_text_color())
            .into()
    } else {
        scrollable(rows).height(Length::Fill).into()
    };

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(build_header(&ctx))
            .push(body),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::LIST_HEIGHT))
    .style(styles::container::surface)
    .into()
}

fn header_cell<'a>(label: String, portion: u16) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(theme::muted_text_color())
        .width(Length::FillPortion(portion))
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let keys = [
        "list-header-status",
        "list-header-customer",
        "list-header-country",
        "list-header-office",
        "list-header-description",
    ];

    let mut header = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for (key, portion) in keys.into_iter().zip(COLUMN_PORTIONS) {
        header = header.push(header_cell(ctx.i18n.tr(key), portion));
    }

    // Only offered while something is highlighted.
    if ctx.selection.selected_country().is_some() {
        let reset = button(Text::new(ctx.i18n.tr("list-reset")).size(typography::CAPTION))
            .on_press(Message::ResetPressed)
            .padding([0.0, spacing::XS])
            .style(styles::button::ghost);
        header = header.push(iced::widget::tooltip(
            reset,
            Text::new(ctx.i18n.tr("header-reset-tooltip")).size(typography::CAPTION),
            iced::widget::tooltip::Position::Left,
        ));
    } else {
        header = header.push(Space::new().width(Length::Fixed(spacing::LG)));
    }

    container(header).padding([0.0, spacing::XS]).into()
}

fn build_row<'a>(ctx: &ViewContext<'a>, record: &'a FacilityRecord) -> Element<'a, Message> {
    let [status_w, customer_w, country_w, office_w, description_w] = COLUMN_PORTIONS;

    let status = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            container(Space::new())
                .width(Length::Fixed(sizing::STATUS_DOT))
                .height(Length::Fixed(sizing::STATUS_DOT))
                .style(styles::container::status_dot(record.status)),
        )
        .push(Text::new(ctx.i18n.tr(record.status.i18n_key())).size(typography::BODY))
        .width(Length::FillPortion(status_w));

    let country = mouse_area(
        button(Text::new(record.country.as_str()).size(typography::BODY))
            .on_press(Message::CountryPressed(record.country.clone()))
            .padding(0.0)
            .style(styles::button::link),
    )
    .on_enter(Message::CountryEntered(record.country.clone()))
    .on_exit(Message::CountryExited(record.country.clone()));

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(status)
        .push(
            Text::new(record.company.as_str())
                .size(typography::BODY)
                .width(Length::FillPortion(customer_w)),
        )
        .push(container(country).width(Length::FillPortion(country_w)))
        .push(
            Text::new(record.code.as_str())
                .size(typography::BODY)
                .width(Length::FillPortion(office_w)),
        )
        .push(
            Text::new(record.description.as_str())
                .size(typography::BODY)
                .color(theme::muted_text_color())
                .width(Length::FillPortion(description_w)),
        );

    let row = button(content)
        .on_press(Message::RowPressed(record.code.clone()))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::row(is_row_highlighted(ctx.selection, record)));

    mouse_area(row)
        .on_enter(Message::RowEntered(record.code.clone()))
        .on_exit(Message::RowExited(record.code.clone()))
        .into()
}
