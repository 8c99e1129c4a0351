// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: header (logo and clock), the map with its detail
//! overlay and tooltip, then the facility list.

use super::Message;
use crate::camera::{CameraState, Zoom};
use crate::i18n::fluent::I18n;
use crate::selection::SelectionController;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::map_canvas::MapCanvas;
use crate::ui::styles;
use crate::ui::{clock, detail_panel, facility_list};
use chrono::{DateTime, Utc};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, canvas, container, Column, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub camera: CameraState,
    pub selection: &'a SelectionController,
    pub zoom_bounds: (Zoom, Zoom),
    pub clock: DateTime<Utc>,
    pub utc_offset_hours: i32,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(build_header(&ctx));

    if let Some(key) = ctx.warning {
        column = column.push(build_warning(ctx.i18n, key));
    }

    column
        .push(build_map(&ctx))
        .push(
            facility_list::view(facility_list::ViewContext {
                i18n: ctx.i18n,
                selection: ctx.selection,
            })
            .map(Message::List),
        )
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo = button(
        Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD),
    )
    .on_press(Message::LogoPressed)
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::ghost);

    let logo = iced::widget::tooltip(
        logo,
        Text::new(ctx.i18n.tr("header-logo-tooltip")).size(typography::CAPTION),
        iced::widget::tooltip::Position::Bottom,
    );

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(logo)
        .push(Space::new().width(Length::Fill))
        .push(clock::view(ctx.i18n, ctx.clock, ctx.utc_offset_hours));

    container(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::surface)
        .into()
}

fn build_warning<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY).width(Length::Fill))
        .push(
            button(Text::new("×").size(typography::BODY))
                .on_press(Message::DismissWarning)
                .style(styles::button::ghost),
        );

    container(row)
        .padding([spacing::XXS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn build_map<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let program = MapCanvas::new(
        ctx.camera,
        ctx.selection.visible_facilities(),
        ctx.selection.selected_record(),
        ctx.zoom_bounds,
    );
    let map: Element<'a, Message> = Element::from(
        canvas(program).width(Length::Fill).height(Length::Fill),
    )
    .map(Message::Map);

    let detail = container(detail_panel::view(detail_panel::ViewContext {
        i18n: ctx.i18n,
        selection: ctx.selection,
    }))
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Top);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(map)
        .push(detail);

    let tooltip = ctx.selection.tooltip();
    if !tooltip.is_empty() {
        stack = stack.push(
            container(
                container(Text::new(tooltip).size(typography::BODY))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tooltip_label),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}
