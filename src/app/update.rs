// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Selection events go through the [`SelectionController`]; direct map
//! manipulation writes the camera without touching the selection.

use super::Message;
use crate::camera::ViewportAnimator;
use crate::error::Result;
use crate::selection::{HoverTarget, SelectionController};
use crate::ui::facility_list::{self, Event as ListEvent};
use crate::ui::map_canvas;
use chrono::{DateTime, Utc};
use iced::Task;
use std::time::Instant;

/// Mutable application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub animator: &'a mut ViewportAnimator,
    pub selection: &'a mut SelectionController,
    pub clock: &'a mut DateTime<Utc>,
    /// i18n key of the problem shown in the warning banner.
    pub warning: &'a mut Option<String>,
}

impl UpdateContext<'_> {
    /// Shows the warning for a failed selection event. The failure stays
    /// local to the interaction that caused it.
    fn report<T>(&mut self, result: Result<T>) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "selection event failed");
            *self.warning = Some(err.i18n_key().to_string());
        }
    }
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Map(message) => handle_map_message(ctx, message, now),
        Message::List(message) => handle_list_message(ctx, message, now),
        Message::LogoPressed => {
            let result = ctx.selection.reset(&mut *ctx.animator, now);
            ctx.report(result);
        }
        Message::Frame(frame_time) => handle_frame(ctx, frame_time),
        Message::ClockTick(_) => *ctx.clock = Utc::now(),
        Message::DismissWarning => *ctx.warning = None,
    }
    Task::none()
}

pub fn handle_map_message(ctx: &mut UpdateContext<'_>, message: map_canvas::Message, now: Instant) {
    match message {
        map_canvas::Message::Panned(center) => ctx.animator.set_center(center),
        map_canvas::Message::Zoomed { zoom, center } => {
            ctx.animator.set_zoom(zoom);
            ctx.animator.set_center(center);
        }
        map_canvas::Message::MarkerClicked(code) => {
            let result = ctx.selection.select_facility(&code, &mut *ctx.animator, now);
            ctx.report(result);
        }
        map_canvas::Message::MarkerHover { entered, left } => {
            if let Some(code) = left {
                ctx.selection.unhover(&HoverTarget::Facility(code));
            }
            if let Some(code) = entered {
                ctx.selection.hover(HoverTarget::Facility(code));
            }
        }
    }
}

pub fn handle_list_message(
    ctx: &mut UpdateContext<'_>,
    message: facility_list::Message,
    now: Instant,
) {
    match facility_list::update(message) {
        ListEvent::SelectFacility(code) => {
            let result = ctx.selection.select_facility(&code, &mut *ctx.animator, now);
            ctx.report(result);
        }
        ListEvent::SelectCountry(country) => ctx.selection.select_country_only(&country),
        ListEvent::Hover(target) => ctx.selection.hover(target),
        ListEvent::Unhover(target) => ctx.selection.unhover(&target),
        ListEvent::Reset => {
            let result = ctx.selection.reset(&mut *ctx.animator, now);
            ctx.report(result);
        }
    }
}

/// Advances the camera. Lifecycle events are already logged by the
/// animator and nothing else waits on them.
pub fn handle_frame(ctx: &mut UpdateContext<'_>, frame_time: Instant) {
    ctx.animator.tick(frame_time);
}
