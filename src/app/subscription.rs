// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions: animation frames and the header clock.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Frames for the camera animator, only while a transition is running.
///
/// The display clock (`window::frames`) is used unless a fixed interval is
/// configured.
pub fn create_frame_subscription(
    animating: bool,
    fixed_interval: Option<Duration>,
) -> Subscription<Message> {
    if !animating {
        return Subscription::none();
    }
    match fixed_interval {
        Some(interval) => time::every(interval).map(Message::Frame),
        None => window::frames().map(Message::Frame),
    }
}

pub fn create_clock_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(Message::ClockTick)
}
