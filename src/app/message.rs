// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::facility_list;
use crate::ui::map_canvas;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Map(map_canvas::Message),
    List(facility_list::Message),
    /// The header logo doubles as a reset control.
    LogoPressed,
    /// Display frame while a transition is running.
    Frame(Instant),
    /// Once per second, for the header clock.
    ClockTick(Instant),
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FACILITY_MAP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional facility catalog replacing the built-in one.
    pub facilities: Option<String>,
}
