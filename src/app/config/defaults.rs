// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Camera**: Transition timings, focus and home views, zoom bounds
//! - **Clock**: Displayed time zone

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Duration of the pan phase of a transition (milliseconds).
pub const DEFAULT_TRANSLATE_DURATION_MS: u64 = 700;

/// Duration of the zoom phase of a transition (milliseconds).
pub const DEFAULT_SCALE_DURATION_MS: u64 = 600;

/// Longest accepted phase duration (milliseconds).
pub const MAX_PHASE_DURATION_MS: u64 = 10_000;

/// Zoom applied when a facility is selected.
pub const DEFAULT_FOCUS_ZOOM: f64 = 4.0;

/// Zoom of the world view restored by reset.
pub const DEFAULT_HOME_ZOOM: f64 = 1.2;

/// Center `[lon, lat]` of the world view restored by reset.
pub const DEFAULT_HOME_CENTER: [f64; 2] = [40.0, 0.0];

/// Zoom when the application starts.
pub const DEFAULT_INITIAL_ZOOM: f64 = 1.0;

/// Center `[lon, lat]` when the application starts.
pub const DEFAULT_INITIAL_CENTER: [f64; 2] = [0.0, 0.0];

/// Smallest zoom reachable with the scroll wheel.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;

/// Largest zoom reachable with the scroll wheel.
pub const DEFAULT_MAX_ZOOM: f64 = 8.0;

/// Zoom factor applied per scroll line.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.2;

/// Interval of the fallback frame timer, used when no display clock is
/// wanted (about 60 ticks per second).
pub const FALLBACK_FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Clock Defaults
// ==========================================================================

/// UTC offset of the header clock, in hours.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Accepted UTC offset range, in hours.
pub const MIN_UTC_OFFSET_HOURS: i32 = -12;
pub const MAX_UTC_OFFSET_HOURS: i32 = 14;
