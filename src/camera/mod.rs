// SPDX-License-Identifier: MPL-2.0
//! Camera state and animated transitions.
//!
//! The camera is described by a geographic center and a zoom factor. The
//! [`ViewportAnimator`] owns the one authoritative [`CameraState`] and
//! tweens it toward targets in two sequenced phases (translate and scale).

pub mod animator;
pub mod easing;

pub use animator::{
    OverlapPolicy, PhaseOrder, PhaseTimings, TransitionEvent, TransitionId, TransitionRequest,
    ViewportAnimator,
};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Linear interpolation between `self` and `target` with weight `w`.
    #[must_use]
    pub fn lerp(self, target: GeoPoint, w: f64) -> Self {
        Self {
            lon: self.lon + (target.lon - self.lon) * w,
            lat: self.lat + (target.lat - self.lat) * w,
        }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lon, point.lat]
    }
}

/// Zoom factor, guaranteed to be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Zoom(f64);

impl Zoom {
    /// Zoom of the unscaled world view.
    pub const ONE: Zoom = Zoom(1.0);

    /// Creates a zoom factor, rejecting zero, negative and non-finite values.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidTarget(format!("zoom must be positive, got {value}")))
        }
    }

    /// Creates a zoom factor clamped into `[min, max]`.
    ///
    /// Non-finite input falls back to `min`.
    #[must_use]
    pub fn clamped(value: f64, min: Zoom, max: Zoom) -> Self {
        if value.is_finite() {
            Self(value.clamp(min.0, max.0))
        } else {
            min
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Interpolates toward `target`. Both ends are positive and `w` stays in
    /// `[0, 1]`, so the result is positive too.
    #[must_use]
    pub(crate) fn lerp(self, target: Zoom, w: f64) -> Self {
        Self(self.0 + (target.0 - self.0) * w)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::ONE
    }
}

/// The map viewport: where it is centered and how far it is zoomed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    pub zoom: Zoom,
    pub center: GeoPoint,
}

impl CameraState {
    #[must_use]
    pub fn new(center: GeoPoint, zoom: Zoom) -> Self {
        Self { zoom, center }
    }
}
