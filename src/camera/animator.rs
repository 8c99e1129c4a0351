// SPDX-License-Identifier: MPL-2.0
//! Two-phase camera tweening.
//!
//! A transition moves the camera to a target center and zoom in two phases
//! that never overlap: a translate phase (center only) and a scale phase
//! (zoom only). [`PhaseOrder`] picks which one runs first.
//!
//! The animator is driven by the caller: [`ViewportAnimator::tick`] is
//! invoked once per display refresh (or fixed-rate timer tick) with the
//! current instant, and advances every running transition by wall-clock
//! time. Each phase captures its start value from the camera at the moment
//! it begins, never earlier.
//!
//! # Overlapping transitions
//!
//! With [`OverlapPolicy::Supersede`] (the default) starting a transition
//! cancels the ones still running. With [`OverlapPolicy::Overlap`] they keep
//! running side by side and each writes the camera every tick, in start
//! order, so the most recently started transition wins the frame.

use super::easing::{ease_in_out, progress};
use super::{CameraState, GeoPoint, Zoom};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default duration of the translate phase.
pub const DEFAULT_TRANSLATE_DURATION: Duration = Duration::from_millis(700);

/// Default duration of the scale phase.
pub const DEFAULT_SCALE_DURATION: Duration = Duration::from_millis(600);

/// Order in which the two phases of a transition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseOrder {
    /// Pan to the target first, then zoom. Used when focusing a facility.
    #[default]
    TranslateThenScale,
    /// Zoom first, then pan. Used when returning to the world view.
    ScaleThenTranslate,
}

/// What the animator does with running transitions when a new one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Cancel running transitions before starting the new one.
    #[default]
    Supersede,
    /// Let running transitions continue; all of them write the camera.
    Overlap,
}

/// Durations of the two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimings {
    pub translate: Duration,
    pub scale: Duration,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            translate: DEFAULT_TRANSLATE_DURATION,
            scale: DEFAULT_SCALE_DURATION,
        }
    }
}

/// Where the camera should end up and in which order to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub target_center: GeoPoint,
    pub target_zoom: f64,
    pub order: PhaseOrder,
}

impl TransitionRequest {
    #[must_use]
    pub fn new(target_center: GeoPoint, target_zoom: f64, order: PhaseOrder) -> Self {
        Self {
            target_center,
            target_zoom,
            order,
        }
    }

    /// Checks the target before any frame is scheduled.
    fn validate(&self) -> Result<Zoom> {
        if !self.target_center.is_finite() {
            return Err(Error::InvalidTarget(format!(
                "center must be finite, got ({}, {})",
                self.target_center.lon, self.target_center.lat
            )));
        }
        Zoom::new(self.target_zoom)
    }
}

/// Handle identifying one transition. Doubles as its completion signal: the
/// animator reports [`TransitionEvent::Completed`] with this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

/// Lifecycle notifications produced by [`ViewportAnimator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// Both phases reached completion; the camera sits exactly on the target.
    Completed(TransitionId),
    /// The transition was cancelled because a newer one started.
    Superseded(TransitionId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Translate(GeoPoint),
    Scale(Zoom),
}

#[derive(Debug, Clone, Copy)]
enum Snapshot {
    Center(GeoPoint),
    Zoom(Zoom),
}

#[derive(Debug, Clone, Copy)]
struct ActivePhase {
    phase: Phase,
    from: Snapshot,
    started_at: Instant,
    duration: Duration,
}

impl ActivePhase {
    /// Writes this phase's interpolated value into `camera`.
    /// Returns `true` once the phase is complete.
    fn apply(&self, camera: &mut CameraState, now: Instant) -> bool {
        let p = progress(now.saturating_duration_since(self.started_at), self.duration);
        let done = p >= 1.0;
        let w = ease_in_out(p);

        match (self.phase, self.from) {
            (Phase::Translate(target), Snapshot::Center(from)) => {
                camera.center = if done { target } else { from.lerp(target, w) };
            }
            (Phase::Scale(target), Snapshot::Zoom(from)) => {
                camera.zoom = if done { target } else { from.lerp(target, w) };
            }
            // Snapshots are always taken for the phase they belong to.
            _ => {}
        }

        done
    }
}

/// One running transition.
#[derive(Debug, Clone)]
struct Flight {
    id: TransitionId,
    pending: VecDeque<Phase>,
    active: Option<ActivePhase>,
}

impl Flight {
    /// Starts the next pending phase, snapshotting the camera as it is now.
    fn begin_next(&mut self, camera: &CameraState, timings: PhaseTimings, now: Instant) {
        self.active = self.pending.pop_front().map(|phase| {
            let (from, duration) = match phase {
                Phase::Translate(_) => (Snapshot::Center(camera.center), timings.translate),
                Phase::Scale(_) => (Snapshot::Zoom(camera.zoom), timings.scale),
            };
            ActivePhase {
                phase,
                from,
                started_at: now,
                duration,
            }
        });
    }

    /// Advances the flight. Returns `true` once every phase has resolved.
    fn advance(&mut self, camera: &mut CameraState, timings: PhaseTimings, now: Instant) -> bool {
        let Some(active) = self.active else {
            return true;
        };

        if active.apply(camera, now) {
            self.begin_next(camera, timings, now);
        }

        self.active.is_none()
    }
}

/// Owner of the camera and of every transition animating it.
#[derive(Debug, Clone)]
pub struct ViewportAnimator {
    camera: CameraState,
    timings: PhaseTimings,
    policy: OverlapPolicy,
    flights: Vec<Flight>,
    events: Vec<TransitionEvent>,
    next_id: u64,
}

impl Default for ViewportAnimator {
    fn default() -> Self {
        Self::new(CameraState::default())
    }
}

impl ViewportAnimator {
    #[must_use]
    pub fn new(camera: CameraState) -> Self {
        Self {
            camera,
            timings: PhaseTimings::default(),
            policy: OverlapPolicy::default(),
            flights: Vec::new(),
            events: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn with_timings(mut self, timings: PhaseTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current camera, as the render surface should draw it this frame.
    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.camera
    }

    #[must_use]
    pub fn timings(&self) -> PhaseTimings {
        self.timings
    }

    #[must_use]
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Whether any transition still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.flights.is_empty()
    }

    #[must_use]
    pub fn is_running(&self, id: TransitionId) -> bool {
        self.flights.iter().any(|flight| flight.id == id)
    }

    /// Starts animating toward `request`.
    ///
    /// The first phase begins at `now` from the camera's current value. An
    /// invalid target is rejected before anything is scheduled and leaves
    /// running transitions untouched.
    pub fn transition(&mut self, request: TransitionRequest, now: Instant) -> Result<TransitionId> {
        let target_zoom = request.validate()?;

        if self.policy == OverlapPolicy::Supersede {
            for flight in self.flights.drain(..) {
                tracing::debug!(id = flight.id.0, "transition superseded");
                self.events.push(TransitionEvent::Superseded(flight.id));
            }
        }

        let id = TransitionId(self.next_id);
        self.next_id += 1;

        let translate = Phase::Translate(request.target_center);
        let scale = Phase::Scale(target_zoom);
        let pending = match request.order {
            PhaseOrder::TranslateThenScale => VecDeque::from([translate, scale]),
            PhaseOrder::ScaleThenTranslate => VecDeque::from([scale, translate]),
        };

        let mut flight = Flight {
            id,
            pending,
            active: None,
        };
        flight.begin_next(&self.camera, self.timings, now);

        tracing::debug!(
            id = id.0,
            lon = request.target_center.lon,
            lat = request.target_center.lat,
            zoom = request.target_zoom,
            order = ?request.order,
            "transition started"
        );

        self.flights.push(flight);
        Ok(id)
    }

    /// Advances every running transition to `now` and returns the lifecycle
    /// events produced since the previous tick.
    pub fn tick(&mut self, now: Instant) -> Vec<TransitionEvent> {
        let timings = self.timings;
        let camera = &mut self.camera;
        let events = &mut self.events;

        self.flights.retain_mut(|flight| {
            let finished = flight.advance(camera, timings, now);
            if finished {
                tracing::debug!(id = flight.id.0, "transition completed");
                events.push(TransitionEvent::Completed(flight.id));
            }
            !finished
        });

        std::mem::take(&mut self.events)
    }

    /// Direct camera write from a drag gesture. Running transitions are not
    /// cancelled and overwrite the center again on their next tick.
    pub fn set_center(&mut self, center: GeoPoint) {
        if center.is_finite() {
            self.camera.center = center;
        }
    }

    /// Direct camera write from a scroll gesture.
    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.camera.zoom = zoom;
    }
}
