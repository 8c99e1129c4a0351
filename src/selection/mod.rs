// SPDX-License-Identifier: MPL-2.0
//! Selection state and the effects a selection change has on the dashboard.
//!
//! [`SelectionController`] receives the three selection events (select a
//! facility, select a country, reset) and keeps marker visibility, list
//! highlighting, tooltip content and camera focus consistent with each
//! other.
//!
//! The selected country is never stored next to the selected code: while a
//! facility is selected its country is read from the directory, so the two
//! cannot drift apart.

pub mod hover;

pub use hover::{HoverState, HoverTarget};

use crate::camera::{GeoPoint, PhaseOrder, TransitionId, TransitionRequest, ViewportAnimator};
use crate::error::{Error, Result};
use crate::facility::{FacilityDirectory, FacilityRecord};
use std::time::Instant;

/// Anything that can animate the camera toward a target.
///
/// Implemented by [`ViewportAnimator`]; tests substitute a recorder.
pub trait CameraDriver {
    fn transition(&mut self, request: TransitionRequest, now: Instant) -> Result<TransitionId>;
}

impl CameraDriver for ViewportAnimator {
    fn transition(&mut self, request: TransitionRequest, now: Instant) -> Result<TransitionId> {
        ViewportAnimator::transition(self, request, now)
    }
}

/// Camera targets used by selection events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPolicy {
    /// Zoom applied when a facility is selected.
    pub focus_zoom: f64,
    /// Center of the world view restored by reset.
    pub home_center: GeoPoint,
    /// Zoom of the world view restored by reset.
    pub home_zoom: f64,
}

impl Default for FocusPolicy {
    fn default() -> Self {
        Self {
            focus_zoom: 4.0,
            home_center: GeoPoint::new(40.0, 0.0),
            home_zoom: 1.2,
        }
    }
}

/// Plain snapshot of what is selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected_code: Option<String>,
    pub selected_country: Option<String>,
}

/// Records allowed on the map for a given selection: the selected one only,
/// or every record when nothing is selected.
#[must_use]
pub fn visible_facilities<'a>(
    directory: &'a FacilityDirectory,
    selected_code: Option<&str>,
) -> Vec<&'a FacilityRecord> {
    match selected_code {
        Some(code) => directory.iter().filter(|r| r.code == code).collect(),
        None => directory.iter().collect(),
    }
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    directory: FacilityDirectory,
    policy: FocusPolicy,
    selected_code: Option<String>,
    /// Country picked on its own (map region), without a facility.
    region: Option<String>,
    hover: HoverState,
}

impl SelectionController {
    #[must_use]
    pub fn new(directory: FacilityDirectory, policy: FocusPolicy) -> Self {
        Self {
            directory,
            policy,
            selected_code: None,
            region: None,
            hover: HoverState::default(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &FacilityDirectory {
        &self.directory
    }

    #[must_use]
    pub fn policy(&self) -> FocusPolicy {
        self.policy
    }

    /// Focuses `code`: the map shows only its marker and the camera pans to
    /// it, then zooms in.
    ///
    /// `code` must come from the directory. Debug builds panic on an unknown
    /// code; release builds fall back to [`Self::reset`] and report
    /// [`Error::UnknownFacility`].
    pub fn select_facility(
        &mut self,
        code: &str,
        camera: &mut impl CameraDriver,
        now: Instant,
    ) -> Result<TransitionId> {
        let Some(record) = self.directory.get(code) else {
            if cfg!(debug_assertions) {
                panic!("unknown facility code: {code}");
            }
            tracing::warn!(code, "selection of unknown facility, resetting");
            self.reset(camera, now)?;
            return Err(Error::UnknownFacility(code.to_string()));
        };

        let request = TransitionRequest::new(
            record.coordinates,
            self.policy.focus_zoom,
            PhaseOrder::TranslateThenScale,
        );
        tracing::info!(code, country = %record.country, "facility selected");

        self.selected_code = Some(record.code.clone());
        self.region = None;
        camera.transition(request, now)
    }

    /// Highlights a country without touching the facility selection or the
    /// camera. While a facility is selected its own country stays the
    /// selected one.
    pub fn select_country_only(&mut self, country: &str) {
        self.region = (!country.is_empty()).then(|| country.to_string());
    }

    /// Clears the selection and flies back to the world view, zooming out
    /// before re-centering.
    pub fn reset(&mut self, camera: &mut impl CameraDriver, now: Instant) -> Result<TransitionId> {
        self.selected_code = None;
        self.region = None;
        tracing::info!("selection reset");

        camera.transition(
            TransitionRequest::new(
                self.policy.home_center,
                self.policy.home_zoom,
                PhaseOrder::ScaleThenTranslate,
            ),
            now,
        )
    }

    #[must_use]
    pub fn selected_code(&self) -> Option<&str> {
        self.selected_code.as_deref()
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&FacilityRecord> {
        self.selected_code
            .as_deref()
            .and_then(|code| self.directory.get(code))
    }

    /// Country of the selected facility, or the country picked on its own.
    #[must_use]
    pub fn selected_country(&self) -> Option<&str> {
        match self.selected_record() {
            Some(record) => Some(record.country.as_str()),
            None => self.region.as_deref(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        SelectionState {
            selected_code: self.selected_code.clone(),
            selected_country: self.selected_country().map(str::to_string),
        }
    }

    #[must_use]
    pub fn is_selected(&self, code: &str) -> bool {
        self.selected_code.as_deref() == Some(code)
    }

    /// Whether `country` is the selected country, ignoring case like the map
    /// fill does.
    #[must_use]
    pub fn is_country_highlighted(&self, country: &str) -> bool {
        self.selected_country()
            .is_some_and(|selected| selected.eq_ignore_ascii_case(country))
    }

    /// Markers to draw for the current selection.
    #[must_use]
    pub fn visible_facilities(&self) -> Vec<&FacilityRecord> {
        visible_facilities(&self.directory, self.selected_code())
    }

    pub fn hover(&mut self, target: HoverTarget) {
        self.hover.enter(target);
    }

    pub fn unhover(&mut self, target: &HoverTarget) {
        self.hover.leave(target);
    }

    pub fn clear_hover(&mut self) {
        self.hover.clear();
    }

    /// Text for the tooltip surface; empty when nothing is hovered.
    #[must_use]
    pub fn tooltip(&self) -> &str {
        self.hover.content(&self.directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::test_support::directory;

    /// Records every request before handing it to a real animator.
    #[derive(Default)]
    struct RecordingCamera {
        requests: Vec<TransitionRequest>,
        animator: ViewportAnimator,
    }

    impl CameraDriver for RecordingCamera {
        fn transition(&mut self, request: TransitionRequest, now: Instant) -> Result<TransitionId> {
            self.requests.push(request);
            self.animator.transition(request, now)
        }
    }

    fn controller() -> SelectionController {
        SelectionController::new(directory(), FocusPolicy::default())
    }

    #[test]
    fn select_facility_sets_code_country_and_flies_in() {
        let mut selection = controller();
        let mut camera = RecordingCamera::default();

        selection
            .select_facility("SG", &mut camera, Instant::now())
            .unwrap();

        assert_eq!(
            selection.state(),
            SelectionState {
                selected_code: Some("SG".into()),
                selected_country: Some("Singapore".into()),
            }
        );
        assert_eq!(
            camera.requests,
            vec![TransitionRequest::new(
                GeoPoint::new(103.8, 1.35),
                4.0,
                PhaseOrder::TranslateThenScale
            )]
        );
    }

    #[test]
    fn reset_clears_and_zooms_out_first() {
        let mut selection = controller();
        let mut camera = RecordingCamera::default();
        let now = Instant::now();

        selection.select_facility("SG", &mut camera, now).unwrap();
        selection.reset(&mut camera, now).unwrap();

        assert_eq!(selection.state(), SelectionState::default());
        assert_eq!(
            camera.requests.last(),
            Some(&TransitionRequest::new(
                GeoPoint::new(40.0, 0.0),
                1.2,
                PhaseOrder::ScaleThenTranslate
            ))
        );
    }

    #[test]
    fn country_only_leaves_code_and_camera_alone() {
        let mut selection = controller();
        let mut camera = RecordingCamera::default();

        selection.select_country_only("Japan");
        assert_eq!(selection.selected_code(), None);
        assert_eq!(selection.selected_country(), Some("Japan"));
        assert!(selection.is_country_highlighted("JAPAN"));
        assert!(camera.requests.is_empty());

        selection
            .select_facility("SG", &mut camera, Instant::now())
            .unwrap();
        selection.select_country_only("Japan");
        // The selected facility's country wins while it is selected.
        assert_eq!(selection.selected_country(), Some("Singapore"));
        assert_eq!(selection.selected_code(), Some("SG"));
    }

    #[test]
    fn empty_country_clears_region() {
        let mut selection = controller();
        selection.select_country_only("Japan");
        selection.select_country_only("");
        assert_eq!(selection.selected_country(), None);
    }

    #[test]
    fn visibility_follows_selection() {
        let mut selection = controller();
        assert_eq!(selection.visible_facilities().len(), 4);

        selection
            .select_facility("TK01", &mut RecordingCamera::default(), Instant::now())
            .unwrap();
        let visible = selection.visible_facilities();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "TK01");
    }

    #[test]
    fn visible_facilities_is_pure() {
        let dir = directory();
        assert_eq!(visible_facilities(&dir, None).len(), dir.len());
        assert_eq!(visible_facilities(&dir, Some("BK")).len(), 1);
        assert!(visible_facilities(&dir, Some("missing")).is_empty());
    }

    #[test]
    fn tooltip_tracks_hover() {
        let mut selection = controller();
        selection.hover(HoverTarget::Facility("OS01".into()));
        assert_eq!(selection.tooltip(), "OS01");
        selection.unhover(&HoverTarget::Facility("OS01".into()));
        assert_eq!(selection.tooltip(), "");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unknown facility code")]
    fn unknown_code_panics_in_debug() {
        let mut selection = controller();
        let _ = selection.select_facility("XX", &mut RecordingCamera::default(), Instant::now());
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn unknown_code_resets_in_release() {
        let mut selection = controller();
        let mut camera = RecordingCamera::default();
        let now = Instant::now();
        selection.select_facility("SG", &mut camera, now).unwrap();

        let err = selection.select_facility("XX", &mut camera, now).unwrap_err();

        assert_eq!(err, Error::UnknownFacility("XX".into()));
        assert_eq!(selection.state(), SelectionState::default());
        assert_eq!(
            camera.requests.last().map(|r| r.order),
            Some(PhaseOrder::ScaleThenTranslate)
        );
    }
}
