// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the map, the list and
//! the camera.
//!
//! The `App` struct wires together the domains (camera animator, selection,
//! localization, settings) and translates messages into state changes.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::camera::{ViewportAnimator, Zoom};
use crate::facility::{catalog, FacilityDirectory};
use crate::i18n::fluent::I18n;
use crate::selection::SelectionController;
use crate::ui::theme;
use chrono::{DateTime, Utc};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    animator: ViewportAnimator,
    selection: SelectionController,
    zoom_bounds: (Zoom, Zoom),
    utc_offset_hours: i32,
    /// Fixed frame interval; `None` follows the display.
    frame_interval: Option<Duration>,
    clock: DateTime<Utc>,
    /// i18n key of a problem to show under the header.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("camera", &self.animator.camera())
            .field("selection", &self.selection.state())
            .field("warning", &self.warning)
            .finish_non_exhaustive()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the facility catalog, preferring `path` when given.
///
/// A broken override falls back to the built-in catalog; a broken built-in
/// catalog leaves the map empty. Either way the i18n key of a warning is
/// returned alongside.
pub fn load_directory(path: Option<PathBuf>) -> (FacilityDirectory, Option<String>) {
    let mut warning = None;

    if let Some(path) = path {
        match catalog::load_from_path(&path) {
            Ok(directory) => return (directory, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "facility catalog ignored");
                warning = Some("notification-catalog-load-error".to_string());
            }
        }
    }

    match catalog::load_embedded() {
        Ok(directory) => (directory, warning),
        Err(err) => {
            tracing::warn!(error = %err, "built-in facility catalog is broken");
            (FacilityDirectory::default(), Some(err.i18n_key().to_string()))
        }
    }
}

impl Default for App {
    fn default() -> Self {
        let (directory, warning) = load_directory(None);
        let mut app = Self::with_config(&Config::default(), I18n::default(), directory);
        app.warning = warning;
        app
    }
}

impl App {
    /// Initializes application state from the CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let catalog_path = flags
            .facilities
            .map(PathBuf::from)
            .or_else(|| config.data.facilities_path.clone());
        let (directory, catalog_warning) = load_directory(catalog_path);

        tracing::info!(
            facilities = directory.len(),
            locale = %i18n.current_locale(),
            "dashboard starting"
        );

        let mut app = Self::with_config(&config, i18n, directory);
        app.warning = config_warning.or(catalog_warning);
        (app, Task::none())
    }

    /// Builds the state from already loaded parts.
    #[must_use]
    pub fn with_config(config: &Config, i18n: I18n, directory: FacilityDirectory) -> Self {
        let camera = &config.camera;
        let animator = ViewportAnimator::new(camera.initial_camera())
            .with_timings(camera.timings())
            .with_policy(camera.overlap_policy());

        Self {
            i18n,
            animator,
            selection: SelectionController::new(directory, camera.focus_policy()),
            zoom_bounds: camera.zoom_bounds(),
            utc_offset_hours: config.clock.utc_offset_hours(),
            frame_interval: camera.frame_interval(),
            clock: Utc::now(),
            warning: None,
        }
    }

    #[must_use]
    pub fn animator(&self) -> &ViewportAnimator {
        &self.animator
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theme::app_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_frame_subscription(
                self.animator.is_animating(),
                self.frame_interval,
            ),
            subscription::create_clock_subscription(),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// Same as [`Self::update`] with an explicit time for new transitions.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            animator: &mut self.animator,
            selection: &mut self.selection,
            clock: &mut self.clock,
            warning: &mut self.warning,
        };
        update::update(&mut ctx, message, now)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            camera: self.animator.camera(),
            selection: &self.selection,
            zoom_bounds: self.zoom_bounds,
            clock: self.clock,
            utc_offset_hours: self.utc_offset_hours,
            warning: self.warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::GeoPoint;
    use crate::ui::{facility_list, map_canvas};
    use tempfile::tempdir;

    const SETTLED: Duration = Duration::from_secs(2);

    fn app() -> App {
        let directory = catalog::load_embedded().unwrap();
        App::with_config(&Config::default(), I18n::default(), directory)
    }

    /// Feeds ~60 Hz frames from `start` until the camera is idle.
    fn settle(app: &mut App, start: Instant) {
        let mut frame = start;
        while app.animator().is_animating() && frame < start + SETTLED * 2 {
            frame += Duration::from_millis(16);
            let _ = app.update(Message::Frame(frame));
        }
    }

    #[test]
    fn starts_at_initial_camera_without_selection() {
        let app = app();
        assert_eq!(app.animator().camera().zoom.value(), 1.0);
        assert_eq!(app.animator().camera().center, GeoPoint::new(0.0, 0.0));
        assert_eq!(app.selection().selected_code(), None);
        assert!(!app.animator().is_animating());
    }

    #[test]
    fn row_press_selects_and_flies_to_facility() {
        let mut app = app();
        let now = Instant::now();

        let _ = app.update_at(
            Message::List(facility_list::Message::RowPressed("SG".into())),
            now,
        );
        assert_eq!(app.selection().selected_country(), Some("Singapore"));
        assert!(app.animator().is_animating());

        settle(&mut app, now);
        let camera = app.animator().camera();
        assert_eq!(camera.center, GeoPoint::new(103.8, 1.35));
        assert_eq!(camera.zoom.value(), 4.0);
        assert!(!app.animator().is_animating());
    }

    #[test]
    fn logo_resets_to_world_view() {
        let mut app = app();
        let now = Instant::now();

        let _ = app.update_at(
            Message::Map(map_canvas::Message::MarkerClicked("SG".into())),
            now,
        );
        settle(&mut app, now);
        let _ = app.update_at(Message::LogoPressed, now + SETTLED);
        settle(&mut app, now + SETTLED);

        assert_eq!(app.selection().selected_code(), None);
        let camera = app.animator().camera();
        assert_eq!(camera.center, GeoPoint::new(40.0, 0.0));
        assert_eq!(camera.zoom.value(), 1.2);
    }

    #[test]
    fn list_reset_uses_scale_then_translate() {
        let mut app = app();
        let now = Instant::now();
        let _ = app.update_at(
            Message::List(facility_list::Message::CountryPressed("Japan".into())),
            now,
        );
        assert_eq!(app.selection().selected_country(), Some("Japan"));
        assert!(!app.animator().is_animating());

        let _ = app.update_at(Message::List(facility_list::Message::ResetPressed), now);
        // Halfway through the scale phase the center has not moved yet.
        let _ = app.update(Message::Frame(now + Duration::from_millis(300)));
        assert_eq!(app.animator().camera().center, GeoPoint::new(0.0, 0.0));
        assert_eq!(app.selection().selected_country(), None);
    }

    #[test]
    fn direct_manipulation_bypasses_selection() {
        let mut app = app();
        let center = GeoPoint::new(12.0, 34.0);
        let _ = app.update(Message::Map(map_canvas::Message::Panned(center)));
        let _ = app.update(Message::Map(map_canvas::Message::Zoomed {
            zoom: Zoom::new(3.0).unwrap(),
            center,
        }));

        assert_eq!(app.animator().camera().center, center);
        assert_eq!(app.animator().camera().zoom.value(), 3.0);
        assert_eq!(app.selection().selected_code(), None);
        assert!(!app.animator().is_animating());
    }

    #[test]
    fn marker_hover_drives_tooltip() {
        let mut app = app();
        let _ = app.update(Message::Map(map_canvas::Message::MarkerHover {
            entered: Some("SG".into()),
            left: None,
        }));
        assert_eq!(app.selection().tooltip(), "SG");

        let _ = app.update(Message::Map(map_canvas::Message::MarkerHover {
            entered: Some("BKK".into()),
            left: Some("SG".into()),
        }));
        assert_eq!(app.selection().tooltip(), "BKK");

        let _ = app.update(Message::List(facility_list::Message::RowExited("BKK".into())));
        assert_eq!(app.selection().tooltip(), "");
    }

    #[test]
    fn warning_can_be_dismissed() {
        let mut app = app();
        app.warning = Some("notification-config-load-error".into());
        let _ = app.update(Message::DismissWarning);
        assert_eq!(app.warning(), None);
    }

    #[test]
    fn broken_catalog_override_falls_back_to_embedded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("facilities.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let (directory, warning) = load_directory(Some(path));

        assert!(directory.contains("SG"));
        assert_eq!(warning.as_deref(), Some("notification-catalog-load-error"));
    }

    #[test]
    fn title_is_localized() {
        let app = app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }
}
