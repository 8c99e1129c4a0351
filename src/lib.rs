// SPDX-License-Identifier: MPL-2.0
//! `facility_map` is an interactive facility map dashboard built with the
//! Iced GUI framework.
//!
//! The core is UI independent: [`camera::ViewportAnimator`] tweens the map
//! camera in two timed phases, and [`selection::SelectionController`] keeps
//! marker visibility, list highlighting, tooltip and camera focus in step
//! with the current selection. The [`app`] and [`ui`] modules wire both into
//! an Iced application.

#![doc(html_root_url = "https://docs.rs/facility_map/0.1.0")]

pub mod app;
pub mod camera;
pub mod error;
pub mod facility;
pub mod i18n;
pub mod logging;
pub mod selection;
pub mod ui;
