// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! renders from a borrowed `ViewContext` and reports user intent through its
//! own `Message` type, which the application maps into selection events or
//! camera writes.
//!
//! # Components
//!
//! - [`map_canvas`] - World map with markers, drag to pan, wheel to zoom
//! - [`facility_list`] - Tabular list of facilities
//! - [`detail_panel`] - Legend or details of the selection, over the map
//! - [`clock`] - Header clock for a fixed UTC offset
//!
//! # Shared Infrastructure
//!
//! - [`projection`] - Geographic to screen coordinates
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Status colors and the application theme

pub mod clock;
pub mod design_tokens;
pub mod detail_panel;
pub mod facility_list;
pub mod map_canvas;
pub mod projection;
pub mod styles;
pub mod theme;
