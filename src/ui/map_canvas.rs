// SPDX-License-Identifier: MPL-2.0
//! World map canvas: graticule, facility markers and pointer interaction.
//!
//! The canvas never changes the camera itself. Drags and wheel steps are
//! published as [`Message`]s carrying the new camera values, and the
//! application writes them into the animator.

use crate::app::config::WHEEL_ZOOM_FACTOR;
use crate::camera::{CameraState, GeoPoint, Zoom};
use crate::facility::FacilityRecord;
use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::projection::{find_nearest, Projection};
use crate::ui::theme;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Wheel "pixel" deltas are converted to lines with this ratio.
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

/// Spacing of graticule lines, in degrees.
const GRATICULE_STEP: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The map was dragged; the camera should move to this center.
    Panned(GeoPoint),
    /// The wheel was used over the map.
    Zoomed { zoom: Zoom, center: GeoPoint },
    MarkerClicked(String),
    /// Hover moved between markers. Either side may be empty.
    MarkerHover {
        entered: Option<String>,
        left: Option<String>,
    },
}

/// Press in progress on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin: Point,
    start_center: GeoPoint,
    /// Set once the pointer travelled past the drag threshold.
    moved: bool,
}

/// Per-widget interaction state kept by iced between events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    drag: Option<Drag>,
    hovered: Option<String>,
}

/// Canvas program for one frame of the map.
pub struct MapCanvas<'a> {
    camera: CameraState,
    markers: Vec<&'a FacilityRecord>,
    selected: Option<&'a FacilityRecord>,
    zoom_bounds: (Zoom, Zoom),
}

impl<'a> MapCanvas<'a> {
    #[must_use]
    pub fn new(
        camera: CameraState,
        markers: Vec<&'a FacilityRecord>,
        selected: Option<&'a FacilityRecord>,
        zoom_bounds: (Zoom, Zoom),
    ) -> Self {
        Self {
            camera,
            markers,
            selected,
            zoom_bounds,
        }
    }

    fn projection(&self, size: Size) -> Projection {
        Projection::new(size, self.camera)
    }

    /// Code of the visible marker under `position`, if any.
    fn marker_at(&self, size: Size, position: Point) -> Option<&'a str> {
        let projection = self.projection(size);
        let points: Vec<Point> = self
            .markers
            .iter()
            .map(|record| projection.project(record.coordinates))
            .collect();
        find_nearest(&points, position, sizing::MARKER_HIT_RADIUS)
            .map(|index| self.markers[index].code.as_str())
    }

    fn press(&self, state: &mut State, position: Point) {
        state.drag = Some(Drag {
            origin: position,
            start_center: self.camera.center,
            moved: false,
        });
    }

    fn cursor_moved(&self, state: &mut State, size: Size, position: Point) -> Option<Message> {
        if let Some(drag) = state.drag.as_mut() {
            let delta: Vector = position - drag.origin;
            if !drag.moved && position.distance(drag.origin) > sizing::DRAG_THRESHOLD {
                drag.moved = true;
            }
            if drag.moved {
                let center = self.projection(size).pan_center(drag.start_center, delta);
                return Some(Message::Panned(center));
            }
            return None;
        }

        let hit = self.marker_at(size, position).map(str::to_string);
        self.update_hover(state, hit)
    }

    fn release(&self, state: &mut State, size: Size, position: Option<Point>) -> Option<Message> {
        let drag = state.drag.take()?;
        if drag.moved {
            return None;
        }
        let code = self.marker_at(size, position?)?;
        Some(Message::MarkerClicked(code.to_string()))
    }

    fn scroll(&self, size: Size, position: Point, lines: f32) -> Option<Message> {
        if lines == 0.0 {
            return None;
        }
        let (min, max) = self.zoom_bounds;
        let requested = self.camera.zoom.value() * WHEEL_ZOOM_FACTOR.powf(f64::from(lines));
        let zoom = Zoom::clamped(requested, min, max);
        if zoom == self.camera.zoom {
            return None;
        }
        let center = self.projection(size).zoom_at(position, zoom.value());
        Some(Message::Zoomed { zoom, center })
    }

    fn update_hover(&self, state: &mut State, hit: Option<String>) -> Option<Message> {
        if state.hovered == hit {
            return None;
        }
        let left = std::mem::replace(&mut state.hovered, hit.clone());
        Some(Message::MarkerHover { entered: hit, left })
    }

    fn draw_graticule(&self, frame: &mut Frame, projection: &Projection) {
        let stroke = Stroke::default()
            .with_width(1.0)
            .with_color(palette::GRATICULE);

        for lon in (0..=360).step_by(GRATICULE_STEP) {
            let lon = lon as f64 - 180.0;
            let line = Path::line(
                projection.project(GeoPoint::new(lon, -90.0)),
                projection.project(GeoPoint::new(lon, 90.0)),
            );
            frame.stroke(&line, stroke);
        }
        for lat in (0..=180).step_by(GRATICULE_STEP) {
            let lat = lat as f64 - 90.0;
            let line = Path::line(
                projection.project(GeoPoint::new(-180.0, lat)),
                projection.project(GeoPoint::new(180.0, lat)),
            );
            frame.stroke(&line, stroke);
        }

        // World frame
        let top_left = projection.project(GeoPoint::new(-180.0, 90.0));
        let bottom_right = projection.project(GeoPoint::new(180.0, -90.0));
        let world = Path::rectangle(
            top_left,
            Size::new(bottom_right.x - top_left.x, bottom_right.y - top_left.y),
        );
        frame.stroke(
            &world,
            Stroke::default()
                .with_width(1.5)
                .with_color(palette::SURFACE_500),
        );
    }

    fn draw_markers(&self, frame: &mut Frame, projection: &Projection, hovered: Option<&str>) {
        for record in &self.markers {
            let center = projection.project(record.coordinates);
            let glow_radius = if hovered == Some(record.code.as_str()) {
                sizing::MARKER_GLOW_RADIUS * 1.4
            } else {
                sizing::MARKER_GLOW_RADIUS
            };
            frame.fill(
                &Path::circle(center, glow_radius),
                theme::status_glow(record.status),
            );
            frame.fill(
                &Path::circle(center, sizing::MARKER_DOT_RADIUS),
                theme::status_color(record.status),
            );
        }
    }

    fn draw_annotation(&self, frame: &mut Frame, projection: &Projection) {
        let Some(record) = self.selected else {
            return;
        };
        let anchor = projection.project(record.coordinates);
        let elbow = anchor + Vector::new(sizing::ANNOTATION_DX, sizing::ANNOTATION_DY);

        frame.stroke(
            &Path::line(anchor, elbow),
            Stroke::default()
                .with_width(1.5)
                .with_color(theme::highlight_color()),
        );
        frame.fill_text(canvas::Text {
            content: record.code.clone(),
            position: elbow + Vector::new(4.0, -typography::BODY),
            color: theme::highlight_color(),
            size: typography::BODY.into(),
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let size = bounds.size();

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.press(state, position);
                Some(Action::capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Drags keep following the pointer outside the bounds.
                let position = if state.drag.is_some() {
                    cursor.position_from(bounds.position())?
                } else {
                    match cursor.position_in(bounds) {
                        Some(position) => position,
                        None => {
                            return self
                                .update_hover(state, None)
                                .map(Action::publish);
                        }
                    }
                };
                self.cursor_moved(state, size, position)
                    .map(|message| Action::publish(message).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.drag.is_none() {
                    return None;
                }
                let message = self.release(state, size, cursor.position_in(bounds));
                Some(match message {
                    Some(message) => Action::publish(message).and_capture(),
                    None => Action::capture(),
                })
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.drag = None;
                self.update_hover(state, None).map(Action::publish)
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_SCROLL_LINE,
                };
                self.scroll(size, position, lines)
                    .map(|message| Action::publish(message).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let projection = self.projection(bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::OCEAN);
        self.draw_graticule(&mut frame, &projection);
        self.draw_markers(&mut frame, &projection, state.hovered.as_deref());
        self.draw_annotation(&mut frame, &projection);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match &state.drag {
            Some(drag) if drag.moved => mouse::Interaction::Grabbing,
            _ if state.hovered.is_some() && cursor.is_over(bounds) => mouse::Interaction::Pointer,
            _ if cursor.is_over(bounds) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}
