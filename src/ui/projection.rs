// SPDX-License-Identifier: MPL-2.0
//! Equirectangular projection between geographic and screen coordinates.
//!
//! At zoom 1 the full 360° of longitude spans the width of the map. The
//! camera center is always drawn in the middle of the bounds; screen `y`
//! grows downward while latitude grows northward.

use crate::camera::{CameraState, GeoPoint};
use iced::{Point, Size, Vector};

/// Projection for one frame: fixed bounds and camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    size: Size,
    center: GeoPoint,
    zoom: f64,
}

impl Projection {
    #[must_use]
    pub fn new(size: Size, camera: CameraState) -> Self {
        Self {
            size,
            center: camera.center,
            zoom: camera.zoom.value(),
        }
    }

    /// Screen pixels per degree of longitude or latitude.
    #[must_use]
    pub fn pixels_per_degree(&self) -> f64 {
        f64::from(self.size.width) / 360.0 * self.zoom
    }

    fn middle(&self) -> (f64, f64) {
        (
            f64::from(self.size.width) / 2.0,
            f64::from(self.size.height) / 2.0,
        )
    }

    /// Geographic point to position inside the bounds.
    #[must_use]
    pub fn project(&self, point: GeoPoint) -> Point {
        let ppd = self.pixels_per_degree();
        let (mid_x, mid_y) = self.middle();
        Point::new(
            (mid_x + (point.lon - self.center.lon) * ppd) as f32,
            (mid_y - (point.lat - self.center.lat) * ppd) as f32,
        )
    }

    /// Position inside the bounds to geographic point. A collapsed map maps
    /// everything to the center.
    #[must_use]
    pub fn unproject(&self, screen: Point) -> GeoPoint {
        let ppd = self.pixels_per_degree();
        if ppd <= 0.0 {
            return self.center;
        }
        let (mid_x, mid_y) = self.middle();
        GeoPoint::new(
            self.center.lon + (f64::from(screen.x) - mid_x) / ppd,
            self.center.lat - (f64::from(screen.y) - mid_y) / ppd,
        )
    }

    /// Center after dragging the map by `drag` pixels from a gesture that
    /// started at `start_center`. The content follows the pointer.
    #[must_use]
    pub fn pan_center(&self, start_center: GeoPoint, drag: Vector) -> GeoPoint {
        let ppd = self.pixels_per_degree();
        if ppd <= 0.0 {
            return start_center;
        }
        GeoPoint::new(
            start_center.lon - f64::from(drag.x) / ppd,
            start_center.lat + f64::from(drag.y) / ppd,
        )
    }

    /// Center that keeps the geographic point under `cursor` in place when
    /// the zoom changes to `new_zoom`.
    #[must_use]
    pub fn zoom_at(&self, cursor: Point, new_zoom: f64) -> GeoPoint {
        if new_zoom <= 0.0 {
            return self.center;
        }
        let anchor = self.unproject(cursor);
        anchor.lerp(self.center, self.zoom / new_zoom)
    }
}

/// Index of the point closest to `cursor`, if any lies strictly within
/// `threshold` pixels.
#[must_use]
pub fn find_nearest(points: &[Point], cursor: Point, threshold: f32) -> Option<usize> {
    let mut best_idx = None;
    let mut best_dist = threshold;
    for (i, point) in points.iter().enumerate() {
        let dist = point.distance(cursor);
        if dist < best_dist {
            best_dist = dist;
            best_idx = Some(i);
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Zoom;

    const EPSILON: f64 = 1e-3;

    fn projection(center: GeoPoint, zoom: f64) -> Projection {
        Projection::new(
            Size::new(720.0, 360.0),
            CameraState::new(center, Zoom::new(zoom).unwrap()),
        )
    }

    #[test]
    fn world_spans_width_at_zoom_one() {
        let proj = projection(GeoPoint::default(), 1.0);
        assert!((proj.pixels_per_degree() - 2.0).abs() < EPSILON);
        assert_eq!(proj.project(GeoPoint::new(-180.0, 0.0)), Point::new(0.0, 180.0));
        assert_eq!(proj.project(GeoPoint::new(180.0, 0.0)), Point::new(720.0, 180.0));
    }

    #[test]
    fn center_projects_to_middle() {
        let proj = projection(GeoPoint::new(103.8, 1.35), 4.0);
        assert_eq!(proj.project(GeoPoint::new(103.8, 1.35)), Point::new(360.0, 180.0));
    }

    #[test]
    fn north_is_up() {
        let proj = projection(GeoPoint::default(), 1.0);
        let north = proj.project(GeoPoint::new(0.0, 45.0));
        assert!(north.y < 180.0);
    }

    #[test]
    fn unproject_inverts_project() {
        let proj = projection(GeoPoint::new(40.0, 0.0), 1.2);
        for point in [
            GeoPoint::new(103.8, 1.35),
            GeoPoint::new(-73.9, 40.7),
            GeoPoint::new(151.2, -33.9),
        ] {
            let back = proj.unproject(proj.project(point));
            assert!((back.lon - point.lon).abs() < EPSILON);
            assert!((back.lat - point.lat).abs() < EPSILON);
        }
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let proj = projection(GeoPoint::default(), 1.0);
        // Dragging right by 20px (10° at 2px/°) reveals what lies west.
        let center = proj.pan_center(GeoPoint::default(), Vector::new(20.0, -20.0));
        assert!((center.lon + 10.0).abs() < EPSILON);
        assert!((center.lat + 10.0).abs() < EPSILON);
    }

    #[test]
    fn zoom_at_keeps_cursor_anchor() {
        let proj = projection(GeoPoint::default(), 1.0);
        let cursor = Point::new(500.0, 100.0);
        let anchor = proj.unproject(cursor);

        let center = proj.zoom_at(cursor, 2.0);
        let zoomed = Projection::new(
            Size::new(720.0, 360.0),
            CameraState::new(center, Zoom::new(2.0).unwrap()),
        );
        let after = zoomed.unproject(cursor);

        assert!((after.lon - anchor.lon).abs() < EPSILON);
        assert!((after.lat - anchor.lat).abs() < EPSILON);
    }

    #[test]
    fn collapsed_bounds_do_not_divide_by_zero() {
        let proj = Projection::new(Size::ZERO, CameraState::default());
        assert_eq!(proj.unproject(Point::new(10.0, 10.0)), GeoPoint::default());
        assert_eq!(
            proj.pan_center(GeoPoint::new(1.0, 2.0), Vector::new(5.0, 5.0)),
            GeoPoint::new(1.0, 2.0)
        );
    }

    #[test]
    fn find_nearest_within_threshold() {
        let points = [Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
        assert_eq!(find_nearest(&points, Point::new(105.0, 100.0), 12.0), Some(0));
    }

    #[test]
    fn find_nearest_outside_threshold() {
        let points = [Point::new(100.0, 100.0)];
        assert_eq!(find_nearest(&points, Point::new(150.0, 150.0), 12.0), None);
    }

    #[test]
    fn find_nearest_picks_closest() {
        let points = [Point::new(100.0, 100.0), Point::new(108.0, 100.0)];
        assert_eq!(find_nearest(&points, Point::new(106.0, 100.0), 12.0), Some(1));
    }
}
