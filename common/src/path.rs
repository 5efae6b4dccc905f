//! Reusable polygon path with rotation and translation.
//!
//! The face draws many hexagons and two hands, all with a handful of vertices.
//! Instead of building a new polygon per call, the composer owns one
//! [`GraphicsPath`] whose fixed-capacity vertex buffer is overwritten for every
//! shape. Vertices are stored relative to a pivot at (0, 0); rotation is
//! applied around the pivot first, then the path is moved to its offset.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use heapless::Vec;

use crate::geometry::rotate;
use crate::surface::{Stroke, Surface};

/// Maximum vertices a path can hold.
pub const MAX_PATH_POINTS: usize = 8;

/// Transformed vertex list of a path.
pub type PathPoints = Vec<Point, MAX_PATH_POINTS>;

/// A polygon in pivot-relative coordinates plus its placement.
#[derive(Clone, Debug, Default)]
pub struct GraphicsPath {
    points: PathPoints,
    rotation: i32,
    offset: Point,
}

impl GraphicsPath {
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            rotation: 0,
            offset: Point::zero(),
        }
    }

    /// Replace the vertices and reset rotation and offset.
    ///
    /// Vertices beyond [`MAX_PATH_POINTS`] are dropped.
    pub fn set_points(
        &mut self,
        points: &[Point],
    ) -> &mut Self {
        self.points.clear();
        for &p in points.iter().take(MAX_PATH_POINTS) {
            self.points.push(p).ok();
        }
        self.rotation = 0;
        self.offset = Point::zero();
        self
    }

    /// Rotate clockwise around the pivot, in degrees.
    pub fn rotate_to(
        &mut self,
        angle_deg: i32,
    ) -> &mut Self {
        self.rotation = angle_deg;
        self
    }

    /// Place the pivot at `offset`.
    pub fn move_to(
        &mut self,
        offset: Point,
    ) -> &mut Self {
        self.offset = offset;
        self
    }

    /// Vertices as stored, before rotation and translation.
    pub fn points(&self) -> &[Point] { &self.points }

    /// Vertices in device coordinates.
    pub fn transformed(&self) -> PathPoints {
        self.points
            .iter()
            .map(|&p| rotate(p, self.rotation) + self.offset)
            .collect()
    }

    pub fn draw_filled<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        color: Rgb565,
    ) {
        surface.fill_polygon(&self.transformed(), color);
    }

    pub fn draw_outline<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        stroke: Stroke,
    ) {
        surface.outline_polygon(&self.transformed(), stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, YELLOW};
    use crate::hexagon::hexagon_points;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn test_translation_only() {
        let mut path = GraphicsPath::new();
        path.set_points(&hexagon_points(40)).move_to(Point::new(100, 50));
        let pts = path.transformed();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[2], Point::new(100, 30), "top tip moves with the offset");
        assert_eq!(pts[5], Point::new(100, 70));
    }

    #[test]
    fn test_rotation_then_translation() {
        let mut path = GraphicsPath::new();
        path.set_points(&[Point::new(0, 0), Point::new(0, -20)])
            .rotate_to(90)
            .move_to(Point::new(10, 10));
        let pts = path.transformed();
        assert_eq!(pts.as_slice(), &[Point::new(10, 10), Point::new(30, 10)]);
    }

    #[test]
    fn test_set_points_resets_placement() {
        let mut path = GraphicsPath::new();
        path.set_points(&[Point::new(0, -5)]).rotate_to(180).move_to(Point::new(3, 3));
        path.set_points(&[Point::new(0, -5)]);
        assert_eq!(path.transformed().as_slice(), &[Point::new(0, -5)]);
    }

    #[test]
    fn test_set_points_overwrites_buffer() {
        let mut path = GraphicsPath::new();
        path.set_points(&hexagon_points(40));
        path.set_points(&[Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]);
        assert_eq!(path.points().len(), 3, "old vertices do not leak into the new shape");
    }

    #[test]
    fn test_capacity_truncates() {
        let many = [Point::zero(); MAX_PATH_POINTS + 3];
        let mut path = GraphicsPath::new();
        path.set_points(&many);
        assert_eq!(path.points().len(), MAX_PATH_POINTS);
    }

    #[test]
    fn test_draw_calls_surface() {
        let mut surface = RecordingSurface::new();
        let mut path = GraphicsPath::new();
        path.set_points(&hexagon_points(20)).move_to(Point::new(5, 5));
        path.draw_filled(&mut surface, YELLOW);
        path.draw_outline(&mut surface, Stroke::new(BLACK, 2));

        let (fill_pts, fill_color) = surface.fills().next().unwrap();
        assert_eq!(fill_color, YELLOW);
        assert_eq!(fill_pts, path.transformed().as_slice());

        let (outline_pts, stroke) = surface.outlines().next().unwrap();
        assert_eq!(stroke, Stroke::new(BLACK, 2));
        assert_eq!(outline_pts, fill_pts);
    }
}
