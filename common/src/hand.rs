//! Clock hand geometry.
//!
//! A hand is a four-point kite anchored at the pivot:
//!
//! ```text
//!               apex (0, -length)
//!                /\
//!               /  \
//!   (-w/2, -l/3)    (w/2, -l/3)
//!               \  /
//!                \/
//!               tail (0, 0) = pivot
//! ```
//!
//! It points at 12 o'clock before rotation; the composer rotates it clockwise
//! by the hand angle and moves the pivot onto the dial center.

use embedded_graphics::prelude::Point;

/// Number of vertices of a hand polygon.
pub const HAND_VERTICES: usize = 4;

/// Width and length of a kite-shaped hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowSpec {
    pub width: i32,
    pub length: i32,
}

impl ArrowSpec {
    pub const fn new(
        width: i32,
        length: i32,
    ) -> Self {
        Self { width, length }
    }

    /// Vertices relative to the pivot: tail, left shoulder, apex, right shoulder.
    pub const fn points(&self) -> [Point; HAND_VERTICES] {
        let half_w = self.width / 2;
        let shoulder = -self.length / 3;
        [
            Point::zero(),
            Point::new(-half_w, shoulder),
            Point::new(0, -self.length),
            Point::new(half_w, shoulder),
        ]
    }

    /// Radius of the dot drawn over the pivot.
    pub const fn pivot_radius(&self) -> u32 {
        let r = self.width / 3;
        if r < 2 { 2 } else { r as u32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::GraphicsPath;

    #[test]
    fn test_points() {
        let hand = ArrowSpec::new(10, 30);
        assert_eq!(
            hand.points(),
            [Point::new(0, 0), Point::new(-5, -10), Point::new(0, -30), Point::new(5, -10)]
        );
    }

    #[test]
    fn test_rotated_to_three_oclock() {
        let hand = ArrowSpec::new(10, 30);
        let mut path = GraphicsPath::new();
        path.set_points(&hand.points()).rotate_to(90).move_to(Point::new(50, 50));
        let pts = path.transformed();
        assert_eq!(pts[0], Point::new(50, 50), "tail stays on the pivot");
        assert_eq!(pts[2], Point::new(80, 50), "apex points right");
        assert_eq!(pts[1], Point::new(60, 45));
        assert_eq!(pts[3], Point::new(60, 55));
    }

    #[test]
    fn test_rotated_to_six_oclock() {
        let hand = ArrowSpec::new(10, 30);
        let mut path = GraphicsPath::new();
        path.set_points(&hand.points()).rotate_to(180);
        assert_eq!(path.transformed()[2], Point::new(0, 30));
    }

    #[test]
    fn test_pivot_radius_floor() {
        assert_eq!(ArrowSpec::new(3, 30).pivot_radius(), 2);
        assert_eq!(ArrowSpec::new(12, 30).pivot_radius(), 4);
    }
}
