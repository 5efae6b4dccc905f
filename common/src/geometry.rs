//! Geometry helpers shared by the dial, hand and glyph code.
//!
//! Angles are integer degrees measured clockwise from 12 o'clock, matching a
//! screen whose y axis points down. Trigonometry runs in `f32` through
//! `micromath` (no_std) and results are rounded to the nearest pixel.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
#[cfg_attr(test, allow(unused_imports))]
use micromath::F32Ext;

/// Sine and cosine of an angle given in whole degrees.
#[inline]
pub fn sin_cos_degrees(angle_deg: i32) -> (f32, f32) {
    let radians = (angle_deg.rem_euclid(360) as f32).to_radians();
    (radians.sin(), radians.cos())
}

/// Point `radius` pixels away from `center` in the direction of `angle_deg`.
///
/// 0 degrees points up (12 o'clock), 90 degrees points right (3 o'clock).
pub fn cartesian_from_polar(
    center: Point,
    radius: i32,
    angle_deg: i32,
) -> Point {
    let (sin, cos) = sin_cos_degrees(angle_deg);
    let r = radius as f32;
    Point::new(center.x + (sin * r).round() as i32, center.y - (cos * r).round() as i32)
}

/// Rotate `point` clockwise around the origin by `angle_deg`.
pub fn rotate(
    point: Point,
    angle_deg: i32,
) -> Point {
    if angle_deg.rem_euclid(360) == 0 {
        return point;
    }
    let (sin, cos) = sin_cos_degrees(angle_deg);
    let x = point.x as f32;
    let y = point.y as f32;
    Point::new((x * cos - y * sin).round() as i32, (x * sin + y * cos).round() as i32)
}

/// Rectangle of `size` whose center sits on `midpoint`.
///
/// Odd sizes put the extra pixel on the right/bottom, like integer halving does.
pub fn rect_from_midpoint(
    midpoint: Point,
    size: Size,
) -> Rectangle {
    let top_left = Point::new(midpoint.x - (size.width / 2) as i32, midpoint.y - (size.height / 2) as i32);
    Rectangle::new(top_left, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(50, 60);

    #[test]
    fn test_polar_cardinal_directions() {
        assert_eq!(cartesian_from_polar(CENTER, 20, 0), Point::new(50, 40), "0 deg points up");
        assert_eq!(cartesian_from_polar(CENTER, 20, 90), Point::new(70, 60), "90 deg points right");
        assert_eq!(cartesian_from_polar(CENTER, 20, 180), Point::new(50, 80), "180 deg points down");
        assert_eq!(cartesian_from_polar(CENTER, 20, 270), Point::new(30, 60), "270 deg points left");
    }

    #[test]
    fn test_polar_wraps_full_turns() {
        assert_eq!(cartesian_from_polar(CENTER, 20, 450), cartesian_from_polar(CENTER, 20, 90));
        assert_eq!(cartesian_from_polar(CENTER, 20, -90), cartesian_from_polar(CENTER, 20, 270));
    }

    #[test]
    fn test_polar_zero_radius_is_center() {
        assert_eq!(cartesian_from_polar(CENTER, 0, 123), CENTER);
    }

    #[test]
    fn test_polar_diagonal() {
        // 45 deg at radius 100: 70.7 px on both axes
        let p = cartesian_from_polar(Point::zero(), 100, 45);
        assert_eq!(p, Point::new(71, -71));
    }

    #[test]
    fn test_rotate_quarter_turns() {
        let up = Point::new(0, -10);
        assert_eq!(rotate(up, 0), up);
        assert_eq!(rotate(up, 90), Point::new(10, 0), "12 o'clock rotates to 3 o'clock");
        assert_eq!(rotate(up, 180), Point::new(0, 10));
        assert_eq!(rotate(up, 270), Point::new(-10, 0));
        assert_eq!(rotate(up, 360), up);
    }

    #[test]
    fn test_rotate_matches_polar() {
        // Rotating a point straight up must land where the polar helper puts it
        for angle in (0..360).step_by(15) {
            assert_eq!(
                rotate(Point::new(0, -40), angle),
                cartesian_from_polar(Point::zero(), 40, angle),
                "mismatch at {angle} deg"
            );
        }
    }

    #[test]
    fn test_rect_from_midpoint() {
        let rect = rect_from_midpoint(Point::new(10, 10), Size::new(6, 4));
        assert_eq!(rect.top_left, Point::new(7, 8));
        assert_eq!(rect.size, Size::new(6, 4));
    }

    #[test]
    fn test_rect_from_midpoint_odd_size() {
        let rect = rect_from_midpoint(Point::new(10, 10), Size::new(5, 5));
        assert_eq!(rect.top_left, Point::new(8, 8));
    }
}
