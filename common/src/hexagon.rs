//! Pointy-top hexagon metrics.
//!
//! A hexagon is described by its vertical extent `H` (tip to tip). The width
//! and side length are derived with fixed-point integer math so layouts are
//! pixel-identical on every target:
//!
//! ```text
//!            (0,-R)
//!           /      \
//!   (-r,-hsl)      (r,-hsl)        R   = H / 2
//!       |     0,0      |           W   = H * 866 / 1000   (sqrt(3)/2)
//!   (-r, hsl)      (r, hsl)        r   = W / 2
//!           \      /               hsl = H / 4
//!            (0, R)
//! ```
//!
//! The side of a regular hexagon equals its circumradius, so the half side is
//! exactly `H / 4`. Only the integer truncation and the `866 / 1000` width
//! factor are approximate.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Number of vertices of a hexagon.
pub const HEXAGON_VERTICES: usize = 6;

/// Width of a pointy-top hexagon of height `h` (`h * sqrt(3) / 2`).
#[inline]
pub const fn hex_width(h: i32) -> i32 { h * 866 / 1000 }

/// Height of a pointy-top hexagon of width `w` (`w * 2 / sqrt(3)`).
#[inline]
pub const fn hex_height(w: i32) -> i32 { w * 1000 / 866 }

/// Half the length of one edge of a hexagon of height `h`.
#[inline]
pub const fn hex_half_side_length(h: i32) -> i32 { h / 4 }

/// A pointy-top hexagon of a given height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexagonSpec {
    /// Vertical extent, tip to tip.
    pub height: i32,
}

impl HexagonSpec {
    pub const fn new(height: i32) -> Self { Self { height } }

    /// Build the hexagon that is `width` pixels wide.
    pub const fn from_width(width: i32) -> Self { Self::new(hex_height(width)) }

    #[inline]
    pub const fn width(&self) -> i32 { hex_width(self.height) }

    /// Circumradius: center to the top and bottom tips.
    #[inline]
    pub const fn circumradius(&self) -> i32 { self.height / 2 }

    #[inline]
    pub const fn half_side_length(&self) -> i32 { hex_half_side_length(self.height) }

    /// Distance between the centers of two vertically adjacent rows.
    #[inline]
    pub const fn row_stride(&self) -> i32 { self.circumradius() + self.half_side_length() }

    /// The six vertices relative to the center.
    ///
    /// Order is bottom-left, top-left, top, top-right, bottom-right, bottom.
    /// The polygon drawing code walks them in this order to close the outline.
    pub const fn points(&self) -> [Point; HEXAGON_VERTICES] {
        let big_r = self.circumradius();
        let r = self.width() / 2;
        let hsl = self.half_side_length();
        [
            Point::new(-r, hsl),
            Point::new(-r, -hsl),
            Point::new(0, -big_r),
            Point::new(r, -hsl),
            Point::new(r, hsl),
            Point::new(0, big_r),
        ]
    }

    /// Bounding box of the hexagon when centered on `center`.
    pub fn bounding_box(
        &self,
        center: Point,
    ) -> Rectangle {
        let w = self.width().max(0);
        let h = self.height.max(0);
        crate::geometry::rect_from_midpoint(center, Size::new(w as u32, h as u32))
    }
}

/// Vertices of a hexagon of height `h` centered on the origin.
#[inline]
pub const fn hexagon_points(h: i32) -> [Point; HEXAGON_VERTICES] { HexagonSpec::new(h).points() }
