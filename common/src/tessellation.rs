//! Hexagon tessellation engine.
//!
//! Lays out pointy-top hexagon centers row by row. Rows are `row_stride`
//! (`H/2 + H/4`) apart and every other row is shifted right by half a hexagon
//! width so neighbouring rows interlock:
//!
//! ```text
//!   stagger_start = true
//!
//!   row 0:      (  )(  )(  )        x = origin.x + W/2 + c*W
//!   row 1:    (  )(  )(  )          x = origin.x + c*W
//!   row 2:      (  )(  )(  )        x = origin.x + W/2 + c*W
//! ```
//!
//! Centers are produced lazily in row-major order (left to right, top to
//! bottom). The engine never clips: the number of centers is always the sum of
//! the per-row counts. Use [`Tessellation::within`] to explicitly keep only
//! the hexagons that fit inside a viewport.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::hexagon::HexagonSpec;

/// A grid of hexagon centers described by per-row column counts.
#[derive(Clone, Copy, Debug)]
pub struct Tessellation<'a> {
    origin: Point,
    hexagon: HexagonSpec,
    stagger_start: bool,
    rows: &'a [usize],
}

impl<'a> Tessellation<'a> {
    /// Create a tessellation.
    ///
    /// - `origin`: center of the first hexagon of an unstaggered row 0
    /// - `height`: hexagon height `H`
    /// - `stagger_start`: whether row 0 is shifted right by `W/2`
    /// - `rows`: number of hexagons in each row, top to bottom
    pub const fn new(
        origin: Point,
        height: i32,
        stagger_start: bool,
        rows: &'a [usize],
    ) -> Self {
        Self {
            origin,
            hexagon: HexagonSpec::new(height),
            stagger_start,
            rows,
        }
    }

    /// The hexagon every cell is drawn with.
    #[inline]
    pub const fn hexagon(&self) -> HexagonSpec { self.hexagon }

    /// Total number of centers.
    pub fn len(&self) -> usize { self.rows.iter().sum() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Whether `row` is shifted right by half a hexagon width.
    ///
    /// Alternates strictly, starting from `stagger_start` on row 0.
    #[inline]
    pub const fn is_staggered(
        &self,
        row: usize,
    ) -> bool {
        self.stagger_start ^ (row % 2 == 1)
    }

    /// Center of the first hexagon in `row`.
    pub const fn row_origin(
        &self,
        row: usize,
    ) -> Point {
        let x_shift = if self.is_staggered(row) { self.hexagon.width() / 2 } else { 0 };
        Point::new(self.origin.x + x_shift, self.origin.y + row as i32 * self.hexagon.row_stride())
    }

    /// Center of hexagon `col` in `row`. Does not check the row's column count.
    pub const fn center(
        &self,
        row: usize,
        col: usize,
    ) -> Point {
        let start = self.row_origin(row);
        Point::new(start.x + col as i32 * self.hexagon.width(), start.y)
    }

    /// All centers in row-major order.
    pub fn centers(&self) -> Centers<'a> {
        Centers {
            grid: *self,
            row: 0,
            col: 0,
            remaining: self.len(),
        }
    }

    /// Only the centers whose hexagon bounding box lies fully inside `viewport`.
    pub fn within(
        self,
        viewport: Rectangle,
    ) -> impl Iterator<Item = Point> + 'a {
        let hexagon = self.hexagon;
        self.centers()
            .filter(move |center| fits_inside(&hexagon.bounding_box(*center), &viewport))
    }
}

/// Whether `inner` is fully covered by `outer`.
fn fits_inside(
    inner: &Rectangle,
    outer: &Rectangle,
) -> bool {
    let inner_right = inner.top_left.x + inner.size.width as i32;
    let inner_bottom = inner.top_left.y + inner.size.height as i32;
    let outer_right = outer.top_left.x + outer.size.width as i32;
    let outer_bottom = outer.top_left.y + outer.size.height as i32;
    inner.top_left.x >= outer.top_left.x
        && inner.top_left.y >= outer.top_left.y
        && inner_right <= outer_right
        && inner_bottom <= outer_bottom
}

/// Iterator over the centers of a [`Tessellation`].
#[derive(Clone, Debug)]
pub struct Centers<'a> {
    grid: Tessellation<'a>,
    row: usize,
    col: usize,
    remaining: usize,
}

impl Iterator for Centers<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(&count) = self.grid.rows.get(self.row) {
            if self.col < count {
                let center = self.grid.center(self.row, self.col);
                self.col += 1;
                self.remaining -= 1;
                return Some(center);
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for Centers<'_> {}

/// Shorthand for `Tessellation::new(..).centers()`.
pub fn tessellate<'a>(
    origin: Point,
    height: i32,
    stagger_start: bool,
    rows: &'a [usize],
) -> Centers<'a> {
    Tessellation::new(origin, height, stagger_start, rows).centers()
}
