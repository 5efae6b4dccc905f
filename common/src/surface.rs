//! Drawing surface abstraction.
//!
//! The face only ever needs four primitives: a stroked line, a filled convex
//! polygon, a closed polygon outline and a filled circle. [`Surface`] is that
//! seam; [`DisplaySurface`] implements it on top of any embedded-graphics
//! `DrawTarget<Color = Rgb565>` (simulator window, PNG buffer or a real panel).
//!
//! Draw errors from the target are ignored with `.ok()`, like every widget in
//! this code base: a failed pixel write is not something the face can recover from.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Polyline, Triangle};
use heapless::Vec;

/// Longest closed outline drawn as a single polyline (with proper joins).
/// Longer outlines fall back to one line per edge.
const MAX_POLYLINE_POINTS: usize = 16;

/// Stroke color and width for lines and outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb565,
    pub width: u32,
}

impl Stroke {
    pub const fn new(
        color: Rgb565,
        width: u32,
    ) -> Self {
        Self { color, width }
    }

    #[inline]
    const fn style(self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_stroke(self.color, self.width) }
}

/// Primitive drawing operations the watch face is composed from.
///
/// Polygon vertices are absolute device coordinates. Polygons passed to
/// [`Surface::fill_polygon`] are convex (hexagons and hand kites).
pub trait Surface {
    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        stroke: Stroke,
    );

    fn fill_polygon(
        &mut self,
        points: &[Point],
        color: Rgb565,
    );

    /// Draw the closed outline through `points` (last vertex connects back to the first).
    fn outline_polygon(
        &mut self,
        points: &[Point],
        stroke: Stroke,
    );

    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: Rgb565,
    );
}

/// [`Surface`] backed by an embedded-graphics draw target.
pub struct DisplaySurface<'a, D> {
    display: &'a mut D,
}

impl<'a, D> DisplaySurface<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(display: &'a mut D) -> Self { Self { display } }
}

impl<D> Surface for DisplaySurface<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        stroke: Stroke,
    ) {
        Line::new(start, end)
            .into_styled(stroke.style())
            .draw(&mut *self.display)
            .ok();
    }

    fn fill_polygon(
        &mut self,
        points: &[Point],
        color: Rgb565,
    ) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        // Triangle fan from the first vertex; valid for convex polygons
        let style = PrimitiveStyle::with_fill(color);
        for pair in rest.windows(2) {
            Triangle::new(first, pair[0], pair[1])
                .into_styled(style)
                .draw(&mut *self.display)
                .ok();
        }
    }

    fn outline_polygon(
        &mut self,
        points: &[Point],
        stroke: Stroke,
    ) {
        if points.len() < 2 {
            return;
        }

        let mut closed: Vec<Point, MAX_POLYLINE_POINTS> = Vec::new();
        if closed.extend_from_slice(points).is_ok() && closed.push(points[0]).is_ok() {
            Polyline::new(&closed)
                .into_styled(stroke.style())
                .draw(&mut *self.display)
                .ok();
            return;
        }

        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.draw_line(start, end, stroke);
        }
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: Rgb565,
    ) {
        Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.display)
            .ok();
    }
}

// =============================================================================
// Test Double
// =============================================================================
