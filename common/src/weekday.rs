//! Day-of-week selector: a flower of seven small hexagons.
//!
//! The small hexagons are a quarter of the big cell height and laid out in
//! rows of 2, 3 and 2, so the middle one sits on the cell center:
//!
//! ```text
//!      S   M
//!    T   W   T
//!      F   S
//! ```
//!
//! Index 0 is Sunday. The current day is drawn filled in ink with a yellow
//! outline and yellow initial; the others are outlined in ink only.

use embedded_graphics::prelude::{Point, Size};

use crate::clock::DAYS_PER_WEEK;
use crate::colors::{CELL_FILL, INK};
use crate::config::{GLYPH_STROKE_WIDTH, WEEKDAY_HEX_DIVISOR, WEEKDAY_INITIALS, WEEKDAY_ROWS, WEEKDAY_STAGGER_START, WEEKDAY_STROKE_WIDTH};
use crate::geometry::rect_from_midpoint;
use crate::glyphs::draw_one_letter;
use crate::hexagon::HexagonSpec;
use crate::path::GraphicsPath;
use crate::surface::{Stroke, Surface};

const DAYS: usize = DAYS_PER_WEEK as usize;

/// Placement of the seven day hexagons inside one big cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekdaySelector {
    hexagon: HexagonSpec,
    centers: [Point; DAYS],
    letter_size: Size,
}

impl WeekdaySelector {
    /// Lay out the selector centered on a big cell of height `cell_height`.
    pub fn new(
        cell_center: Point,
        cell_height: i32,
    ) -> Self {
        let hexagon = HexagonSpec::new(cell_height / WEEKDAY_HEX_DIVISOR);
        let origin = Point::new(cell_center.x - hexagon.width(), cell_center.y - hexagon.row_stride());

        let mut centers = [cell_center; DAYS];
        let grid = crate::tessellation::tessellate(origin, hexagon.height, WEEKDAY_STAGGER_START, &WEEKDAY_ROWS);
        for (slot, center) in centers.iter_mut().zip(grid) {
            *slot = center;
        }

        let letter_size = Size::new((hexagon.width() / 2).max(0) as u32, (hexagon.height * 2 / 5).max(0) as u32);

        Self {
            hexagon,
            centers,
            letter_size,
        }
    }

    #[inline]
    pub const fn hexagon(&self) -> HexagonSpec { self.hexagon }

    /// Centers in weekday order, Sunday first.
    #[inline]
    pub const fn centers(&self) -> &[Point; DAYS] { &self.centers }

    /// Draw all seven days, highlighting `weekday` (0 = Sunday).
    ///
    /// An out-of-range `weekday` draws every day unhighlighted.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        path: &mut GraphicsPath,
        weekday: u8,
    ) {
        let outline = self.hexagon.points();
        for (day, (&center, &initial)) in self.centers.iter().zip(WEEKDAY_INITIALS.iter()).enumerate() {
            path.set_points(&outline).move_to(center);

            let ink = if day == weekday as usize {
                path.draw_filled(surface, INK);
                path.draw_outline(surface, Stroke::new(CELL_FILL, WEEKDAY_STROKE_WIDTH));
                CELL_FILL
            } else {
                path.draw_outline(surface, Stroke::new(INK, WEEKDAY_STROKE_WIDTH));
                INK
            };

            let bbox = rect_from_midpoint(center, self.letter_size);
            draw_one_letter(surface, initial, &bbox, Stroke::new(ink, GLYPH_STROKE_WIDTH));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;

    const CENTER: Point = Point::new(120, 100);

    fn selector() -> WeekdaySelector {
        // Big cell 112 high: small hexagons 28 high, 24 wide, row stride 21
        WeekdaySelector::new(CENTER, 112)
    }

    #[test]
    fn test_small_hexagon_size() {
        let sel = selector();
        assert_eq!(sel.hexagon().height, 28);
        assert_eq!(sel.hexagon().width(), 24);
    }

    #[test]
    fn test_wednesday_on_cell_center() {
        assert_eq!(selector().centers()[3], CENTER);
    }

    #[test]
    fn test_flower_layout() {
        let sel = selector();
        let c = sel.centers();
        assert_eq!(c[0], Point::new(108, 79), "Sunday top left");
        assert_eq!(c[1], Point::new(132, 79));
        assert_eq!(c[2], Point::new(96, 100));
        assert_eq!(c[4], Point::new(144, 100));
        assert_eq!(c[5], Point::new(108, 121));
        assert_eq!(c[6], Point::new(132, 121), "Saturday bottom right");
    }

    #[test]
    fn test_single_highlight() {
        let sel = selector();
        let mut surface = RecordingSurface::new();
        let mut path = GraphicsPath::new();
        sel.draw(&mut surface, &mut path, 3);

        let fills: heapless::Vec<(heapless::Vec<Point, 8>, _), 8> = surface
            .fills()
            .map(|(points, color)| (points.iter().copied().collect(), color))
            .collect();
        assert_eq!(fills.len(), 1, "exactly one day is filled");
        let expected: heapless::Vec<Point, 8> = sel.hexagon().points().iter().map(|&p| p + CENTER).collect();
        assert_eq!(fills[0].0, expected);
        assert_eq!(fills[0].1, INK);

        assert_eq!(surface.outlines().count(), 7);
        let highlighted = surface.outlines().filter(|(_, stroke)| stroke.color == CELL_FILL).count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn test_highlight_follows_weekday() {
        let sel = selector();
        for day in 0..DAYS_PER_WEEK {
            let mut surface = RecordingSurface::new();
            let mut path = GraphicsPath::new();
            sel.draw(&mut surface, &mut path, day);
            let (points, _) = surface.fills().next().unwrap();
            let center = sel.centers()[day as usize];
            assert!(points.contains(&(center + Point::new(0, -14))), "day {day} top vertex");
        }
    }

    #[test]
    fn test_out_of_range_weekday_highlights_nothing() {
        let sel = selector();
        let mut surface = RecordingSurface::new();
        let mut path = GraphicsPath::new();
        sel.draw(&mut surface, &mut path, 7);
        assert_eq!(surface.fills().count(), 0);
        assert_eq!(surface.outlines().count(), 7);
    }

    #[test]
    fn test_initials_drawn() {
        let sel = selector();
        let mut surface = RecordingSurface::new();
        let mut path = GraphicsPath::new();
        sel.draw(&mut surface, &mut path, 0);
        // S(5) M(4) T(2) W(4) T(2) F(3) S(5)
        assert_eq!(surface.line_count(), 25);
    }
}
