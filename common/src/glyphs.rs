//! Seven-segment style digits and day initials drawn with straight strokes.
//!
//! Every glyph is a list of strokes between nine anchor points of its box:
//!
//! ```text
//!   tl ---- tc ---- tr
//!   |                |
//!   ml ---- mc ---- mr
//!   |                |
//!   bl ---- bc ---- br
//! ```
//!
//! The box is inset by one pixel on the left and right so neighbouring digits
//! of a two-digit number do not touch.
//!
//! Strokes span full edges (e.g. `tr-br` is the whole right side), so a digit
//! is usually fewer strokes than lit segments: `7` is two strokes, `8` five.
//! `S` reuses the strokes of `5`. `T` stands for Tuesday and Thursday, `S`
//! for Sunday and Saturday.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::surface::{Stroke, Surface};

/// Named anchor points of a glyph box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

use Anchor::{
    BottomCenter as BC,
    BottomLeft as BL,
    BottomRight as BR,
    MiddleCenter as MC,
    MiddleLeft as ML,
    MiddleRight as MR,
    TopCenter as TC,
    TopLeft as TL,
    TopRight as TR,
};

/// A straight stroke between two anchors.
pub type GlyphStroke = (Anchor, Anchor);

// =============================================================================
// Stroke Tables
// =============================================================================

/// Strokes for digits 0-9.
pub const DIGIT_STROKES: [&[GlyphStroke]; 10] = [
    &[(TL, TR), (TR, BR), (BR, BL), (BL, TL)],
    &[(TC, BC)],
    &[(TL, TR), (TR, MR), (MR, ML), (ML, BL), (BL, BR)],
    &[(TL, TR), (TR, BR), (MR, ML), (BR, BL)],
    &[(TL, ML), (ML, MR), (TR, BR)],
    &[(TL, TR), (TL, ML), (ML, MR), (MR, BR), (BR, BL)],
    &[(TR, TL), (TL, BL), (BL, BR), (BR, MR), (MR, ML)],
    &[(TL, TR), (TR, BR)],
    &[(TL, TR), (ML, MR), (BL, BR), (TL, BL), (TR, BR)],
    &[(MR, ML), (ML, TL), (TL, TR), (TR, BR), (BR, BL)],
];

const LETTER_M: &[GlyphStroke] = &[(BL, TL), (TL, MC), (MC, TR), (TR, BR)];
const LETTER_T: &[GlyphStroke] = &[(TL, TR), (TC, BC)];
const LETTER_W: &[GlyphStroke] = &[(TL, BL), (BL, MC), (MC, BR), (BR, TR)];
const LETTER_F: &[GlyphStroke] = &[(TL, BL), (TL, TR), (ML, MR)];

/// Strokes for a single digit, or `None` outside 0-9.
pub const fn digit_strokes(digit: u32) -> Option<&'static [GlyphStroke]> {
    if digit < 10 { Some(DIGIT_STROKES[digit as usize]) } else { None }
}

/// Strokes for a day initial (`S`, `M`, `T`, `W`, `F`), or `None` for any other letter.
pub const fn letter_strokes(letter: char) -> Option<&'static [GlyphStroke]> {
    match letter {
        'S' => Some(DIGIT_STROKES[5]),
        'M' => Some(LETTER_M),
        'T' => Some(LETTER_T),
        'W' => Some(LETTER_W),
        'F' => Some(LETTER_F),
        _ => None,
    }
}

// =============================================================================
// Anchor Geometry
// =============================================================================

/// Anchor points of a glyph box.
#[derive(Clone, Copy, Debug)]
pub struct GlyphBox {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl GlyphBox {
    /// Inset `bbox` by one pixel horizontally.
    pub const fn new(bbox: &Rectangle) -> Self {
        Self {
            x: bbox.top_left.x + 1,
            y: bbox.top_left.y,
            w: bbox.size.width as i32 - 2,
            h: bbox.size.height as i32,
        }
    }

    pub const fn anchor(
        &self,
        anchor: Anchor,
    ) -> Point {
        let (fx, fy) = match anchor {
            TL => (0, 0),
            TC => (1, 0),
            TR => (2, 0),
            ML => (0, 1),
            MC => (1, 1),
            MR => (2, 1),
            BL => (0, 2),
            BC => (1, 2),
            BR => (2, 2),
        };
        let dx = match fx {
            0 => 0,
            1 => self.w / 2,
            _ => self.w,
        };
        let dy = match fy {
            0 => 0,
            1 => self.h / 2,
            _ => self.h,
        };
        Point::new(self.x + dx, self.y + dy)
    }
}

// =============================================================================
// Drawing
// =============================================================================

fn draw_strokes<S: Surface + ?Sized>(
    surface: &mut S,
    strokes: &[GlyphStroke],
    bbox: &Rectangle,
    stroke: Stroke,
) {
    let glyph = GlyphBox::new(bbox);
    for &(from, to) in strokes {
        surface.draw_line(glyph.anchor(from), glyph.anchor(to), stroke);
    }
}

/// Draw one digit filling `bbox`. Values above 9 draw nothing.
pub fn draw_one_digit<S: Surface + ?Sized>(
    surface: &mut S,
    digit: u32,
    bbox: &Rectangle,
    stroke: Stroke,
) {
    if let Some(strokes) = digit_strokes(digit) {
        draw_strokes(surface, strokes, bbox, stroke);
    }
}

/// Draw a one- or two-digit number inside `bbox`.
///
/// Two digits split the box into a left (tens) and right (ones) half. A
/// single digit uses a half-width box centered horizontally.
pub fn draw_digits<S: Surface + ?Sized>(
    surface: &mut S,
    value: u32,
    bbox: &Rectangle,
    stroke: Stroke,
) {
    let half = bbox.size.width / 2;
    let tens = value / 10;
    let ones_x = if tens != 0 {
        let tens_box = Rectangle::new(bbox.top_left, Size::new(half, bbox.size.height));
        draw_one_digit(surface, tens, &tens_box, stroke);
        bbox.top_left.x + half as i32
    } else {
        bbox.top_left.x + (bbox.size.width / 4) as i32
    };
    let ones_box = Rectangle::new(Point::new(ones_x, bbox.top_left.y), Size::new(half, bbox.size.height));
    draw_one_digit(surface, value % 10, &ones_box, stroke);
}

/// Draw a day initial filling `bbox`. Letters other than S, M, T, W, F draw nothing.
pub fn draw_one_letter<S: Surface + ?Sized>(
    surface: &mut S,
    letter: char,
    bbox: &Rectangle,
    stroke: Stroke,
) {
    if let Some(strokes) = letter_strokes(letter) {
        draw_strokes(surface, strokes, bbox, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;
    use crate::surface::testing::RecordingSurface;

    const INK: Stroke = Stroke::new(BLACK, 1);

    fn bbox() -> Rectangle { Rectangle::new(Point::new(10, 20), Size::new(12, 20)) }

    #[test]
    fn test_anchor_points() {
        // x = 11, w = 10, y = 20, h = 20
        let glyph = GlyphBox::new(&bbox());
        assert_eq!(glyph.anchor(TL), Point::new(11, 20));
        assert_eq!(glyph.anchor(TC), Point::new(16, 20));
        assert_eq!(glyph.anchor(TR), Point::new(21, 20));
        assert_eq!(glyph.anchor(MC), Point::new(16, 30));
        assert_eq!(glyph.anchor(BR), Point::new(21, 40));
    }

    #[test]
    fn test_digit_stroke_counts() {
        let expected = [4, 1, 5, 4, 3, 5, 5, 2, 5, 5];
        for (digit, count) in expected.iter().enumerate() {
            assert_eq!(digit_strokes(digit as u32).unwrap().len(), *count, "digit {digit}");
        }
    }

    #[test]
    fn test_draw_seven() {
        let mut surface = RecordingSurface::new();
        draw_digits(&mut surface, 7, &bbox(), INK);
        assert_eq!(surface.line_count(), 2, "top plus the full right side");
    }

    #[test]
    fn test_draw_eight() {
        let mut surface = RecordingSurface::new();
        draw_digits(&mut surface, 8, &bbox(), INK);
        assert_eq!(surface.line_count(), 5);
    }

    #[test]
    fn test_single_digit_is_centered() {
        let mut surface = RecordingSurface::new();
        draw_digits(&mut surface, 1, &bbox(), INK);
        // Half-width box at x = 10 + 12/4 = 13, width 6: inset x = 14, w = 4, center = 16
        let lines: heapless::Vec<(Point, Point), 4> = surface.lines().collect();
        assert_eq!(lines.as_slice(), &[(Point::new(16, 20), Point::new(16, 40))]);
    }

    #[test]
    fn test_two_digits_split_box() {
        let mut surface = RecordingSurface::new();
        draw_digits(&mut surface, 11, &bbox(), INK);
        // Tens box x = 10..16 (center 13), ones box x = 16..22 (center 19)
        let lines: heapless::Vec<(Point, Point), 4> = surface.lines().collect();
        assert_eq!(
            lines.as_slice(),
            &[(Point::new(13, 20), Point::new(13, 40)), (Point::new(19, 20), Point::new(19, 40))]
        );
    }

    #[test]
    fn test_zero_draws_single_digit() {
        let mut surface = RecordingSurface::new();
        draw_digits(&mut surface, 0, &bbox(), INK);
        assert_eq!(surface.line_count(), 4);
    }

    #[test]
    fn test_out_of_range_digit_draws_nothing() {
        let mut surface = RecordingSurface::new();
        draw_one_digit(&mut surface, 10, &bbox(), INK);
        assert_eq!(surface.line_count(), 0);
    }

    #[test]
    fn test_hundreds_drop_tens() {
        // 123: tens = 12 is not a digit, only the ones digit is drawn
        let mut surface = RecordingSurface::new();
        draw_digits(&mut surface, 123, &bbox(), INK);
        assert_eq!(surface.line_count(), DIGIT_STROKES[3].len());
    }

    #[test]
    fn test_letters() {
        assert_eq!(letter_strokes('S'), Some(DIGIT_STROKES[5]), "S is drawn like 5");
        assert_eq!(letter_strokes('M').unwrap().len(), 4);
        assert_eq!(letter_strokes('T').unwrap().len(), 2);
        assert_eq!(letter_strokes('W').unwrap().len(), 4);
        assert_eq!(letter_strokes('F').unwrap().len(), 3);
        assert_eq!(letter_strokes('X'), None);
        assert_eq!(letter_strokes('s'), None);
    }

    #[test]
    fn test_draw_letter() {
        let mut surface = RecordingSurface::new();
        draw_one_letter(&mut surface, 'M', &bbox(), INK);
        let lines: heapless::Vec<(Point, Point), 4> = surface.lines().collect();
        assert_eq!(lines[1], (Point::new(11, 20), Point::new(16, 30)), "M dips to the box center");

        let mut surface = RecordingSurface::new();
        draw_one_letter(&mut surface, '?', &bbox(), INK);
        assert_eq!(surface.line_count(), 0);
    }
}
