//! Sub-dial tick rings, numerals and hand sizing.
//!
//! Each sub-dial sits inside one big hexagon. Its ring radius is the
//! hexagon's inner radius pulled in by half the cell outline width, so ticks
//! end right at the inside of the outline.
//!
//! ```text
//!   radius            ring edge, tick ends here
//!   radius - 3s/4     label center (every 10 minutes)
//!   radius - 3s/2     labeled tick ends here, below its numeral
//!   radius - 2s       every tick starts here
//! ```
//!
//! `s` is the label box edge, a quarter of the radius but never below
//! [`LABEL_SIZE_MIN`].

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::colors::INK;
use crate::config::{GLYPH_STROKE_WIDTH, LABEL_EVERY, LABEL_SIZE_DIVISOR, LABEL_SIZE_MIN, TICK_COUNT, TICK_STEP_DEGREES, TICK_STROKE_WIDTH};
use crate::geometry::{cartesian_from_polar, rect_from_midpoint};
use crate::glyphs::draw_digits;
use crate::hand::ArrowSpec;
use crate::surface::{Stroke, Surface};

const TICK_STROKE: Stroke = Stroke::new(INK, TICK_STROKE_WIDTH);
const LABEL_STROKE: Stroke = Stroke::new(INK, GLYPH_STROKE_WIDTH);

/// What a dial's numerals count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialKind {
    /// 12-hour dial, numerals 12, 2, 4 .. 10.
    Hours,
    /// 60-minute dial, numerals 0, 10, 20 .. 50.
    Minutes,
}

impl DialKind {
    /// Numeral printed at tick `index` (0 = 12 o'clock).
    pub const fn label_value(
        self,
        index: usize,
    ) -> u32 {
        match self {
            Self::Hours if index == 0 => 12,
            Self::Hours => index as u32,
            Self::Minutes => index as u32 * 5,
        }
    }
}

/// Numeral attached to a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label {
    pub value: u32,
    pub bbox: Rectangle,
}

/// One tick mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Clockwise from 12 o'clock, in degrees.
    pub angle: i32,
    pub inner: Point,
    pub outer: Point,
    pub label: Option<Label>,
}

/// Geometry of one sub-dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickLayout {
    pub center: Point,
    pub radius: i32,
    /// Edge of the square numeral box.
    pub label_size: i32,
    pub kind: DialKind,
    pub ticks: [Tick; TICK_COUNT],
}

/// Label box edge for a dial of `radius`.
#[inline]
pub const fn label_size_for(radius: i32) -> i32 {
    let size = radius / LABEL_SIZE_DIVISOR;
    if size < LABEL_SIZE_MIN { LABEL_SIZE_MIN } else { size }
}

impl TickLayout {
    pub fn new(
        center: Point,
        radius: i32,
        kind: DialKind,
    ) -> Self {
        let s = label_size_for(radius);
        let inner_radius = (radius - 2 * s).max(0);
        let labeled_outer = (radius - s * 3 / 2).max(inner_radius);
        let label_radius = radius - s * 3 / 4;
        let label_box = Size::new(s as u32, s as u32);

        let ticks = core::array::from_fn(|index| {
            let angle = index as i32 * TICK_STEP_DEGREES;
            let label = (index % LABEL_EVERY == 0).then(|| Label {
                value: kind.label_value(index),
                bbox: rect_from_midpoint(cartesian_from_polar(center, label_radius, angle), label_box),
            });
            let outer_radius = if label.is_some() { labeled_outer } else { radius };
            Tick {
                angle,
                inner: cartesian_from_polar(center, inner_radius, angle),
                outer: cartesian_from_polar(center, outer_radius, angle),
                label,
            }
        });

        Self {
            center,
            radius,
            label_size: s,
            kind,
            ticks,
        }
    }

    /// Hand sized to reach the inner edge of the numerals.
    pub fn hand(&self) -> ArrowSpec {
        let s = self.label_size;
        ArrowSpec::new(s * 2 / 3, (self.radius - s * 3 / 2).max(0))
    }

    /// Draw all ticks and numerals.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
    ) {
        for tick in &self.ticks {
            surface.draw_line(tick.inner, tick.outer, TICK_STROKE);
            if let Some(label) = tick.label {
                draw_digits(surface, label.value, &label.bbox, LABEL_STROKE);
            }
        }
    }
}
