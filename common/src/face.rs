//! Watch face layout and per-frame composer.
//!
//! The face is a two-row honeycomb of big hexagons sized from the viewport
//! height. Three cells carry content:
//!
//! ```text
//!        ___     ___     ___
//!       /   \___/hr \___/   \
//!       \___/   \___/   \___/
//!       /wd \___/min\___/   \
//!       \___/   \___/   \___/
//! ```
//!
//! Everything is recomputed from the viewport once in [`FaceLayout::new`];
//! [`WatchFace::render`] then only applies the clock reading.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::clock::{ClockState, MinuteHand};
use crate::colors::{CELL_FILL, CELL_OUTLINE, INK};
use crate::config::{
    CELL_STROKE_WIDTH, GRID_CELL_COUNT, GRID_ROWS, GRID_STAGGER_START, HAND_STROKE_WIDTH, HEX_HEIGHT_DENOMINATOR, HEX_HEIGHT_NUMERATOR, MAX_VIEWPORT_EXTENT, VIEWPORT_MARGIN, cell_idx,
};
use crate::dial::{DialKind, TickLayout};
use crate::error::ConfigError;
use crate::hexagon::HexagonSpec;
use crate::path::GraphicsPath;
use crate::surface::{Stroke, Surface};
use crate::tessellation::tessellate;
use crate::weekday::WeekdaySelector;

const CELL_STROKE: Stroke = Stroke::new(CELL_OUTLINE, CELL_STROKE_WIDTH);
const HAND_STROKE: Stroke = Stroke::new(INK, HAND_STROKE_WIDTH);

/// Big hexagon height for a viewport of `viewport_height` pixels.
#[inline]
pub const fn cell_height(viewport_height: u32) -> i32 {
    (viewport_height.saturating_sub(VIEWPORT_MARGIN) as i32) * HEX_HEIGHT_NUMERATOR / HEX_HEIGHT_DENOMINATOR
}

/// Every position the face draws at, derived from the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceLayout {
    pub viewport: Rectangle,
    pub cell: HexagonSpec,
    /// Big cell centers, row-major.
    pub cells: [Point; GRID_CELL_COUNT],
    pub hour_dial: TickLayout,
    pub minute_dial: TickLayout,
    pub weekday: WeekdaySelector,
}

impl FaceLayout {
    pub fn new(viewport: Rectangle) -> Result<Self, ConfigError> {
        let Size { width, height } = viewport.size;
        if width == 0 || height <= VIEWPORT_MARGIN || width > MAX_VIEWPORT_EXTENT || height > MAX_VIEWPORT_EXTENT {
            return Err(ConfigError::InvalidViewport { width, height });
        }

        let cell = HexagonSpec::new(cell_height(height));
        let origin = viewport.top_left + Point::new(cell.width() / 2, cell.height / 2 + 1);

        let mut cells = [origin; GRID_CELL_COUNT];
        for (slot, center) in cells.iter_mut().zip(tessellate(origin, cell.height, GRID_STAGGER_START, &GRID_ROWS)) {
            *slot = center;
        }

        let radius = cell.width() / 2 - CELL_STROKE_WIDTH as i32 / 2;

        Ok(Self {
            viewport,
            cell,
            cells,
            hour_dial: TickLayout::new(cells[cell_idx::HOUR], radius, DialKind::Hours),
            minute_dial: TickLayout::new(cells[cell_idx::MINUTE], radius, DialKind::Minutes),
            weekday: WeekdaySelector::new(cells[cell_idx::WEEKDAY], cell.height),
        })
    }
}

/// Runtime choices that change how the face looks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceOptions {
    pub minute_hand: MinuteHand,
}

/// The watch face: layout, options and the path buffer shared by every shape.
#[derive(Clone, Debug)]
pub struct WatchFace {
    layout: FaceLayout,
    options: FaceOptions,
    path: GraphicsPath,
}

impl WatchFace {
    pub fn new(
        viewport: Rectangle,
        options: FaceOptions,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            layout: FaceLayout::new(viewport)?,
            options,
            path: GraphicsPath::new(),
        })
    }

    #[inline]
    pub const fn layout(&self) -> &FaceLayout { &self.layout }

    #[inline]
    pub const fn options(&self) -> FaceOptions { self.options }

    /// Draw one full frame for `clock`.
    ///
    /// The caller clears the surface to the background color first.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        clock: &ClockState,
    ) {
        let layout = &self.layout;
        let path = &mut self.path;

        let outline = layout.cell.points();
        for &center in &layout.cells {
            path.set_points(&outline).move_to(center);
            path.draw_filled(surface, CELL_FILL);
            path.draw_outline(surface, CELL_STROKE);
        }

        layout.hour_dial.draw(surface);
        draw_hand(surface, path, &layout.hour_dial, clock.hour_angle());

        layout.minute_dial.draw(surface);
        draw_hand(surface, path, &layout.minute_dial, clock.minute_angle(self.options.minute_hand));

        layout.weekday.draw(surface, path, clock.weekday);
    }
}

fn draw_hand<S: Surface + ?Sized>(
    surface: &mut S,
    path: &mut GraphicsPath,
    dial: &TickLayout,
    angle: i32,
) {
    let hand = dial.hand();
    path.set_points(&hand.points()).rotate_to(angle).move_to(dial.center);
    path.draw_filled(surface, CELL_FILL);
    path.draw_outline(surface, HAND_STROKE);
    surface.fill_circle(dial.center, hand.pivot_radius(), INK);
}
