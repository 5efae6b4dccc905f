//! Layout and rendering configuration constants.
//!
//! Everything the face derives is scaled from one number, the big hexagon
//! height `H = (viewport_height - VIEWPORT_MARGIN) * 4 / 7`. With that height
//! two interlocking rows span exactly `7H/4`, filling the viewport vertically.
//!
//! Constants are checked at compile time where an ordering or range matters.

// =============================================================================
// Grid Layout
// =============================================================================

/// Vertical pixels left free around the two grid rows (one above, one below).
pub const VIEWPORT_MARGIN: u32 = 2;

/// Largest accepted viewport width or height. Keeps every derived coordinate
/// and the fixed-point hexagon width (`H * 866`) inside `i32`.
pub const MAX_VIEWPORT_EXTENT: u32 = 65_535;

const _: () = assert!((MAX_VIEWPORT_EXTENT as i64) * 4 / 7 * 866 < i32::MAX as i64);

/// Numerator of the big hexagon height ratio (`H = usable_height * 4 / 7`).
pub const HEX_HEIGHT_NUMERATOR: i32 = 4;

/// Denominator of the big hexagon height ratio.
pub const HEX_HEIGHT_DENOMINATOR: i32 = 7;

/// Column counts of the big hexagon grid, one entry per row.
pub const GRID_ROWS: [usize; 2] = [3, 3];

/// Total number of big hexagons in the grid.
pub const GRID_CELL_COUNT: usize = GRID_ROWS[0] + GRID_ROWS[1];

/// Whether the first grid row is shifted right by half a hexagon.
pub const GRID_STAGGER_START: bool = true;

/// Row-major positions of the big hexagons that carry content.
///
/// Layout (row 0 is staggered):
///   Row 0:    .  | HOUR |  .
///   Row 1: WEEKDAY | MINUTE | .
pub mod cell_idx {
    pub const HOUR: usize = 1;
    pub const WEEKDAY: usize = 3;
    pub const MINUTE: usize = 4;
}

const _: () = assert!(cell_idx::HOUR < GRID_CELL_COUNT);
const _: () = assert!(cell_idx::WEEKDAY < GRID_CELL_COUNT);
const _: () = assert!(cell_idx::MINUTE < GRID_CELL_COUNT);

// =============================================================================
// Stroke Widths
// =============================================================================

/// Outline width of the big grid hexagons. Dial radius is pulled in by half of it.
pub const CELL_STROKE_WIDTH: u32 = 5;

/// Width of tick marks.
pub const TICK_STROKE_WIDTH: u32 = 2;

/// Width of the seven-segment glyph strokes.
pub const GLYPH_STROKE_WIDTH: u32 = 1;

/// Outline width of the hands.
pub const HAND_STROKE_WIDTH: u32 = 2;

/// Outline width of the weekday selector hexagons.
pub const WEEKDAY_STROKE_WIDTH: u32 = 2;

// =============================================================================
// Dial
// =============================================================================

/// Number of ticks around a dial, one every five minutes.
pub const TICK_COUNT: usize = 12;

/// Angular distance between neighbouring ticks in degrees.
pub const TICK_STEP_DEGREES: i32 = 360 / TICK_COUNT as i32;

/// Every n-th tick carries a numeral (every ten minutes).
pub const LABEL_EVERY: usize = 2;

/// Label box edge is the dial radius divided by this.
pub const LABEL_SIZE_DIVISOR: i32 = 4;

/// Smallest label box edge in pixels; below this the glyphs are unreadable.
pub const LABEL_SIZE_MIN: i32 = 10;

const _: () = assert!(TICK_COUNT % LABEL_EVERY == 0);
const _: () = assert!(LABEL_SIZE_MIN > 0);

// =============================================================================
// Weekday Selector
// =============================================================================

/// Column counts of the weekday selector rows (2-3-2 flower).
pub const WEEKDAY_ROWS: [usize; 3] = [2, 3, 2];

/// Whether the first weekday row is shifted right by half a small hexagon.
pub const WEEKDAY_STAGGER_START: bool = true;

/// Small hexagon height is the big hexagon height divided by this.
pub const WEEKDAY_HEX_DIVISOR: i32 = 4;

/// Day initials in tessellation order, Sunday first.
pub const WEEKDAY_INITIALS: [char; 7] = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

const _: () = assert!(WEEKDAY_ROWS[0] + WEEKDAY_ROWS[1] + WEEKDAY_ROWS[2] == WEEKDAY_INITIALS.len());
