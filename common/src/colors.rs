//! Color constants for the watch face.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Standard colors come from the `RgbColor` trait constants; the honeycomb
//! amber tones are custom values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Window background, dial ink and hand outlines.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure yellow (31, 63, 0). Outline of the large grid hexagons.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Chrome yellow, the honeycomb cell fill.
/// RGB565: (31, 42, 0) - deeper than yellow, close to amber.
pub const CHROME_YELLOW: Rgb565 = Rgb565::new(31, 42, 0);

// =============================================================================
// Role Assignments
// =============================================================================

/// Window background behind the grid.
pub const BACKGROUND: Rgb565 = BLACK;

/// Fill of every large grid hexagon. Also the dial background the hands are filled with.
pub const CELL_FILL: Rgb565 = CHROME_YELLOW;

/// Outline of every large grid hexagon.
pub const CELL_OUTLINE: Rgb565 = YELLOW;

/// Ticks, numerals, hand outlines and pivot dots.
pub const INK: Rgb565 = BLACK;
