//! Simulator defaults, overridable from the command line.

/// Default viewport width. Wide enough for the hour cell at 2.5 hexagon widths.
pub const SCREEN_WIDTH: u32 = 240;

/// Default viewport height.
pub const SCREEN_HEIGHT: u32 = 196;

/// Default pixel scale of the window and snapshots.
pub const SCALE: u32 = 2;

/// File written when no window is opened and `--snapshot` is not given.
pub const DEFAULT_SNAPSHOT: &str = "honeycomb.png";

#[cfg(feature = "window")]
pub const WINDOW_TITLE: &str = "Honeycomb";
