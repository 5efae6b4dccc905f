//! Core of the honeycomb watch face.
//!
//! This crate contains everything that decides what the face looks like and
//! nothing that depends on a particular display or clock:
//!
//! - [`colors`]: RGB565 palette and color roles
//! - [`config`]: Layout ratios, stroke widths and grid indices
//! - [`geometry`]: Polar/cartesian helpers and rotation
//! - [`hexagon`]: Regular hexagon metrics and vertices
//! - [`tessellation`]: Staggered hexagon grid centers
//! - [`glyphs`]: Stroke-drawn digits and day initials
//! - [`hand`]: Kite-shaped clock hands
//! - [`path`]: Reusable rotatable polygon buffer
//! - [`surface`]: Drawing primitives and the embedded-graphics adapter
//! - [`dial`]: Tick rings and numerals of the sub-dials
//! - [`weekday`]: Seven-hexagon day-of-week selector
//! - [`face`]: Layout and per-frame composer
//! - [`clock`]: Clock snapshot, hand angles and time sources
//! - [`driver`]: Redraw invalidation
//! - [`error`]: Layout errors
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation free. Trigonometry goes through
//! `micromath`, vertex and center buffers are fixed-capacity `heapless`
//! vectors or arrays.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod dial;
pub mod driver;
pub mod error;
pub mod face;
pub mod geometry;
pub mod glyphs;
pub mod hand;
pub mod hexagon;
pub mod path;
pub mod surface;
pub mod tessellation;
pub mod weekday;

// Re-export commonly used items
pub use clock::{ClockState, MinuteHand, TimeSource};
pub use colors::*;
pub use driver::{RedrawDriver, TickUnit};
pub use error::ConfigError;
pub use face::{FaceLayout, FaceOptions, WatchFace};
pub use hexagon::HexagonSpec;
pub use surface::{DisplaySurface, Stroke, Surface};
pub use tessellation::{Tessellation, tessellate};
