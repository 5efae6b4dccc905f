//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// How often the main loop polls window events and the clock. Redraws only
/// happen when the redraw driver reports a new minute (or second).
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
