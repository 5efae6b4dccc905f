//! Redraw invalidation tracking.
//!
//! The host polls the clock much more often than the face changes. This
//! module decides when a redraw is actually due:
//!
//! | Event | Effect |
//! |-------|--------|
//! | Window load | Redraw on the next frame |
//! | Clock crosses a tick boundary | Redraw |
//! | Clock polled within the same tick | Nothing |
//! | Window unload | No further redraws until the next load |
//!
//! The tick boundary is a whole minute for the system clock and a whole second
//! for the accelerated clock (see [`TickUnit`]).

use core::time::Duration;

use crate::clock::ClockState;

/// Granularity of the redraw timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickUnit {
    Minute,
    Second,
}

impl TickUnit {
    /// Timer period for this unit.
    pub const fn period(self) -> Duration {
        match self {
            Self::Minute => Duration::from_secs(60),
            Self::Second => Duration::from_secs(1),
        }
    }

    /// Value that changes exactly when `clock` enters a new tick.
    pub const fn tick_key(
        self,
        clock: &ClockState,
    ) -> u32 {
        let minute_of_week = (clock.weekday as u32 * 24 + clock.hour as u32) * 60 + clock.minute as u32;
        match self {
            Self::Minute => minute_of_week,
            Self::Second => minute_of_week * 60 + clock.second as u32,
        }
    }
}

/// Tracks whether the face needs to be redrawn.
pub struct RedrawDriver {
    unit: TickUnit,

    /// Whether the window is loaded (surface available).
    loaded: bool,

    /// Tick key of the last clock reading.
    last_tick: Option<u32>,

    /// Whether a redraw is pending.
    dirty: bool,

    /// Completed frames since creation.
    frames: u32,
}

impl RedrawDriver {
    pub const fn new(unit: TickUnit) -> Self {
        Self {
            unit,
            loaded: false,
            last_tick: None,
            dirty: false,
            frames: 0,
        }
    }

    #[inline]
    pub const fn unit(&self) -> TickUnit { self.unit }

    /// Window load: the whole face must be drawn.
    pub const fn on_load(&mut self) {
        self.loaded = true;
        self.last_tick = None;
        self.dirty = true;
    }

    /// Window unload: drop any pending redraw.
    pub const fn on_unload(&mut self) {
        self.loaded = false;
        self.dirty = false;
    }

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.loaded }

    /// Feed a clock reading. Returns whether a redraw is pending afterwards.
    pub const fn on_tick(
        &mut self,
        clock: &ClockState,
    ) -> bool {
        if !self.loaded {
            return false;
        }
        let key = self.unit.tick_key(clock);
        let changed = match self.last_tick {
            Some(last) => last != key,
            None => true,
        };
        if changed {
            self.last_tick = Some(key);
            self.dirty = true;
        }
        self.dirty
    }

    /// Force a redraw on the next frame (e.g. a manual refresh key).
    pub const fn invalidate(&mut self) {
        if self.loaded {
            self.dirty = true;
        }
    }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.dirty }

    /// Call after the face has been drawn.
    pub const fn end_frame(&mut self) {
        self.dirty = false;
        self.frames = self.frames.wrapping_add(1);
    }

    #[inline]
    pub const fn frames_drawn(&self) -> u32 { self.frames }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const T0: ClockState = ClockState::new(9, 41, 10, 3);

    #[test]
    fn test_nothing_before_load() {
        let mut driver = RedrawDriver::new(TickUnit::Minute);
        assert!(!driver.on_tick(&T0), "no redraws without a surface");
        driver.invalidate();
        assert!(!driver.needs_redraw());
    }

    #[test]
    fn test_load_forces_redraw() {
        let mut driver = RedrawDriver::new(TickUnit::Minute);
        driver.on_load();
        assert!(driver.needs_redraw());
        assert!(driver.on_tick(&T0));
        driver.end_frame();
        assert_eq!(driver.frames_drawn(), 1);
    }

    #[test]
    fn test_minute_unit_ignores_seconds() {
        let mut driver = RedrawDriver::new(TickUnit::Minute);
        driver.on_load();
        driver.on_tick(&T0);
        driver.end_frame();

        let later = ClockState { second: 59, ..T0 };
        assert!(!driver.on_tick(&later), "same minute, no redraw");

        let next_minute = ClockState { minute: 42, second: 0, ..T0 };
        assert!(driver.on_tick(&next_minute), "minute boundary triggers redraw");
    }

    #[test]
    fn test_second_unit() {
        let mut driver = RedrawDriver::new(TickUnit::Second);
        driver.on_load();
        driver.on_tick(&T0);
        driver.end_frame();

        assert!(!driver.on_tick(&T0));
        assert!(driver.on_tick(&ClockState { second: 11, ..T0 }));
    }

    #[test]
    fn test_tick_key_distinguishes_days() {
        let monday = ClockState::new(0, 0, 0, 1);
        let tuesday = ClockState::new(0, 0, 0, 2);
        assert_ne!(TickUnit::Minute.tick_key(&monday), TickUnit::Minute.tick_key(&tuesday));
    }

    #[test]
    fn test_unload_drops_pending_redraw() {
        let mut driver = RedrawDriver::new(TickUnit::Minute);
        driver.on_load();
        driver.on_unload();
        assert!(!driver.needs_redraw());
        assert!(!driver.is_loaded());

        driver.on_load();
        assert!(driver.needs_redraw(), "reload draws again");
    }

    #[test]
    fn test_invalidate() {
        let mut driver = RedrawDriver::new(TickUnit::Minute);
        driver.on_load();
        driver.on_tick(&T0);
        driver.end_frame();
        driver.invalidate();
        assert!(driver.needs_redraw());
    }

    #[test]
    fn test_invalidate_redraws_within_same_tick() {
        let mut driver = RedrawDriver::new(TickUnit::Minute);
        driver.on_load();
        driver.on_tick(&T0);
        driver.end_frame();
        assert!(!driver.on_tick(&T0));

        driver.invalidate();
        assert!(driver.on_tick(&T0), "manual refresh survives a same-minute tick");
        driver.end_frame();
        assert!(!driver.on_tick(&T0));
        assert_eq!(driver.frames_drawn(), 2);
    }

    #[test]
    fn test_periods() {
        assert_eq!(TickUnit::Minute.period(), Duration::from_secs(60));
        assert_eq!(TickUnit::Second.period(), Duration::from_secs(1));
    }
}
