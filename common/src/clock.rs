//! Clock state and hand angles.
//!
//! [`ClockState`] is a snapshot of wall-clock time taken at the start of a
//! redraw. It is never mutated; the accelerated time source produces a new
//! snapshot derived from the real one.
//!
//! Angles are whole degrees clockwise from 12 o'clock.

use core::time::Duration;

use crate::driver::TickUnit;

/// Number of days in a week; weekday indices run `0..DAYS_PER_WEEK`.
pub const DAYS_PER_WEEK: u8 = 7;

/// Time fields the face consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ClockState {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
}

impl ClockState {
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
        weekday: u8,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            weekday,
        }
    }

    /// Fast-forwarded snapshot for visual testing.
    ///
    /// Every field is driven by the real second so a full dial sweep takes one
    /// minute: minute = second, hour = second mod 24, weekday = second mod 7.
    pub const fn accelerated(self) -> Self {
        let s = self.second % 60;
        Self {
            hour: s % 24,
            minute: s,
            second: self.second,
            weekday: s % DAYS_PER_WEEK,
        }
    }

    /// Hour hand angle: `360 * (hour*60 + minute) / 720`, wrapped to 0..360.
    pub const fn hour_angle(&self) -> i32 { hour_angle(self.hour, self.minute) }

    /// Minute hand angle for the given hand motion.
    pub const fn minute_angle(
        &self,
        motion: MinuteHand,
    ) -> i32 {
        match motion {
            MinuteHand::Stepped => minute_angle(self.minute),
            MinuteHand::Sweep => minute_angle_sweep(self.minute, self.second),
        }
    }
}

/// Hour hand angle in degrees. 12-hour dial: 15:00 and 03:00 both give 90.
#[inline]
pub const fn hour_angle(
    hour: u8,
    minute: u8,
) -> i32 {
    (360 * (hour as i32 * 60 + minute as i32) / (12 * 60)) % 360
}

/// Minute hand angle in degrees, jumping once per minute.
#[inline]
pub const fn minute_angle(minute: u8) -> i32 { (360 * minute as i32 / 60) % 360 }

/// Minute hand angle in degrees, advancing with the seconds.
#[inline]
pub const fn minute_angle_sweep(
    minute: u8,
    second: u8,
) -> i32 {
    (360 * (minute as i32 * 60 + second as i32) / 3600) % 360
}

/// How the minute hand moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MinuteHand {
    /// Jumps to the next minute mark once per minute.
    #[default]
    Stepped,
    /// Creeps forward with the seconds.
    Sweep,
}

/// Where redraws take their time from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeSource {
    /// Real local time, redrawn once per minute.
    #[default]
    SystemClock,
    /// Fast-forwarded time (see [`ClockState::accelerated`]), redrawn every second.
    AcceleratedClock,
}

impl TimeSource {
    /// Turn a real clock reading into the time the face should show.
    pub const fn apply(
        self,
        now: ClockState,
    ) -> ClockState {
        match self {
            Self::SystemClock => now,
            Self::AcceleratedClock => now.accelerated(),
        }
    }

    /// Granularity at which the face changes.
    pub const fn tick_unit(self) -> TickUnit {
        match self {
            Self::SystemClock => TickUnit::Minute,
            Self::AcceleratedClock => TickUnit::Second,
        }
    }

    /// Period of the redraw timer.
    pub const fn redraw_interval(self) -> Duration { self.tick_unit().period() }
}
