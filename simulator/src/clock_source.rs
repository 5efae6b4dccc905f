//! Wall-clock readings for the face.

use chrono::{Datelike, Local, NaiveTime, Timelike};
use honeycomb_common::{ClockState, TimeSource};

/// Convert a chrono date-time into the fields the face consumes.
pub fn clock_state<T: Datelike + Timelike>(t: &T) -> ClockState {
    ClockState::new(
        t.hour() as u8,
        t.minute() as u8,
        t.second() as u8,
        t.weekday().num_days_from_sunday() as u8,
    )
}

/// Parse `HH:MM:SS` or `HH:MM`.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("expected HH:MM or HH:MM:SS: {e}"))
}

/// Local clock with optional pinned time and weekday.
#[derive(Clone, Copy, Debug)]
pub struct ClockReader {
    source: TimeSource,
    at: Option<NaiveTime>,
    weekday: Option<u8>,
}

impl ClockReader {
    pub const fn new(
        source: TimeSource,
        at: Option<NaiveTime>,
        weekday: Option<u8>,
    ) -> Self {
        Self { source, at, weekday }
    }

    pub const fn source(&self) -> TimeSource { self.source }

    /// Current reading, after pinning and the time source transform.
    pub fn now(&self) -> ClockState {
        let local = Local::now();
        let mut state = clock_state(&local);
        if let Some(at) = self.at {
            state = ClockState {
                weekday: state.weekday,
                ..clock_state(&local.date_naive().and_time(at))
            };
        }
        if let Some(weekday) = self.weekday {
            state.weekday = weekday;
        }
        self.source.apply(state)
    }
}
