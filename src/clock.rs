//! Wall-clock sources for the simulator.
//!
//! - [`LocalClock`]: the host's local time via `chrono`
//! - [`DemoClock`]: fast-forward clock, one minute per [`DEMO_MINUTE`], for
//!   previewing every digit combination without waiting a day
//!
//! [`SimClock`] switches between the two at runtime (`T` key).

use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use nested_numbers_common::clock::{ClockSource, MINUTES_PER_DAY, WallTime};

use crate::timing::DEMO_MINUTE;

/// Local time of the machine running the simulator.
pub struct LocalClock;

impl ClockSource for LocalClock {
    fn now(&mut self) -> WallTime {
        let now = Local::now();
        WallTime::new(now.hour() as u8, now.minute() as u8).unwrap_or(WallTime::MIDNIGHT)
    }
}

/// Clock that runs `minute` of real time per displayed minute.
pub struct DemoClock {
    start: WallTime,
    started_at: Instant,
    minute: Duration,
}

impl DemoClock {
    pub fn new(start: WallTime) -> Self { Self::with_minute(start, DEMO_MINUTE) }

    pub fn with_minute(
        start: WallTime,
        minute: Duration,
    ) -> Self {
        Self {
            start,
            started_at: Instant::now(),
            minute,
        }
    }

    /// Displayed time after `elapsed` real time.
    pub fn time_after(
        &self,
        elapsed: Duration,
    ) -> WallTime {
        let step = self.minute.as_millis().max(1);
        let advanced = (elapsed.as_millis() / step) % u128::from(MINUTES_PER_DAY);
        WallTime::from_minutes_since_midnight(self.start.minutes_since_midnight() + advanced as u16)
    }
}

impl ClockSource for DemoClock {
    fn now(&mut self) -> WallTime { self.time_after(self.started_at.elapsed()) }
}

/// The clock currently driving the face.
pub enum SimClock {
    Local(LocalClock),
    Demo(DemoClock),
}

impl SimClock {
    /// Switch between local and demo time. The demo clock starts from the
    /// time currently shown.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Local(clock) => Self::Demo(DemoClock::new(clock.now())),
            Self::Demo(_) => Self::Local(LocalClock),
        };
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Local(_) => "LOCAL",
            Self::Demo(_) => "DEMO",
        }
    }
}

impl ClockSource for SimClock {
    fn now(&mut self) -> WallTime {
        match self {
            Self::Local(clock) => clock.now(),
            Self::Demo(clock) => clock.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(
        h: u8,
        m: u8,
    ) -> WallTime {
        WallTime::new(h, m).unwrap()
    }

    #[test]
    fn test_demo_clock_advances_per_minute() {
        let clock = DemoClock::with_minute(t(10, 58), Duration::from_secs(1));
        assert_eq!(clock.time_after(Duration::ZERO), t(10, 58));
        assert_eq!(clock.time_after(Duration::from_millis(999)), t(10, 58));
        assert_eq!(clock.time_after(Duration::from_secs(1)), t(10, 59));
        assert_eq!(clock.time_after(Duration::from_secs(2)), t(11, 0));
    }

    #[test]
    fn test_demo_clock_wraps_at_midnight() {
        let clock = DemoClock::with_minute(t(23, 59), Duration::from_secs(1));
        assert_eq!(clock.time_after(Duration::from_secs(1)), t(0, 0));
        // A full day later it is back where it started
        assert_eq!(clock.time_after(Duration::from_secs(24 * 60)), t(23, 59));
    }

    #[test]
    fn test_local_clock_is_valid_time() {
        let now = LocalClock.now();
        assert!(now.hours() < 24);
        assert!(now.minutes() < 60);
    }

    #[test]
    fn test_sim_clock_toggle() {
        let mut clock = SimClock::Local(LocalClock);
        assert_eq!(clock.label(), "LOCAL");
        clock.toggle();
        assert_eq!(clock.label(), "DEMO");
        clock.toggle();
        assert_eq!(clock.label(), "LOCAL");
    }
}
