//! Wall-clock time as seen by the face.
//!
//! The face only cares about hours and minutes. Where the time comes from is
//! the host's business: it implements [`ClockSource`] and the face samples it
//! once per redraw.

use core::fmt;

use crate::config::LEVEL_COUNT;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A validated time of day with minute resolution.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    hours: u8,
    minutes: u8,
}

impl WallTime {
    pub const MIDNIGHT: Self = Self { hours: 0, minutes: 0 };

    /// `None` unless `hours` is 0-23 and `minutes` is 0-59.
    pub const fn new(
        hours: u8,
        minutes: u8,
    ) -> Option<Self> {
        if hours < 24 && minutes < 60 { Some(Self { hours, minutes }) } else { None }
    }

    #[inline]
    pub const fn hours(self) -> u8 { self.hours }

    #[inline]
    pub const fn minutes(self) -> u8 { self.minutes }

    #[inline]
    pub const fn minutes_since_midnight(self) -> u16 { self.hours as u16 * 60 + self.minutes as u16 }

    /// Time `minutes` past midnight, wrapping at one day.
    pub const fn from_minutes_since_midnight(minutes: u16) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        Self {
            hours: (m / 60) as u8,
            minutes: (m % 60) as u8,
        }
    }

    /// The following minute; 23:59 wraps to 00:00.
    #[inline]
    pub const fn next_minute(self) -> Self { Self::from_minutes_since_midnight(self.minutes_since_midnight() + 1) }

    /// The four displayed digits.
    #[inline]
    pub const fn digits(self) -> ClockDigits { ClockDigits::from_time(self) }
}

impl fmt::Display for WallTime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Hour-tens, hour-ones, minute-tens, minute-ones: outermost level first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDigits([u8; LEVEL_COUNT]);

impl ClockDigits {
    pub const fn from_time(time: WallTime) -> Self {
        Self([time.hours / 10, time.hours % 10, time.minutes / 10, time.minutes % 10])
    }

    #[inline]
    pub const fn as_array(&self) -> [u8; LEVEL_COUNT] { self.0 }

    /// Reassembled hours (`tens * 10 + ones`).
    #[inline]
    pub const fn hours(&self) -> u8 { self.0[0] * 10 + self.0[1] }

    /// Reassembled minutes (`tens * 10 + ones`).
    #[inline]
    pub const fn minutes(&self) -> u8 { self.0[2] * 10 + self.0[3] }
}

/// Something that can tell the face what time it is.
pub trait ClockSource {
    /// Sample the current local time.
    fn now(&mut self) -> WallTime;
}

/// A clock that always reports the same time until told otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FixedClock {
    time: WallTime,
}

impl FixedClock {
    pub const fn new(time: WallTime) -> Self { Self { time } }

    pub fn set(
        &mut self,
        time: WallTime,
    ) {
        self.time = time;
    }
}

impl ClockSource for FixedClock {
    fn now(&mut self) -> WallTime { self.time }
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
    fn test_new_validates_range() {
        assert!(WallTime::new(0, 0).is_some());
        assert!(WallTime::new(23, 59).is_some());
        assert!(WallTime::new(24, 0).is_none());
        assert!(WallTime::new(12, 60).is_none());
        assert!(WallTime::new(255, 255).is_none());
    }

    #[test]
    fn test_digits_examples() {
        assert_eq!(t(23, 59).digits().as_array(), [2, 3, 5, 9]);
        assert_eq!(t(0, 0).digits().as_array(), [0, 0, 0, 0]);
        assert_eq!(t(9, 5).digits().as_array(), [0, 9, 0, 5]);
    }

    #[test]
    fn test_digits_round_trip_all_times() {
        for h in 0..24u8 {
            for m in 0..60u8 {
                let digits = t(h, m).digits();
                assert_eq!(digits.hours(), h);
                assert_eq!(digits.minutes(), m);
                assert!(digits.as_array().iter().all(|d| *d <= 9));
            }
        }
    }

    #[test]
    fn test_next_minute_wraps() {
        assert_eq!(t(12, 34).next_minute(), t(12, 35));
        assert_eq!(t(12, 59).next_minute(), t(13, 0));
        assert_eq!(t(23, 59).next_minute(), WallTime::MIDNIGHT);
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(t(0, 0).minutes_since_midnight(), 0);
        assert_eq!(t(23, 59).minutes_since_midnight(), MINUTES_PER_DAY - 1);
        assert_eq!(WallTime::from_minutes_since_midnight(MINUTES_PER_DAY + 61), t(1, 1));
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(t(7, 3).to_string(), "07:03");
        assert_eq!(t(23, 59).to_string(), "23:59");
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::new(t(8, 15));
        assert_eq!(clock.now(), t(8, 15));
        assert_eq!(clock.now(), t(8, 15));
        clock.set(t(8, 16));
        assert_eq!(clock.now(), t(8, 16));
    }
}
