//! Minute-boundary tick detection.
//!
//! Hosts without a tick service poll the clock periodically and feed every
//! sample through a [`MinuteTicker`]; it reports a tick whenever the sampled
//! minute differs from the previous sample.

use crate::clock::WallTime;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MinuteTicker {
    last: Option<WallTime>,
}

impl MinuteTicker {
    pub const fn new() -> Self { Self { last: None } }

    /// Feed a clock sample. Returns the new time on a minute change.
    ///
    /// The first sample only primes the ticker: the initial draw is the
    /// host's show event, not a tick.
    pub fn poll(
        &mut self,
        now: WallTime,
    ) -> Option<WallTime> {
        let previous = self.last.replace(now);
        match previous {
            Some(prev) if prev != now => Some(now),
            _ => None,
        }
    }

    /// Forget the last sample. Hosts call this when the face is hidden; the
    /// first sample after the next show primes again.
    pub fn reset(&mut self) { self.last = None; }

    #[inline]
    pub const fn last(&self) -> Option<WallTime> { self.last }
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
    fn test_first_sample_primes() {
        let mut ticker = MinuteTicker::new();
        assert_eq!(ticker.poll(t(10, 0)), None);
        assert_eq!(ticker.last(), Some(t(10, 0)));
    }

    #[test]
    fn test_same_minute_does_not_tick() {
        let mut ticker = MinuteTicker::new();
        ticker.poll(t(10, 0));
        assert_eq!(ticker.poll(t(10, 0)), None);
        assert_eq!(ticker.poll(t(10, 0)), None);
    }

    #[test]
    fn test_minute_change_ticks_once() {
        let mut ticker = MinuteTicker::new();
        ticker.poll(t(10, 0));
        assert_eq!(ticker.poll(t(10, 1)), Some(t(10, 1)));
        assert_eq!(ticker.poll(t(10, 1)), None);
    }

    #[test]
    fn test_midnight_wrap_and_clock_jumps_tick() {
        let mut ticker = MinuteTicker::new();
        ticker.poll(t(23, 59));
        assert_eq!(ticker.poll(t(0, 0)), Some(t(0, 0)));
        // Clock set backwards still counts as a new minute
        assert_eq!(ticker.poll(t(22, 0)), Some(t(22, 0)));
    }

    #[test]
    fn test_reset() {
        let mut ticker = MinuteTicker::new();
        ticker.poll(t(1, 2));
        ticker.reset();
        assert_eq!(ticker.poll(t(1, 3)), None);
    }

    #[test]
    fn test_hide_show_cycle_primes_instead_of_ticking() {
        let mut ticker = MinuteTicker::new();
        ticker.poll(t(9, 15));

        // Hidden for several minutes, the show event redraws on its own
        ticker.reset();
        assert_eq!(ticker.last(), None);
        assert_eq!(ticker.poll(t(9, 20)), None);
        assert_eq!(ticker.last(), Some(t(9, 20)));

        // Ticking resumes from the re-primed sample
        assert_eq!(ticker.poll(t(9, 20)), None);
        assert_eq!(ticker.poll(t(9, 21)), Some(t(9, 21)));
    }
}
