//! Render timing statistics for the debug page.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//!
//! // Around each face redraw:
//! let start = Instant::now();
//! face.redraw(&mut framebuffer, &mut clock);
//! metrics.record_render(start.elapsed());
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Redraw timing and loop counters.
pub struct ProfilingMetrics {
    /// Time spent in the last face redraw (layout + rasterization)
    pub render_time_us: u32,
    /// Fastest redraw observed
    pub render_time_min_us: u32,
    /// Slowest redraw observed
    pub render_time_max_us: u32,
    /// Exponential moving average of redraw time
    render_time_avg_us: f32,
    /// Redraws measured since startup
    pub renders: u32,
    /// Main loop iterations since startup
    pub polls: u64,
    /// Minute ticks delivered to the face
    pub ticks: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create new metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            render_time_us: 0,
            render_time_min_us: u32::MAX,
            render_time_max_us: 0,
            render_time_avg_us: 0.0,
            renders: 0,
            polls: 0,
            ticks: 0,
            start_time: Instant::now(),
        }
    }

    const EMA_ALPHA: f32 = 0.1;

    /// Record the duration of one face redraw.
    pub fn record_render(
        &mut self,
        render_time: Duration,
    ) {
        let us = render_time.as_micros().min(u128::from(u32::MAX)) as u32;

        self.render_time_us = us;
        self.render_time_min_us = self.render_time_min_us.min(us);
        self.render_time_max_us = self.render_time_max_us.max(us);

        if self.renders == 0 {
            self.render_time_avg_us = us as f32;
        } else {
            self.render_time_avg_us =
                Self::EMA_ALPHA.mul_add(us as f32, (1.0 - Self::EMA_ALPHA) * self.render_time_avg_us);
        }

        self.renders = self.renders.saturating_add(1);
    }

    #[inline]
    pub const fn inc_polls(&mut self) { self.polls += 1; }

    #[inline]
    pub const fn inc_ticks(&mut self) { self.ticks += 1; }

    #[inline]
    pub const fn render_time_avg_us(&self) -> u32 { self.render_time_avg_us as u32 }

    /// Minimum render time, or 0 before the first redraw.
    #[inline]
    pub const fn render_time_min_or_zero_us(&self) -> u32 {
        if self.render_time_min_us == u32::MAX { 0 } else { self.render_time_min_us }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// HH:MM:SS, hours keep counting past 99.
fn format_hms(elapsed: Duration) -> String<12> {
    let secs = elapsed.as_secs();
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiling_metrics_new() {
        let metrics = ProfilingMetrics::new();
        assert_eq!(metrics.renders, 0);
        assert_eq!(metrics.render_time_min_us, u32::MAX);
        assert_eq!(metrics.render_time_min_or_zero_us(), 0);
        assert_eq!(metrics.render_time_max_us, 0);
    }

    #[test]
    fn test_record_render_min_max() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_render(Duration::from_micros(300));
        metrics.record_render(Duration::from_micros(150));
        metrics.record_render(Duration::from_micros(450));

        assert_eq!(metrics.renders, 3);
        assert_eq!(metrics.render_time_us, 450);
        assert_eq!(metrics.render_time_min_us, 150);
        assert_eq!(metrics.render_time_max_us, 450);
    }

    #[test]
    fn test_first_render_seeds_average() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_render(Duration::from_micros(200));
        assert_eq!(metrics.render_time_avg_us(), 200);

        metrics.record_render(Duration::from_micros(1200));
        // 0.1 * 1200 + 0.9 * 200
        assert!((299..=300).contains(&metrics.render_time_avg_us()));
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::ZERO).as_str(), "00:00:00");
        assert_eq!(format_hms(Duration::from_secs(3 * 3600 + 25 * 60 + 7)).as_str(), "03:25:07");
        assert_eq!(format_hms(Duration::from_secs(100 * 3600)).as_str(), "100:00:00");
    }

    #[test]
    fn test_counters() {
        let mut metrics = ProfilingMetrics::new();
        metrics.inc_polls();
        metrics.inc_polls();
        metrics.inc_ticks();
        assert_eq!(metrics.polls, 2);
        assert_eq!(metrics.ticks, 1);
    }
}
