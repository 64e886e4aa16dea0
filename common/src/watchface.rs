//! Host adapter for the face.
//!
//! The host runtime owns the event loop. It tells the face when its window
//! is shown or hidden and when a minute has passed, and asks it to redraw
//! onto a canvas. [`WatchFace`] keeps the little state that lives between
//! those calls: visibility, a dirty flag and the event log. Rendering itself
//! is a pure function of the sampled time.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::clock::{ClockSource, WallTime};
use crate::config::FaceLayout;
use crate::debug_log::{DebugLog, LogLevel};
use crate::face::draw_clock_face;

pub struct WatchFace {
    layout: FaceLayout,
    visible: bool,
    /// Set by show/tick, cleared by a redraw.
    dirty: bool,
    last_drawn: Option<WallTime>,
    redraws: u32,
    log: DebugLog,
}

impl WatchFace {
    pub const fn new(layout: FaceLayout) -> Self {
        Self {
            layout,
            visible: false,
            dirty: false,
            last_drawn: None,
            redraws: 0,
            log: DebugLog::new(),
        }
    }

    /// Window became visible: schedule the initial draw.
    pub fn on_show(&mut self) {
        self.visible = true;
        self.dirty = true;
        self.log.push(LogLevel::Info, "Face shown");
    }

    /// Window went away: nothing is drawn until the next show.
    pub fn on_hide(&mut self) {
        self.visible = false;
        self.dirty = false;
        self.log.push(LogLevel::Info, "Face hidden");
    }

    /// Minute boundary passed.
    pub fn on_minute_tick(
        &mut self,
        time: WallTime,
    ) {
        if self.visible {
            self.dirty = true;
            self.log.push_fmt(LogLevel::Debug, format_args!("Tick {time}"));
        } else {
            self.log.push_fmt(LogLevel::Warn, format_args!("Tick {time} hidden"));
        }
    }

    /// Whether the host should call [`redraw`](Self::redraw).
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.visible && self.dirty }

    /// Sample the clock and repaint the whole canvas.
    ///
    /// Returns the time that was drawn, or `None` while hidden.
    pub fn redraw<D, C>(
        &mut self,
        display: &mut D,
        clock: &mut C,
    ) -> Option<WallTime>
    where
        D: DrawTarget<Color = Rgb565>,
        C: ClockSource,
    {
        if !self.visible {
            self.log.push(LogLevel::Warn, "Redraw while hidden");
            return None;
        }

        let now = clock.now();
        draw_clock_face(display, now, &self.layout);

        self.dirty = false;
        self.last_drawn = Some(now);
        self.redraws = self.redraws.wrapping_add(1);
        self.log.push_fmt(LogLevel::Debug, format_args!("Redraw {now}"));
        Some(now)
    }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }

    #[inline]
    pub const fn last_drawn(&self) -> Option<WallTime> { self.last_drawn }

    #[inline]
    pub const fn redraw_count(&self) -> u32 { self.redraws }

    #[inline]
    pub const fn layout(&self) -> &FaceLayout { &self.layout }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    /// Record a host-side event in the face's log.
    pub fn log_event(
        &mut self,
        level: LogLevel,
        msg: &str,
    ) {
        self.log.push(level, msg);
    }
}

impl Default for WatchFace {
    fn default() -> Self { Self::new(FaceLayout::DEFAULT) }
}
