//! Event log for the watch face.
//!
//! A small ring buffer of leveled messages, shown on the simulator's debug
//! page. It allocates nothing: entries are fixed-length strings in a
//! fixed-capacity deque, messages are truncated to fit and the oldest entry is
//! dropped when the buffer is full.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push(LogLevel::Info, "Face shown");
//! log.push_fmt(LogLevel::Debug, format_args!("Tick {}", time));
//!
//! for entry in log.iter() {
//!     draw_line(entry.level.prefix(), entry.message());
//! }
//! ```

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};

use crate::colors::{GRAY, GREEN, YELLOW};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line (the debug page is 144px wide).
pub const LOG_LINE_LENGTH: usize = 24;

// =============================================================================
// Log Levels
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLevel {
    /// Per-frame chatter (gray)
    Debug,
    /// Lifecycle events (green)
    #[default]
    Info,
    /// Requests the face ignored (yellow)
    Warn,
}

impl LogLevel {
    /// Display color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
        }
    }
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// A single log line.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    message: String<LOG_LINE_LENGTH>,
}

impl LogEntry {
    #[inline]
    pub fn message(&self) -> &str { self.message.as_str() }
}

/// Ring buffer of the last [`LOG_BUFFER_SIZE`] log lines.
pub struct DebugLog {
    buffer: Deque<LogEntry, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message. If the buffer is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        msg: &str,
    ) {
        self.push_fmt(level, format_args!("{msg}"));
    }

    /// Push a formatted message, truncated to [`LOG_LINE_LENGTH`].
    pub fn push_fmt(
        &mut self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut message: String<LOG_LINE_LENGTH> = String::new();
        fmt::Write::write_fmt(&mut Truncating(&mut message), args).ok();

        self.buffer.push_back(LogEntry { level, message }).ok();
    }

    /// Iterate over entries (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.buffer.iter() }

    /// Most recent entry.
    #[inline]
    pub fn last(&self) -> Option<&LogEntry> { self.buffer.back() }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// `fmt::Write` adapter that keeps what fits and drops the rest.
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push(LogLevel::Info, "Face shown");
        assert_eq!(log.len(), 1);

        log.push(LogLevel::Debug, "Redraw");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().map(LogEntry::message), Some("Redraw"));
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();

        for i in 0..LOG_BUFFER_SIZE {
            log.push_fmt(LogLevel::Debug, format_args!("{i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        // One more drops the oldest
        log.push(LogLevel::Warn, "New");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        let first = log.iter().next().unwrap();
        assert_eq!(first.message(), "1");
        assert_eq!(log.last().unwrap().level, LogLevel::Warn);
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push(LogLevel::Info, "This message is far longer than one debug page line");

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.message().len(), LOG_LINE_LENGTH);
        assert!(stored.message().starts_with("This message"));
    }

    #[test]
    fn test_push_fmt() {
        let mut log = DebugLog::new();
        log.push_fmt(LogLevel::Debug, format_args!("Tick {:02}:{:02}", 7, 5));
        assert_eq!(log.last().unwrap().message(), "Tick 07:05");
    }

    #[test]
    fn test_level_prefixes_and_colors() {
        assert_eq!(LogLevel::Debug.prefix(), 'D');
        assert_eq!(LogLevel::Info.prefix(), 'I');
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert_ne!(LogLevel::Info.color(), LogLevel::Warn.color());
        assert!(LogLevel::Debug < LogLevel::Warn);
    }
}
