//! Debug/profiling page rendering.
//!
//! Shows the clock driving the face and what the face last drew, with redraw
//! timing, the nested level boxes and the face's event log underneath.
//! Toggled with the `D` key.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────┐
//! │ DEBUG            12:34 │
//! ├────────────────────────┤
//! │ Clock:LOCAL Ticks:2    │
//! │ Shown:12:34 Draws:3    │
//! │ Ms:0.21 Avg:0.22       │
//! │ Min:0.18 Max:0.40      │
//! │ Up:00:02:11            │
//! │ H1 1 138x158 @72,84    │
//! │ H2 2 117x113 @72,95    │
//! │ M1 3 97x76 @72,102     │
//! │ M2 4 78x47 @72,106     │
//! ├────────────────────────┤
//! │ I Face shown           │
//! │ D Redraw 12:34         │
//! └────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use nested_numbers_common::WallTime;
use nested_numbers_common::colors::{BLACK, GRAY, LIGHT_GRAY, YELLOW};
use nested_numbers_common::config::{SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
use nested_numbers_common::debug_log::DebugLog;
use nested_numbers_common::layout::{Level, compute_levels};
use nested_numbers_common::watchface::WatchFace;

use crate::profiling::ProfilingMetrics;
use crate::styles::{LABEL_FONT, LABEL_STYLE_WHITE, RIGHT_ALIGNED, TITLE_STYLE};

// =============================================================================
// Layout Constants
// =============================================================================

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 16;

const STATS_Y: i32 = 27;
const STAT_LINE_HEIGHT: i32 = 10;

const LOG_DIVIDER_Y: i32 = 111;
const LOG_Y: i32 = 121;
const LOG_LINE_HEIGHT: i32 = 10;

/// Log lines that fit between the divider and the bottom edge.
const LOG_VISIBLE_LINES: usize = 5;

/// Text buffer for one stat line. Holds the widest line with every counter
/// at `u32::MAX`; the display clips anything past 24 columns.
const LINE_CAPACITY: usize = 48;

const LEFT_X: i32 = 2;
const RIGHT_X: i32 = SCREEN_WIDTH as i32 - 2;

const DEBUG_BG: Rgb565 = BLACK;
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);
const DIVIDER_COLOR: Rgb565 = GRAY;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LEVEL_COLOR: Rgb565 = LIGHT_GRAY;

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug page.
pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &WatchFace,
    clock_label: &str,
    now: WallTime,
    metrics: &ProfilingMetrics,
) {
    display.clear(DEBUG_BG).ok();

    draw_header(display, now);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    let levels_y = draw_stats(display, face, clock_label, metrics);
    draw_levels(display, face, levels_y);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, face.log());
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    now: WallTime,
) {
    Text::new("DEBUG", Point::new(LEFT_X, HEADER_Y), TITLE_STYLE)
        .draw(display)
        .ok();

    let mut s: String<8> = String::new();
    let _ = write!(s, "{now}");
    Text::with_text_style(&s, Point::new(RIGHT_X, HEADER_Y), LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

fn draw_stats(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &WatchFace,
    clock_label: &str,
    metrics: &ProfilingMetrics,
) -> i32 {
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let mut y = STATS_Y;

    let s = counts_line(clock_label, metrics.ticks);
    Text::new(&s, Point::new(LEFT_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let s = shown_line(face.last_drawn(), face.redraw_count());
    Text::new(&s, Point::new(LEFT_X, y), LABEL_STYLE_WHITE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<LINE_CAPACITY> = String::new();
    let _ = write!(
        s,
        "Ms:{:.2} Avg:{:.2}",
        ms(metrics.render_time_us),
        ms(metrics.render_time_avg_us())
    );
    Text::new(&s, Point::new(LEFT_X, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<LINE_CAPACITY> = String::new();
    let _ = write!(
        s,
        "Min:{:.2} Max:{:.2}",
        ms(metrics.render_time_min_or_zero_us()),
        ms(metrics.render_time_max_us)
    );
    Text::new(&s, Point::new(LEFT_X, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let uptime = metrics.uptime_string();
    let mut s: String<LINE_CAPACITY> = String::new();
    let _ = write!(s, "Up:{uptime}");
    Text::new(&s, Point::new(LEFT_X, y), LABEL_STYLE_WHITE).draw(display).ok();

    y + STAT_LINE_HEIGHT
}

fn counts_line(
    clock_label: &str,
    ticks: u32,
) -> String<LINE_CAPACITY> {
    let mut s = String::new();
    let _ = write!(s, "Clock:{clock_label} Ticks:{ticks}");
    s
}

fn shown_line(
    last_drawn: Option<WallTime>,
    draws: u32,
) -> String<LINE_CAPACITY> {
    let mut s = String::new();
    match last_drawn {
        Some(time) => {
            let _ = write!(s, "Shown:{time} Draws:{draws}");
        }
        None => {
            let _ = write!(s, "Shown:--:-- Draws:{draws}");
        }
    }
    s
}

/// One line per nesting level: label, digit shown, box size and center.
fn draw_levels(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &WatchFace,
    mut y: i32,
) {
    let style = MonoTextStyle::new(LABEL_FONT, LEVEL_COLOR);
    let boxes = compute_levels(SCREEN_SIZE, face.layout());
    let digits = face.last_drawn().map(|time| time.digits().as_array());

    for level in Level::ALL {
        let b = boxes[level.index()];
        let mut s: String<LINE_CAPACITY> = String::new();
        let _ = write!(s, "{} ", level.label());
        match digits {
            Some(d) => {
                let _ = write!(s, "{}", d[level.index()]);
            }
            None => {
                let _ = write!(s, "-");
            }
        }
        let _ = write!(s, " {}x{} @{},{}", b.width, b.height, b.center.x, b.center.y);
        Text::new(&s, Point::new(LEFT_X, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

/// Most recent log entries, each prefixed with its level letter.
fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &DebugLog,
) {
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    let skip = log.len().saturating_sub(LOG_VISIBLE_LINES);

    for entry in log.iter().skip(skip) {
        let style = MonoTextStyle::new(LABEL_FONT, entry.level.color());

        let mut prefix = [0u8; 4];
        let prefix = entry.level.prefix().encode_utf8(&mut prefix);
        Text::new(prefix, Point::new(LEFT_X, y), style).draw(display).ok();

        Text::new(entry.message(), Point::new(LEFT_X + 8, y), LABEL_STYLE_WHITE)
            .draw(display)
            .ok();

        y += LOG_LINE_HEIGHT;
    }
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(LEFT_X, y), Point::new(RIGHT_X, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}

#[inline]
fn ms(us: u32) -> f32 { us as f32 / 1000.0 }
