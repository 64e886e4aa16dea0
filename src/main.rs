// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u32->u8, u128->u16 casts for clock math
#![allow(clippy::cast_precision_loss)] // u32->f32 in timing display
#![allow(clippy::cast_possible_wrap)] // u32->i32 for pixel positions
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Nested Numbers watch face simulator.
//!
//! Runs the face in a 144x168 SDL window the size of the watch display. The
//! simulator plays the part of the watch runtime: it shows the face, polls
//! the clock, turns minute changes into tick events and asks the face to
//! redraw when it is dirty.
//!
//! The face renders into an in-memory [`Framebuffer`] which is then copied
//! to the window, the same path a display driver would take on hardware.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `D` | Switch between the face and the debug page |
//! | `T` | Switch between local time and the fast demo clock |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod clock;
mod pages;
mod profiling;
mod screens;
mod styles;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use nested_numbers_common::clock::ClockSource;
use nested_numbers_common::config::{FaceLayout, SCREEN_SIZE};
use nested_numbers_common::debug_log::LogLevel;
use nested_numbers_common::framebuffer::Framebuffer;
use nested_numbers_common::tick::MinuteTicker;
use nested_numbers_common::watchface::WatchFace;

use crate::clock::{LocalClock, SimClock};
use crate::pages::Page;
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::timing::POLL_INTERVAL;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(SCREEN_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Nested Numbers", &output_settings);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut framebuffer = Framebuffer::new();
    let mut face = WatchFace::new(FaceLayout::DEFAULT);
    let mut clock = SimClock::Local(LocalClock);
    let mut ticker = MinuteTicker::new();
    let mut metrics = ProfilingMetrics::new();
    let mut current_page = Page::default();

    face.log_event(LogLevel::Info, "Simulator started");

    // Window opens on the face: the first sample primes the ticker, the
    // initial draw comes from the show event
    ticker.poll(clock.now());
    face.on_show();

    window.update(&display);

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let loop_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    face.on_hide();
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // The face is hidden while the debug page covers it. The
                        // ticker restarts on show, as at startup
                        Keycode::D => {
                            current_page = current_page.toggle();
                            match current_page {
                                Page::Face => {
                                    ticker.poll(clock.now());
                                    face.on_show();
                                }
                                Page::Debug => {
                                    face.on_hide();
                                    ticker.reset();
                                }
                            }
                        }
                        // A clock switch that changes the minute shows up as a tick below
                        Keycode::T => {
                            clock.toggle();
                            face.log_event(LogLevel::Info, match clock {
                                SimClock::Local(_) => "Clock: LOCAL",
                                SimClock::Demo(_) => "Clock: DEMO",
                            });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Minute Tick Service
        // ======================================================================

        let now = clock.now();
        if let Some(time) = ticker.poll(now) {
            face.on_minute_tick(time);
            metrics.inc_ticks();
        }

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        match current_page {
            Page::Face => {
                if face.needs_redraw() {
                    let render_start = Instant::now();
                    face.redraw(&mut framebuffer, &mut clock);
                    metrics.record_render(render_start.elapsed());

                    framebuffer.flush_to(&mut display);
                }
            }
            Page::Debug => {
                draw_debug_page(&mut display, &face, clock.label(), now, &metrics);
            }
        }

        metrics.inc_polls();
        window.update(&display);

        if let Some(remaining) = POLL_INTERVAL.checked_sub(loop_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
