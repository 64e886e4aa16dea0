//! Core of the Nested Numbers watch face.
//!
//! The face shows HH:MM as four seven-segment digits nested inside each
//! other: every digit but the last has its midline lifted to 15% of its
//! height, and the next digit sits in the tall body below it.
//!
//! This crate contains the platform-agnostic code, shared by any host that
//! can provide an `embedded_graphics` draw target and a wall clock:
//!
//! - [`segments`]: Seven-segment table and per-segment quad geometry
//! - [`quad`]: Four-point polygons and their rasterization
//! - [`digit`]: Digit value to lit segment quads
//! - [`layout`]: Nested level boxes and per-frame digit composition
//! - [`face`]: Pure frame rendering (time in, colored quads out)
//! - [`watchface`]: Show/hide/tick/redraw adapter for the host
//! - [`clock`]: Validated wall time and the clock source trait
//! - [`tick`]: Minute-boundary detection for polling hosts
//! - [`framebuffer`]: In-memory RGB565 draw target
//! - [`config`]: Display size and layout tuning tables
//! - [`colors`]: RGB565 palette
//! - [`debug_log`]: Leveled event ring buffer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation-free; tests run on the host with
//! `std` enabled.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p nested-numbers-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod debug_log;
pub mod digit;
pub mod face;
pub mod framebuffer;
pub mod layout;
pub mod quad;
pub mod segments;
pub mod tick;
pub mod watchface;

// Re-export commonly used items
pub use clock::{ClockSource, WallTime};
pub use config::FaceLayout;
pub use face::{Frame, draw_clock_face, render_clock_face};
pub use watchface::WatchFace;
