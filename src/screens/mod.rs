//! Screens drawn directly by the simulator.
//!
//! The watch face itself is rendered by the common crate into a framebuffer;
//! only the debug page ([`debug`]) lives here, since it needs fonts and the
//! simulator's profiling state.

mod debug;

pub use debug::draw_debug_page;
