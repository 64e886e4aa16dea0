//! Color constants for the watch face.
//!
//! The face uses a 3-color palette: a black background, a primary tone for
//! the odd nesting levels and a secondary tone for the even ones.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! It is the native format of the framebuffer and the simulator window, so no
//! conversion happens between rendering and flushing.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Background of every frame.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Primary digit tone.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors
// =============================================================================

/// Light gray, roughly 2/3 brightness (0xAAAAAA in 24-bit terms).
/// RGB565: (21, 42, 21). Secondary digit tone.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray for debug page dividers and section headers.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Green for debug page headers and info-level log entries.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Yellow for highlighted stats and warn-level log entries.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Palette
// =============================================================================

/// Which palette tone a nesting level is painted with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tone {
    Primary,
    Secondary,
}

/// The three colors a frame is composed of.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub background: Rgb565,
    pub primary: Rgb565,
    pub secondary: Rgb565,
}

impl Palette {
    /// Black background, white and light gray digits.
    pub const DEFAULT: Self = Self {
        background: BLACK,
        primary: WHITE,
        secondary: LIGHT_GRAY,
    };

    /// Resolve a tone to its color.
    #[inline]
    pub const fn color(
        &self,
        tone: Tone,
    ) -> Rgb565 {
        match tone {
            Tone::Primary => self.primary,
            Tone::Secondary => self.secondary,
        }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::DEFAULT }
}
