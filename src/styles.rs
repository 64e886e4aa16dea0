//! Static text styles for the debug page.
//!
//! Fonts and alignments are `const` so nothing is built per frame; only the
//! color varies, via `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use nested_numbers_common::colors::{GREEN, WHITE};
use profont::PROFONT_12_POINT;

/// Right-aligned text. Used for the clock readout in the debug header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Small label font (6x10 pixels), 24 columns across the 144px screen.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Small white text for stat values.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Debug page title (`ProFont` 12pt).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, GREEN);
