//! Display and layout configuration.
//!
//! The face is a fixed composition: four nested digits at empirically tuned
//! proportions for a 144x168 display. The tuning constants live here as named
//! tables indexed by nesting level, bundled into a [`FaceLayout`] that the
//! layout engine receives explicitly.
//!
//! # Compile-Time Validation
//!
//! Each table is checked by `const` assertions. A ratio outside its range or a
//! non-positive stroke fails the build instead of producing a broken face.

use embedded_graphics::prelude::Size;

use crate::colors::{Palette, Tone};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen size as an `embedded_graphics` [`Size`].
pub const SCREEN_SIZE: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

/// Horizontal room left around the outermost digit (total, both sides).
pub const FACE_MARGIN_X: u32 = 6;

/// Vertical room left around the outermost digit (total, both sides).
pub const FACE_MARGIN_Y: u32 = 10;

const _: () = assert!(FACE_MARGIN_X < SCREEN_WIDTH);
const _: () = assert!(FACE_MARGIN_Y < SCREEN_HEIGHT);

// =============================================================================
// Midline Placement
// =============================================================================

/// Midline of a conventional digit, as a fraction of its height from the top.
pub const NORMAL_MIDLINE: f64 = 0.5;

/// Midline of a distorted digit: 15% from the top, leaving an 85% "body"
/// for the next nested digit.
pub const DISTORTED_MIDLINE: f64 = 0.15;

const _: () = assert!(DISTORTED_MIDLINE > 0.0);
const _: () = assert!(DISTORTED_MIDLINE < NORMAL_MIDLINE);

// =============================================================================
// Nesting Tables
// =============================================================================

/// Number of nested digits on the face (HH:MM).
pub const LEVEL_COUNT: usize = 4;

/// Scale and offset of one nesting level relative to its parent.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NestRatio {
    /// Child width as a fraction of the parent width.
    pub width: f32,
    /// Child height as a fraction of the parent height.
    pub height: f32,
    /// Downward shift of the child center, as a fraction of the parent height.
    pub offset: f32,
}

impl NestRatio {
    pub const fn new(
        width: f32,
        height: f32,
        offset: f32,
    ) -> Self {
        Self { width, height, offset }
    }
}

/// Ratios for levels 2, 3 and 4 (index 0 nests level 2 inside level 1).
///
/// These are visual tuning values that place each child inside the body of a
/// distorted parent. They are not derived from [`DISTORTED_MIDLINE`].
pub const NEST_RATIOS: [NestRatio; LEVEL_COUNT - 1] = [
    NestRatio::new(0.85, 0.72, 0.07),
    NestRatio::new(0.83, 0.68, 0.07),
    NestRatio::new(0.81, 0.63, 0.06),
];

/// Presentation of one nesting level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LevelStyle {
    /// Segment stroke thickness in pixels.
    pub thickness: i32,
    /// Palette tone the digit is filled with.
    pub tone: Tone,
    /// Whether the digit's midline is lifted to [`DISTORTED_MIDLINE`].
    pub distorted: bool,
}

impl LevelStyle {
    pub const fn new(
        thickness: i32,
        tone: Tone,
        distorted: bool,
    ) -> Self {
        Self {
            thickness,
            tone,
            distorted,
        }
    }
}

/// Per-level style, outermost first. Only the innermost digit is undistorted
/// since nothing nests inside it.
pub const LEVEL_STYLES: [LevelStyle; LEVEL_COUNT] = [
    LevelStyle::new(6, Tone::Primary, true),
    LevelStyle::new(5, Tone::Secondary, true),
    LevelStyle::new(4, Tone::Primary, true),
    LevelStyle::new(4, Tone::Secondary, false),
];

const fn ratios_valid(ratios: &[NestRatio]) -> bool {
    let mut i = 0;
    while i < ratios.len() {
        let r = &ratios[i];
        if !(r.width > 0.0 && r.width <= 1.0) {
            return false;
        }
        if !(r.height > 0.0 && r.height <= 1.0) {
            return false;
        }
        if !(r.offset >= 0.0 && r.offset < 0.5) {
            return false;
        }
        i += 1;
    }
    true
}

const fn styles_valid(styles: &[LevelStyle]) -> bool {
    let mut i = 0;
    while i < styles.len() {
        if styles[i].thickness <= 0 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(ratios_valid(&NEST_RATIOS));
const _: () = assert!(styles_valid(&LEVEL_STYLES));

// =============================================================================
// Face Layout
// =============================================================================

/// Everything the layout engine needs besides the time and canvas size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FaceLayout {
    /// Total horizontal margin around the outermost digit.
    pub margin_x: u32,
    /// Total vertical margin around the outermost digit.
    pub margin_y: u32,
    pub ratios: [NestRatio; LEVEL_COUNT - 1],
    pub styles: [LevelStyle; LEVEL_COUNT],
    pub palette: Palette,
}

impl FaceLayout {
    /// The fixed Nested Numbers composition.
    pub const DEFAULT: Self = Self {
        margin_x: FACE_MARGIN_X,
        margin_y: FACE_MARGIN_Y,
        ratios: NEST_RATIOS,
        styles: LEVEL_STYLES,
        palette: Palette::DEFAULT,
    };
}

impl Default for FaceLayout {
    fn default() -> Self { Self::DEFAULT }
}
