//! Seven-segment table and per-segment geometry.
//!
//! Segment layout:
//! ```text
//!    00000
//!   5     1
//!   5     1
//!    66666     <- midline (50% of height, or 15% when distorted)
//!   4     2
//!   4     2
//!    33333
//! ```
//!
//! Every segment is an axis-aligned quad. Which edges it spans is described
//! by [`SEGMENT_RULES`]; the only input that differs between normal and
//! distorted digits is the midline fraction passed to [`DigitGeometry`].

use embedded_graphics::prelude::Point;

use crate::config::{DISTORTED_MIDLINE, NORMAL_MIDLINE};
use crate::quad::Quad;

/// Number of segments in a digit.
pub const SEGMENT_COUNT: usize = 7;

/// One of the seven segment positions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Segment {
    Top = 0,
    TopRight = 1,
    BottomRight = 2,
    Bottom = 3,
    BottomLeft = 4,
    TopLeft = 5,
    Middle = 6,
}

impl Segment {
    /// All segments in index order.
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::Top,
        Self::TopRight,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::TopLeft,
        Self::Middle,
    ];

    #[inline]
    pub const fn index(self) -> usize { self as usize }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SEGMENT_COUNT { Some(Self::ALL[index]) } else { None }
    }

    /// Geometry rule for this segment.
    #[inline]
    pub const fn rule(self) -> SegmentRule { SEGMENT_RULES[self.index()] }
}

// =============================================================================
// Digit Table
// =============================================================================

/// Lit segments per decimal digit, columns in [`Segment`] index order.
pub const DIGIT_SEGMENTS: [[bool; SEGMENT_COUNT]; 10] = [
    [true, true, true, true, true, true, false],     // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],    // 2
    [true, true, true, true, false, false, true],    // 3
    [false, true, true, false, false, true, true],   // 4
    [true, false, true, true, false, true, true],    // 5
    [true, false, true, true, true, true, true],     // 6
    [true, true, true, false, false, false, false],  // 7
    [true, true, true, true, true, true, true],      // 8
    [true, true, true, false, false, true, true],    // 9
];

/// Table row for `digit`, `None` outside 0-9.
#[inline]
pub fn digit_segments(digit: u8) -> Option<&'static [bool; SEGMENT_COUNT]> { DIGIT_SEGMENTS.get(usize::from(digit)) }

/// Segments lit for `digit`. Yields nothing for values outside 0-9.
pub fn lit_segments(digit: u8) -> impl Iterator<Item = Segment> {
    let row = digit_segments(digit).copied().unwrap_or([false; SEGMENT_COUNT]);
    Segment::ALL.into_iter().filter(move |s| row[s.index()])
}

// =============================================================================
// Geometry Rules
// =============================================================================

/// Horizontal extent of a segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum XSpan {
    /// Left edge to right edge.
    Full,
    /// `thickness` wide, flush with the left edge.
    Left,
    /// `thickness` wide, flush with the right edge.
    Right,
}

/// Vertical extent of a segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum YSpan {
    /// `thickness` tall, flush with the top edge.
    TopBar,
    /// `thickness` tall, flush with the bottom edge.
    BottomBar,
    /// Top edge down to the midline.
    Upper,
    /// Midline down to the bottom edge.
    Lower,
    /// `thickness` tall, centered on the midline.
    Midline,
}

/// How one segment's quad is derived from the digit box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SegmentRule {
    pub x: XSpan,
    pub y: YSpan,
}

impl SegmentRule {
    pub const fn new(
        x: XSpan,
        y: YSpan,
    ) -> Self {
        Self { x, y }
    }
}

/// Geometry rule per segment, in [`Segment`] index order.
pub const SEGMENT_RULES: [SegmentRule; SEGMENT_COUNT] = [
    SegmentRule::new(XSpan::Full, YSpan::TopBar),
    SegmentRule::new(XSpan::Right, YSpan::Upper),
    SegmentRule::new(XSpan::Right, YSpan::Lower),
    SegmentRule::new(XSpan::Full, YSpan::BottomBar),
    SegmentRule::new(XSpan::Left, YSpan::Lower),
    SegmentRule::new(XSpan::Left, YSpan::Upper),
    SegmentRule::new(XSpan::Full, YSpan::Midline),
];

// =============================================================================
// Digit Geometry
// =============================================================================

/// Midline placement mode of a digit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Midline {
    /// Midline at half height.
    #[default]
    Normal,
    /// Midline lifted to 15% of the height.
    Distorted,
}

impl Midline {
    #[inline]
    pub const fn from_distorted(distorted: bool) -> Self { if distorted { Self::Distorted } else { Self::Normal } }

    /// Midline position as a fraction of the height from the top.
    #[inline]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Normal => NORMAL_MIDLINE,
            Self::Distorted => DISTORTED_MIDLINE,
        }
    }
}

/// Box and stroke of one digit. Dimensions are signed: nothing prevents a
/// caller from passing negative sizes, which produce inverted quads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitGeometry {
    pub center: Point,
    pub width: i32,
    pub height: i32,
    pub thickness: i32,
}

impl DigitGeometry {
    pub const fn new(
        center: Point,
        width: i32,
        height: i32,
        thickness: i32,
    ) -> Self {
        Self {
            center,
            width,
            height,
            thickness,
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 { self.center.x - self.width / 2 }

    #[inline]
    pub const fn right(&self) -> i32 { self.center.x + self.width / 2 }

    #[inline]
    pub const fn top(&self) -> i32 { self.center.y - self.height / 2 }

    #[inline]
    pub const fn bottom(&self) -> i32 { self.center.y + self.height / 2 }

    /// Midline y for a midline at `fraction` of the height from the top,
    /// truncated toward zero. Independent of width.
    ///
    /// Kept in `f64` so the result matches `trunc(cy - h * 0.35)` in double
    /// precision, including negative midlines.
    pub fn midline_y(
        &self,
        fraction: f64,
    ) -> i32 {
        let lift = NORMAL_MIDLINE - fraction;
        (f64::from(self.center.y) - f64::from(self.height) * lift) as i32
    }

    /// Quad of `segment` with the midline at `fraction` of the height.
    pub fn segment_quad(
        &self,
        segment: Segment,
        fraction: f64,
    ) -> Quad {
        let rule = segment.rule();
        let t = self.thickness;
        let (x0, x1) = match rule.x {
            XSpan::Full => (self.left(), self.right()),
            XSpan::Left => (self.left(), self.left() + t),
            XSpan::Right => (self.right() - t, self.right()),
        };
        let (y0, y1) = match rule.y {
            YSpan::TopBar => (self.top(), self.top() + t),
            YSpan::BottomBar => (self.bottom() - t, self.bottom()),
            YSpan::Upper => (self.top(), self.midline_y(fraction)),
            YSpan::Lower => (self.midline_y(fraction), self.bottom()),
            YSpan::Midline => {
                let mid = self.midline_y(fraction);
                (mid - t / 2, mid + t / 2)
            }
        };
        Quad::from_spans(x0, x1, y0, y1)
    }
}

/// Quad for one segment of a digit centered at `center`.
pub fn segment_quad(
    center: Point,
    segment: Segment,
    width: i32,
    height: i32,
    thickness: i32,
    midline: Midline,
) -> Quad {
    DigitGeometry::new(center, width, height, thickness).segment_quad(segment, midline.fraction())
}
