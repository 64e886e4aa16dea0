//! Nested layout: four digit boxes, each inside the body of its parent.
//!
//! Level 1 fills the canvas minus the margins. Every following level keeps
//! the parent's center x, scales width and height by the level's
//! [`NestRatio`] and moves its center down by a fraction of the parent's
//! height. All results are truncated to whole pixels before the next level is
//! derived from them.
//!
//! For the 144x168 display:
//!
//! | Level | Digit       | Box      | Center    |
//! |-------|-------------|----------|-----------|
//! | 1     | hour tens   | 138x158  | (72, 84)  |
//! | 2     | hour ones   | 117x113  | (72, 95)  |
//! | 3     | minute tens | 97x76    | (72, 102) |
//! | 4     | minute ones | 78x47    | (72, 106) |

use embedded_graphics::prelude::*;

use crate::clock::WallTime;
use crate::config::{FaceLayout, LEVEL_COUNT, NestRatio};
use crate::digit::DigitSpec;
use crate::segments::{DigitGeometry, Midline};

/// One of the four nesting levels, outermost first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
}

impl Level {
    pub const ALL: [Self; LEVEL_COUNT] = [Self::HourTens, Self::HourOnes, Self::MinuteTens, Self::MinuteOnes];

    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Short label for the debug page.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HourTens => "H1",
            Self::HourOnes => "H2",
            Self::MinuteTens => "M1",
            Self::MinuteOnes => "M2",
        }
    }
}

/// Bounding box of one nesting level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LevelBox {
    pub center: Point,
    pub width: i32,
    pub height: i32,
}

impl LevelBox {
    pub const fn new(
        center: Point,
        width: i32,
        height: i32,
    ) -> Self {
        Self { center, width, height }
    }

    /// Outermost box: centered on the canvas, margins taken off its size.
    pub fn outermost(
        canvas: Size,
        layout: &FaceLayout,
    ) -> Self {
        let center = Point::new((canvas.width / 2) as i32, (canvas.height / 2) as i32);
        Self::new(
            center,
            canvas.width as i32 - layout.margin_x as i32,
            canvas.height as i32 - layout.margin_y as i32,
        )
    }

    /// Child box placed inside this one.
    pub fn nest(
        &self,
        ratio: &NestRatio,
    ) -> Self {
        let width = (self.width as f32 * ratio.width) as i32;
        let height = (self.height as f32 * ratio.height) as i32;
        let center_y = (self.center.y as f32 + self.height as f32 * ratio.offset) as i32;
        Self::new(Point::new(self.center.x, center_y), width, height)
    }

    /// Digit geometry for this box with the given stroke.
    #[inline]
    pub const fn geometry(
        &self,
        thickness: i32,
    ) -> DigitGeometry {
        DigitGeometry::new(self.center, self.width, self.height, thickness)
    }
}

/// Boxes of all four levels for a canvas, outermost first.
pub fn compute_levels(
    canvas: Size,
    layout: &FaceLayout,
) -> [LevelBox; LEVEL_COUNT] {
    let mut boxes = [LevelBox::outermost(canvas, layout); LEVEL_COUNT];
    for (i, ratio) in layout.ratios.iter().enumerate() {
        boxes[i + 1] = boxes[i].nest(ratio);
    }
    boxes
}

/// The four digits to draw for `time`, in back-to-front order.
pub fn compose_frame(
    time: WallTime,
    canvas: Size,
    layout: &FaceLayout,
) -> [DigitSpec; LEVEL_COUNT] {
    let digits = time.digits().as_array();
    let boxes = compute_levels(canvas, layout);
    core::array::from_fn(|i| {
        let style = &layout.styles[i];
        DigitSpec::new(
            digits[i],
            boxes[i].geometry(style.thickness),
            layout.palette.color(style.tone),
            Midline::from_distorted(style.distorted),
        )
    })
}
