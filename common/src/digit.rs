//! Digit rendering: expands a digit value into its lit segment quads.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::quad::{FilledQuad, Quad};
use crate::segments::{DigitGeometry, Midline, SEGMENT_COUNT, lit_segments};

/// Everything needed to draw one digit for one frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitSpec {
    /// Digit value. Anything above 9 draws nothing.
    pub value: u8,
    pub geometry: DigitGeometry,
    pub color: Rgb565,
    pub midline: Midline,
}

impl DigitSpec {
    pub const fn new(
        value: u8,
        geometry: DigitGeometry,
        color: Rgb565,
        midline: Midline,
    ) -> Self {
        Self {
            value,
            geometry,
            color,
            midline,
        }
    }

    #[inline]
    pub const fn is_distorted(&self) -> bool { matches!(self.midline, Midline::Distorted) }

    /// Quads of the lit segments, in segment index order. Empty for digits
    /// outside 0-9.
    pub fn quads(&self) -> Vec<Quad, SEGMENT_COUNT> {
        let fraction = self.midline.fraction();
        let mut quads = Vec::new();
        for segment in lit_segments(self.value) {
            // Capacity equals the segment count, so this never overflows
            quads.push(self.geometry.segment_quad(segment, fraction)).ok();
        }
        quads
    }

    /// Lit segment quads paired with this digit's color.
    pub fn filled_quads(&self) -> impl Iterator<Item = FilledQuad> {
        let color = self.color;
        self.quads().into_iter().map(move |quad| FilledQuad::new(quad, color))
    }

    /// Fill every lit segment.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        for quad in self.quads() {
            quad.fill(display, self.color);
        }
    }
}

/// Draw `spec` onto `display`. A digit outside 0-9 is a silent no-op.
#[inline]
pub fn draw_digit<D>(
    display: &mut D,
    spec: &DigitSpec,
) where
    D: DrawTarget<Color = Rgb565>,
{
    spec.draw(display);
}
