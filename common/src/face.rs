//! Whole-face rendering: time in, draw commands out.
//!
//! [`render_clock_face`] is a pure function of the time, canvas size and
//! layout. It produces a [`Frame`]: the background color plus at most 28
//! colored quads in back-to-front order. Drawing a frame clears the target
//! first, so the output never depends on what was on screen before.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::clock::WallTime;
use crate::config::{FaceLayout, LEVEL_COUNT};
use crate::layout::compose_frame;
use crate::quad::FilledQuad;
use crate::segments::SEGMENT_COUNT;

/// Upper bound on quads per frame (every segment of every level lit).
pub const MAX_FRAME_QUADS: usize = LEVEL_COUNT * SEGMENT_COUNT;

/// Draw commands for one redraw.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frame {
    pub background: Rgb565,
    /// Quads in paint order: outermost level first.
    pub quads: Vec<FilledQuad, MAX_FRAME_QUADS>,
}

impl Frame {
    #[inline]
    pub fn len(&self) -> usize { self.quads.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.quads.is_empty() }

    /// Clear to the background and fill every quad in order.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(self.background).ok();
        for quad in &self.quads {
            quad.draw(display);
        }
    }
}

/// Build the draw commands for `time` on a canvas of `canvas` size.
pub fn render_clock_face(
    time: WallTime,
    canvas: Size,
    layout: &FaceLayout,
) -> Frame {
    let mut quads = Vec::new();
    for digit in compose_frame(time, canvas, layout) {
        for quad in digit.filled_quads() {
            // Four digits of at most seven segments each fit exactly
            quads.push(quad).ok();
        }
    }
    Frame {
        background: layout.palette.background,
        quads,
    }
}

/// Render `time` onto `display`, sized from the display's bounding box.
pub fn draw_clock_face<D>(
    display: &mut D,
    time: WallTime,
    layout: &FaceLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let canvas = display.bounding_box().size;
    render_clock_face(time, canvas, layout).draw(display);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, LIGHT_GRAY, WHITE};
    use crate::config::SCREEN_SIZE;
    use crate::framebuffer::Framebuffer;

    fn t(
        h: u8,
        m: u8,
    ) -> WallTime {
        WallTime::new(h, m).unwrap()
    }

    #[test]
    fn test_quad_counts() {
        let layout = FaceLayout::DEFAULT;
        // 2, 3, 5, 9 light five segments each
        assert_eq!(render_clock_face(t(23, 59), SCREEN_SIZE, &layout).len(), 20);
        // 1, 1, 1, 1 light two segments each
        assert_eq!(render_clock_face(t(11, 11), SCREEN_SIZE, &layout).len(), 8);
        // 0, 8, 0, 8
        assert_eq!(render_clock_face(t(8, 8), SCREEN_SIZE, &layout).len(), 26);
    }

    #[test]
    fn test_paint_order_is_outermost_first() {
        let frame = render_clock_face(t(11, 11), SCREEN_SIZE, &FaceLayout::DEFAULT);
        let colors: std::vec::Vec<Rgb565> = frame.quads.iter().map(|q| q.color).collect();
        assert_eq!(
            colors,
            [WHITE, WHITE, LIGHT_GRAY, LIGHT_GRAY, WHITE, WHITE, LIGHT_GRAY, LIGHT_GRAY]
        );
        // Bottom-right verticals shrink level by level
        let heights: std::vec::Vec<u32> = frame
            .quads
            .iter()
            .skip(1)
            .step_by(2)
            .map(|q| q.quad.bounding_box().size.height)
            .collect();
        assert_eq!(heights.len(), LEVEL_COUNT);
        assert!(heights.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_frame_background_is_black() {
        let frame = render_clock_face(t(12, 0), SCREEN_SIZE, &FaceLayout::DEFAULT);
        assert_eq!(frame.background, BLACK);
    }

    #[test]
    fn test_redraw_is_byte_identical() {
        let mut a = Framebuffer::new();
        let mut b = Framebuffer::new();
        draw_clock_face(&mut a, t(23, 59), &FaceLayout::DEFAULT);
        draw_clock_face(&mut b, t(23, 59), &FaceLayout::DEFAULT);
        draw_clock_face(&mut b, t(23, 59), &FaceLayout::DEFAULT);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_redraw_clears_previous_frame() {
        let mut fresh = Framebuffer::new();
        draw_clock_face(&mut fresh, t(11, 11), &FaceLayout::DEFAULT);

        let mut reused = Framebuffer::new();
        draw_clock_face(&mut reused, t(8, 8), &FaceLayout::DEFAULT);
        draw_clock_face(&mut reused, t(11, 11), &FaceLayout::DEFAULT);

        assert_eq!(fresh.as_bytes(), reused.as_bytes());
    }

    #[test]
    fn test_innermost_digit_painted_in_secondary() {
        let mut fb = Framebuffer::new();
        draw_clock_face(&mut fb, t(0, 0), &FaceLayout::DEFAULT);
        // Lower-left vertical of the innermost 0 spans x 33..37, y 106..129
        assert_eq!(fb.pixel(Point::new(35, 118)), Some(LIGHT_GRAY));
        // Left vertical of the outermost 0 spans x 3..9
        assert_eq!(fb.pixel(Point::new(6, 100)), Some(WHITE));
        // Hollow center stays black
        assert_eq!(fb.pixel(Point::new(72, 110)), Some(BLACK));
    }

    #[test]
    fn test_only_palette_colors_used() {
        let mut fb = Framebuffer::new();
        draw_clock_face(&mut fb, t(8, 8), &FaceLayout::DEFAULT);
        let total = fb.count_color(BLACK) + fb.count_color(WHITE) + fb.count_color(LIGHT_GRAY);
        assert_eq!(total, crate::framebuffer::WIDTH * crate::framebuffer::HEIGHT);
        assert!(fb.count_color(WHITE) > 0);
        assert!(fb.count_color(LIGHT_GRAY) > 0);
    }
}
