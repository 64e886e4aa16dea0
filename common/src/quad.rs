//! Four-point polygons and their rasterization.
//!
//! `embedded-graphics` has no filled polygon primitive, so a [`Quad`] is
//! filled as two triangles sharing the `v0`-`v2` diagonal. This accepts any
//! vertex order: inverted, self-intersecting and zero-area quads still
//! rasterize (possibly to nothing) without panicking.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};

/// A quadrilateral, vertices in drawing order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Quad {
    pub vertices: [Point; 4],
}

impl Quad {
    pub const fn new(vertices: [Point; 4]) -> Self { Self { vertices } }

    /// Axis-aligned quad spanning `x0..x1` and `y0..y1`, emitted as
    /// `(x0,y0) (x1,y0) (x1,y1) (x0,y1)`. Spans are not normalized.
    pub const fn from_spans(
        x0: i32,
        x1: i32,
        y0: i32,
        y1: i32,
    ) -> Self {
        Self::new([Point::new(x0, y0), Point::new(x1, y0), Point::new(x1, y1), Point::new(x0, y1)])
    }

    /// Split into the two triangles used for filling.
    pub fn triangles(&self) -> [Triangle; 2] {
        let [v0, v1, v2, v3] = self.vertices;
        [Triangle::new(v0, v1, v2), Triangle::new(v0, v2, v3)]
    }

    /// Fill the quad with a solid color.
    pub fn fill<D>(
        &self,
        display: &mut D,
        color: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = PrimitiveStyle::with_fill(color);
        for triangle in self.triangles() {
            triangle.into_styled(style).draw(display).ok();
        }
    }
}

impl Dimensions for Quad {
    fn bounding_box(&self) -> Rectangle {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.component_min(*v);
            max = max.component_max(*v);
        }
        Rectangle::with_corners(min, max)
    }
}

/// A quad together with its fill color: one draw command of a frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FilledQuad {
    pub quad: Quad,
    pub color: Rgb565,
}

impl FilledQuad {
    pub const fn new(
        quad: Quad,
        color: Rgb565,
    ) -> Self {
        Self { quad, color }
    }

    #[inline]
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.quad.fill(display, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::framebuffer::Framebuffer;

    #[test]
    fn test_from_spans_vertex_order() {
        let q = Quad::from_spans(10, 20, 5, 8);
        assert_eq!(
            q.vertices,
            [Point::new(10, 5), Point::new(20, 5), Point::new(20, 8), Point::new(10, 8)]
        );
    }

    #[test]
    fn test_bounding_box_normalizes_inverted_spans() {
        let q = Quad::from_spans(20, 10, 8, 5);
        let bb = q.bounding_box();
        assert_eq!(bb.top_left, Point::new(10, 5));
        assert_eq!(bb.bottom_right(), Some(Point::new(20, 8)));
    }

    #[test]
    fn test_fill_covers_interior() {
        let mut fb = Framebuffer::new();
        fb.clear_buffer(BLACK);
        Quad::from_spans(10, 30, 10, 20).fill(&mut fb, WHITE);
        assert_eq!(fb.pixel(Point::new(20, 15)), Some(WHITE));
        assert_eq!(fb.pixel(Point::new(11, 19)), Some(WHITE));
        assert_eq!(fb.pixel(Point::new(40, 15)), Some(BLACK));
        assert_eq!(fb.pixel(Point::new(20, 25)), Some(BLACK));
    }

    #[test]
    fn test_degenerate_quads_do_not_panic() {
        let mut fb = Framebuffer::new();
        fb.clear_buffer(BLACK);
        // Zero area
        Quad::from_spans(5, 5, 5, 5).fill(&mut fb, WHITE);
        // Inverted
        Quad::from_spans(30, 10, 20, 10).fill(&mut fb, WHITE);
        // Self-intersecting bow tie
        Quad::new([Point::new(0, 0), Point::new(20, 20), Point::new(20, 0), Point::new(0, 20)]).fill(&mut fb, WHITE);
        // Far off screen
        Quad::from_spans(-500, -400, 900, 1000).fill(&mut fb, WHITE);
    }

    #[test]
    fn test_inverted_quad_still_fills() {
        let mut fb = Framebuffer::new();
        fb.clear_buffer(BLACK);
        Quad::from_spans(30, 10, 20, 10).fill(&mut fb, WHITE);
        assert_eq!(fb.pixel(Point::new(20, 15)), Some(WHITE));
    }
}
