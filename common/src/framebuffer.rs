//! In-memory RGB565 framebuffer for the watch face.
//!
//! The face is rendered into this buffer first and then flushed to whatever
//! the host displays it on. Pixels are stored big-endian (high byte first),
//! the byte order display controllers expect on the wire, so the buffer can be
//! sent as-is.
//!
//! Out-of-bounds pixels are clipped silently: degenerate segment geometry may
//! reach outside the screen and must not panic.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;
/// Bytes per frame (2 bytes per pixel).
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// A full-screen RGB565 frame.
#[derive(Clone)]
pub struct Framebuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl Framebuffer {
    /// Create a framebuffer with every pixel black.
    pub const fn new() -> Self {
        Self {
            buffer: [0u8; BUFFER_SIZE],
        }
    }

    /// Raw big-endian pixel bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.buffer }

    /// Overwrite every pixel with `color`.
    pub fn clear_buffer(
        &mut self,
        color: Rgb565,
    ) {
        let bytes = encode(color);
        for px in self.buffer.chunks_exact_mut(2) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Read back a pixel, `None` outside the screen.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        let idx = index_of(point.x, point.y)?;
        let raw = u16::from_be_bytes([self.buffer[idx], self.buffer[idx + 1]]);
        Some(RawU16::new(raw).into())
    }

    /// Count pixels equal to `color`.
    pub fn count_color(
        &self,
        color: Rgb565,
    ) -> usize {
        let bytes = encode(color);
        self.buffer
            .chunks_exact(2)
            .filter(|px| px[0] == bytes[0] && px[1] == bytes[1])
            .count()
    }

    /// Copy the whole frame onto another draw target.
    pub fn flush_to<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = Rectangle::new(Point::zero(), self.size());
        let colors = self
            .buffer
            .chunks_exact(2)
            .map(|px| Rgb565::from(RawU16::new(u16::from_be_bytes([px[0], px[1]]))));
        target.fill_contiguous(&area, colors).ok();
    }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if let Some(idx) = index_of(x, y) {
            self.buffer[idx..idx + 2].copy_from_slice(&encode(color));
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

#[inline]
fn encode(color: Rgb565) -> [u8; 2] {
    let raw: RawU16 = color.into();
    raw.into_inner().to_be_bytes()
}

#[inline]
fn index_of(
    x: i32,
    y: i32,
) -> Option<usize> {
    if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
        Some((y as usize * WIDTH + x as usize) * 2)
    } else {
        None
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let bytes = encode(color);
        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = (y as usize * WIDTH + x_start) * 2;
            let row = &mut self.buffer[row_start..row_start + width * 2];
            for px in row.chunks_exact_mut(2) {
                px.copy_from_slice(&bytes);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, LIGHT_GRAY, WHITE};

    #[test]
    fn test_buffer_size() {
        assert_eq!(BUFFER_SIZE, 144 * 168 * 2);
    }

    #[test]
    fn test_new_is_black() {
        let fb = Framebuffer::new();
        assert_eq!(fb.count_color(BLACK), WIDTH * HEIGHT);
    }

    #[test]
    fn test_pixel_round_trip_big_endian() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(3, 2, LIGHT_GRAY);
        assert_eq!(fb.pixel(Point::new(3, 2)), Some(LIGHT_GRAY));

        let idx = (2 * WIDTH + 3) * 2;
        let raw: RawU16 = LIGHT_GRAY.into();
        assert_eq!(fb.as_bytes()[idx], (raw.into_inner() >> 8) as u8);
        assert_eq!(fb.as_bytes()[idx + 1], raw.into_inner() as u8);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(-1, 0, WHITE);
        fb.set_pixel(0, HEIGHT as i32, WHITE);
        fb.set_pixel(WIDTH as i32, 5, WHITE);
        assert_eq!(fb.count_color(WHITE), 0);
        assert_eq!(fb.pixel(Point::new(-1, 0)), None);
    }

    #[test]
    fn test_fill_solid_clips_to_screen() {
        let mut fb = Framebuffer::new();
        let area = Rectangle::new(Point::new(140, 160), Size::new(10, 10));
        fb.fill_solid(&area, WHITE).ok();
        assert_eq!(fb.count_color(WHITE), 4 * 8);
        assert_eq!(fb.pixel(Point::new(143, 167)), Some(WHITE));
        assert_eq!(fb.pixel(Point::new(139, 167)), Some(BLACK));
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new();
        fb.clear(WHITE).ok();
        assert_eq!(fb.count_color(WHITE), WIDTH * HEIGHT);
    }

    #[test]
    fn test_flush_copies_every_pixel() {
        let mut src = Framebuffer::new();
        src.fill_solid(&Rectangle::new(Point::new(10, 10), Size::new(5, 5)), WHITE).ok();
        let mut dst = Framebuffer::new();
        dst.clear_buffer(LIGHT_GRAY);
        src.flush_to(&mut dst);
        assert_eq!(src.as_bytes(), dst.as_bytes());
    }
}
