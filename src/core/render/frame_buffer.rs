//=========================================================================
// Frame Buffer
//=========================================================================
//
// Software RGBA8 implementation of `Surface`.
//
// Rasterization:
// - Lines:   integer Bresenham
// - Circles: midpoint circle, eight-way symmetric
// - Rects:   clipped span fill
//
// Every write goes through `put_pixel`, which discards out-of-bounds
// coordinates; callers never need to clip.
//
// The platform copies `frame()` into the presentation buffer each redraw,
// so the byte layout matches it (row-major, 4 bytes per pixel).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Surface;
use crate::core::geometry::PixelPoint;

//=== Rgba ================================================================

/// An 8-bit-per-channel colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([0xff, 0xff, 0xff, 0xff]);
    pub const BLACK: Rgba = Rgba([0x00, 0x00, 0x00, 0xff]);
}

//=== FrameBuffer =========================================================

/// Row-major RGBA8 pixel buffer.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    background: Rgba,
    stroke: Rgba,
}

impl FrameBuffer {
    const BYTES_PER_PIXEL: usize = 4;

    /// Creates a buffer filled with the background colour.
    pub fn new(width: u32, height: u32, background: Rgba, stroke: Rgba) -> Self {
        let mut buffer = Self {
            width,
            height,
            pixels: Vec::new(),
            background,
            stroke,
        };
        buffer.reallocate();
        buffer
    }

    /// Raw RGBA bytes, row-major.
    pub fn frame(&self) -> &[u8] {
        &self.pixels
    }

    /// Colour at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let offset = self.offset(x as i64, y as i64)?;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + Self::BYTES_PER_PIXEL]);
        Some(Rgba(rgba))
    }

    /// Number of pixels currently holding the stroke colour.
    pub fn stroked_pixel_count(&self) -> usize {
        self.pixels
            .chunks_exact(Self::BYTES_PER_PIXEL)
            .filter(|px| **px == self.stroke.0[..])
            .count()
    }

    //--- Internal Helpers -------------------------------------------------

    fn reallocate(&mut self) {
        let len = self.width as usize * self.height as usize * Self::BYTES_PER_PIXEL;
        self.pixels.clear();
        self.pixels.reserve(len);
        for _ in 0..self.width as usize * self.height as usize {
            self.pixels.extend_from_slice(&self.background.0);
        }
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL)
    }

    fn put_pixel(&mut self, x: i64, y: i64, colour: Rgba) {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..offset + Self::BYTES_PER_PIXEL].copy_from_slice(&colour.0);
        }
    }

    /// Clamps a float coordinate so rasterization loops stay bounded.
    fn to_raster(&self, value: f32) -> i64 {
        let limit = self.width.max(self.height) as f32 * 2.0 + 2.0;
        value.round().clamp(-limit, limit) as i64
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.reallocate();
    }

    fn clear(&mut self) {
        let background = self.background.0;
        for px in self.pixels.chunks_exact_mut(Self::BYTES_PER_PIXEL) {
            px.copy_from_slice(&background);
        }
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let x0 = (x.floor().max(0.0) as i64).min(self.width as i64);
        let y0 = (y.floor().max(0.0) as i64).min(self.height as i64);
        let x1 = ((x + width).ceil().max(0.0) as i64).min(self.width as i64);
        let y1 = ((y + height).ceil().max(0.0) as i64).min(self.height as i64);

        let background = self.background;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put_pixel(px, py, background);
            }
        }
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint) {
        let (mut x0, mut y0) = (self.to_raster(from.x), self.to_raster(from.y));
        let (x1, y1) = (self.to_raster(to.x), self.to_raster(to.y));

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let stroke = self.stroke;

        loop {
            self.put_pixel(x0, y0, stroke);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn stroke_circle(&mut self, center: PixelPoint, radius: f32) {
        if radius.is_nan() || radius < 0.0 {
            return;
        }

        let cx = self.to_raster(center.x);
        let cy = self.to_raster(center.y);
        let r = self.to_raster(radius);
        let stroke = self.stroke;

        let mut x = r;
        let mut y = 0i64;
        let mut err = 1 - r;

        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx - y, cy - x),
                (cx + y, cy - x),
                (cx + x, cy - y),
            ] {
                self.put_pixel(px, py, stroke);
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(width: u32, height: u32) -> FrameBuffer {
        FrameBuffer::new(width, height, Rgba::WHITE, Rgba::BLACK)
    }

    //=====================================================================
    // Allocation Tests
    //=====================================================================

    #[test]
    fn new_buffer_is_background() {
        let fb = buffer(4, 3);
        assert_eq!(fb.frame().len(), 4 * 3 * 4);
        assert_eq!(fb.pixel(3, 2), Some(Rgba::WHITE));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.stroked_pixel_count(), 0);
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut fb = buffer(4, 4);
        fb.stroke_line(PixelPoint::new(0.0, 0.0), PixelPoint::new(3.0, 3.0));
        fb.resize(8, 2);

        assert_eq!(fb.size(), (8, 2));
        assert_eq!(fb.frame().len(), 8 * 2 * 4);
        assert_eq!(fb.stroked_pixel_count(), 0, "Resize discards contents");
    }

    #[test]
    fn zero_sized_buffer_ignores_drawing() {
        let mut fb = buffer(0, 0);
        fb.stroke_line(PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 10.0));
        fb.stroke_circle(PixelPoint::new(5.0, 5.0), 3.0);
        fb.clear_rect(0.0, 0.0, 10.0, 10.0);
        assert!(fb.frame().is_empty());
    }

    //=====================================================================
    // Rasterization Tests
    //=====================================================================

    #[test]
    fn horizontal_line_covers_span() {
        let mut fb = buffer(10, 10);
        fb.stroke_line(PixelPoint::new(0.0, 5.0), PixelPoint::new(9.0, 5.0));

        assert_eq!(fb.stroked_pixel_count(), 10);
        for x in 0..10 {
            assert_eq!(fb.pixel(x, 5), Some(Rgba::BLACK), "Pixel ({}, 5) should be stroked", x);
        }
    }

    #[test]
    fn line_past_edge_is_clipped() {
        let mut fb = buffer(10, 10);
        fb.stroke_line(PixelPoint::new(0.0, 3.0), PixelPoint::new(10.0, 3.0));
        assert_eq!(fb.stroked_pixel_count(), 10, "Endpoint at x = width must be dropped");
    }

    #[test]
    fn diagonal_line_hits_both_corners() {
        let mut fb = buffer(10, 10);
        fb.stroke_line(PixelPoint::new(9.0, 0.0), PixelPoint::new(0.0, 9.0));
        assert_eq!(fb.pixel(9, 0), Some(Rgba::BLACK));
        assert_eq!(fb.pixel(0, 9), Some(Rgba::BLACK));
        assert_eq!(fb.stroked_pixel_count(), 10);
    }

    #[test]
    fn circle_touches_cardinal_points() {
        let mut fb = buffer(21, 21);
        fb.stroke_circle(PixelPoint::new(10.0, 10.0), 8.0);

        assert_eq!(fb.pixel(18, 10), Some(Rgba::BLACK));
        assert_eq!(fb.pixel(2, 10), Some(Rgba::BLACK));
        assert_eq!(fb.pixel(10, 18), Some(Rgba::BLACK));
        assert_eq!(fb.pixel(10, 2), Some(Rgba::BLACK));
        assert_eq!(fb.pixel(10, 10), Some(Rgba::WHITE), "Circle is an outline");
    }

    #[test]
    fn negative_radius_draws_nothing() {
        let mut fb = buffer(10, 10);
        fb.stroke_circle(PixelPoint::new(5.0, 5.0), -1.0);
        fb.stroke_circle(PixelPoint::new(5.0, 5.0), f32::NAN);
        assert_eq!(fb.stroked_pixel_count(), 0);
    }

    #[test]
    fn clear_rect_only_touches_rect() {
        let mut fb = buffer(10, 10);
        fb.stroke_line(PixelPoint::new(0.0, 0.0), PixelPoint::new(9.0, 0.0));
        fb.stroke_line(PixelPoint::new(0.0, 5.0), PixelPoint::new(9.0, 5.0));

        fb.clear_rect(2.0, 4.0, 4.0, 3.0);

        assert_eq!(fb.pixel(1, 5), Some(Rgba::BLACK));
        assert_eq!(fb.pixel(3, 5), Some(Rgba::WHITE));
        assert_eq!(fb.pixel(6, 5), Some(Rgba::BLACK));
        assert_eq!(fb.pixel(3, 0), Some(Rgba::BLACK), "Row outside the rect is untouched");
    }

    #[test]
    fn clear_wipes_everything() {
        let mut fb = buffer(10, 10);
        fb.stroke_circle(PixelPoint::new(5.0, 5.0), 3.0);
        fb.clear();
        assert_eq!(fb.stroked_pixel_count(), 0);
    }
}
