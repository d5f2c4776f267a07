//! The pixel buffer: a fixed-size grid of 8-bit RGB triples, and the
//! only mutable state a render touches.  Writes are clipped, never
//! rejected; both write paths go through the same saturating
//! channel primitive.
use num::clamp;
use std::slice::ChunksMut;

use errors::RenderError;

/// One pixel: red, green and blue, each 0 through 255.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Black.  The state of every pixel of a fresh or cleared buffer.
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Scale `old` by `keep` (0 or 1), add `delta`, and saturate into a
/// channel.  A direct write is `keep == 0`; an accumulation is
/// `keep == 1`.
#[inline]
fn saturate(old: u8, keep: i32, delta: i32) -> u8 {
    clamp((i32::from(old) * keep).saturating_add(delta), 0, 255) as u8
}

#[inline]
fn blend(p: &mut Rgb, keep: i32, delta: (i32, i32, i32)) {
    *p = Rgb(
        saturate(p.0, keep, delta.0),
        saturate(p.1, keep, delta.1),
        saturate(p.2, keep, delta.2),
    );
}

/// Overwrite a pixel already borrowed out of a band; the same write
/// `set_pixel` performs.
#[inline]
pub(crate) fn paint(p: &mut Rgb, color: Rgb) {
    blend(
        p,
        0,
        (i32::from(color.0), i32::from(color.1), i32::from(color.2)),
    );
}

/// A `width` by `height` raster, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// A black buffer of the given size.  Zero in either dimension is
    /// refused.
    pub fn new(width: usize, height: usize) -> Result<PixelBuffer, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimension { width, height });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels: vec![BLACK; width * height],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    fn write(&mut self, x: isize, y: isize, keep: i32, delta: (i32, i32, i32)) {
        if let Some(offset) = self.offset(x, y) {
            blend(&mut self.pixels[offset], keep, delta);
        }
    }

    /// Overwrite one pixel.  Coordinates outside the buffer are
    /// ignored.
    pub fn set_pixel(&mut self, x: isize, y: isize, color: Rgb) {
        self.write(
            x,
            y,
            0,
            (i32::from(color.0), i32::from(color.1), i32::from(color.2)),
        );
    }

    /// Add a per-channel delta to one pixel, clamping each channel to
    /// 0..=255.  Coordinates outside the buffer are ignored.
    pub fn add_pixel(&mut self, x: isize, y: isize, dr: i32, dg: i32, db: i32) {
        self.write(x, y, 1, (dr, dg, db));
    }

    /// The pixel at `x, y`, or `None` outside the buffer.
    pub fn get_pixel(&self, x: isize, y: isize) -> Option<Rgb> {
        self.offset(x, y).map(|offset| self.pixels[offset])
    }

    /// Paint the whole buffer black.
    pub fn clear(&mut self) {
        for p in self.pixels.iter_mut() {
            *p = BLACK;
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed `R, G, B` bytes, row-major; the layout image encoders
    /// expect.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.0, p.1, p.2]);
        }
        bytes
    }

    /// Disjoint bands of `rows` whole rows each, top to bottom.  The
    /// last band may be shorter.  Pixels in a band are only ever
    /// written with `paint`, so a band write is a `set_pixel`.
    pub(crate) fn bands_mut(&mut self, rows: usize) -> ChunksMut<'_, Rgb> {
        let rows = if rows == 0 { 1 } else { rows };
        self.pixels.chunks_mut(rows * self.width)
    }
}
