//! The fractal frame generator.  Sweeps a window of the complex
//! plane across the pixel buffer, one sample per pixel, and writes
//! the color of each sample's escape time.
//!
//! Every pixel is written exactly once and depends on nothing but
//! its own coordinates, so the sweep can be split into horizontal
//! bands and handed to as many threads as you like; the result is
//! identical to the single-threaded sweep.
use crossbeam;
use itertools::iproduct;

use buffer::{paint, PixelBuffer, Rgb};
use errors::RenderError;
use escape::{escape_time, MAXITER};
use palette::Palette;
use planes::{ComplexPlane, Pixel, PlaneMapper};

/// The parameters of an escape-time render.  Once set, this object
/// should not be mutable.
#[derive(Copy, Clone, Debug)]
pub struct FractalRenderer {
    window: ComplexPlane,
    limit: usize,
    palette: Palette,
}

impl Default for FractalRenderer {
    fn default() -> Self {
        FractalRenderer::new(ComplexPlane::default(), MAXITER, Palette::default())
    }
}

impl FractalRenderer {
    /// Requires the window of the complex plane to render, the
    /// iteration cap, and the palette.
    pub fn new(window: ComplexPlane, limit: usize, palette: Palette) -> Self {
        FractalRenderer {
            window,
            limit,
            palette,
        }
    }

    /// The window this renderer samples.
    pub fn window(&self) -> ComplexPlane {
        self.window
    }

    /// The color of one pixel, given the mapper for the frame it
    /// belongs to.
    pub fn pixel_color(&self, plane: &PlaneMapper, pixel: &Pixel) -> Rgb {
        let c = plane.pixel_to_point(pixel);
        self.palette.color(escape_time(c, self.limit))
    }

    fn mapper_for(&self, buffer: &PixelBuffer) -> PlaneMapper {
        PlaneMapper::new(buffer.width(), buffer.height(), self.window)
    }

    /// The main function for single-threaded renders.  Overwrites
    /// every pixel of `buffer`, rows top to bottom.
    pub fn render(&self, buffer: &mut PixelBuffer) {
        let plane = self.mapper_for(buffer);
        debug!(
            "sweeping {}x{} over {:?}, limit {}",
            buffer.width(),
            buffer.height(),
            self.window,
            self.limit
        );
        for (row, column) in iproduct!(0..buffer.height(), 0..buffer.width()) {
            let color = self.pixel_color(&plane, &Pixel(column, row));
            buffer.set_pixel(column as isize, row as isize, color);
        }
    }

    /// A multi-threaded version of the render function.  The buffer
    /// is cut into `threads` bands of whole rows, each swept by its
    /// own scoped thread.  A thread count of zero is treated as one.
    pub fn render_threaded(
        &self,
        buffer: &mut PixelBuffer,
        threads: usize,
    ) -> Result<(), RenderError> {
        let threads = if threads == 0 { 1 } else { threads };
        let plane = self.mapper_for(buffer);
        let width = buffer.width();
        let rows_per_band = (buffer.height() + threads - 1) / threads;
        debug!(
            "sweeping {}x{} on {} threads, {} rows each",
            width,
            buffer.height(),
            threads,
            rows_per_band
        );

        let plane = &plane;
        crossbeam::scope(|spawner| {
            for (band, pixels) in buffer.bands_mut(rows_per_band).enumerate() {
                spawner.spawn(move |_| {
                    let top = band * rows_per_band;
                    trace!("band {} starts at row {}", band, top);
                    for (offset, pixel) in pixels.iter_mut().enumerate() {
                        let p = Pixel(offset % width, top + offset / width);
                        paint(pixel, self.pixel_color(plane, &p));
                    }
                });
            }
        })
        .map_err(|_| RenderError::WorkerPanic)
    }
}
