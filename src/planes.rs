//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a window on the complex plane given by its upper-left corner
//! and its extent along each axis.
use num::Complex;
use rand::Rng;

use errors::RenderError;

/// Describes the x, y of a pixel on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// A window on the complex plane, treating the real part of each
/// value as the x-component and the imaginary part as the
/// y-component.  Pixel row 0 sits at `origin.im`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane {
    /// The corner that pixel 0,0 maps onto.
    pub origin: Complex<f64>,
    /// Horizontal extent in `re`, vertical extent in `im`.
    pub span: Complex<f64>,
}

impl Default for ComplexPlane {
    /// The classic full view of the Mandelbrot set.
    fn default() -> Self {
        ComplexPlane {
            origin: Complex::new(-2.0, -1.5),
            span: Complex::new(3.0, 3.0),
        }
    }
}

impl ComplexPlane {
    /// Checks that both extents are finite and strictly positive.
    pub fn new(origin: Complex<f64>, span: Complex<f64>) -> Result<ComplexPlane, RenderError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(span.re) || !valid(span.im) {
            return Err(RenderError::InvalidWindow {
                re: span.re,
                im: span.im,
            });
        }
        Ok(ComplexPlane { origin, span })
    }

    /// The same window nudged vertically by up to half a unit either
    /// way, and stretched vertically by a factor between 0.5 and 1.5.
    pub fn jittered<R: Rng>(&self, rng: &mut R) -> ComplexPlane {
        let shift = rng.gen::<f64>() - 0.5;
        let stretch = 0.5 + rng.gen::<f64>();
        ComplexPlane {
            origin: Complex::new(self.origin.re, self.origin.im + shift),
            span: Complex::new(self.span.re, self.span.im * stretch),
        }
    }
}

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a window on the complex plane.  Maps pixels of the
/// former onto points of the latter.
#[derive(Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
    /// The window the integral plane covers.
    pub window: ComplexPlane,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane and the
    /// window it covers.
    pub fn new(width: usize, height: usize, window: ComplexPlane) -> PlaneMapper {
        PlaneMapper {
            width,
            height,
            window,
        }
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// point of the complex window it samples: `origin + pixel·span/size`
    /// on each axis.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.window.origin.re + (pixel.0 as f64) * self.window.span.re / (self.width as f64),
            self.window.origin.im + (pixel.1 as f64) * self.window.span.im / (self.height as f64),
        )
    }
}
