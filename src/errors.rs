//! The one error type shared by every fallible operation in the
//! crate.  Out-of-range pixel writes are deliberately *not* errors;
//! they are clipped silently by the buffer.
use std::io;

/// Everything that can go wrong while setting up a render or handing
/// the finished buffer to a sink.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// A pixel buffer was requested with a zero width or height.
    #[fail(display = "invalid buffer dimension: {}x{}", width, height)]
    InvalidDimension {
        /// The requested width.
        width: usize,
        /// The requested height.
        height: usize,
    },

    /// The complex-plane window has an empty, negative, or
    /// non-finite extent on one of its axes.
    #[fail(display = "invalid plane window: span {},{}", re, im)]
    InvalidWindow {
        /// Horizontal (real) extent.
        re: f64,
        /// Vertical (imaginary) extent.
        im: f64,
    },

    /// A curve asked for more samples than can be counted.
    #[fail(display = "too many samples: {} steps x {} turns", steps, period)]
    TooManySamples {
        /// Samples per turn.
        steps: usize,
        /// Number of turns.
        period: usize,
    },

    /// The image sink could not write its output.
    #[fail(display = "could not encode image: {}", _0)]
    Encode(#[cause] io::Error),

    /// One of the threads of a threaded sweep panicked.
    #[fail(display = "a render thread panicked")]
    WorkerPanic,
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Encode(err)
    }
}
