#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractals and long-exposure spirographs
//!
//! Two small renderers that turn a bit of mathematics into pixels.
//!
//! The first is the classic escape-time Mandelbrot.  Each pixel maps
//! to a point `c` on the complex plane; starting from zero, the
//! point `z` is repeatedly squared and `c` added, and the number of
//! steps it survives before its magnitude passes 2 picks the color
//! of the pixel.  Points that never escape within the iteration cap
//! make up the body of the set.
//!
//! The second traces a spirograph, a pen riding a circle that rolls
//! around another circle, with a dash of Lissajous thrown in.  Rather
//! than drawing a line, each of many thousands of samples along the
//! curve adds a little light to the pixel it lands on, the way a long
//! photographic exposure would.  Where the curve crosses itself many
//! times, the pixels burn out to white.
//!
//! Both renderers write into the same `PixelBuffer`, which is then
//! handed to a `FrameSink` to be saved or shown.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;

pub mod buffer;
pub mod errors;
pub mod escape;
pub mod mandel;
pub mod palette;
pub mod planes;
pub mod sink;
pub mod spiro;

pub use buffer::{PixelBuffer, Rgb};
pub use errors::RenderError;
pub use escape::{escape_time, MAXITER};
pub use mandel::FractalRenderer;
pub use palette::{color_map, Palette};
pub use planes::ComplexPlane;
pub use sink::{write_png, Display, ExitFlag, FrameSink, PngSink, WindowEvents};
pub use spiro::{CurveParams, Exposure, SpiroRenderer};
