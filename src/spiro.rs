//! Long-exposure spirograph trails.
//!
//! A pen rides on a circle of radius `inner_radius` rolling around a
//! circle of radius `outer_radius`, at `offset` times the rolling
//! radius from its center.  The carrier term gets its own horizontal
//! and vertical frequencies, Lissajous fashion:
//!
//! ```text
//! x(φ) = (R+r)·cos(φ·fx) + r·d·cos(φ·(R+r)/r)
//! y(φ) = (R+r)·sin(φ·fy) − r·d·sin(φ·(R+r)/r)
//! ```
//!
//! Each sample adds a small, fixed amount of light to the pixel it
//! lands on.  Where the curve passes many times, the pixel saturates
//! to white.
use std::f64::consts::PI;

use buffer::PixelBuffer;
use errors::RenderError;
use sink::{Display, ExitFlag};

/// The constants that fully determine the curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveParams {
    /// Radius of the fixed circle, `R`.
    pub outer_radius: f64,
    /// Radius of the rolling circle, `r`.
    pub inner_radius: f64,
    /// Distance of the pen from the rolling circle's center, in
    /// multiples of `r`.
    pub offset: f64,
    /// Samples per turn.
    pub steps: usize,
    /// Number of turns.
    pub period: usize,
    /// Horizontal frequency multiplier, `fx`.
    pub freq_x: u32,
    /// Vertical frequency multiplier, `fy`.
    pub freq_y: u32,
}

impl Default for CurveParams {
    fn default() -> Self {
        CurveParams {
            outer_radius: 100.0,
            inner_radius: 49.0,
            offset: 1.5,
            steps: 20_000,
            period: 25,
            freq_x: 1,
            freq_y: 1,
        }
    }
}

impl CurveParams {
    /// The curve at angle `phi`.
    pub fn point_at(&self, phi: f64) -> (f64, f64) {
        let (big, small) = (self.outer_radius, self.inner_radius);
        let roll = phi * (big + small) / small;
        let pen = small * self.offset;
        (
            (big + small) * (phi * f64::from(self.freq_x)).cos() + pen * roll.cos(),
            (big + small) * (phi * f64::from(self.freq_y)).sin() - pen * roll.sin(),
        )
    }

    /// The number of increments φ takes from 0 to `2π·period`.  The
    /// sample count, one more than this, must fit in a `usize`.
    pub fn increments(&self) -> Result<usize, RenderError> {
        self.steps
            .checked_mul(self.period)
            .and_then(|n| n.checked_add(1).map(|_| n))
            .ok_or(RenderError::TooManySamples {
                steps: self.steps,
                period: self.period,
            })
    }

    /// Every sample of the curve, in order.
    pub fn samples(&self) -> Result<Samples, RenderError> {
        Ok(Samples {
            params: *self,
            index: 0,
            increments: self.increments()?,
            end: 2.0 * PI * (self.period as f64),
        })
    }
}

/// The points of a curve, φ running from 0 to `2π·period` inclusive
/// in equal increments.  Each φ is computed from its index, so the
/// sequence does not drift.
#[derive(Debug)]
pub struct Samples {
    params: CurveParams,
    index: usize,
    increments: usize,
    end: f64,
}

impl Iterator for Samples {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        if self.index > self.increments {
            return None;
        }
        let phi = if self.increments == 0 {
            0.0
        } else {
            self.end * (self.index as f64) / (self.increments as f64)
        };
        self.index += 1;
        Some(self.params.point_at(phi))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.increments + 1).saturating_sub(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Samples {}

/// How much light a single sample adds to its pixel, per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Exposure(pub i32, pub i32, pub i32);

impl Default for Exposure {
    /// One twentieth of full scale on every channel.
    fn default() -> Self {
        Exposure(0xff / 20, 0xff / 20, 0xff / 20)
    }
}

/// Plots a curve into a buffer by additive blending.
#[derive(Copy, Clone, Debug, Default)]
pub struct SpiroRenderer {
    /// The curve.
    pub params: CurveParams,
    /// Light per sample.
    pub exposure: Exposure,
}

impl SpiroRenderer {
    /// A renderer for `params` with the given exposure.
    pub fn new(params: CurveParams, exposure: Exposure) -> Self {
        SpiroRenderer { params, exposure }
    }

    /// Add one sample to `buffer`, measured from its center.  Points
    /// off the buffer are dropped.
    pub fn plot(&self, buffer: &mut PixelBuffer, x: f64, y: f64) {
        let cx = (buffer.width() >> 1) as isize;
        let cy = (buffer.height() >> 1) as isize;
        let Exposure(dr, dg, db) = self.exposure;
        buffer.add_pixel(cx + x.round() as isize, cy + y.round() as isize, dr, dg, db);
    }

    /// Accumulate the whole curve into `buffer`.  The buffer is not
    /// cleared first.
    pub fn render(&self, buffer: &mut PixelBuffer) -> Result<(), RenderError> {
        let samples = self.params.samples()?;
        debug!("exposing {} samples of {:?}", samples.len(), self.params);
        for (x, y) in samples {
            self.plot(buffer, x, y);
        }
        Ok(())
    }

    /// Accumulate the curve, presenting the buffer to `display` after
    /// every `batch` samples and once more at the end, and polling
    /// the display for window events after each presentation.  An
    /// exit request stops sampling after the current batch.  A batch
    /// of zero presents only once, at the end.
    ///
    /// Returns the number of samples plotted.
    pub fn render_with<D: Display + ?Sized>(
        &self,
        buffer: &mut PixelBuffer,
        batch: usize,
        display: &mut D,
        exit: &mut ExitFlag,
    ) -> Result<usize, RenderError> {
        let mut plotted = 0;
        for (x, y) in self.params.samples()? {
            self.plot(buffer, x, y);
            plotted += 1;
            if batch > 0 && plotted % batch == 0 {
                display.present(buffer)?;
                display.poll_events(exit);
                if exit.requested() {
                    debug!("stopping after {} samples: {:?}", plotted, exit.reason());
                    return Ok(plotted);
                }
            }
        }
        display.present(buffer)?;
        display.poll_events(exit);
        Ok(plotted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buffer::{Rgb, BLACK};
    use sink::{ExitReason, FrameSink, WindowEvents};

    /// Counts frames and presses escape after a given number of them.
    struct FakeWindow {
        frames: usize,
        escape_after: Option<usize>,
    }

    impl FrameSink for FakeWindow {
        fn present(&mut self, _buffer: &PixelBuffer) -> Result<(), RenderError> {
            self.frames += 1;
            Ok(())
        }
    }

    impl Display for FakeWindow {
        fn poll_events(&mut self, events: &mut dyn WindowEvents) {
            if Some(self.frames) == self.escape_after {
                events.on_escape();
            }
        }
    }

    fn small() -> CurveParams {
        CurveParams {
            steps: 100,
            period: 3,
            ..CurveParams::default()
        }
    }

    #[test]
    fn default_exposure_is_a_twentieth() {
        assert_eq!(Exposure::default(), Exposure(12, 12, 12));
    }

    #[test]
    fn curve_starts_at_the_rim() {
        let (x, y) = CurveParams::default().point_at(0.0);
        assert!((x - (149.0 + 73.5)).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn samples_cover_the_closed_interval() {
        let params = small();
        let points: Vec<(f64, f64)> = params.samples().unwrap().collect();
        assert_eq!(points.len(), 301);
        assert_eq!(params.samples().unwrap().len(), 301);
        assert_eq!(points[0], params.point_at(0.0));
        let (x, y) = params.point_at(6.0 * PI);
        assert!((points[300].0 - x).abs() < 1e-9);
        assert!((points[300].1 - y).abs() < 1e-9);
    }

    #[test]
    fn empty_curve_yields_its_start() {
        let params = CurveParams {
            period: 0,
            ..CurveParams::default()
        };
        let points: Vec<(f64, f64)> = params.samples().unwrap().collect();
        assert_eq!(points, vec![params.point_at(0.0)]);
    }

    #[test]
    fn overflowing_sample_counts_are_refused() {
        let huge = CurveParams {
            steps: usize::max_value(),
            period: 2,
            ..CurveParams::default()
        };
        match huge.samples() {
            Err(RenderError::TooManySamples { period: 2, .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
        let edge = CurveParams {
            steps: usize::max_value(),
            period: 1,
            ..CurveParams::default()
        };
        assert!(edge.increments().is_err());

        let mut buffer = PixelBuffer::new(8, 8).unwrap();
        let spiro = SpiroRenderer::new(huge, Exposure::default());
        assert!(spiro.render(&mut buffer).is_err());
        let mut window = FakeWindow {
            frames: 0,
            escape_after: None,
        };
        assert!(spiro
            .render_with(&mut buffer, 10, &mut window, &mut ExitFlag::new())
            .is_err());
        assert_eq!(window.frames, 0);
        assert!(buffer.pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn lissajous_frequencies_change_the_curve() {
        let plain = CurveParams::default();
        let knotted = CurveParams {
            freq_x: 4,
            freq_y: 3,
            ..plain
        };
        assert_ne!(plain.point_at(0.3), knotted.point_at(0.3));
    }

    #[test]
    fn plot_is_centered_and_rounded() {
        let mut buffer = PixelBuffer::new(9, 8).unwrap();
        let spiro = SpiroRenderer::default();
        spiro.plot(&mut buffer, 0.4, -0.6);
        assert_eq!(buffer.get_pixel(4, 3), Some(Rgb(12, 12, 12)));
        spiro.plot(&mut buffer, 100.0, 0.0);
        assert_eq!(buffer.pixels().iter().filter(|p| **p != BLACK).count(), 1);
    }

    #[test]
    fn default_curve_saturates() {
        let mut buffer = PixelBuffer::new(512, 512).unwrap();
        SpiroRenderer::default().render(&mut buffer).unwrap();
        assert!(buffer.pixels().iter().any(|p| p.0 == 255));
        assert!(buffer.pixels().iter().any(|p| *p == BLACK));
    }

    #[test]
    fn accumulation_never_leaves_the_channel_range() {
        let mut buffer = PixelBuffer::new(64, 64).unwrap();
        let spiro = SpiroRenderer::new(
            CurveParams {
                outer_radius: 10.0,
                inner_radius: 5.0,
                offset: 1.0,
                ..small()
            },
            Exposure(200, 130, 0),
        );
        spiro.render(&mut buffer).unwrap();
        spiro.render(&mut buffer).unwrap();
        assert!(buffer
            .pixels()
            .iter()
            .any(|p| *p == Rgb(255, 255, 0)));
    }

    #[test]
    fn incremental_render_matches_one_pass() {
        let spiro = SpiroRenderer::new(small(), Exposure::default());
        let mut once = PixelBuffer::new(512, 512).unwrap();
        spiro.render(&mut once).unwrap();

        let mut batched = PixelBuffer::new(512, 512).unwrap();
        let mut window = FakeWindow {
            frames: 0,
            escape_after: None,
        };
        let mut exit = ExitFlag::new();
        let plotted = spiro
            .render_with(&mut batched, 100, &mut window, &mut exit)
            .unwrap();
        assert_eq!(plotted, 301);
        assert_eq!(window.frames, 4);
        assert_eq!(batched, once);
    }

    #[test]
    fn escape_stops_sampling() {
        let spiro = SpiroRenderer::new(small(), Exposure::default());
        let mut buffer = PixelBuffer::new(512, 512).unwrap();
        let mut window = FakeWindow {
            frames: 0,
            escape_after: Some(2),
        };
        let mut exit = ExitFlag::new();
        let plotted = spiro
            .render_with(&mut buffer, 50, &mut window, &mut exit)
            .unwrap();
        assert_eq!(plotted, 100);
        assert_eq!(window.frames, 2);
        assert_eq!(exit.reason(), Some(ExitReason::Escape));
    }

    #[test]
    fn zero_batch_presents_once() {
        let spiro = SpiroRenderer::new(small(), Exposure::default());
        let mut buffer = PixelBuffer::new(32, 32).unwrap();
        let mut window = FakeWindow {
            frames: 0,
            escape_after: None,
        };
        let mut exit = ExitFlag::new();
        spiro
            .render_with(&mut buffer, 0, &mut window, &mut exit)
            .unwrap();
        assert_eq!(window.frames, 1);
    }
}
