//! The seams between the renderers and the outside world: something
//! that takes a finished (or partly finished) buffer, and something
//! that hears about the user closing the window.
use image::png::PNGEncoder;
use image::ColorType;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use buffer::PixelBuffer;
use errors::RenderError;

/// Takes a buffer and shows, stores, or sends it somewhere.
pub trait FrameSink {
    /// Hand over the current contents of `buffer`.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), RenderError>;
}

/// Callbacks for the two ways a user can ask a display to go away.
pub trait WindowEvents {
    /// The window was closed.
    fn on_close(&mut self);
    /// The escape key was pressed.
    fn on_escape(&mut self);
}

/// A sink that also has a window which can deliver events.
pub trait Display: FrameSink {
    /// Deliver any pending window events to `events`.
    fn poll_events(&mut self, events: &mut dyn WindowEvents);
}

/// Why a render was asked to stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The window was closed.
    Closed,
    /// Escape was pressed.
    Escape,
}

/// Remembers the first exit request it hears.
#[derive(Debug, Default)]
pub struct ExitFlag {
    reason: Option<ExitReason>,
}

impl ExitFlag {
    /// A flag that has heard nothing yet.
    pub fn new() -> Self {
        ExitFlag::default()
    }

    /// Whether anyone has asked to stop.
    pub fn requested(&self) -> bool {
        self.reason.is_some()
    }

    /// The first reason given, if any.
    pub fn reason(&self) -> Option<ExitReason> {
        self.reason
    }

    fn request(&mut self, reason: ExitReason) {
        if self.reason.is_none() {
            self.reason = Some(reason);
        }
    }
}

impl WindowEvents for ExitFlag {
    fn on_close(&mut self) {
        self.request(ExitReason::Closed);
    }

    fn on_escape(&mut self) {
        self.request(ExitReason::Escape);
    }
}

/// Encode a buffer as an 8-bit RGB PNG onto any writer.
pub fn encode_png<W: Write>(output: W, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let encoder = PNGEncoder::new(output);
    encoder.encode(
        &buffer.as_bytes(),
        buffer.width() as u32,
        buffer.height() as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

/// Write a buffer to `path` as a PNG.
pub fn write_png<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let output = File::create(path.as_ref())?;
    encode_png(output, buffer)
}

/// A display with no window: every presented frame overwrites the
/// same PNG file.  It never produces window events.
#[derive(Debug)]
pub struct PngSink {
    path: PathBuf,
    frames: usize,
}

impl PngSink {
    /// A sink writing to `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        PngSink {
            path: path.into(),
            frames: 0,
        }
    }

    /// Where frames go.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How many frames have been written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl FrameSink for PngSink {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), RenderError> {
        write_png(&self.path, buffer)?;
        self.frames += 1;
        debug!("frame {} written to {}", self.frames, self.path.display());
        Ok(())
    }
}

impl Display for PngSink {
    fn poll_events(&mut self, _events: &mut dyn WindowEvents) {}
}
