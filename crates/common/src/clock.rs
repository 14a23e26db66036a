//! Frame clock utilities.
//!
//! Everything in a composition is authored in seconds but evaluated in
//! whole frames. This module provides utilities for:
//! - Converting authored seconds to frame counts at a fixed rate
//! - Converting frame indices back to seconds
//! - Stamping exported artifacts with wall-clock time

/// Converts between seconds and frames for a fixed frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    fps: u32,
}

impl FrameClock {
    /// Create a clock for the given rate. A rate of zero is bumped to 1.
    pub fn new(fps: u32) -> Self {
        Self { fps: fps.max(1) }
    }

    /// Frames per second.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frames per second as a float, for interpolation inputs.
    pub fn fps_f64(&self) -> f64 {
        self.fps as f64
    }

    /// Convert seconds to a whole frame count, rounding to the nearest frame.
    ///
    /// Negative inputs map to frame 0.
    pub fn secs_to_frames(&self, secs: f64) -> u64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 0;
        }
        (secs * self.fps as f64).round() as u64
    }

    /// Convert a frame index to seconds.
    pub fn frame_to_secs(&self, frame: u64) -> f64 {
        frame as f64 / self.fps as f64
    }
}

/// Current wall-clock time as an RFC 3339 string.
pub fn wall_clock_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
