//! Opacity envelopes.
//!
//! Every shot fades in from transparent and back out so that cuts never pop.
//! The envelope is `0 → 1` over the fade-in, holds at 1, then `1 → 0` over
//! the fade-out ending on the last frame. Outside the span it is 0.

use crate::interpolate::{interpolate, InterpolateOptions};

/// Fade length used by single-image shots and split screens (seconds).
pub const SHOT_FADE_SECS: f64 = 0.3;

/// Fade length used by multi-image cycles (seconds).
pub const CYCLE_FADE_SECS: f64 = 0.2;

/// Fade-in/hold/fade-out opacity curve over a span of frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityEnvelope {
    /// Frames spent fading in (and, symmetrically, out).
    pub fade_frames: f64,
    /// Total span; opacity returns to 0 at this frame.
    pub total_frames: f64,
}

impl OpacityEnvelope {
    /// An envelope of `total_frames` with `fade_secs` fades at `fps`.
    pub fn new(total_frames: f64, fps: f64, fade_secs: f64) -> Self {
        Self {
            fade_frames: fps * fade_secs,
            total_frames,
        }
    }

    /// Envelope for a single-image shot.
    pub fn for_shot(total_frames: f64, fps: f64) -> Self {
        Self::new(total_frames, fps, SHOT_FADE_SECS)
    }

    /// Opacity at `frame`, always within `[0, 1]`.
    pub fn opacity_at(&self, frame: f64) -> f64 {
        // Fades longer than half the span would cross; meet in the middle.
        let fade = self.fade_frames.min(self.total_frames / 2.0).max(0.0);
        let value = interpolate(
            frame,
            [
                0.0,
                fade,
                self.total_frames - fade,
                self.total_frames,
            ],
            [0.0, 1.0, 1.0, 0.0],
            InterpolateOptions::CLAMP,
        );
        value.clamp(0.0, 1.0)
    }
}

/// One-way `0 → 1` ramp between `start` and `end`, holding 1 afterwards.
///
/// Values before `start` are 0. The result is non-decreasing in `frame`.
pub fn ramp(frame: f64, start: f64, end: f64) -> f64 {
    interpolate(frame, [start, end], [0.0, 1.0], InterpolateOptions::CLAMP).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_second_shot_at_thirty_fps() {
        let env = OpacityEnvelope::for_shot(150.0, 30.0);
        assert_eq!(env.opacity_at(0.0), 0.0);
        assert_eq!(env.opacity_at(9.0), 1.0);
        assert_eq!(env.opacity_at(75.0), 1.0);
        assert_eq!(env.opacity_at(141.0), 1.0);
        assert_eq!(env.opacity_at(150.0), 0.0);
    }

    #[test]
    fn test_outside_span_is_transparent() {
        let env = OpacityEnvelope::for_shot(150.0, 30.0);
        assert_eq!(env.opacity_at(-30.0), 0.0);
        assert_eq!(env.opacity_at(10_000.0), 0.0);
    }

    #[test]
    fn test_fade_in_is_linear() {
        let env = OpacityEnvelope::for_shot(150.0, 30.0);
        assert!((env.opacity_at(3.0) - 1.0 / 3.0).abs() < 1e-9);
        assert!((env.opacity_at(147.0) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_cycle_envelope_uses_short_fade() {
        let env = OpacityEnvelope::new(270.0, 30.0, CYCLE_FADE_SECS);
        assert_eq!(env.fade_frames, 6.0);
        assert_eq!(env.opacity_at(6.0), 1.0);
        assert_eq!(env.opacity_at(264.0), 1.0);
        assert_eq!(env.opacity_at(270.0), 0.0);
        assert_eq!(env.opacity_at(285.0), 0.0);
    }

    #[test]
    fn test_very_short_span_meets_in_middle() {
        let env = OpacityEnvelope::for_shot(10.0, 30.0);
        assert_eq!(env.opacity_at(5.0), 1.0);
        assert!(env.opacity_at(2.5) > 0.0 && env.opacity_at(2.5) < 1.0);
    }

    #[test]
    fn test_ramp_holds_at_one() {
        assert_eq!(ramp(0.0, 60.0, 120.0), 0.0);
        assert_eq!(ramp(60.0, 60.0, 120.0), 0.0);
        assert!((ramp(90.0, 60.0, 120.0) - 0.5).abs() < 1e-9);
        assert_eq!(ramp(120.0, 60.0, 120.0), 1.0);
        assert_eq!(ramp(299.0, 60.0, 120.0), 1.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn opacity_is_bounded(frame in -1000.0f64..10_000.0, secs in 0.1f64..60.0) {
                let env = OpacityEnvelope::for_shot(secs * 30.0, 30.0);
                let o = env.opacity_at(frame);
                prop_assert!((0.0..=1.0).contains(&o));
            }

            #[test]
            fn ramp_is_non_decreasing(frame in 0.0f64..600.0, step in 0.0f64..30.0) {
                prop_assert!(ramp(frame + step, 60.0, 120.0) >= ramp(frame, 60.0, 120.0));
            }
        }
    }
}
