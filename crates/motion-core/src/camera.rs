//! Camera moves and jitter for background images.
//!
//! A background transform is an ordered list of operations, applied the way
//! a CSS `transform` list is: the first operation is outermost. Each move
//! runs from frame 0 to the shot's last frame and holds its final value
//! afterwards.

use reel_project_model::shot::{CameraMove, Effect};
use serde::{Deserialize, Serialize};

use crate::interpolate::{interpolate, InterpolateOptions};

/// Scale reached by a push-in (and started from by a pull-out).
pub const PUSH_SCALE: f64 = 1.15;

/// Horizontal travel of a pan (px).
pub const PAN_DISTANCE_PX: f64 = -50.0;

/// Vertical travel of a tilt (px).
pub const TILT_DISTANCE_PX: f64 = -30.0;

/// A single transform operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    Scale { factor: f64 },
    Translate { x: f64, y: f64 },
}

/// An ordered transform list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub ops: Vec<TransformOp>,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn scale(factor: f64) -> Self {
        Self {
            ops: vec![TransformOp::Scale { factor }],
        }
    }

    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            ops: vec![TransformOp::Translate { x, y }],
        }
    }

    /// Append `other` so it applies inside this transform.
    pub fn then(mut self, other: Transform) -> Self {
        self.ops.extend(other.ops);
        self
    }

    /// Collapse into a uniform scale and translation: `p' = scale * p + (tx, ty)`.
    pub fn resolve(&self) -> (f64, f64, f64) {
        // Walk innermost-first so each outer op wraps the accumulated result.
        self.ops
            .iter()
            .rev()
            .fold((1.0, 0.0, 0.0), |(s, tx, ty), op| match *op {
                TransformOp::Scale { factor } => (s * factor, tx * factor, ty * factor),
                TransformOp::Translate { x, y } => (s, tx + x, ty + y),
            })
    }

    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        if self.ops.is_empty() {
            return "none".to_string();
        }
        self.ops
            .iter()
            .map(|op| match *op {
                TransformOp::Scale { factor } => format!("scale({factor})"),
                TransformOp::Translate { x, y } => format!("translate({x}px, {y}px)"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Transform for `camera_move` at `frame` of a shot lasting `duration_frames`.
///
/// `Static` and `Shake` hold the frame still; shake motion comes from the
/// glitch effect rather than the camera.
pub fn camera_transform(camera_move: CameraMove, frame: f64, duration_frames: f64) -> Transform {
    let ramp = |from: f64, to: f64| {
        interpolate(
            frame,
            [0.0, duration_frames],
            [from, to],
            InterpolateOptions::CLAMP_RIGHT,
        )
    };

    match camera_move {
        CameraMove::PushIn => Transform::scale(ramp(1.0, PUSH_SCALE)),
        CameraMove::PullOut => Transform::scale(ramp(PUSH_SCALE, 1.0)),
        CameraMove::Pan => Transform::translate(ramp(0.0, PAN_DISTANCE_PX), 0.0),
        CameraMove::Tilt => Transform::translate(0.0, ramp(0.0, TILT_DISTANCE_PX)),
        CameraMove::Static | CameraMove::Shake => Transform::scale(1.0),
    }
}

/// Sinusoidal pixel jitter used by the glitch effect.
pub fn glitch_offset(frame: f64) -> (f64, f64) {
    ((frame * 0.5).sin() * 3.0, (frame * 0.7).cos() * 2.0)
}

/// Full background transform: camera move, then glitch jitter if enabled.
pub fn background_transform(
    camera_move: CameraMove,
    effect: Option<Effect>,
    frame: f64,
    duration_frames: f64,
) -> Transform {
    let transform = camera_transform(camera_move, frame, duration_frames);
    if effect == Some(Effect::Glitch) {
        let (dx, dy) = glitch_offset(frame);
        transform.then(Transform::translate(dx, dy))
    } else {
        transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: f64 = 150.0;

    fn scale_at(camera_move: CameraMove, frame: f64) -> f64 {
        camera_transform(camera_move, frame, D).resolve().0
    }

    #[test]
    fn test_push_in_and_pull_out_are_mirrors() {
        assert_eq!(scale_at(CameraMove::PushIn, 0.0), 1.0);
        assert!((scale_at(CameraMove::PushIn, D) - 1.15).abs() < 1e-9);
        assert!((scale_at(CameraMove::PullOut, 0.0) - 1.15).abs() < 1e-9);
        assert_eq!(scale_at(CameraMove::PullOut, D), 1.0);
        for f in [0.0, 30.0, 75.0, 120.0, 150.0] {
            let sum = scale_at(CameraMove::PushIn, f) + scale_at(CameraMove::PullOut, f);
            assert!((sum - 2.15).abs() < 1e-9);
        }
    }

    #[test]
    fn test_moves_clamp_after_last_frame() {
        assert!((scale_at(CameraMove::PushIn, 10_000.0) - 1.15).abs() < 1e-9);
        let (_, tx, _) = camera_transform(CameraMove::Pan, 999.0, D).resolve();
        assert!((tx + 50.0).abs() < 1e-9);
        let (_, _, ty) = camera_transform(CameraMove::Tilt, 999.0, D).resolve();
        assert!((ty + 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_pan_is_monotonic() {
        let mut last = f64::INFINITY;
        for f in 0..=150 {
            let (_, tx, _) = camera_transform(CameraMove::Pan, f as f64, D).resolve();
            assert!(tx <= last);
            last = tx;
        }
    }

    #[test]
    fn test_static_and_shake_are_identity() {
        for mv in [CameraMove::Static, CameraMove::Shake] {
            assert_eq!(camera_transform(mv, 42.0, D).resolve(), (1.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_glitch_only_when_effect_is_glitch() {
        let plain = background_transform(CameraMove::Static, Some(Effect::KenBurns), 7.0, D);
        assert_eq!(plain.ops.len(), 1);

        let glitched = background_transform(CameraMove::Static, Some(Effect::Glitch), 7.0, D);
        assert_eq!(glitched.ops.len(), 2);
        let (dx, dy) = glitch_offset(7.0);
        assert_eq!(glitched.resolve(), (1.0, dx, dy));
    }

    #[test]
    fn test_glitch_amplitude_is_bounded() {
        for f in 0..300 {
            let (dx, dy) = glitch_offset(f as f64);
            assert!(dx.abs() <= 3.0 && dy.abs() <= 2.0);
        }
        assert_eq!(glitch_offset(0.0), (0.0, 2.0));
    }

    #[test]
    fn test_resolve_scales_inner_translation() {
        let t = Transform::scale(2.0).then(Transform::translate(3.0, -1.0));
        assert_eq!(t.resolve(), (2.0, 6.0, -2.0));
    }

    #[test]
    fn test_css_rendering() {
        let t = Transform::scale(1.5).then(Transform::translate(3.0, 2.0));
        assert_eq!(t.to_css(), "scale(1.5) translate(3px, 2px)");
        assert_eq!(Transform::identity().to_css(), "none");
    }

    #[test]
    fn test_transform_serializes_tagged_ops() {
        let json = serde_json::to_string(&Transform::scale(1.0)).unwrap();
        assert_eq!(json, r#"{"ops":[{"op":"scale","factor":1.0}]}"#);
    }
}
