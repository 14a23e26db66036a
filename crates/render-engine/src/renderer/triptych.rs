//! Timed image cycle with optional per-image labels.
//!
//! Each image holds for `seconds_per_image`, then hands over to the next
//! with a hard cut; the last image stays up once the cycle is exhausted.
//! The whole cycle shares one short fade envelope.

use reel_common::clock::FrameClock;
use reel_motion_core::envelope::CYCLE_FADE_SECS;
use reel_motion_core::{cycle_index, OpacityEnvelope, Transform};
use reel_project_model::region::Region;
use reel_project_model::shot::{ShotDescriptor, TriptychSpec};

use super::{captions, overlay_layer};
use crate::compositor::{ImageLayer, Layer};

pub(crate) fn render(
    clock: FrameClock,
    shot: &ShotDescriptor,
    spec: &TriptychSpec,
    frame: f64,
) -> (f64, Vec<Layer>) {
    let fps = clock.fps_f64();
    let per_image = fps * spec.seconds_per_image;
    let index = cycle_index(frame, per_image, spec.images.len());

    let mut layers = Vec::with_capacity(4);

    if let Some(src) = spec.images.get(index) {
        layers.push(Layer::Image(ImageLayer {
            src: src.clone(),
            region: Region::FULL,
            transform: Transform::identity(),
            filters: spec.image_filters.clone(),
        }));
    }

    layers.extend(overlay_layer(shot));

    if let Some(label) = spec.labels.get(index) {
        layers.push(Layer::Caption(captions::label(label)));
    }
    if let Some(narration) = shot.narration.as_deref() {
        layers.push(Layer::Caption(captions::narration(narration)));
    }

    let cycle_frames = per_image * spec.images.len() as f64;
    let opacity = OpacityEnvelope::new(cycle_frames, fps, CYCLE_FADE_SECS).opacity_at(frame);
    (opacity, layers)
}
