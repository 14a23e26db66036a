//! The generic shot renderer.
//!
//! Layers, bottom to top: background image (or black), overlay video,
//! centered headline, bottom narration.

use reel_common::clock::FrameClock;
use reel_motion_core::{background_transform, color_filters, OpacityEnvelope};
use reel_project_model::region::Region;
use reel_project_model::shot::{ShotDescriptor, VisualSource};

use super::{captions, overlay_layer};
use crate::compositor::{ImageLayer, Layer, SolidLayer};

pub(crate) fn render(clock: FrameClock, shot: &ShotDescriptor, frame: f64) -> (f64, Vec<Layer>) {
    // Rounded like the mount window so both agree on the shot length.
    let duration_frames = clock.secs_to_frames(shot.duration) as f64;
    let mut layers = Vec::with_capacity(4);

    match shot.visual_source() {
        VisualSource::Image(src) => layers.push(Layer::Image(ImageLayer {
            src: src.to_string(),
            region: Region::FULL,
            transform: background_transform(shot.camera_move, shot.effect, frame, duration_frames),
            filters: color_filters(shot.effect, frame, duration_frames),
        })),
        VisualSource::Black => layers.push(Layer::Solid(SolidLayer {
            region: Region::FULL,
            color: "#000000".to_string(),
        })),
    }

    layers.extend(overlay_layer(shot));

    if let Some(text) = shot.text.as_deref() {
        layers.push(Layer::Caption(captions::headline(text)));
    }
    if let Some(narration) = shot.narration.as_deref() {
        layers.push(Layer::Caption(captions::narration(narration)));
    }

    let opacity = OpacityEnvelope::for_shot(duration_frames, clock.fps_f64()).opacity_at(frame);
    (opacity, layers)
}
