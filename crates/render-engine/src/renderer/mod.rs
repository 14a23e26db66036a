//! Shot renderers: pure functions from a shot and a local frame to layers.
//!
//! The descriptor's [`RendererKind`] picks the renderer. All renderers
//! share the frame clock captured at construction and never keep state
//! between frames.

pub mod captions;
pub mod generic;
pub mod split_screen;
pub mod triptych;

use reel_common::clock::FrameClock;
use reel_project_model::region::Region;
use reel_project_model::shot::{RendererKind, ShotDescriptor};
use reel_project_model::storyboard::VideoConfig;

use crate::compositor::{Layer, ShotComposite, VideoLayer};

/// Renders shots for a fixed frame rate.
#[derive(Debug, Clone, Copy)]
pub struct ShotRenderer {
    clock: FrameClock,
}

impl ShotRenderer {
    pub fn new(config: &VideoConfig) -> Self {
        Self {
            clock: FrameClock::new(config.fps),
        }
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    /// Render `shot` at `local_frame` frames after its start.
    pub fn render(&self, shot: &ShotDescriptor, local_frame: u64) -> ShotComposite {
        let frame = local_frame as f64;
        let (opacity, layers) = match &shot.renderer {
            RendererKind::Generic => generic::render(self.clock, shot, frame),
            RendererKind::CrossfadeTriptych(spec) => {
                triptych::render(self.clock, shot, spec, frame)
            }
            RendererKind::SplitScreen(spec) => split_screen::render(self.clock, shot, spec, frame),
        };

        ShotComposite {
            shot_id: shot.id,
            local_frame,
            opacity,
            layers,
        }
    }
}

/// Full-frame overlay video layer, if the shot has one.
fn overlay_layer(shot: &ShotDescriptor) -> Option<Layer> {
    shot.overlay_video.as_ref().map(|src| {
        Layer::Video(VideoLayer {
            src: src.clone(),
            region: Region::FULL,
            opacity: shot.effective_overlay_opacity(),
            blend_mode: shot.effective_blend_mode(),
            muted: true,
        })
    })
}
