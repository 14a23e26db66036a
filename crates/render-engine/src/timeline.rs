//! Scene grouping and global-frame evaluation.
//!
//! Every shot is mounted on the global timeline at `round(start × fps)` for
//! `round(duration × fps)` frames, with a one-second premount lead so the
//! host can warm assets before the shot appears. Instructions are kept in
//! table order, which is also the painter's order.

use reel_common::clock::FrameClock;
use reel_common::error::{ReelError, ReelResult};
use reel_project_model::storyboard::Storyboard;
use serde::Serialize;

use crate::compositor::{FrameComposition, PremountHint};
use crate::renderer::ShotRenderer;

/// Where one shot lives on the global timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MountInstruction {
    pub shot_id: u32,
    pub scene_index: usize,
    pub from_frame: u64,
    pub duration_frames: u64,
    pub premount_frames: u64,
}

impl MountInstruction {
    /// First frame after the window.
    pub fn end_frame(&self) -> u64 {
        self.from_frame + self.duration_frames
    }

    pub fn is_visible(&self, frame: u64) -> bool {
        frame >= self.from_frame && frame < self.end_frame()
    }

    /// True during the lead-in before the shot becomes visible.
    pub fn is_premounting(&self, frame: u64) -> bool {
        frame < self.from_frame && frame >= self.from_frame.saturating_sub(self.premount_frames)
    }

    /// Frame relative to the shot start, if the shot is visible.
    pub fn local_frame(&self, frame: u64) -> Option<u64> {
        self.is_visible(frame).then(|| frame - self.from_frame)
    }
}

/// A frame range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameSpan {
    pub start: u64,
    pub end: u64,
}

impl FrameSpan {
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Two consecutive windows that share frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MountOverlap {
    pub first: u32,
    pub second: u32,
    pub frames: FrameSpan,
}

/// How completely the mount windows tile the composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub gaps: Vec<FrameSpan>,
    pub overlaps: Vec<MountOverlap>,
    /// End of the furthest window.
    pub covered_until: u64,
    pub total_frames: u64,
}

impl CoverageReport {
    /// True when the windows tile `[0, total_frames)` exactly.
    pub fn is_exact(&self) -> bool {
        self.gaps.is_empty() && self.overlaps.is_empty() && self.covered_until == self.total_frames
    }
}

/// A storyboard mounted on the global frame axis.
#[derive(Debug, Clone)]
pub struct Timeline {
    storyboard: Storyboard,
    renderer: ShotRenderer,
    mounts: Vec<MountInstruction>,
}

impl Timeline {
    pub fn new(storyboard: Storyboard) -> Self {
        let clock = FrameClock::new(storyboard.config.fps);
        let premount_frames = clock.secs_to_frames(storyboard.config.premount_secs);

        let mounts = storyboard
            .scenes()
            .iter()
            .enumerate()
            .flat_map(|(scene_index, scene)| {
                scene.shots.iter().map(move |shot| MountInstruction {
                    shot_id: shot.id,
                    scene_index,
                    from_frame: clock.secs_to_frames(shot.start_time),
                    duration_frames: clock.secs_to_frames(shot.duration),
                    premount_frames,
                })
            })
            .collect();

        let renderer = ShotRenderer::new(&storyboard.config);

        Self {
            storyboard,
            renderer,
            mounts,
        }
    }

    pub fn storyboard(&self) -> &Storyboard {
        &self.storyboard
    }

    pub fn mounts(&self) -> &[MountInstruction] {
        &self.mounts
    }

    pub fn mount(&self, shot_id: u32) -> Option<&MountInstruction> {
        self.mounts.iter().find(|m| m.shot_id == shot_id)
    }

    pub fn clock(&self) -> FrameClock {
        self.renderer.clock()
    }

    pub fn total_frames(&self) -> u64 {
        self.storyboard.config.duration_in_frames()
    }

    /// Evaluate the composition at global frame `frame`.
    ///
    /// Frames at or past the end of the composition are empty.
    pub fn evaluate(&self, frame: u64) -> FrameComposition {
        let mut composition = FrameComposition {
            frame_index: frame,
            time_secs: self.clock().frame_to_secs(frame),
            background: self.storyboard.config.background.clone(),
            shots: vec![],
            premounting: vec![],
        };

        if frame >= self.total_frames() {
            return composition;
        }

        // Mounts were built from the same iteration, so they line up.
        for (mount, shot) in self.mounts.iter().zip(self.storyboard.shots()) {
            if let Some(local) = mount.local_frame(frame) {
                composition.shots.push(self.renderer.render(shot, local));
            } else if mount.is_premounting(frame) {
                composition.premounting.push(PremountHint {
                    shot_id: shot.id,
                    starts_in: mount.from_frame - frame,
                    assets: shot.asset_paths().into_iter().map(String::from).collect(),
                });
            }
        }

        tracing::debug!(
            frame,
            visible = ?composition.visible_ids(),
            premounting = composition.premounting.len(),
            "Evaluated frame"
        );

        composition
    }

    /// Like [`Timeline::evaluate`], but rejects frames outside the composition.
    pub fn evaluate_checked(&self, frame: u64) -> ReelResult<FrameComposition> {
        let total = self.total_frames();
        if frame >= total {
            return Err(ReelError::FrameOutOfRange { frame, total });
        }
        Ok(self.evaluate(frame))
    }

    /// Check how the mount windows tile the composition.
    pub fn coverage(&self) -> CoverageReport {
        let mut windows: Vec<_> = self
            .mounts
            .iter()
            .filter(|m| m.duration_frames > 0)
            .collect();
        windows.sort_by_key(|m| (m.from_frame, m.shot_id));

        let mut gaps = vec![];
        let mut overlaps = vec![];
        let mut covered_until = 0;
        let mut last: Option<&MountInstruction> = None;

        for mount in windows {
            if mount.from_frame > covered_until {
                gaps.push(FrameSpan {
                    start: covered_until,
                    end: mount.from_frame,
                });
            }
            if let Some(prev) = last {
                if mount.from_frame < prev.end_frame() {
                    overlaps.push(MountOverlap {
                        first: prev.shot_id,
                        second: mount.shot_id,
                        frames: FrameSpan {
                            start: mount.from_frame,
                            end: prev.end_frame().min(mount.end_frame()),
                        },
                    });
                }
            }
            covered_until = covered_until.max(mount.end_frame());
            last = Some(mount);
        }

        let total_frames = self.total_frames();
        if covered_until < total_frames {
            gaps.push(FrameSpan {
                start: covered_until,
                end: total_frames,
            });
        }

        CoverageReport {
            gaps,
            overlaps,
            covered_until,
            total_frames,
        }
    }
}
