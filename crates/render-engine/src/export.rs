//! Frame-plan export.
//!
//! Evaluates a range of frames and writes one [`FrameComposition`] per line
//! (JSONL), followed by a manifest describing the run. A host renderer can
//! replay the plan without linking this crate.

use std::path::{Path, PathBuf};
use std::time::Instant;

use reel_common::clock::wall_clock_rfc3339;
use reel_common::error::{ReelError, ReelResult};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::timeline::Timeline;

/// A range of frames to export.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Output JSONL path.
    pub output_path: PathBuf,

    /// First frame (inclusive).
    pub start_frame: u64,

    /// Last frame (exclusive). Defaults to the end of the composition.
    pub end_frame: Option<u64>,
}

impl ExportJob {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            start_frame: 0,
            end_frame: None,
        }
    }

    pub fn range(mut self, start_frame: u64, end_frame: Option<u64>) -> Self {
        self.start_frame = start_frame;
        self.end_frame = end_frame;
        self
    }

    /// Manifest written next to the plan, e.g. `plan.manifest.json`.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_path.with_extension("manifest.json")
    }
}

/// Progress callback for export jobs.
pub type ProgressCallback = Box<dyn Fn(ExportProgress) + Send>;

/// Export progress report.
#[derive(Debug, Clone)]
pub struct ExportProgress {
    /// Current progress [0.0, 1.0].
    pub progress: f64,

    /// Frames written so far.
    pub frames_done: u64,

    /// Total frames in the job.
    pub total_frames: u64,

    /// Estimated time remaining in seconds.
    pub eta_secs: f64,

    pub stage: ExportStage,
}

/// Stages of an export job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    Preparing,
    Evaluating,
    Writing,
    Complete,
}

/// Summary written alongside an exported plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub storyboard: String,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub start_frame: u64,
    pub end_frame: u64,
    pub frame_count: u64,
    pub frames_path: PathBuf,
    /// RFC 3339 wall-clock time the export finished.
    pub created_at: String,
}

/// Evaluate `job`'s frame range on `timeline` and write it to disk.
pub async fn export_frame_plan(
    timeline: &Timeline,
    job: &ExportJob,
    progress: Option<ProgressCallback>,
) -> ReelResult<ExportManifest> {
    let total = timeline.total_frames();
    let end_frame = job.end_frame.unwrap_or(total);
    if job.start_frame >= end_frame {
        return Err(ReelError::export(format!(
            "Empty frame range {}..{}",
            job.start_frame, end_frame
        )));
    }
    if end_frame > total {
        return Err(ReelError::FrameOutOfRange {
            frame: end_frame - 1,
            total,
        });
    }

    let frame_count = end_frame - job.start_frame;
    tracing::info!(
        output = %job.output_path.display(),
        start = job.start_frame,
        end = end_frame,
        "Starting frame-plan export"
    );

    let report = |frames_done: u64, elapsed_secs: f64, stage: ExportStage| {
        if let Some(cb) = &progress {
            cb(progress_report(frames_done, frame_count, elapsed_secs, stage));
        }
    };

    report(0, 0.0, ExportStage::Preparing);
    if let Some(parent) = non_empty_parent(&job.output_path) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let file = tokio::fs::File::create(&job.output_path).await?;
    let mut writer = BufWriter::new(file);
    let started = Instant::now();
    // Report about once per second of footage.
    let report_every = u64::from(timeline.clock().fps()).max(1);

    for (done, frame) in (job.start_frame..end_frame).enumerate() {
        let composition = timeline.evaluate(frame);
        let mut line = serde_json::to_vec(&composition)?;
        line.push(b'\n');
        writer.write_all(&line).await?;

        let done = done as u64 + 1;
        if done % report_every == 0 {
            report(done, started.elapsed().as_secs_f64(), ExportStage::Evaluating);
        }
    }

    report(
        frame_count,
        started.elapsed().as_secs_f64(),
        ExportStage::Writing,
    );
    writer.flush().await?;

    let config = &timeline.storyboard().config;
    let manifest = ExportManifest {
        storyboard: timeline.storyboard().name.clone(),
        fps: config.fps,
        width: config.width,
        height: config.height,
        start_frame: job.start_frame,
        end_frame,
        frame_count,
        frames_path: job.output_path.clone(),
        created_at: wall_clock_rfc3339(),
    };
    let manifest_path = job.manifest_path();
    tokio::fs::write(&manifest_path, serde_json::to_vec_pretty(&manifest)?).await?;

    report(
        frame_count,
        started.elapsed().as_secs_f64(),
        ExportStage::Complete,
    );
    tracing::info!(
        frames = frame_count,
        manifest = %manifest_path.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Frame-plan export complete"
    );

    Ok(manifest)
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

fn progress_report(
    frames_done: u64,
    total_frames: u64,
    elapsed_secs: f64,
    stage: ExportStage,
) -> ExportProgress {
    let progress = if total_frames == 0 {
        0.0
    } else {
        (frames_done as f64 / total_frames as f64).clamp(0.0, 1.0)
    };

    let eta_secs = if progress > 0.0 {
        (elapsed_secs / progress) - elapsed_secs
    } else {
        0.0
    }
    .max(0.0);

    ExportProgress {
        progress: if stage == ExportStage::Complete {
            1.0
        } else {
            progress
        },
        frames_done,
        total_frames,
        eta_secs,
        stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::FrameComposition;
    use reel_project_model::shot::ShotDescriptor;
    use reel_project_model::storyboard::{Scene, Storyboard, VideoConfig};
    use std::sync::{Arc, Mutex};

    fn timeline() -> Timeline {
        Timeline::new(Storyboard::new(
            "Export",
            VideoConfig {
                duration_secs: 2.0,
                ..VideoConfig::default()
            },
            vec![Scene::new(
                "Only",
                vec![
                    ShotDescriptor::new(1, 0.0, 1.0).image("a.jpg"),
                    ShotDescriptor::new(2, 1.0, 1.0).text("Hello"),
                ],
            )],
        ))
    }

    #[test]
    fn test_manifest_path() {
        let job = ExportJob::new("out/plan.jsonl");
        assert_eq!(job.manifest_path(), PathBuf::from("out/plan.manifest.json"));
    }

    #[test]
    fn test_progress_report_eta() {
        let report = progress_report(30, 60, 2.0, ExportStage::Evaluating);
        assert!((report.progress - 0.5).abs() < 1e-9);
        assert!((report.eta_secs - 2.0).abs() < 1e-9);

        let done = progress_report(0, 0, 0.0, ExportStage::Complete);
        assert_eq!(done.progress, 1.0);
    }

    #[tokio::test]
    async fn test_export_writes_one_line_per_frame() {
        let dir = std::env::temp_dir().join("reel_test_export_plan");
        let _ = std::fs::remove_dir_all(&dir);
        let job = ExportJob::new(dir.join("plan.jsonl")).range(20, Some(40));

        let stages = Arc::new(Mutex::new(vec![]));
        let seen = Arc::clone(&stages);
        let callback: ProgressCallback =
            Box::new(move |p: ExportProgress| seen.lock().unwrap().push(p.stage));

        let manifest = export_frame_plan(&timeline(), &job, Some(callback))
            .await
            .unwrap();
        assert_eq!(manifest.frame_count, 20);
        assert_eq!(manifest.storyboard, "Export");

        let content = std::fs::read_to_string(&job.output_path).unwrap();
        let frames: Vec<FrameComposition> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(frames.len(), 20);
        assert_eq!(frames[0].frame_index, 20);
        assert_eq!(frames[19].visible_ids(), vec![2]);

        let written: ExportManifest =
            serde_json::from_slice(&std::fs::read(job.manifest_path()).unwrap()).unwrap();
        assert_eq!(written, manifest);

        let stages = stages.lock().unwrap();
        assert_eq!(stages.first(), Some(&ExportStage::Preparing));
        assert_eq!(stages.last(), Some(&ExportStage::Complete));
        assert!(stages.contains(&ExportStage::Writing));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_export_rejects_bad_ranges() {
        let dir = std::env::temp_dir().join("reel_test_export_ranges");
        let empty = ExportJob::new(dir.join("a.jsonl")).range(10, Some(10));
        assert!(matches!(
            export_frame_plan(&timeline(), &empty, None).await,
            Err(ReelError::Export { .. })
        ));

        let past_end = ExportJob::new(dir.join("b.jsonl")).range(0, Some(61));
        assert!(matches!(
            export_frame_plan(&timeline(), &past_end, None).await,
            Err(ReelError::FrameOutOfRange { frame: 60, total: 60 })
        ));
    }
}
