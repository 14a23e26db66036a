//! Export a frame plan.

use std::io::Write;
use std::path::PathBuf;

use reel_render_engine::export::{export_frame_plan, ExportJob, ExportProgress, ProgressCallback};
use reel_render_engine::Timeline;

pub async fn run(
    path: Option<PathBuf>,
    output: PathBuf,
    start: u64,
    end: Option<u64>,
) -> anyhow::Result<()> {
    let timeline = Timeline::new(super::load_storyboard(path)?);
    println!("Exporting storyboard: {}", timeline.storyboard().name);
    println!("  Output: {}", output.display());

    let job = ExportJob::new(output).range(start, end);

    let progress_cb: ProgressCallback = Box::new(|p: ExportProgress| {
        print!(
            "\r  Progress: {:.1}% ({}/{} frames, ETA: {:.0}s)  ",
            p.progress * 100.0,
            p.frames_done,
            p.total_frames,
            p.eta_secs,
        );
        let _ = std::io::stdout().flush();
    });

    let manifest = export_frame_plan(&timeline, &job, Some(progress_cb)).await?;
    println!();
    println!(
        "Export complete: {} frames ({}..{})",
        manifest.frame_count, manifest.start_frame, manifest.end_frame
    );
    println!("  Manifest: {}", job.manifest_path().display());

    Ok(())
}
