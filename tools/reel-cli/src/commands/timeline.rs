//! Show mount windows and coverage.

use std::path::PathBuf;

use reel_render_engine::Timeline;

pub fn run(path: Option<PathBuf>) -> anyhow::Result<()> {
    let timeline = Timeline::new(super::load_storyboard(path)?);

    println!("{:>5} {:>6} {:>7} {:>7} {:>9}", "shot", "scene", "from", "to", "premount");
    for mount in timeline.mounts() {
        println!(
            "{:>5} {:>6} {:>7} {:>7} {:>9}",
            mount.shot_id,
            mount.scene_index + 1,
            mount.from_frame,
            mount.end_frame(),
            mount.premount_frames
        );
    }

    let report = timeline.coverage();
    println!();
    println!(
        "Coverage: {} / {} frames",
        report.covered_until, report.total_frames
    );
    for gap in &report.gaps {
        println!("  gap: frames {}..{} ({} frames)", gap.start, gap.end, gap.len());
    }
    for overlap in &report.overlaps {
        println!(
            "  overlap: shots {} and {} share frames {}..{}",
            overlap.first, overlap.second, overlap.frames.start, overlap.frames.end
        );
    }
    if report.is_exact() {
        println!("  Windows tile the composition exactly.");
    }

    Ok(())
}
