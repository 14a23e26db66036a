//! Show storyboard information.

use std::path::PathBuf;

use reel_project_model::shot::RendererKind;

pub fn run(path: Option<PathBuf>) -> anyhow::Result<()> {
    let board = super::load_storyboard(path)?;
    let config = &board.config;

    println!("Storyboard: {}", board.name);
    println!(
        "  Composition: {}x{} @ {}fps, {:.1}s ({} frames)",
        config.width,
        config.height,
        config.fps,
        config.duration_secs,
        config.duration_in_frames()
    );
    println!("  Scenes: {}", board.scenes().len());
    println!("  Shots: {}", board.shot_count());
    println!();

    for (index, scene) in board.scenes().iter().enumerate() {
        let start = scene.start_time().unwrap_or(0.0);
        let end = scene.end_time().unwrap_or(start);
        println!(
            "Scene {}: {} ({:.1}s - {:.1}s)",
            index + 1,
            scene.name,
            start,
            end
        );
        for shot in &scene.shots {
            let kind = match &shot.renderer {
                RendererKind::Generic => "generic",
                RendererKind::CrossfadeTriptych(_) => "triptych",
                RendererKind::SplitScreen(_) => "split-screen",
            };
            let text = shot
                .text
                .as_deref()
                .map(|t| format!(" \"{}\"", t.replace('\n', " / ")))
                .unwrap_or_default();
            println!(
                "  #{:<3} {:>6.1}s +{:<5.1} {:<12} {:?}{}",
                shot.id, shot.start_time, shot.duration, kind, shot.camera_move, text
            );
        }
        println!();
    }

    Ok(())
}
