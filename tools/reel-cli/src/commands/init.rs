//! Write a storyboard file to start from.

use std::path::PathBuf;

use reel_common::config::AppConfig;
use reel_project_model::storyboard::VideoConfig;
use reel_project_model::{promo, Scene, Storyboard};

pub fn run(path: PathBuf, blank: bool, force: bool, config: &AppConfig) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let board = if blank {
        let video = VideoConfig {
            fps: config.render.fps,
            width: config.render.width,
            height: config.render.height,
            ..VideoConfig::default()
        };
        Storyboard::new("Untitled", video, vec![Scene::new("Scene 1", vec![])])
    } else {
        promo::storyboard()
    };

    board
        .save(&path)
        .map_err(|e| anyhow::anyhow!("Failed to write storyboard: {e}"))?;

    println!("Storyboard written to {}", path.display());
    println!("  Name: {}", board.name);
    println!(
        "  Composition: {}x{} @ {}fps, {:.1}s",
        board.config.width, board.config.height, board.config.fps, board.config.duration_secs
    );
    println!("  Shots: {}", board.shot_count());

    Ok(())
}
