//! Print one frame's composition.

use std::path::PathBuf;

use reel_render_engine::Timeline;

pub fn run(path: Option<PathBuf>, frame: u64, compact: bool) -> anyhow::Result<()> {
    let timeline = Timeline::new(super::load_storyboard(path)?);
    let composition = timeline.evaluate_checked(frame)?;

    let json = if compact {
        serde_json::to_string(&composition)?
    } else {
        serde_json::to_string_pretty(&composition)?
    };
    println!("{json}");
    Ok(())
}
