pub mod export;
pub mod frame;
pub mod info;
pub mod init;
pub mod timeline;
pub mod validate;

use std::path::PathBuf;

use reel_project_model::{promo, Storyboard};

/// Load the storyboard at `path`, or the built-in promo when none is given.
pub fn load_storyboard(path: Option<PathBuf>) -> anyhow::Result<Storyboard> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading storyboard");
            Storyboard::load(&path).map_err(|e| anyhow::anyhow!("Failed to load storyboard: {e}"))
        }
        None => Ok(promo::storyboard()),
    }
}
