//! Storyboard: the top-level container for a video definition.
//!
//! A storyboard ties together composition settings and the shot table,
//! which is partitioned into named, contiguous scenes. It is built once
//! and never mutated; nothing is validated at construction.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shot::ShotDescriptor;

/// Composition settings (frame rate, length, output size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Frames per second.
    pub fps: u32,

    /// Total length of the composition (seconds).
    pub duration_secs: f64,

    /// Output resolution (pixels).
    pub width: u32,
    pub height: u32,

    /// Color painted behind every shot.
    #[serde(default = "default_background")]
    pub background: String,

    /// Lead time before a shot's window during which it is mounted but hidden.
    #[serde(default = "default_premount_secs")]
    pub premount_secs: f64,
}

fn default_background() -> String {
    "#000000".to_string()
}

fn default_premount_secs() -> f64 {
    1.0
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            duration_secs: 160.0,
            width: 1920,
            height: 1080,
            background: default_background(),
            premount_secs: default_premount_secs(),
        }
    }
}

impl VideoConfig {
    /// Total length in frames.
    pub fn duration_in_frames(&self) -> u64 {
        (self.duration_secs * self.fps as f64).round().max(0.0) as u64
    }
}

/// A named, contiguous group of shots forming one narrative beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub shots: Vec<ShotDescriptor>,
}

impl Scene {
    pub fn new(name: impl Into<String>, shots: Vec<ShotDescriptor>) -> Self {
        Self {
            name: name.into(),
            shots,
        }
    }

    /// Start of the first shot, if any.
    pub fn start_time(&self) -> Option<f64> {
        self.shots.first().map(|s| s.start_time)
    }

    /// End of the last-ending shot, if any.
    pub fn end_time(&self) -> Option<f64> {
        self.shots
            .iter()
            .map(ShotDescriptor::end_time)
            .fold(None, |acc, end| Some(acc.map_or(end, |a: f64| a.max(end))))
    }
}

/// The complete video definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    /// Human-readable composition name.
    pub name: String,

    /// Composition settings.
    pub config: VideoConfig,

    /// Scenes in playback order.
    pub scenes: Vec<Scene>,
}

impl Storyboard {
    pub fn new(name: impl Into<String>, config: VideoConfig, scenes: Vec<Scene>) -> Self {
        Self {
            name: name.into(),
            config,
            scenes,
        }
    }

    /// All scenes in order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// One scene by index.
    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// The full shot list: every scene's shots, concatenated in order.
    pub fn shots(&self) -> impl Iterator<Item = &ShotDescriptor> {
        self.scenes.iter().flat_map(|scene| scene.shots.iter())
    }

    /// Number of shots across all scenes.
    pub fn shot_count(&self) -> usize {
        self.scenes.iter().map(|scene| scene.shots.len()).sum()
    }

    /// Find a shot by id.
    pub fn shot(&self, id: u32) -> Option<&ShotDescriptor> {
        self.shots().find(|shot| shot.id == id)
    }

    /// Load a storyboard from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).map_err(|e| ProjectError::IoError {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ProjectError::ParseError { path, source: e })
    }

    /// Save the storyboard as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProjectError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ProjectError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ProjectError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        std::fs::write(&path, json).map_err(|e| ProjectError::IoError { path, source: e })
    }

    /// Check that every referenced asset exists under `asset_root`.
    ///
    /// Returns one message per missing file; an empty list means all present.
    pub fn validate_assets(&self, asset_root: impl AsRef<Path>) -> Vec<String> {
        let asset_root = asset_root.as_ref();
        let mut errors = vec![];
        let mut seen = std::collections::HashSet::new();

        for shot in self.shots() {
            for asset in shot.asset_paths() {
                if !seen.insert(asset) {
                    continue;
                }
                if !asset_root.join(asset).exists() {
                    errors.push(format!("Shot {} asset missing: {asset}", shot.id));
                }
            }
        }

        errors
    }
}

/// Errors that can occur when loading or saving storyboards.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}
