//! Frame compositor output: the layered visual tree handed to the host.
//!
//! One [`FrameComposition`] describes everything on screen at a global
//! frame. Shots are listed in painter's order (later shots draw on top),
//! and each shot's layers are listed bottom to top.

use reel_motion_core::Transform;
use reel_project_model::region::Region;
use reel_project_model::shot::{BlendMode, ColorFilter};
use serde::{Deserialize, Serialize};

/// A single frame's composition instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameComposition {
    /// Global frame number.
    pub frame_index: u64,

    /// Time in seconds.
    pub time_secs: f64,

    /// Color painted beneath all shots.
    pub background: String,

    /// Visible shots, bottom to top.
    pub shots: Vec<ShotComposite>,

    /// Shots about to become visible whose assets the host may warm up.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub premounting: Vec<PremountHint>,
}

impl FrameComposition {
    /// Shot ids visible in this frame.
    pub fn visible_ids(&self) -> Vec<u32> {
        self.shots.iter().map(|s| s.shot_id).collect()
    }

    pub fn shot(&self, id: u32) -> Option<&ShotComposite> {
        self.shots.iter().find(|s| s.shot_id == id)
    }
}

/// One shot rendered at one local frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotComposite {
    pub shot_id: u32,

    /// Frame relative to the start of the shot.
    pub local_frame: u64,

    /// Group opacity applied to all layers, in `[0, 1]`.
    pub opacity: f64,

    /// Layers, bottom to top.
    pub layers: Vec<Layer>,
}

impl ShotComposite {
    pub fn images(&self) -> impl Iterator<Item = &ImageLayer> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Image(image) => Some(image),
            _ => None,
        })
    }

    pub fn videos(&self) -> impl Iterator<Item = &VideoLayer> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Video(video) => Some(video),
            _ => None,
        })
    }

    pub fn captions(&self) -> impl Iterator<Item = &CaptionLayer> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Caption(caption) => Some(caption),
            _ => None,
        })
    }
}

/// A shot that is mounted but not yet visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremountHint {
    pub shot_id: u32,
    /// Frames until the shot becomes visible.
    pub starts_in: u64,
    /// Assets the shot will reference.
    pub assets: Vec<String>,
}

/// A visual element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layer", rename_all = "snake_case")]
pub enum Layer {
    Solid(SolidLayer),
    Image(ImageLayer),
    Video(VideoLayer),
    Caption(CaptionLayer),
    Connector(ConnectorLayer),
}

/// A flat color fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidLayer {
    pub region: Region,
    pub color: String,
}

/// A still image scaled to cover its region, clipped to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    pub src: String,
    pub region: Region,
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ColorFilter>,
}

/// A muted video scaled to cover its region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoLayer {
    pub src: String,
    pub region: Region,
    pub opacity: f64,
    pub blend_mode: BlendMode,
    pub muted: bool,
}

/// Where a caption sits in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "anchor", rename_all = "snake_case")]
pub enum CaptionPlacement {
    /// Centered both ways.
    Center,
    /// Horizontally centered, resting `padding_px` above the bottom edge.
    Bottom { padding_px: f64 },
}

/// Typography and box styling for a caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub color: String,
    pub text_shadow: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Vertical and horizontal padding (px).
    pub padding: [f64; 2],
    pub border_radius: f64,
    /// Maximum width as a fraction of the frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Keep embedded line breaks.
    pub preserve_line_breaks: bool,
}

/// A block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionLayer {
    pub text: String,
    pub placement: CaptionPlacement,
    pub style: TextStyle,
}

/// A thin gradient line centered in its region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorLayer {
    pub region: Region,
    pub thickness_px: f64,
    /// Gradient stops from top to bottom.
    pub gradient: Vec<String>,
    pub opacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_serializes_with_tag() {
        let layer = Layer::Solid(SolidLayer {
            region: Region::FULL,
            color: "#000000".to_string(),
        });
        let json = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["layer"], "solid");
        assert_eq!(json["color"], "#000000");
    }

    #[test]
    fn test_composite_accessors() {
        let composite = ShotComposite {
            shot_id: 1,
            local_frame: 0,
            opacity: 0.0,
            layers: vec![
                Layer::Image(ImageLayer {
                    src: "a.jpg".to_string(),
                    region: Region::FULL,
                    transform: Transform::identity(),
                    filters: vec![],
                }),
                Layer::Video(VideoLayer {
                    src: "v.mp4".to_string(),
                    region: Region::FULL,
                    opacity: 0.4,
                    blend_mode: BlendMode::Overlay,
                    muted: true,
                }),
            ],
        };
        assert_eq!(composite.images().count(), 1);
        assert_eq!(composite.videos().count(), 1);
        assert_eq!(composite.captions().count(), 0);
    }

    #[test]
    fn test_premount_omitted_when_empty() {
        let frame = FrameComposition {
            frame_index: 0,
            time_secs: 0.0,
            background: "#000000".to_string(),
            shots: vec![],
            premounting: vec![],
        };
        let json = serde_json::to_value(&frame).unwrap();
        assert!(json.get("premounting").is_none());
        let back: FrameComposition = serde_json::from_value(json).unwrap();
        assert_eq!(back, frame);
    }
}
