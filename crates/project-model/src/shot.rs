//! Shot descriptors: the timed segments a storyboard is made of.
//!
//! A shot owns one visual source (an image, or a deliberate black frame)
//! plus independent optional layers: an overlay video, a centered caption,
//! and a bottom narration caption. How those layers are arranged is chosen
//! by the shot's [`RendererKind`].

use serde::{Deserialize, Serialize};

/// Overlay opacity used when a shot names an overlay video without one.
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.4;

/// Seconds each image stays on screen in a crossfade triptych.
pub const DEFAULT_SECONDS_PER_IMAGE: f64 = 3.0;

/// Brand accent used for split-screen connectors and triptych label glow.
pub const ACCENT_COLOR: &str = "#F38020";

/// One timed segment of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotDescriptor {
    /// Unique positive identifier; also the ordering key.
    pub id: u32,

    /// Start of the shot on the global timeline (seconds).
    pub start_time: f64,

    /// Length of the shot (seconds).
    pub duration: f64,

    /// Background image path. `None` or an empty string means a black frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Secondary video composited above the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_video: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,

    /// Intended cut style. Carried as annotation only; no renderer reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,

    /// Centered on-screen caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Bottom-aligned narration caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,

    #[serde(default)]
    pub camera_move: CameraMove,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,

    /// Which renderer turns this shot into layers.
    #[serde(default)]
    pub renderer: RendererKind,
}

/// The single visual source behind a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualSource<'a> {
    Image(&'a str),
    Black,
}

/// Parametric camera motion applied to the background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraMove {
    #[default]
    Static,
    PushIn,
    PullOut,
    Pan,
    Tilt,
    Shake,
}

/// Additional visual treatment layered on top of the camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    KenBurns,
    Glitch,
    ColorShift,
    Blur,
    Zoom,
}

/// Cut style between shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Fade,
    Flash,
    Dissolve,
    LightLeak,
    HardCut,
}

/// Compositing mode for overlay layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    #[default]
    Overlay,
    Darken,
    Lighten,
}

/// A color filter function applied to an image layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fn", rename_all = "snake_case")]
pub enum ColorFilter {
    HueRotate { degrees: f64 },
    Saturate { amount: f64 },
    Contrast { amount: f64 },
}

/// Renderer selection, carried on the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RendererKind {
    /// Image + overlay + captions driven entirely by the descriptor.
    #[default]
    Generic,
    /// Cycles through a fixed image list in equal sub-intervals.
    CrossfadeTriptych(TriptychSpec),
    /// Two side-by-side panes joined by an animated connector line.
    SplitScreen(SplitScreenSpec),
}

/// Parameters for the crossfade triptych renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriptychSpec {
    /// Images shown in order, one per sub-interval.
    pub images: Vec<String>,

    /// Optional labels, indexed like `images`. Empty means no label layer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    #[serde(default = "default_seconds_per_image")]
    pub seconds_per_image: f64,

    /// Filters applied to every image of the cycle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_filters: Vec<ColorFilter>,
}

/// Parameters for the split-screen comparison renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitScreenSpec {
    pub left_image: String,
    pub right_image: String,

    /// Center color of the connector gradient.
    #[serde(default = "default_connector_color")]
    pub connector_color: String,

    /// Connector fades in between these two offsets (seconds into the shot).
    #[serde(default = "default_connector_fade_start")]
    pub connector_fade_start_secs: f64,
    #[serde(default = "default_connector_fade_end")]
    pub connector_fade_end_secs: f64,
}

fn default_seconds_per_image() -> f64 {
    DEFAULT_SECONDS_PER_IMAGE
}

fn default_connector_color() -> String {
    ACCENT_COLOR.to_string()
}

fn default_connector_fade_start() -> f64 {
    2.0
}

fn default_connector_fade_end() -> f64 {
    4.0
}

impl TriptychSpec {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            labels: vec![],
            seconds_per_image: DEFAULT_SECONDS_PER_IMAGE,
            image_filters: vec![],
        }
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn image_filters(mut self, filters: Vec<ColorFilter>) -> Self {
        self.image_filters = filters;
        self
    }

    /// Total span covered by the image cycle (seconds).
    pub fn cycle_secs(&self) -> f64 {
        self.seconds_per_image * self.images.len() as f64
    }
}

impl SplitScreenSpec {
    pub fn new(left_image: impl Into<String>, right_image: impl Into<String>) -> Self {
        Self {
            left_image: left_image.into(),
            right_image: right_image.into(),
            connector_color: default_connector_color(),
            connector_fade_start_secs: default_connector_fade_start(),
            connector_fade_end_secs: default_connector_fade_end(),
        }
    }
}

impl ShotDescriptor {
    /// Create a generic shot with no layers beyond a black frame.
    pub fn new(id: u32, start_time: f64, duration: f64) -> Self {
        Self {
            id,
            start_time,
            duration,
            image: None,
            overlay_video: None,
            overlay_opacity: None,
            blend_mode: None,
            transition: None,
            text: None,
            narration: None,
            camera_move: CameraMove::Static,
            effect: None,
            renderer: RendererKind::Generic,
        }
    }

    pub fn image(mut self, path: impl Into<String>) -> Self {
        self.image = Some(path.into());
        self
    }

    pub fn overlay(mut self, path: impl Into<String>, opacity: f64, blend: BlendMode) -> Self {
        self.overlay_video = Some(path.into());
        self.overlay_opacity = Some(opacity);
        self.blend_mode = Some(blend);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    pub fn camera(mut self, camera_move: CameraMove) -> Self {
        self.camera_move = camera_move;
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn renderer(mut self, renderer: RendererKind) -> Self {
        self.renderer = renderer;
        self
    }

    /// End of the shot on the global timeline (seconds, exclusive).
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// The shot's single visual source.
    pub fn visual_source(&self) -> VisualSource<'_> {
        match self.image.as_deref() {
            Some(path) if !path.is_empty() => VisualSource::Image(path),
            _ => VisualSource::Black,
        }
    }

    /// Overlay opacity, falling back to [`DEFAULT_OVERLAY_OPACITY`].
    pub fn effective_overlay_opacity(&self) -> f64 {
        self.overlay_opacity.unwrap_or(DEFAULT_OVERLAY_OPACITY)
    }

    /// Blend mode, falling back to overlay.
    pub fn effective_blend_mode(&self) -> BlendMode {
        self.blend_mode.unwrap_or_default()
    }

    /// Every asset path this shot can put on screen, in layer order.
    pub fn asset_paths(&self) -> Vec<&str> {
        let mut paths = vec![];
        match &self.renderer {
            RendererKind::Generic => {
                if let VisualSource::Image(path) = self.visual_source() {
                    paths.push(path);
                }
            }
            RendererKind::CrossfadeTriptych(spec) => {
                paths.extend(spec.images.iter().map(String::as_str));
            }
            RendererKind::SplitScreen(spec) => {
                paths.push(spec.left_image.as_str());
                paths.push(spec.right_image.as_str());
            }
        }
        if let Some(video) = self.overlay_video.as_deref() {
            paths.push(video);
        }
        paths
    }
}
