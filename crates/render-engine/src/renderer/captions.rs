//! Caption builders shared by every renderer.

use crate::compositor::{CaptionLayer, CaptionPlacement, TextStyle};

const FONT_FAMILY: &str = "Arial, sans-serif";

/// Headline size for single-line text.
pub const HEADLINE_FONT_SIZE: f64 = 80.0;

/// Headline size once the text wraps onto several lines.
pub const HEADLINE_MULTILINE_FONT_SIZE: f64 = 60.0;

pub const NARRATION_FONT_SIZE: f64 = 48.0;

pub const LABEL_FONT_SIZE: f64 = 100.0;

/// Narration sits this far above the bottom edge (px).
pub const NARRATION_BOTTOM_PADDING: f64 = 80.0;

/// Centered on-screen text.
pub fn headline(text: &str) -> CaptionLayer {
    let font_size = if text.contains('\n') {
        HEADLINE_MULTILINE_FONT_SIZE
    } else {
        HEADLINE_FONT_SIZE
    };

    CaptionLayer {
        text: text.to_string(),
        placement: CaptionPlacement::Center,
        style: TextStyle {
            font_family: FONT_FAMILY.to_string(),
            font_size,
            font_weight: 700,
            color: "white".to_string(),
            text_shadow: "0 0 20px rgba(0,0,0,0.8)".to_string(),
            background: Some("rgba(0,0,0,0.3)".to_string()),
            padding: [20.0, 20.0],
            border_radius: 10.0,
            max_width: None,
            line_height: None,
            preserve_line_breaks: true,
        },
    }
}

/// Bottom-aligned narration subtitle.
pub fn narration(text: &str) -> CaptionLayer {
    CaptionLayer {
        text: text.to_string(),
        placement: CaptionPlacement::Bottom {
            padding_px: NARRATION_BOTTOM_PADDING,
        },
        style: TextStyle {
            font_family: FONT_FAMILY.to_string(),
            font_size: NARRATION_FONT_SIZE,
            font_weight: 500,
            color: "white".to_string(),
            text_shadow: "0 0 10px rgba(0,0,0,0.9)".to_string(),
            background: Some("rgba(0,0,0,0.5)".to_string()),
            padding: [20.0, 40.0],
            border_radius: 8.0,
            max_width: Some(0.8),
            line_height: Some(1.6),
            preserve_line_breaks: false,
        },
    }
}

/// Large centered label with an accent glow, used by image cycles.
pub fn label(text: &str) -> CaptionLayer {
    CaptionLayer {
        text: text.to_string(),
        placement: CaptionPlacement::Center,
        style: TextStyle {
            font_family: FONT_FAMILY.to_string(),
            font_size: LABEL_FONT_SIZE,
            font_weight: 700,
            color: "white".to_string(),
            text_shadow: "0 0 30px rgba(243, 128, 32, 0.8)".to_string(),
            background: None,
            padding: [0.0, 0.0],
            border_radius: 0.0,
            max_width: None,
            line_height: None,
            preserve_line_breaks: false,
        },
    }
}
