//! Color filters for image layers.

use reel_project_model::shot::{ColorFilter, Effect};

use crate::interpolate::{interpolate, InterpolateOptions};

/// Hue rotation reached at the end of a color-shift ramp (degrees).
pub const COLOR_SHIFT_HUE_DEGREES: f64 = -10.0;

/// Saturation held throughout a color shift.
pub const COLOR_SHIFT_SATURATION: f64 = 0.8;

/// Filters produced by `effect` at `frame` of a shot lasting `duration_frames`.
///
/// Only the color-shift effect filters the image: hue rotates from 0 toward
/// [`COLOR_SHIFT_HUE_DEGREES`] over the shot while saturation sits at
/// [`COLOR_SHIFT_SATURATION`].
pub fn color_filters(effect: Option<Effect>, frame: f64, duration_frames: f64) -> Vec<ColorFilter> {
    match effect {
        Some(Effect::ColorShift) => {
            let degrees = interpolate(
                frame,
                [0.0, duration_frames],
                [0.0, COLOR_SHIFT_HUE_DEGREES],
                InterpolateOptions::CLAMP_RIGHT,
            );
            vec![
                ColorFilter::HueRotate { degrees },
                ColorFilter::Saturate {
                    amount: COLOR_SHIFT_SATURATION,
                },
            ]
        }
        _ => vec![],
    }
}

/// CSS `filter` value for a filter chain.
pub fn css_filter(filters: &[ColorFilter]) -> String {
    if filters.is_empty() {
        return "none".to_string();
    }
    filters
        .iter()
        .map(|filter| match *filter {
            ColorFilter::HueRotate { degrees } => format!("hue-rotate({degrees}deg)"),
            ColorFilter::Saturate { amount } => format!("saturate({amount})"),
            ColorFilter::Contrast { amount } => format!("contrast({amount})"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue(filters: &[ColorFilter]) -> f64 {
        match filters.first() {
            Some(ColorFilter::HueRotate { degrees }) => *degrees,
            other => panic!("expected hue rotation, got {other:?}"),
        }
    }

    #[test]
    fn test_color_shift_ramps_hue() {
        assert_eq!(hue(&color_filters(Some(Effect::ColorShift), 0.0, 150.0)), 0.0);
        assert!((hue(&color_filters(Some(Effect::ColorShift), 75.0, 150.0)) + 5.0).abs() < 1e-9);
        assert!((hue(&color_filters(Some(Effect::ColorShift), 300.0, 150.0)) + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_shift_desaturates() {
        let filters = color_filters(Some(Effect::ColorShift), 10.0, 150.0);
        assert_eq!(filters[1], ColorFilter::Saturate { amount: 0.8 });
    }

    #[test]
    fn test_other_effects_have_no_filters() {
        for effect in [
            None,
            Some(Effect::KenBurns),
            Some(Effect::Glitch),
            Some(Effect::Blur),
            Some(Effect::Zoom),
        ] {
            assert!(color_filters(effect, 10.0, 150.0).is_empty());
        }
    }

    #[test]
    fn test_css_filter() {
        assert_eq!(css_filter(&[]), "none");
        let chain = [
            ColorFilter::Saturate { amount: 1.2 },
            ColorFilter::Contrast { amount: 1.1 },
        ];
        assert_eq!(css_filter(&chain), "saturate(1.2) contrast(1.1)");
        assert_eq!(
            css_filter(&[ColorFilter::HueRotate { degrees: -5.0 }]),
            "hue-rotate(-5deg)"
        );
    }
}
