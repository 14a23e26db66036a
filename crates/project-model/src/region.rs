//! Normalized layout regions.
//!
//! All coordinates are normalized to `[0.0, 1.0]` relative to the output
//! frame, so a storyboard renders the same at any output resolution.

use serde::{Deserialize, Serialize};

/// A rectangle within the output frame.
///
/// `(0.0, 0.0)` is top-left, `(1.0, 1.0)` is bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Left edge (normalized).
    pub x: f64,
    /// Top edge (normalized).
    pub y: f64,
    /// Width (normalized).
    pub w: f64,
    /// Height (normalized).
    pub h: f64,
}

impl Region {
    /// The whole frame.
    pub const FULL: Region = Region {
        x: 0.0,
        y: 0.0,
        w: 1.0,
        h: 1.0,
    };

    /// Create a region, clamping values to the frame.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        let x = x.clamp(0.0, 1.0);
        let y = y.clamp(0.0, 1.0);
        Self {
            x,
            y,
            w: w.clamp(0.0, 1.0 - x),
            h: h.clamp(0.0, 1.0 - y),
        }
    }

    /// A full-height column starting at `x` with width `w`.
    pub fn column(x: f64, w: f64) -> Self {
        Self::new(x, 0.0, w, 1.0)
    }

    /// Left half of the frame.
    pub fn left_half() -> Self {
        Self::column(0.0, 0.5)
    }

    /// Right half of the frame.
    pub fn right_half() -> Self {
        Self::column(0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_to_frame() {
        let r = Region::new(0.8, -0.2, 0.5, 2.0);
        assert!((r.x - 0.8).abs() < 1e-9);
        assert_eq!(r.y, 0.0);
        assert!((r.w - 0.2).abs() < 1e-9);
        assert_eq!(r.h, 1.0);
    }

    #[test]
    fn test_halves_split_the_frame() {
        let left = Region::left_half();
        let right = Region::right_half();
        assert_eq!((left.x, left.w), (0.0, 0.5));
        assert_eq!((right.x, right.w), (0.5, 0.5));
        assert_eq!((left.h, right.h), (1.0, 1.0));
    }

    #[test]
    fn test_center_column_straddles_the_split() {
        let band = Region::column(0.45, 0.10);
        assert!(band.x < 0.5 && band.x + band.w > 0.5);
        assert!((band.x + band.w / 2.0 - 0.5).abs() < 1e-9);
        assert_eq!(band.y, 0.0);
    }
}
