//! Reel Motion Core
//!
//! Time-varying parameters for shot rendering:
//! - **Interpolation:** Piecewise-linear mapping with per-side extrapolation
//! - **Camera:** Push/pull/pan/tilt transforms and glitch jitter
//! - **Filters:** Color-shift ramps and CSS-style filter strings
//! - **Envelope:** Fade-in/fade-out opacity and one-way ramps
//! - **Cycle:** Fixed-interval item selection for multi-image shots
//!
//! This crate is pure computation with no I/O and no state between frames.
//! Every function takes a frame number and returns a value.

pub mod camera;
pub mod cycle;
pub mod envelope;
pub mod filters;
pub mod interpolate;

pub use camera::{background_transform, camera_transform, glitch_offset, Transform, TransformOp};
pub use cycle::cycle_index;
pub use envelope::{ramp, OpacityEnvelope};
pub use filters::{color_filters, css_filter};
pub use interpolate::{interpolate, Extrapolate, InterpolateOptions};
