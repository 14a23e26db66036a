//! Reel Project Model
//!
//! Defines the data contracts for a declarative video definition:
//! - **Shots:** Timed segments with an image, overlays, captions, and motion
//! - **Storyboard:** Composition settings plus shots grouped into scenes
//! - **Validation:** Authoring-time checks, never run at construction
//! - **Regions:** Normalized layout rectangles for panes and layers
//!
//! Times are authored in seconds; frame conversion happens downstream.

pub mod promo;
pub mod region;
pub mod shot;
pub mod storyboard;
pub mod validation;

pub use region::*;
pub use shot::*;
pub use storyboard::*;
pub use validation::*;
