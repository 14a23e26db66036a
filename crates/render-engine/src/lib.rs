//! Reel Render Engine
//!
//! Turns a storyboard into per-frame visual trees that a host compositor
//! can paint. Rendering is pure: the same storyboard and frame always give
//! the same tree.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Storyboard ──┐
//!              ├── Timeline (mount windows, premount lead)
//! VideoConfig ─┘         │
//!                        ├── ShotRenderer
//!                        │     ├── generic        (image/black, overlay, captions)
//!                        │     ├── triptych       (timed image cycle + labels)
//!                        │     └── split_screen   (two panes + connector)
//!                        ▼
//!                 FrameComposition
//!                        │
//!                        ▼
//!          export_frame_plan (JSONL + manifest)
//! ```

pub mod compositor;
pub mod export;
pub mod renderer;
pub mod timeline;

pub use compositor::*;
pub use export::{export_frame_plan, ExportJob, ExportManifest, ExportProgress, ExportStage};
pub use renderer::ShotRenderer;
pub use timeline::{CoverageReport, FrameSpan, MountInstruction, MountOverlap, Timeline};
