//! Error types shared across Reel crates.

/// Top-level error type for Reel operations.
#[derive(Debug, thiserror::Error)]
pub enum ReelError {
    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Frame {frame} is outside the composition ({total} frames)")]
    FrameOutOfRange { frame: u64, total: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ReelError.
pub type ReelResult<T> = Result<T, ReelError>;

impl ReelError {
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }
}
