//! Error types for reportview-session

use thiserror::Error;

/// Session error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    /// The incoming frame could not be reconciled
    #[error("frame error: {0}")]
    Frame(#[from] reportview_core::Error),

    #[error("widget error: {0}")]
    Widgets(#[from] reportview_widgets::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
