//! Error types for reportview-widgets

use reportview_core::{ControlId, ControlKind};
use thiserror::Error;

/// Widget state error type
#[derive(Debug, Error)]
pub enum Error {
    /// The sink failed to deliver a state update
    ///
    /// Not retried here; the caller owns recovery.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A write targeted a slot that already holds another kind
    #[error("Control {id} holds {expected} values, cannot store {found}")]
    KindMismatch {
        id: ControlId,
        expected: ControlKind,
        found: ControlKind,
    },

    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] ron::Error),
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, Error>;
