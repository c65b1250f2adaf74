//! Error types for reportview-core

use crate::frame::Container;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A frame carried a missing entry at a position that must be live
    #[error("Malformed frame: missing element in {container} at index {index}")]
    MalformedFrame { container: Container, index: usize },

    /// The end-of-content marker is added on display, never sent
    #[error("Unexpected end marker in {container} at index {index}")]
    StrayEndMarker { container: Container, index: usize },

    #[error("Index {index} out of bounds for {container} of length {len}")]
    IndexOutOfBounds {
        container: Container,
        index: usize,
        len: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
