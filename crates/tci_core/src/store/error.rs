//! Store error types.
//!
//! The core treats the store as an external collaborator: failures are
//! surfaced with context but not modeled beyond message and source.

use std::io;

/// Errors raised by an annotation store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store rejected an operation on a track.
    #[error("Store rejected track '{track}': {message}")]
    Track { track: String, message: String },

    /// File I/O failed.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// Serializing the track document failed.
    #[error("Failed to serialize track document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Create a track rejection error.
    pub fn track(track: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Track {
            track: track.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with operation context.
    pub fn io(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}
