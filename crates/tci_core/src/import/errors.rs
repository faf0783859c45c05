//! Error types for the import pipeline.
//!
//! Everything raised anywhere in the pipeline funnels into
//! `ImportError` and bubbles to the single top-level handler. Nothing
//! is retried and there is no partial-success reporting.

use thiserror::Error;

use crate::store::StoreError;
use crate::transcript::TranscriptError;

/// Top-level import error.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Transcript validation or parsing failed.
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// The annotation store rejected an operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_context() {
        let err: ImportError = TranscriptError::invalid_timestamp(7, "1:2:3").into();
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("1:2:3"));
    }
}
