//! Transcript error types.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while turning a transcript file into cues.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// File extension is not in the format registry, or the registry
    /// entry is a non-importable placeholder.
    #[error("Unsupported transcript format '.{extension}'")]
    UnsupportedFormat { extension: String },

    /// A timestamp token matched neither accepted grammar.
    #[error("Invalid timestamp at line {line}: '{token}'")]
    InvalidTimestamp { line: usize, token: String },

    /// The file yielded zero valid cues.
    #[error("No cues found in transcript")]
    EmptyTranscript,

    /// Timestamp and text sequences disagreed in length when aligned.
    #[error("Misaligned records: {timing_count} timestamps vs {text_count} text lines")]
    MisalignedRecords {
        timing_count: usize,
        text_count: usize,
    },

    /// Failed to read the transcript file.
    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TranscriptError {
    /// Create an unsupported format error.
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create an invalid timestamp error.
    pub fn invalid_timestamp(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            line,
            token: token.into(),
        }
    }

    /// Create a misaligned records error.
    pub fn misaligned(timing_count: usize, text_count: usize) -> Self {
        Self::MisalignedRecords {
            timing_count,
            text_count,
        }
    }

    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
