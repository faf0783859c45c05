//! Transcript ingestion.
//!
//! Turns a transcript file into an ordered sequence of time-aligned
//! cues.
//!
//! # Components
//!
//! - **types**: `TranscriptFormat` registry and the `Cue` record
//! - **timestamp**: strict timestamp grammar
//! - **parsers**: format-specific parsers (WebVTT)
//! - **error**: the `TranscriptError` taxonomy
//!
//! # Usage
//!
//! ```no_run
//! use tci_core::transcript;
//!
//! let cues = transcript::parse_file("session.vtt")?;
//! for cue in &cues {
//!     println!("{} -> {}: {}", cue.onset_ms, cue.offset_ms, cue.text);
//! }
//! # Ok::<(), tci_core::transcript::TranscriptError>(())
//! ```

mod error;
pub mod parsers;
mod timestamp;
mod types;

use std::fs;
use std::path::Path;

pub use error::TranscriptError;
pub use timestamp::{parse_timestamp, split_range};
pub use types::{descriptors, Cue, FormatDescriptor, TranscriptFormat};

/// Validate a file path against the format registry.
///
/// Fails with `UnsupportedFormat` when the extension is unregistered or
/// the registry entry is a placeholder.
pub fn validate_path(path: impl AsRef<Path>) -> Result<TranscriptFormat, TranscriptError> {
    let path = path.as_ref();
    let format = TranscriptFormat::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        TranscriptError::unsupported(ext)
    })?;
    if !format.is_importable() {
        return Err(TranscriptError::unsupported(format.extension()));
    }
    Ok(format)
}

/// Parse a transcript file from disk.
///
/// Validates the format from the extension, reads the whole file into
/// memory, and parses it into cues in file order.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Cue>, TranscriptError> {
    let path = path.as_ref();
    let format = validate_path(path)?;
    let content =
        fs::read_to_string(path).map_err(|e| TranscriptError::read(path.to_path_buf(), e))?;
    parsers::parse_content(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn validate_path_accepts_vtt_only() {
        assert_eq!(
            validate_path(Path::new("session.vtt")).unwrap(),
            TranscriptFormat::WebVtt
        );
        assert!(matches!(
            validate_path(Path::new("session.srt")),
            Err(TranscriptError::UnsupportedFormat { extension }) if extension == "srt"
        ));
        assert!(matches!(
            validate_path(Path::new("session.mp4")),
            Err(TranscriptError::UnsupportedFormat { extension }) if extension == "mp4"
        ));
    }

    #[test]
    fn parse_file_round_trip() {
        let content = "WEBVTT\n\n1\n00:00:01.000 --> 00:00:02.000\nHello\n";
        let mut temp_file = NamedTempFile::with_suffix(".vtt").unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let cues = parse_file(temp_file.path()).unwrap();
        assert_eq!(cues, vec![Cue::new(1000, 2000, "Hello")]);
    }

    #[test]
    fn parse_file_reports_missing_file() {
        let err = parse_file(Path::new("/nonexistent/session.vtt")).unwrap_err();
        assert!(matches!(err, TranscriptError::Read { .. }));
    }
}
