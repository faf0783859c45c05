//! Transcript parsers.
//!
//! Each parser is a pure function that takes file content and returns
//! cues. Only WebVTT has a real parser; the other registry entries are
//! placeholders and dispatch to `UnsupportedFormat`.

mod vtt;

pub use vtt::parse_vtt;

use crate::transcript::error::TranscriptError;
use crate::transcript::types::{Cue, TranscriptFormat};

/// Parse transcript content in the given format.
pub fn parse_content(
    content: &str,
    format: TranscriptFormat,
) -> Result<Vec<Cue>, TranscriptError> {
    match format {
        TranscriptFormat::WebVtt => parse_vtt(content),
        other => Err(TranscriptError::unsupported(other.extension())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_webvtt() {
        let cues =
            parse_content("WEBVTT\n00:00:01.000 --> 00:00:02.000\nHi\n", TranscriptFormat::WebVtt)
                .unwrap();
        assert_eq!(cues.len(), 1);
    }

    #[test]
    fn placeholder_formats_are_rejected() {
        for format in [TranscriptFormat::SubRip, TranscriptFormat::PlainText] {
            let err = parse_content("anything", format).unwrap_err();
            assert!(matches!(err, TranscriptError::UnsupportedFormat { .. }));
        }
    }
}
