//! Core transcript types.
//!
//! All timing values are integer milliseconds from the start of the
//! recording. Cues are created once per import run and never mutated.

use std::path::Path;

/// Registered transcript formats.
///
/// Only WebVTT is importable. SubRip and plain text are placeholder
/// registry entries: they appear in chooser filters and error messages
/// but selecting one fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    /// WebVTT (.vtt)
    WebVtt,
    /// SubRip (.srt) - placeholder, not importable.
    SubRip,
    /// Plain text (.txt) - placeholder, not importable.
    PlainText,
}

impl TranscriptFormat {
    /// Detect format from file extension.
    ///
    /// The extension is the suffix after the final `.` and is matched
    /// case-sensitively against the registry.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "vtt" => Some(Self::WebVtt),
            "srt" => Some(Self::SubRip),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// The registered file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::WebVtt => "vtt",
            Self::SubRip => "srt",
            Self::PlainText => "txt",
        }
    }

    /// Human-readable label, used for chooser filters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WebVtt => "WebVTT Subtitles",
            Self::SubRip => "SubRip Subtitles",
            Self::PlainText => "Plain Text Transcript",
        }
    }

    /// Whether this format can actually be imported.
    pub fn is_importable(&self) -> bool {
        matches!(self, Self::WebVtt)
    }

    /// All registry entries, importable or not.
    pub fn registry() -> &'static [TranscriptFormat] {
        &[Self::WebVtt, Self::SubRip, Self::PlainText]
    }
}

/// Static description of one registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// File extension without the dot.
    pub extension: &'static str,
    /// Human-readable format label.
    pub label: &'static str,
    /// Whether the importer accepts files of this format.
    pub importable: bool,
}

/// Descriptors for every registered format, for building file filters.
pub fn descriptors() -> Vec<FormatDescriptor> {
    TranscriptFormat::registry()
        .iter()
        .map(|f| FormatDescriptor {
            extension: f.extension(),
            label: f.label(),
            importable: f.is_importable(),
        })
        .collect()
}

/// One timestamp-bounded unit of transcript text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// Start time in milliseconds.
    pub onset_ms: u64,
    /// End time in milliseconds.
    pub offset_ms: u64,
    /// Text content. Never empty.
    pub text: String,
}

impl Cue {
    /// Create a new cue.
    pub fn new(onset_ms: u64, offset_ms: u64, text: impl Into<String>) -> Self {
        Self {
            onset_ms,
            offset_ms,
            text: text.into(),
        }
    }

    /// Whether the offset precedes the onset.
    ///
    /// Reversed cues are not rejected; the pipeline logs them and lets
    /// coders fix the timing during QA.
    pub fn is_reversed(&self) -> bool {
        self.offset_ms < self.onset_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn format_detection_from_extension() {
        assert_eq!(
            TranscriptFormat::from_path(Path::new("session.vtt")),
            Some(TranscriptFormat::WebVtt)
        );
        assert_eq!(
            TranscriptFormat::from_path(Path::new("session.srt")),
            Some(TranscriptFormat::SubRip)
        );
        assert_eq!(
            TranscriptFormat::from_path(Path::new("session.txt")),
            Some(TranscriptFormat::PlainText)
        );
        assert_eq!(TranscriptFormat::from_path(Path::new("session.ass")), None);
        assert_eq!(TranscriptFormat::from_path(Path::new("session")), None);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(TranscriptFormat::from_path(Path::new("session.VTT")), None);
        assert_eq!(TranscriptFormat::from_path(Path::new("session.Vtt")), None);
    }

    #[test]
    fn only_webvtt_is_importable() {
        let importable: Vec<_> = TranscriptFormat::registry()
            .iter()
            .filter(|f| f.is_importable())
            .collect();
        assert_eq!(importable, vec![&TranscriptFormat::WebVtt]);
    }

    #[test]
    fn descriptors_cover_registry() {
        let descs = descriptors();
        assert_eq!(descs.len(), 3);
        assert_eq!(descs[0].extension, "vtt");
        assert_eq!(descs[0].label, "WebVTT Subtitles");
        assert!(descs[0].importable);
        assert!(!descs[1].importable);
        assert!(!descs[2].importable);
    }

    #[test]
    fn reversed_cue_detection() {
        assert!(!Cue::new(1000, 2000, "ok").is_reversed());
        assert!(!Cue::new(1000, 1000, "zero length").is_reversed());
        assert!(Cue::new(2000, 1000, "reversed").is_reversed());
    }
}
