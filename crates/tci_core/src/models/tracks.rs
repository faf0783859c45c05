//! Track schema model.
//!
//! A track is a named, independently-schemaed sequence of time-aligned
//! records. The schema below is static configuration: it is built once
//! at startup and passed explicitly into the materializer, never read
//! from globals.

use serde::{Deserialize, Serialize};

use crate::transcript::Cue;

/// Placeholder value for fields the coder fills in by hand.
pub const EMPTY_PLACEHOLDER: &str = "";

/// Static description of one track to materialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSpec {
    /// Track name in the store.
    pub name: String,
    /// Ordered, unique field names.
    pub fields: Vec<String>,
    /// Required tracks are always materialized; optional ones only when
    /// the import settings enable them.
    pub required: bool,
    /// Field populated from the cue text. All other fields get the
    /// empty placeholder.
    pub content_field: Option<String>,
}

impl TrackSpec {
    /// Create a spec with the given fields and no content field.
    pub fn new(name: impl Into<String>, fields: &[&str], required: bool) -> Self {
        Self {
            name: name.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            required,
            content_field: None,
        }
    }

    /// Set the field populated from cue text.
    pub fn with_content_field(mut self, field: impl Into<String>) -> Self {
        self.content_field = Some(field.into());
        self
    }
}

/// One field-name/value pair in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub name: String,
    pub value: String,
}

/// One record in one track: cue timing plus the track's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Start time in milliseconds, copied verbatim from the cue.
    pub onset_ms: u64,
    /// End time in milliseconds, copied verbatim from the cue.
    pub offset_ms: u64,
    /// Field values in schema order.
    pub fields: Vec<FieldValue>,
}

impl AnnotationRecord {
    /// Build the record for one (spec, cue) pair.
    ///
    /// The spec's content field (if any) receives the cue text; every
    /// other field is initialized to the empty placeholder for manual
    /// coding.
    pub fn for_cue(spec: &TrackSpec, cue: &Cue) -> Self {
        let fields = spec
            .fields
            .iter()
            .map(|name| {
                let value = match &spec.content_field {
                    Some(content) if content == name => cue.text.clone(),
                    _ => EMPTY_PLACEHOLDER.to_string(),
                };
                FieldValue {
                    name: name.clone(),
                    value,
                }
            })
            .collect();
        Self {
            onset_ms: cue.onset_ms,
            offset_ms: cue.offset_ms,
            fields,
        }
    }
}

/// The set of tracks one import run materializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSchema {
    specs: Vec<TrackSpec>,
}

impl TrackSchema {
    /// The canonical five-track schema: raw and cleaned transcripts
    /// split, a QA flag track, and two optional coder-metadata tracks.
    pub fn split_transcript() -> Self {
        Self {
            specs: vec![
                TrackSpec::new("transcript_original", &["content"], true)
                    .with_content_field("content"),
                TrackSpec::new("transcript_clean", &["speaker", "content"], true)
                    .with_content_field("content"),
                TrackSpec::new(
                    "transcript_QA",
                    &[
                        "OnsetError",
                        "ContentError",
                        "OmittedUtterance",
                        "HallucinatedUtterance",
                        "SpeakerChange",
                    ],
                    true,
                ),
                TrackSpec::new("transcript_initials", &["coder_initials"], false),
                TrackSpec::new("transcript_notes", &["notes"], false),
            ],
        }
    }

    /// The historical four-track schema with a single combined
    /// transcript track. Kept for re-opening old coding sessions; never
    /// selected implicitly.
    pub fn legacy_combined() -> Self {
        Self {
            specs: vec![
                TrackSpec::new("transcript", &["content"], true).with_content_field("content"),
                TrackSpec::new(
                    "transcript_QA",
                    &[
                        "OnsetError",
                        "ContentError",
                        "OmittedUtterance",
                        "HallucinatedUtterance",
                        "SpeakerChange",
                    ],
                    true,
                ),
                TrackSpec::new("transcript_initials", &["coder_initials"], false),
                TrackSpec::new("transcript_notes", &["notes"], false),
            ],
        }
    }

    /// All track specs in materialization order.
    pub fn specs(&self) -> &[TrackSpec] {
        &self.specs
    }
}

impl Default for TrackSchema {
    fn default() -> Self {
        Self::split_transcript()
    }
}
