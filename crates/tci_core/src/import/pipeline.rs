//! Import pipeline runner.
//!
//! Executes one import run end to end: select input, validate format,
//! parse cues, plan batches, materialize tracks. Strictly sequential
//! and synchronous; there is no cancellation once parsing begins, and
//! a failure anywhere aborts the remainder of the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::import::chunks::{chunk_size, plan_batches, ChunkConfig};
use crate::import::errors::{ImportError, ImportResult};
use crate::import::materializer::materialize_tracks;
use crate::import::InputSelector;
use crate::models::TrackSchema;
use crate::store::AnnotationStore;
use crate::transcript::{self, TranscriptError};

/// Options for one import run, built once from settings and passed in
/// explicitly.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Batch sizing bounds.
    pub chunking: ChunkConfig,
    /// Materialize the optional metadata tracks too.
    pub include_optional_tracks: bool,
    /// Log a warning for each cue whose offset precedes its onset.
    pub warn_on_reversed_cues: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            chunking: ChunkConfig::default(),
            include_optional_tracks: true,
            warn_on_reversed_cues: true,
        }
    }
}

/// Result of asking the pipeline to run.
#[derive(Debug)]
pub enum ImportOutcome {
    /// The import ran to completion.
    Completed(ImportSummary),
    /// The user declined to pick a file. Not an error.
    Cancelled,
}

/// What one completed import run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    /// Imported file.
    pub input_path: PathBuf,
    /// Label of the detected format.
    pub format_label: String,
    /// Number of cues extracted.
    pub cue_count: usize,
    /// Chunk size the planner settled on.
    pub chunk_size: usize,
    /// Number of batches materialized per track.
    pub batch_count: usize,
    /// Names of the tracks created, in creation order.
    pub tracks_created: Vec<String>,
    /// When the run started (RFC 3339, local time).
    pub started_at: String,
    /// Wall-clock duration of the run.
    pub elapsed_ms: u64,
}

/// One-shot import pipeline over an annotation store.
pub struct Importer<'a> {
    options: ImportOptions,
    schema: TrackSchema,
    store: &'a mut dyn AnnotationStore,
}

impl<'a> Importer<'a> {
    /// Create an importer writing to the given store.
    pub fn new(
        options: ImportOptions,
        schema: TrackSchema,
        store: &'a mut dyn AnnotationStore,
    ) -> Self {
        Self {
            options,
            schema,
            store,
        }
    }

    /// Run one import, asking the selector for the input file.
    ///
    /// A `None` from the selector is a user cancellation and aborts the
    /// whole run without touching the store.
    pub fn run(&mut self, selector: &dyn InputSelector) -> ImportResult<ImportOutcome> {
        let Some(path) = selector.pick() else {
            info!("No input file selected; aborting run");
            return Ok(ImportOutcome::Cancelled);
        };
        self.import_path(&path).map(ImportOutcome::Completed)
    }

    /// Import a known file path.
    pub fn import_path(&mut self, path: &Path) -> ImportResult<ImportSummary> {
        let started_at = chrono::Local::now().to_rfc3339();
        let started = Instant::now();

        info!(path = %path.display(), "Starting transcript import");

        let format = transcript::validate_path(path)?;
        let cues = transcript::parse_file(path)?;
        info!(cues = cues.len(), format = format.label(), "Parsed transcript");

        if cues.is_empty() {
            return Err(ImportError::Transcript(TranscriptError::EmptyTranscript));
        }

        if self.options.warn_on_reversed_cues {
            for (index, cue) in cues.iter().enumerate().filter(|(_, c)| c.is_reversed()) {
                warn!(
                    index,
                    onset_ms = cue.onset_ms,
                    offset_ms = cue.offset_ms,
                    "Cue offset precedes onset"
                );
            }
        }

        let size = chunk_size(cues.len(), &self.options.chunking);
        let batches = plan_batches(cues.len(), &self.options.chunking);
        info!(chunk_size = size, batches = batches.len(), "Planned batches");

        let tracks_created = materialize_tracks(
            self.store,
            &self.schema,
            &cues,
            &batches,
            self.options.include_optional_tracks,
        )?;
        info!(tracks = tracks_created.len(), "Import complete");

        Ok(ImportSummary {
            input_path: path.to_path_buf(),
            format_label: format.label().to_string(),
            cue_count: cues.len(),
            chunk_size: size,
            batch_count: batches.len(),
            tracks_created,
            started_at,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct FixedSelector(Option<PathBuf>);

    impl InputSelector for FixedSelector {
        fn pick(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn write_vtt(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".vtt").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn full_run_creates_all_tracks() {
        let file = write_vtt(
            "WEBVTT\n\n1\n00:00:01.000 --> 00:00:02.000\nHello\n\n2\n\
             00:00:03.000 --> 00:00:04.000\nWorld\n",
        );
        let mut store = MemoryStore::new();
        let mut importer = Importer::new(
            ImportOptions::default(),
            TrackSchema::split_transcript(),
            &mut store,
        );

        let summary = importer.import_path(file.path()).unwrap();

        assert_eq!(summary.cue_count, 2);
        assert_eq!(summary.chunk_size, 10);
        assert_eq!(summary.batch_count, 1);
        assert_eq!(summary.tracks_created.len(), 5);
        assert_eq!(summary.format_label, "WebVTT Subtitles");

        let original = store.track("transcript_original").unwrap();
        assert_eq!(original.records[0].onset_ms, 1000);
        assert_eq!(original.records[0].fields[0].value, "Hello");
        assert_eq!(original.records[1].fields[0].value, "World");

        let qa = store.track("transcript_QA").unwrap();
        assert_eq!(qa.records.len(), 2);
        assert_eq!(qa.fields.len(), 5);
    }

    #[test]
    fn empty_transcript_fails_and_creates_no_tracks() {
        let file = write_vtt("WEBVTT\n\nNOTE nothing here\n");
        let mut store = MemoryStore::new();
        let mut importer = Importer::new(
            ImportOptions::default(),
            TrackSchema::split_transcript(),
            &mut store,
        );

        let err = importer.import_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ImportError::Transcript(TranscriptError::EmptyTranscript)
        ));
        assert!(store.tracks().is_empty());
    }

    #[test]
    fn selector_cancellation_is_not_an_error() {
        let mut store = MemoryStore::new();
        let mut importer = Importer::new(
            ImportOptions::default(),
            TrackSchema::split_transcript(),
            &mut store,
        );

        let outcome = importer.run(&FixedSelector(None)).unwrap();
        assert!(matches!(outcome, ImportOutcome::Cancelled));
        assert!(store.tracks().is_empty());
    }

    #[test]
    fn selector_path_feeds_the_run() {
        let file = write_vtt("WEBVTT\n00:00:01.000 --> 00:00:02.000\nHi\n");
        let mut store = MemoryStore::new();
        let mut importer = Importer::new(
            ImportOptions::default(),
            TrackSchema::split_transcript(),
            &mut store,
        );

        let outcome = importer
            .run(&FixedSelector(Some(file.path().to_path_buf())))
            .unwrap();
        match outcome {
            ImportOutcome::Completed(summary) => assert_eq!(summary.cue_count, 1),
            ImportOutcome::Cancelled => panic!("expected completion"),
        }
    }

    #[test]
    fn unsupported_extension_aborts_before_reading() {
        let mut store = MemoryStore::new();
        let mut importer = Importer::new(
            ImportOptions::default(),
            TrackSchema::split_transcript(),
            &mut store,
        );

        let err = importer
            .import_path(Path::new("/nonexistent/session.srt"))
            .unwrap_err();
        assert!(matches!(
            err,
            ImportError::Transcript(TranscriptError::UnsupportedFormat { .. })
        ));
        assert!(store.tracks().is_empty());
    }

    #[test]
    fn optional_tracks_follow_the_option() {
        let file = write_vtt("WEBVTT\n00:00:01.000 --> 00:00:02.000\nHi\n");
        let mut store = MemoryStore::new();
        let options = ImportOptions {
            include_optional_tracks: false,
            ..Default::default()
        };
        let mut importer =
            Importer::new(options, TrackSchema::split_transcript(), &mut store);

        let summary = importer.import_path(file.path()).unwrap();
        assert_eq!(summary.tracks_created.len(), 3);
    }
}
