//! JSON-file annotation store.
//!
//! Buffers tracks in memory and, on every commit, rewrites one JSON
//! document holding all committed tracks. The write is atomic (temp
//! file, then rename), so a failure mid-import leaves either the
//! previous document or a complete new one on disk - never a torn
//! file. Tracks committed before a later failure remain in the
//! document; there is no rollback.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::models::{AnnotationRecord, TrackSpec};

use super::{
    append_buffered, commit_buffered, create_buffered, AnnotationStore, StoreError, StoredTrack,
    TrackHandle,
};

/// Store that materializes tracks as a JSON document.
///
/// The document lands at `<output_dir>/<input_stem>.tracks.json`.
#[derive(Debug)]
pub struct JsonStore {
    output_path: PathBuf,
    source: String,
    created_at: String,
    tracks: Vec<StoredTrack>,
}

/// On-disk document shape.
#[derive(Serialize)]
struct TrackDocument<'a> {
    source: &'a str,
    created_at: &'a str,
    tracks: Vec<DocumentTrack<'a>>,
}

#[derive(Serialize)]
struct DocumentTrack<'a> {
    name: &'a str,
    fields: &'a [String],
    records: &'a [AnnotationRecord],
}

impl JsonStore {
    /// Create a store writing next to the given output directory.
    ///
    /// `input_path` supplies the document file stem and the recorded
    /// source path.
    pub fn new(output_dir: impl Into<PathBuf>, input_path: &Path) -> Self {
        let stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("transcript");
        let output_path = output_dir.into().join(format!("{stem}.tracks.json"));
        Self {
            output_path,
            source: input_path.display().to_string(),
            created_at: chrono::Local::now().to_rfc3339(),
            tracks: Vec::new(),
        }
    }

    /// Path of the document this store writes.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Rewrite the document with all committed tracks.
    fn write_document(&self) -> Result<(), StoreError> {
        let document = TrackDocument {
            source: &self.source,
            created_at: &self.created_at,
            tracks: self
                .tracks
                .iter()
                .filter(|t| t.committed)
                .map(|t| DocumentTrack {
                    name: &t.name,
                    fields: &t.fields,
                    records: &t.records,
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::Serialize { source: e })?;

        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::io("creating output directory", e))?;
        }

        // Write to temp file, then rename
        let temp_path = self.output_path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(|e| StoreError::io("writing track document", e))?;
        fs::rename(&temp_path, &self.output_path)
            .map_err(|e| StoreError::io("replacing track document", e))?;

        Ok(())
    }
}

impl AnnotationStore for JsonStore {
    fn create_track(&mut self, spec: &TrackSpec) -> Result<TrackHandle, StoreError> {
        create_buffered(&mut self.tracks, spec)
    }

    fn append_record(
        &mut self,
        handle: &TrackHandle,
        record: AnnotationRecord,
    ) -> Result<(), StoreError> {
        append_buffered(&mut self.tracks, handle, record)
    }

    fn commit(&mut self, handle: TrackHandle) -> Result<(), StoreError> {
        commit_buffered(&mut self.tracks, &handle)?;
        self.write_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Cue;
    use tempfile::TempDir;

    fn content_spec() -> TrackSpec {
        TrackSpec::new("transcript_original", &["content"], true).with_content_field("content")
    }

    #[test]
    fn commit_writes_document() {
        let dir = TempDir::new().unwrap();
        let input = Path::new("/sessions/visit_03.vtt");
        let mut store = JsonStore::new(dir.path(), input);

        let spec = content_spec();
        let handle = store.create_track(&spec).unwrap();
        let cue = Cue::new(1000, 2000, "Hello");
        store
            .append_record(&handle, AnnotationRecord::for_cue(&spec, &cue))
            .unwrap();
        store.commit(handle).unwrap();

        let path = dir.path().join("visit_03.tracks.json");
        let written = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();

        assert_eq!(parsed["source"], "/sessions/visit_03.vtt");
        assert_eq!(parsed["tracks"][0]["name"], "transcript_original");
        assert_eq!(parsed["tracks"][0]["records"][0]["onset_ms"], 1000);
        assert_eq!(
            parsed["tracks"][0]["records"][0]["fields"][0]["value"],
            "Hello"
        );
    }

    #[test]
    fn uncommitted_tracks_stay_out_of_the_document() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStore::new(dir.path(), Path::new("session.vtt"));

        let first = content_spec();
        let handle = store.create_track(&first).unwrap();

        let mut second = content_spec();
        second.name = "transcript_clean".to_string();
        store.create_track(&second).unwrap();

        store.commit(handle).unwrap();

        let written = fs::read_to_string(store.output_path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        let tracks = parsed["tracks"].as_array().unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0]["name"], "transcript_original");
    }

    #[test]
    fn no_file_until_first_commit() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonStore::new(dir.path(), Path::new("session.vtt"));
        store.create_track(&content_spec()).unwrap();
        assert!(!store.output_path().exists());
    }
}
