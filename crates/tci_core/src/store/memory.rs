//! In-memory annotation store.

use crate::models::{AnnotationRecord, TrackSpec};

use super::{
    append_buffered, commit_buffered, create_buffered, AnnotationStore, StoreError, StoredTrack,
    TrackHandle,
};

/// Store that keeps all tracks in memory.
///
/// Used by tests and by `--dry-run` imports, where the caller wants the
/// full pipeline to run without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tracks: Vec<StoredTrack>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All tracks in creation order.
    pub fn tracks(&self) -> &[StoredTrack] {
        &self.tracks
    }

    /// Look up a track by name.
    pub fn track(&self, name: &str) -> Option<&StoredTrack> {
        self.tracks.iter().find(|t| t.name == name)
    }
}

impl AnnotationStore for MemoryStore {
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
        commit_buffered(&mut self.tracks, &handle)
    }
}
