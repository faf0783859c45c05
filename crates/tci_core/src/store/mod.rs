//! Annotation store capability.
//!
//! The host store persists named tracks of time-aligned records. The
//! core depends only on the `AnnotationStore` trait, never on a
//! concrete backend; the materializer writes through it as a single
//! sequential caller.
//!
//! Two backends ship with the crate:
//!
//! - **MemoryStore**: records in memory; used by tests and dry runs
//! - **JsonStore**: one JSON document per import run, rewritten
//!   atomically on every track commit
//!
//! # Example
//!
//! ```
//! use tci_core::models::{AnnotationRecord, TrackSpec};
//! use tci_core::store::{AnnotationStore, MemoryStore};
//! use tci_core::transcript::Cue;
//!
//! let mut store = MemoryStore::new();
//! let spec = TrackSpec::new("transcript_original", &["content"], true)
//!     .with_content_field("content");
//! let handle = store.create_track(&spec)?;
//! let cue = Cue::new(1000, 2000, "Hello");
//! store.append_record(&handle, AnnotationRecord::for_cue(&spec, &cue))?;
//! store.commit(handle)?;
//! # Ok::<(), tci_core::store::StoreError>(())
//! ```

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::models::{AnnotationRecord, TrackSpec};

/// Opaque handle to a track created in a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackHandle {
    id: usize,
    name: String,
}

impl TrackHandle {
    fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Name of the track this handle refers to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Write interface to the external annotation store.
///
/// Calls arrive in a fixed order per track: one `create_track`, then
/// `append_record` in record order, then one `commit` consuming the
/// handle. There is exactly one caller; implementations need no
/// locking.
pub trait AnnotationStore {
    /// Create a named track with the spec's field schema.
    fn create_track(&mut self, spec: &TrackSpec) -> Result<TrackHandle, StoreError>;

    /// Append one record to an uncommitted track.
    fn append_record(
        &mut self,
        handle: &TrackHandle,
        record: AnnotationRecord,
    ) -> Result<(), StoreError>;

    /// Finish a track. No further records may be appended.
    fn commit(&mut self, handle: TrackHandle) -> Result<(), StoreError>;
}

/// A buffered track as held by the shipped store backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTrack {
    /// Track name.
    pub name: String,
    /// Field schema in order.
    pub fields: Vec<String>,
    /// Records in append order.
    pub records: Vec<AnnotationRecord>,
    /// Whether the track has been committed.
    pub committed: bool,
}

impl StoredTrack {
    fn from_spec(spec: &TrackSpec) -> Self {
        Self {
            name: spec.name.clone(),
            fields: spec.fields.clone(),
            records: Vec::new(),
            committed: false,
        }
    }
}

/// Shared create/append/commit bookkeeping for the buffered backends.
fn create_buffered(
    tracks: &mut Vec<StoredTrack>,
    spec: &TrackSpec,
) -> Result<TrackHandle, StoreError> {
    if tracks.iter().any(|t| t.name == spec.name) {
        return Err(StoreError::track(&spec.name, "track already exists"));
    }
    tracks.push(StoredTrack::from_spec(spec));
    Ok(TrackHandle::new(tracks.len() - 1, &spec.name))
}

fn append_buffered(
    tracks: &mut [StoredTrack],
    handle: &TrackHandle,
    record: AnnotationRecord,
) -> Result<(), StoreError> {
    let track = tracks
        .get_mut(handle.id)
        .ok_or_else(|| StoreError::track(handle.name(), "unknown track handle"))?;
    if track.committed {
        return Err(StoreError::track(handle.name(), "track already committed"));
    }
    track.records.push(record);
    Ok(())
}

fn commit_buffered(tracks: &mut [StoredTrack], handle: &TrackHandle) -> Result<(), StoreError> {
    let track = tracks
        .get_mut(handle.id)
        .ok_or_else(|| StoreError::track(handle.name(), "unknown track handle"))?;
    if track.committed {
        return Err(StoreError::track(handle.name(), "track already committed"));
    }
    track.committed = true;
    Ok(())
}
