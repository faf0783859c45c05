//! Track materialization.
//!
//! Writes the parsed cue sequence into the annotation store, one track
//! at a time, batch by batch in ascending index order. Downstream
//! coders expect cells in chronological order, so cue order is
//! preserved throughout.

use tracing::{debug, info};

use crate::import::chunks::Batch;
use crate::models::{AnnotationRecord, TrackSchema};
use crate::store::{AnnotationStore, StoreError};
use crate::transcript::Cue;

/// Materialize every applicable track of the schema.
///
/// Required tracks are always created; optional ones only when
/// `include_optional` is set. Each track is fully populated and
/// committed before the next begins. A failure propagates immediately
/// and already-committed tracks stay in the store.
///
/// Returns the names of the tracks created, in creation order.
pub fn materialize_tracks(
    store: &mut dyn AnnotationStore,
    schema: &TrackSchema,
    cues: &[Cue],
    batches: &[Batch],
    include_optional: bool,
) -> Result<Vec<String>, StoreError> {
    let mut created = Vec::new();

    for spec in schema.specs() {
        if !spec.required && !include_optional {
            debug!(track = %spec.name, "Skipping optional track");
            continue;
        }

        let handle = store.create_track(spec)?;

        for batch in batches {
            debug!(
                track = %spec.name,
                start = batch.start,
                end = batch.end,
                "Appending batch"
            );
            for cue in &cues[batch.range()] {
                store.append_record(&handle, AnnotationRecord::for_cue(spec, cue))?;
            }
        }

        info!(track = %spec.name, records = cues.len(), "Committing track");
        store.commit(handle)?;
        created.push(spec.name.clone());
    }

    Ok(created)
}
