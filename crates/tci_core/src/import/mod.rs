//! Import pipeline.
//!
//! This module follows the same pattern as the `transcript` module:
//! pure functions for the algorithmic parts (batch planning), a thin
//! orchestration layer on top, and traits at the seams to external
//! collaborators (file selection, annotation store).
//!
//! # Components
//!
//! - **chunks**: batch sizing and index-range partitioning
//! - **materializer**: per-track, per-batch record creation
//! - **pipeline**: the end-to-end `Importer` runner
//! - **errors**: the `ImportError` umbrella
//!
//! # Usage
//!
//! ```no_run
//! use tci_core::import::{ImportOptions, Importer};
//! use tci_core::models::TrackSchema;
//! use tci_core::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let mut importer = Importer::new(
//!     ImportOptions::default(),
//!     TrackSchema::split_transcript(),
//!     &mut store,
//! );
//! let summary = importer.import_path("session.vtt".as_ref())?;
//! println!("{} cues in {} batches", summary.cue_count, summary.batch_count);
//! # Ok::<(), tci_core::import::ImportError>(())
//! ```

pub mod chunks;
mod errors;
mod materializer;
mod pipeline;

use std::path::PathBuf;

pub use chunks::{chunk_size, plan_batches, Batch, ChunkConfig};
pub use errors::{ImportError, ImportResult};
pub use materializer::materialize_tracks;
pub use pipeline::{ImportOptions, ImportOutcome, ImportSummary, Importer};

/// Capability for choosing the input file.
///
/// Decouples the pipeline from any UI toolkit: a GUI front end shows a
/// chooser restricted to the registered extensions, the CLI returns its
/// positional argument. `None` means the user declined, which aborts
/// the run without error.
pub trait InputSelector {
    /// Ask for an input file. `None` is a cancellation.
    fn pick(&self) -> Option<PathBuf>;
}
