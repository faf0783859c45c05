//! Batch planning for incremental track materialization.
//!
//! Pure functions for partitioning the cue index range into bounded
//! contiguous batches.

use serde::{Deserialize, Serialize};

/// Configuration for batch sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Divisor for the proportional chunk size (size grows with volume).
    pub divisor: usize,
    /// Lower bound on chunk size.
    pub min_size: usize,
    /// Upper bound on chunk size.
    pub max_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            divisor: 10,
            min_size: 10,
            max_size: 100,
        }
    }
}

impl ChunkConfig {
    /// Create from import settings.
    ///
    /// Zero values fall back to 1 and an inverted min/max pair is
    /// reordered, so a hand-edited config cannot produce an unusable
    /// planner.
    pub fn from_settings(divisor: usize, min_size: usize, max_size: usize) -> Self {
        let divisor = divisor.max(1);
        let min_size = min_size.max(1);
        let max_size = max_size.max(1);
        Self {
            divisor,
            min_size: min_size.min(max_size),
            max_size: max_size.max(min_size),
        }
    }
}

/// A half-open slice `[start, end)` over the cue sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// First cue index in the batch.
    pub start: usize,
    /// One past the last cue index in the batch.
    pub end: usize,
}

impl Batch {
    /// Number of cues in the batch.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the batch spans no cues.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Index range for slicing the cue sequence.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Chunk size for a given cue count.
///
/// Proportional to volume (`ceil(total / divisor)`), clamped below to
/// avoid excessive per-call overhead on small files and above to bound
/// single-call size on huge ones.
pub fn chunk_size(total: usize, config: &ChunkConfig) -> usize {
    total
        .div_ceil(config.divisor)
        .clamp(config.min_size, config.max_size)
}

/// Partition `[0, total)` into contiguous, non-overlapping batches.
///
/// Pure function - no I/O, deterministic output. The final batch may be
/// shorter than the chunk size. `total == 0` yields no batches; callers
/// treat that as the empty-transcript condition before planning.
pub fn plan_batches(total: usize, config: &ChunkConfig) -> Vec<Batch> {
    if total == 0 {
        return vec![];
    }

    let size = chunk_size(total, config);
    let total_chunks = total.div_ceil(size);

    (0..total_chunks)
        .map(|k| Batch {
            start: k * size,
            end: ((k + 1) * size).min(total),
        })
        .collect()
}
