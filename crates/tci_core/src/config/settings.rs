//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML
//! tables. Every field carries a serde default so a partial or empty
//! file loads cleanly.

use serde::{Deserialize, Serialize};

use crate::import::chunks::ChunkConfig;
use crate::import::ImportOptions;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Import behavior.
    #[serde(default)]
    pub import: ImportSettings,
}

/// Path configuration for output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Output folder for track documents.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,

    /// Last imported transcript path.
    #[serde(default)]
    pub last_input_path: String,
}

fn default_output_folder() -> String {
    "annotation_output".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_folder: default_output_folder(),
            last_input_path: String::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum log level (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,

    /// Show timestamps in log output.
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            show_timestamps: true,
        }
    }
}

/// Import behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Divisor for the proportional chunk size.
    #[serde(default = "default_chunk_divisor")]
    pub chunk_divisor: usize,

    /// Lower bound on chunk size.
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,

    /// Upper bound on chunk size.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,

    /// Materialize the optional coder-metadata tracks.
    #[serde(default = "default_true")]
    pub include_optional_tracks: bool,

    /// Warn about cues whose offset precedes their onset.
    #[serde(default = "default_true")]
    pub warn_on_reversed_cues: bool,
}

fn default_chunk_divisor() -> usize {
    10
}

fn default_min_chunk_size() -> usize {
    10
}

fn default_max_chunk_size() -> usize {
    100
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            chunk_divisor: default_chunk_divisor(),
            min_chunk_size: default_min_chunk_size(),
            max_chunk_size: default_max_chunk_size(),
            include_optional_tracks: true,
            warn_on_reversed_cues: true,
        }
    }
}

impl ImportSettings {
    /// Build the immutable per-run options from these settings.
    pub fn to_options(&self) -> ImportOptions {
        ImportOptions {
            chunking: ChunkConfig::from_settings(
                self.chunk_divisor,
                self.min_chunk_size,
                self.max_chunk_size,
            ),
            include_optional_tracks: self.include_optional_tracks,
            warn_on_reversed_cues: self.warn_on_reversed_cues,
        }
    }
}
