//! Configuration management.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults for every field; missing files are created on first run
//!
//! Configuration is loaded once at startup into an immutable value and
//! passed explicitly into each component - there are no ambient
//! globals.
//!
//! # Example
//!
//! ```no_run
//! use tci_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/tci.toml");
//! config.load_or_create().unwrap();
//!
//! let options = config.settings().import.to_options();
//! println!("Output folder: {}", config.settings().paths.output_folder);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ImportSettings, LoggingSettings, PathSettings, Settings};
