//! TCI Core - Backend logic for the Transcript Coding Importer
//!
//! This crate contains all import logic with zero UI dependencies:
//! transcript parsing, batch planning, track materialization, and the
//! annotation-store boundary. It can be used by a GUI front end or the
//! bundled CLI.

pub mod config;
pub mod import;
pub mod logging;
pub mod models;
pub mod store;
pub mod transcript;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
