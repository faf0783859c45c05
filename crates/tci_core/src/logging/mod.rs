//! Logging infrastructure.
//!
//! One short-lived import run logs straight to stderr through the
//! `tracing` ecosystem. `RUST_LOG` overrides the configured level when
//! set.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

impl LogLevel {
    /// Parse a settings string. Unknown values fall back to `Info`.
    pub fn from_settings_str(s: &str) -> Self {
        match s {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable, falling back to the
/// provided default level. Outputs to stderr. Should be called once at
/// application startup.
pub fn init_tracing(default_level: LogLevel, show_timestamps: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    let layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    if show_timestamps {
        tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(layer.without_time())
            .with(filter)
            .init();
    }
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(level_to_filter_str(LogLevel::Debug), "debug");
        assert_eq!(level_to_filter_str(LogLevel::Info), "info");
    }

    #[test]
    fn settings_strings_parse_with_fallback() {
        assert_eq!(LogLevel::from_settings_str("trace"), LogLevel::Trace);
        assert_eq!(LogLevel::from_settings_str("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_settings_str("nonsense"), LogLevel::Info);
    }
}
