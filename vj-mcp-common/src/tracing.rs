//! Tracing initialization for the Video Jungle MCP server.
//!
//! This module provides utilities for initializing the tracing subscriber
//! with environment-based filtering via the `RUST_LOG` environment variable.
//!
//! All output goes to stderr: with the stdio transport, stdout carries the
//! protocol frames.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls the log level and filtering. Examples:
//!   - `RUST_LOG=debug` - Enable debug logging for all modules
//!   - `RUST_LOG=vj_mcp_server=debug` - Enable debug for the server crate
//!   - `RUST_LOG=warn,vj_mcp_common=debug` - Warn by default, debug for common

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Initialize the tracing subscriber with environment-based filtering.
///
/// This function sets up the tracing subscriber with:
/// - Environment-based filtering via `RUST_LOG` (defaults to `info`)
/// - Target module names
/// - Output on stderr
///
/// # Panics
///
/// This function will panic if called more than once, as the global
/// subscriber can only be set once.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Try to initialize tracing, returning an error if already initialized.
///
/// Unlike `init_tracing()`, this function does not panic if the subscriber
/// is already set. This is useful for testing or when initialization might
/// happen multiple times.
pub fn try_init_tracing() -> Result<(), ()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be set once per process, so these
    // tests only exercise the fallible paths.

    #[test]
    fn test_try_init_tracing_does_not_panic() {
        let _ = try_init_tracing();
    }

    #[test]
    fn test_env_filter_parses_valid_levels() {
        let levels = ["trace", "debug", "info", "warn", "error"];
        for level in levels {
            let filter = EnvFilter::new(level);
            drop(filter);
        }
    }

    #[test]
    fn test_env_filter_parses_module_specific() {
        let filter = EnvFilter::new("warn,vj_mcp_common=debug");
        drop(filter);
    }
}
