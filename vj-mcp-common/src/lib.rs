//! Video Jungle MCP Common Library
//!
//! Shared utilities for configuration, error handling, server bootstrap,
//! and tracing used by the Video Jungle MCP server.

pub mod config;
pub mod error;
pub mod server;
pub mod tracing;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod error_test;

pub use config::Config;
pub use error::{ConfigError, Error, Result};
pub use server::{McpServerBuilder, ServerError, shutdown_channel};
