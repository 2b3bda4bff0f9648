//! Video Jungle MCP Server Library
//!
//! Exposes the Video Jungle video management API as MCP tools, resources,
//! and prompts.

pub mod client;
pub mod edit;
pub mod handler;
pub mod prompts;
pub mod resources;
pub mod server;

pub use client::VideoJungleClient;
pub use handler::EditorHandler;
pub use server::VideoJungleServer;
