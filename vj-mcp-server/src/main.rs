//! Video Jungle MCP Server
//!
//! MCP server exposing the Video Jungle video management API as tools,
//! resources, and prompts over stdio.

use anyhow::Result;
use clap::Parser;
use vj_mcp_common::{Config, McpServerBuilder};
use vj_mcp_server::VideoJungleServer;

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "vj-mcp-server")]
#[command(about = "MCP server for the Video Jungle video management API")]
struct Args {
    /// Video Jungle API key; falls back to the VJ_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    vj_mcp_common::tracing::init_tracing();

    tracing::info!("vj-mcp-server starting...");

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration; a missing API key is fatal
    let config = Config::from_env_or_key(args.api_key)?;
    tracing::info!(api_base = %config.api_base, "Configuration loaded");

    // Create the server handler
    let server = VideoJungleServer::new(config);

    // Run the MCP server over stdio
    McpServerBuilder::new(server).run().await?;

    tracing::info!("Server stopped");
    Ok(())
}
