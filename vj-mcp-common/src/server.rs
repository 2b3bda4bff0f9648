//! MCP Server builder utilities.
//!
//! This module provides a consistent pattern for building and running the MCP
//! server over the stdio transport with graceful shutdown. Stdio is the only
//! transport: the adapter communicates over stdin/stdout and opens no network
//! listener of its own.
//!
//! # Example
//!
//! ```ignore
//! use vj_mcp_common::server::McpServerBuilder;
//!
//! let handler = MyHandler::new();
//! McpServerBuilder::new(handler)
//!     .run()
//!     .await?;
//! ```

use rmcp::{ServerHandler, ServiceExt};
use thiserror::Error;
use tokio::sync::oneshot;

/// Errors that can occur when running an MCP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Transport error during communication
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server was shut down
    #[error("Server shutdown")]
    Shutdown,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builder for configuring and running the MCP server.
///
/// Provides a fluent API for setting up the server with an optional
/// programmatic shutdown channel.
pub struct McpServerBuilder<H> {
    handler: H,
    shutdown_rx: Option<oneshot::Receiver<()>>,
}

impl<H> McpServerBuilder<H>
where
    H: ServerHandler + Clone + Send + Sync + 'static,
{
    /// Create a new server builder with the given handler.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            shutdown_rx: None,
        }
    }

    /// Set a shutdown signal receiver for graceful shutdown.
    ///
    /// When the sender is dropped or a message is sent, the server
    /// will initiate graceful shutdown.
    pub fn with_shutdown(mut self, shutdown_rx: oneshot::Receiver<()>) -> Self {
        self.shutdown_rx = Some(shutdown_rx);
        self
    }

    /// Run the MCP server over stdio.
    ///
    /// This method blocks until the server is shut down (via signal or
    /// shutdown channel) or the peer closes the stream.
    pub async fn run(self) -> Result<(), ServerError> {
        use rmcp::transport::io::stdio;

        tracing::info!("Starting MCP server on stdio");

        let transport = stdio();

        // Set up graceful shutdown
        let shutdown_future = async {
            if let Some(rx) = self.shutdown_rx {
                let _ = rx.await;
            } else {
                // Wait for SIGTERM or SIGINT
                wait_for_shutdown_signal().await;
            }
        };

        // Run the server
        let service = self
            .handler
            .serve(transport)
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| ServerError::Transport(e.to_string()))?;
                Ok(())
            }
            _ = shutdown_future => {
                tracing::info!("Received shutdown signal, stopping server");
                Ok(())
            }
        }
    }
}

/// Wait for a shutdown signal (SIGTERM or SIGINT).
async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to register Ctrl+C handler");
        tracing::info!("Received Ctrl+C");
    }
}

/// Convenience function to set up graceful shutdown handling.
///
/// Returns a sender that can be used to trigger shutdown programmatically,
/// and a receiver to pass to the server builder.
pub fn shutdown_channel() -> (oneshot::Sender<()>, oneshot::Receiver<()>) {
    oneshot::channel()
}
