//! `tempo serve` command.
//!
//! Starts the MCP server over stdio, exposing the tool registry via
//! JSON-RPC 2.0. Runs until stdin closes or Ctrl-C is received.

use clap::Args;

use tempo_config::TempoConfig;
use tempo_transport_stdio::{McpServer, StdioTransport};

use crate::{output, shared};

/// Start the MCP server on stdio.
#[derive(Debug, Args, Default)]
pub struct ServeArgs {}

/// Executes the serve command.
pub async fn execute(_args: &ServeArgs, config: &TempoConfig) -> anyhow::Result<()> {
    let handler = shared::create_handler(config)?;
    let mut server = McpServer::new(StdioTransport::stdio(), handler);

    tracing::info!(
        name = %config.server.name,
        version = %config.server.version,
        "time server running on stdio"
    );

    tokio::select! {
        result = server.run() => {
            result.map_err(|e| output::fatal(e, "serving on stdio"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
