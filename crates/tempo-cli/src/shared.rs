//! Shared helpers used across CLI commands.
//!
//! Centralises building the registry, dispatcher and MCP handler so every
//! command answers with exactly what the server would.

use std::sync::Arc;

use tempo_config::TempoConfig;
use tempo_mcp::McpHandler;
use tempo_protocol::mcp::Implementation;
use tempo_registry::{SystemClock, ToolDispatcher, ToolRegistry};
use tracing_subscriber::EnvFilter;

use crate::output;

/// Level used when the configured one is not understood.
const FALLBACK_LEVEL: &str = "debug";

/// Builds a dispatcher over the built-in registry, reading the system clock.
///
/// # Errors
///
/// Returns an error if a built-in tool descriptor is invalid.
pub fn create_dispatcher() -> anyhow::Result<ToolDispatcher> {
    let registry = ToolRegistry::builtin(Arc::new(SystemClock))
        .map_err(|e| output::fatal(e, "building tool registry"))?;
    tracing::debug!(count = registry.len(), tools = ?registry, "registry ready");
    Ok(ToolDispatcher::new(Arc::new(registry)))
}

/// Builds the MCP handler, identifying the server as configured.
///
/// # Errors
///
/// Returns an error if the dispatcher cannot be built.
pub fn create_handler(config: &TempoConfig) -> anyhow::Result<McpHandler> {
    let server_info = Implementation {
        name: config.server.name.clone(),
        version: config.server.version.clone(),
    };
    Ok(McpHandler::new(create_dispatcher()?, server_info))
}

/// Tracing filter chosen from `-v` flags and the configured level.
#[derive(Debug, PartialEq, Eq)]
pub struct LogFilter {
    pub directive: String,
    /// Configured value that was not understood and got replaced.
    pub rejected: Option<String>,
}

/// Chooses the tracing filter directive.
///
/// `-v` flags win over the configured level: one selects `debug`,
/// two or more select `trace`.
pub fn log_filter(verbose: u8, configured: &str) -> LogFilter {
    let forced = match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    };
    if let Some(level) = forced {
        return LogFilter {
            directive: level.to_string(),
            rejected: None,
        };
    }

    match level_directive(configured) {
        Some(directive) => LogFilter {
            directive,
            rejected: None,
        },
        None => LogFilter {
            directive: FALLBACK_LEVEL.to_string(),
            rejected: Some(configured.to_string()),
        },
    }
}

/// Maps a configured level onto an `EnvFilter` directive.
///
/// Accepts the tracing levels, `fatal` (as `error`), `silent` (as `off`)
/// and directive lists containing `=`, such as `tempo_mcp=trace,info`.
fn level_directive(configured: &str) -> Option<String> {
    let level = configured.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Some(level),
        "warning" => Some("warn".to_string()),
        "fatal" => Some("error".to_string()),
        "silent" => Some("off".to_string()),
        _ if configured.contains('=') => EnvFilter::try_new(configured)
            .ok()
            .map(|_| configured.trim().to_string()),
        _ => None,
    }
}
