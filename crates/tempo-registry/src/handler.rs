//! Abstract tool trait (port) implemented by every exposed tool.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use tempo_protocol::mcp::ToolContent;
use tempo_types::ToolDescriptor;

/// Failures raised while a tool runs.
///
/// These are reported to the client in-band (`isError: true`), unlike
/// dispatch errors which become JSON-RPC error responses.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool output could not be encoded.
    #[error("failed to encode tool output: {0}")]
    Encode(#[from] serde_json::Error),
    /// The tool ran but could not produce a result.
    #[error("tool execution failed: {message}")]
    Execution { message: String },
}

/// A named capability the registry can expose and invoke.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Static metadata advertised by `tools/list`.
    fn descriptor(&self) -> &ToolDescriptor;

    /// Runs the tool with the caller's arguments.
    async fn call(&self, arguments: &Map<String, Value>) -> Result<Vec<ToolContent>, ToolError>;
}
