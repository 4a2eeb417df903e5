//! Answers list/call requests against a `ToolRegistry`.
//!
//! The dispatcher is stateless: each call depends only on its input and
//! the registry, which it never modifies.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use tempo_protocol::mcp::{ToolsCallParams, ToolsCallResult};
use tempo_types::{DiagnosticError, ErrorKind, TempoError, ToolDescriptor};

use crate::registry::ToolRegistry;

/// Reasons a call is rejected before any tool runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The request carried no `arguments` object.
    ///
    /// Checked before the name lookup and regardless of whether the
    /// tool declares any arguments.
    #[error("No arguments provided for tool: {tool}")]
    MissingArguments { tool: String },
    /// No tool is registered under the requested name.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}

impl DispatchError {
    /// The tool name the failed request referred to.
    pub fn tool_name(&self) -> &str {
        match self {
            Self::MissingArguments { tool } => tool,
            Self::UnknownTool { name } => name,
        }
    }
}

impl From<DispatchError> for TempoError {
    fn from(e: DispatchError) -> Self {
        let kind = match &e {
            DispatchError::MissingArguments { .. } => ErrorKind::InvalidInput,
            DispatchError::UnknownTool { .. } => ErrorKind::NotFound,
        };
        TempoError::new(kind, e.to_string())
    }
}

impl DiagnosticError for DispatchError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::MissingArguments { tool } => Some(format!(
                "The call to '{tool}' had no `arguments` object; every call must send one, even an empty one."
            )),
            Self::UnknownTool { name } => {
                Some(format!("No tool named '{name}' is registered."))
            }
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::MissingArguments { tool } => {
                Some(format!("Pass empty arguments: tempo call {tool} --args '{{}}'"))
            }
            Self::UnknownTool { .. } => Some("List available tools: tempo list".into()),
        }
    }
}

/// Maps list/call requests to registry lookups and tool invocations.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Creates a dispatcher over `registry`.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Returns every registered tool, in registration order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry.descriptors().cloned().collect()
    }

    /// Invokes the named tool.
    ///
    /// A tool that fails while running yields an `isError` result rather
    /// than an `Err`, so the client sees the failure as tool output.
    ///
    /// # Errors
    ///
    /// - `DispatchError::MissingArguments` when `arguments` is absent.
    /// - `DispatchError::UnknownTool` when the name is not registered.
    pub async fn call_tool(
        &self,
        params: &ToolsCallParams,
    ) -> Result<ToolsCallResult, DispatchError> {
        let Some(arguments) = &params.arguments else {
            return Err(DispatchError::MissingArguments {
                tool: params.name.clone(),
            });
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return Err(DispatchError::UnknownTool {
                name: params.name.clone(),
            });
        };

        debug!(tool = %params.name, "invoking tool");
        match tool.call(arguments).await {
            Ok(content) => Ok(ToolsCallResult::success(content)),
            Err(e) => {
                warn!(tool = %params.name, error = %e, "tool execution failed");
                Ok(ToolsCallResult::error(e.to_string()))
            }
        }
    }
}
