//! JSON-RPC request router.

use serde::Serialize;
use tracing::{debug, trace};

use tempo_protocol::mcp::{methods, Implementation};
use tempo_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
    RequestId,
};
use tempo_registry::ToolDispatcher;

use crate::dispatch::{initialize, ping, tools_call, tools_list};

/// The single JSON line written back for a request.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// A `result` response.
    Success(JsonRpcResponse),
    /// An `error` response.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the output to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(e) => serde_json::to_string(e),
        }
    }

    /// The request id this output answers.
    pub fn id(&self) -> &RequestId {
        match self {
            Self::Success(r) => &r.id,
            Self::Error(e) => &e.id,
        }
    }

    /// Whether this is an error response.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Wraps a serializable result, falling back to `INTERNAL_ERROR` if
    /// it cannot be encoded.
    pub(crate) fn from_result<T: Serialize>(id: RequestId, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(v) => Self::Success(JsonRpcResponse::success(id, v)),
            Err(e) => Self::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            )),
        }
    }
}

/// Routes MCP requests to their method implementations.
///
/// Holds no per-session state; every request is answered independently.
#[derive(Debug, Clone)]
pub struct McpHandler {
    dispatcher: ToolDispatcher,
    server_info: Implementation,
}

impl McpHandler {
    /// Creates a handler answering tool requests through `dispatcher` and
    /// identifying itself as `server_info` during `initialize`.
    pub fn new(dispatcher: ToolDispatcher, server_info: Implementation) -> Self {
        Self {
            dispatcher,
            server_info,
        }
    }

    /// Produces the response for one request.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => {
                initialize::handle_initialize(id, &request.params, &self.server_info)
            }
            methods::PING => ping::handle_ping(id),
            methods::TOOLS_LIST => tools_list::handle_tools_list(id, &self.dispatcher),
            methods::TOOLS_CALL => {
                tools_call::handle_tools_call(id, &request.params, &self.dispatcher).await
            }
            other => {
                debug!(method = other, "unknown method");
                JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("unknown method: {other}"),
                ))
            }
        }
    }

    /// Handles a notification. Notifications never get a response.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => debug!("client initialized"),
            methods::NOTIFICATIONS_CANCELLED => {
                // Requests complete synchronously, so there is nothing to cancel.
                debug!(params = ?notification.params, "cancellation ignored");
            }
            other => trace!(method = other, "ignoring notification"),
        }
    }
}
