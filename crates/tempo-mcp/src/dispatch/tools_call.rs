//! Handles the `tools/call` MCP method.

use serde_json::{json, Value};

use tempo_protocol::mcp::tools::ToolsCallParams;
use tempo_protocol::{error_codes, JsonRpcErrorResponse, RequestId};
use tempo_registry::{DispatchError, ToolDispatcher};

use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &ToolDispatcher,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            ));
        }
    };

    // 2. Dispatch against the registry
    tracing::debug!(tool = %call_params.name, "tools/call");
    match dispatcher.call_tool(&call_params).await {
        Ok(result) => JsonRpcOutput::from_result(id, &result),
        Err(e) => JsonRpcOutput::Error(dispatch_error(id, &e)),
    }
}

/// Maps a rejected call onto a JSON-RPC error carrying the tool name.
pub(crate) fn dispatch_error(id: RequestId, e: &DispatchError) -> JsonRpcErrorResponse {
    JsonRpcErrorResponse::error(id, error_codes::INVALID_PARAMS, e.to_string())
        .with_data(json!({ "tool": e.tool_name() }))
}
