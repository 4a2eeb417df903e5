//! Handles the `initialize` MCP method.

use serde_json::Value;
use tracing::info;

use tempo_protocol::mcp::initialize::{
    Implementation, InitializeParams, InitializeResult, ServerCapabilities, PROTOCOL_VERSION,
};
use tempo_protocol::{error_codes, JsonRpcErrorResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Handles the `initialize` request and returns the server capabilities.
///
/// Params are optional; when present they must be well-formed.
pub(crate) fn handle_initialize(
    id: RequestId,
    params: &Option<Value>,
    server_info: &Implementation,
) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(init) => info!(
                client = %init.client_info.name,
                client_version = %init.client_info.version,
                requested = %init.protocol_version,
                "client connected"
            ),
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid initialize params: {e}"),
                ));
            }
        }
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities::tools_only(),
        server_info: server_info.clone(),
    };

    JsonRpcOutput::from_result(id, &result)
}
