//! Handles the `tools/list` MCP method.

use tempo_protocol::mcp::tools::{McpToolDefinition, ToolsListResult};
use tempo_protocol::RequestId;
use tempo_registry::ToolDispatcher;
use tempo_types::ToolDescriptor;

use crate::handler::JsonRpcOutput;

/// Handles the `tools/list` request. Any cursor is ignored: the whole
/// registry fits a single page.
pub(crate) fn handle_tools_list(id: RequestId, dispatcher: &ToolDispatcher) -> JsonRpcOutput {
    let result = ToolsListResult {
        tools: dispatcher.list_tools().iter().map(to_definition).collect(),
        next_cursor: None,
    };
    JsonRpcOutput::from_result(id, &result)
}

/// Converts a registry descriptor into its wire form.
pub fn to_definition(descriptor: &ToolDescriptor) -> McpToolDefinition {
    McpToolDefinition {
        name: descriptor.name.to_string(),
        description: Some(descriptor.description.clone()),
        input_schema: descriptor.input_schema(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempo_types::ToolName;

    #[test]
    fn definition_carries_description_and_schema() {
        let d = ToolDescriptor::new(ToolName::new("echo").expect("name"), "Echoes input");
        let def = to_definition(&d);
        assert_eq!(def.name, "echo");
        assert_eq!(def.description.as_deref(), Some("Echoes input"));
        assert_eq!(def.input_schema, json!({"type": "object", "properties": {}}));
    }
}
