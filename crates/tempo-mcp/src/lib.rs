//! # tempo-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for routing JSON-RPC requests
//! to the `initialize`, `ping` and `tools/*` implementations.

mod dispatch;
pub mod handler;

pub use dispatch::tools_list::to_definition;
pub use handler::{JsonRpcOutput, McpHandler};
