//! # tempo-transport-stdio
//!
//! Stdio transport adapter for MCP JSON-RPC communication.
//!
//! Provides line-delimited JSON transport over stdin/stdout,
//! and a server loop that ties it to an `McpHandler`.

pub mod error;
pub mod server;
pub mod transport;

pub use error::TransportError;
// McpHandler lives in tempo-mcp (APPLICATION layer); re-exported for convenience.
pub use server::McpServer;
pub use tempo_mcp::{JsonRpcOutput, McpHandler};
pub use transport::StdioTransport;
