//! MCP server loop over stdio transport.
//!
//! Reads JSON-RPC requests line by line, dispatches them via
//! `McpHandler`, and writes responses back. Notifications get no response.
//! A bad line is answered with an error response and the loop goes on.

use tracing::{debug, info, warn};

use tempo_mcp::{JsonRpcOutput, McpHandler};
use tempo_protocol::{error_codes, IncomingMessage, JsonRpcErrorResponse, RequestId};

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input stream reaches EOF.
    ///
    /// Requests are answered one at a time, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns an error only when the transport itself fails. Lines that are
    /// not UTF-8 or not JSON get `PARSE_ERROR`; JSON of the wrong shape gets
    /// `INVALID_REQUEST`, echoing the id when readable.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server listening on stdio");

        loop {
            let line = match self.transport.read_line().await {
                Ok(Some(line)) if line.is_empty() => continue,
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("stdin closed, shutting down");
                    return Ok(());
                }
                Err(TransportError::Utf8(e)) => {
                    warn!(error = %e, "discarding non UTF-8 line");
                    let err = JsonRpcErrorResponse::error(
                        RequestId::Number(0),
                        error_codes::PARSE_ERROR,
                        format!("parse error: {e}"),
                    );
                    self.write_output(&JsonRpcOutput::Error(err)).await?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match IncomingMessage::parse(&line) {
                Ok(IncomingMessage::Request(request)) => {
                    debug!(method = %request.method, id = ?request.id, "received request");
                    let output = self.handler.dispatch(&request).await;
                    self.write_output(&output).await?;
                }
                Ok(IncomingMessage::Notification(notification)) => {
                    debug!(method = %notification.method, "received notification");
                    self.handler.handle_notification(&notification);
                }
                Err(e) => {
                    warn!(error = %e, code = e.code(), "rejecting malformed message");
                    let id = e.id().cloned().unwrap_or(RequestId::Number(0));
                    let err = JsonRpcErrorResponse::error(id, e.code(), e.to_string());
                    self.write_output(&JsonRpcOutput::Error(err)).await?;
                }
            }
        }
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        let json = output.to_json()?;
        self.transport.write_line(&json).await
    }
}
