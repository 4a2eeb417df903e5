//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`, as the MCP
//! stdio transport requires. Nothing else may be written to the output
//! stream; logs go to stderr.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// Reads JSON-RPC messages from an input stream, writes responses to an
/// output stream.
///
/// Generic over reader/writer so tests can drive it from memory.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl StdioTransport<tokio::io::Stdin, tokio::io::Stdout> {
    /// Transport bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next line from the input stream, trimmed.
    ///
    /// Returns `None` on EOF and `Some("")` for a blank line. A line that is
    /// not UTF-8 is consumed whole and reported as `TransportError::Utf8`,
    /// leaving the stream positioned at the next line.
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let mut buf = Vec::new();
        let bytes_read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(TransportError::Read)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8(buf)?;
        let trimmed = line.trim();
        trace!(len = trimmed.len(), "read message");
        Ok(Some(trimmed.to_string()))
    }

    /// Writes one message followed by `\n` and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(TransportError::Write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn read_single_line() {
        let input = b"{\"jsonrpc\":\"2.0\"}\n";
        let mut transport = StdioTransport::new(Cursor::new(input.to_vec()), Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, Some("{\"jsonrpc\":\"2.0\"}".to_string()));
    }

    #[tokio::test]
    async fn read_eof_returns_none() {
        let mut transport = StdioTransport::new(Cursor::new(Vec::<u8>::new()), Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, None);
    }

    #[tokio::test]
    async fn blank_and_crlf_lines_are_trimmed() {
        let input = b"  \r\n{}\r\n";
        let mut transport = StdioTransport::new(Cursor::new(input.to_vec()), Vec::new());

        assert_eq!(transport.read_line().await.expect("r1"), Some(String::new()));
        assert_eq!(transport.read_line().await.expect("r2"), Some("{}".to_string()));
        assert_eq!(transport.read_line().await.expect("r3"), None);
    }

    #[tokio::test]
    async fn last_line_without_newline_is_read() {
        let mut transport =
            StdioTransport::new(Cursor::new(b"{\"id\":1}".to_vec()), Vec::new());
        assert_eq!(
            transport.read_line().await.expect("read"),
            Some("{\"id\":1}".to_string())
        );
    }

    #[tokio::test]
    async fn invalid_utf8_line_does_not_poison_the_stream() {
        let input = b"\xff\xfe junk\n{}\n";
        let mut transport = StdioTransport::new(Cursor::new(input.to_vec()), Vec::new());

        let err = transport.read_line().await.expect_err("not utf8");
        assert!(matches!(err, TransportError::Utf8(_)));
        assert_eq!(transport.read_line().await.expect("next"), Some("{}".to_string()));
    }

    #[tokio::test]
    async fn write_appends_newline() {
        let mut transport = StdioTransport::new(Cursor::new(Vec::<u8>::new()), Vec::new());

        transport.write_line("{\"ok\":true}").await.expect("write");
        transport.write_line("{\"ok\":false}").await.expect("write");

        let output = String::from_utf8(transport.writer.clone()).expect("utf8");
        assert_eq!(output, "{\"ok\":true}\n{\"ok\":false}\n");
    }
}
