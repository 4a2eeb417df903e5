//! Transport-layer error types.

use tempo_types::{DiagnosticError, ErrorKind, TempoError};
use thiserror::Error;

/// Errors from the stdio transport layer.
///
/// `Utf8` is answered in-band by the server loop; every other variant ends
/// it.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A line from the client was not valid UTF-8.
    #[error("line is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Failed to read from stdin.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),
    /// Failed to write to stdout.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
    /// A response could not be serialized.
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<TransportError> for TempoError {
    fn from(e: TransportError) -> Self {
        let kind = match &e {
            TransportError::Utf8(_) => ErrorKind::InvalidInput,
            TransportError::Encode(_) => ErrorKind::Internal,
            TransportError::Read(_) | TransportError::Write(_) => ErrorKind::Transport,
        };
        TempoError::new(kind, e.to_string())
    }
}

impl DiagnosticError for TransportError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Utf8(_) => Some("The client sent bytes that are not UTF-8 text.".into()),
            Self::Read(_) => Some("The client's end of stdin failed unexpectedly.".into()),
            Self::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                Some("The client closed stdout before reading the response.".into())
            }
            Self::Write(_) => Some("Responses could not be written to stdout.".into()),
            Self::Encode(_) => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::Read(_) | Self::Write(_) => Some(
                "Launch tempo from an MCP client that keeps stdin/stdout open, e.g. `tempo serve`."
                    .into(),
            ),
            Self::Utf8(_) | Self::Encode(_) => None,
        }
    }
}
