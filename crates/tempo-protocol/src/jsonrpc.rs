//! JSON-RPC 2.0 envelopes carried over the stdio transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Value of the `jsonrpc` member in every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Request id: a number or a string, echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

/// A call that expects exactly one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Creates a request for `method`.
    pub fn new(id: RequestId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// A one-way message; it has no `id` and is never answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcNotification {
    /// Creates a notification for `method`.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// A successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    /// Id of the request being answered.
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    /// Creates a success response.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

/// Error member of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    /// Structured detail, e.g. the offending tool name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A failed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    /// Id of the request being answered.
    pub id: RequestId,
    pub error: JsonRpcError,
}

impl JsonRpcErrorResponse {
    /// Creates an error response without data.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        }
    }

    /// Attaches structured data to the error object.
    pub fn with_data(mut self, data: Value) -> Self {
        self.error.data = Some(data);
        self
    }
}

/// One line read from the client, classified by the presence of `id`.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
}

/// Why a line could not be turned into an [`IncomingMessage`].
#[derive(Debug, Error)]
pub enum MessageError {
    /// The text is not JSON at all.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
    /// Valid JSON, but not a well-formed request or notification.
    #[error("invalid request: {source}")]
    Invalid {
        /// The request id, when it could still be read.
        id: Option<RequestId>,
        #[source]
        source: serde_json::Error,
    },
}

impl MessageError {
    /// JSON-RPC error code to answer with.
    pub fn code(&self) -> i32 {
        match self {
            Self::Parse(_) => error_codes::PARSE_ERROR,
            Self::Invalid { .. } => error_codes::INVALID_REQUEST,
        }
    }

    /// Id the error response should carry, if the client sent a usable one.
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            Self::Parse(_) => None,
            Self::Invalid { id, .. } => id.as_ref(),
        }
    }
}

impl IncomingMessage {
    /// Parses a single JSON-RPC message.
    ///
    /// # Errors
    ///
    /// `MessageError::Parse` if the text is not JSON, `MessageError::Invalid`
    /// if it lacks the members its kind needs.
    pub fn parse(text: &str) -> Result<Self, MessageError> {
        let value: Value = serde_json::from_str(text).map_err(MessageError::Parse)?;
        match value.get("id") {
            Some(raw) => {
                let id = RequestId::deserialize(raw).ok();
                serde_json::from_value(value)
                    .map(Self::Request)
                    .map_err(|source| MessageError::Invalid { id, source })
            }
            None => serde_json::from_value(value)
                .map(Self::Notification)
                .map_err(|source| MessageError::Invalid { id: None, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_by_id() {
        let req = IncomingMessage::parse(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#)
            .expect("request");
        assert!(matches!(req, IncomingMessage::Request(r) if r.method == "ping"));

        let note =
            IncomingMessage::parse(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .expect("notification");
        assert!(matches!(note, IncomingMessage::Notification(_)));
    }

    #[test]
    fn request_without_method_is_invalid_and_keeps_id() {
        let err = IncomingMessage::parse(r#"{"jsonrpc":"2.0","id":9}"#).expect_err("no method");
        assert_eq!(err.code(), error_codes::INVALID_REQUEST);
        assert_eq!(err.id(), Some(&RequestId::Number(9)));
    }

    #[test]
    fn null_id_is_invalid_without_id() {
        let err = IncomingMessage::parse(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#)
            .expect_err("null id");
        assert_eq!(err.code(), error_codes::INVALID_REQUEST);
        assert!(err.id().is_none());
    }

    #[test]
    fn json_that_is_not_an_object_is_invalid() {
        let err = IncomingMessage::parse("42").expect_err("number");
        assert_eq!(err.code(), error_codes::INVALID_REQUEST);
    }

    #[test]
    fn non_json_is_parse_error() {
        let err = IncomingMessage::parse("hello").expect_err("garbage");
        assert_eq!(err.code(), error_codes::PARSE_ERROR);
        assert!(err.id().is_none());
        assert!(err.to_string().starts_with("parse error"));
    }
}
