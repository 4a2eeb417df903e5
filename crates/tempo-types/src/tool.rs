//! Tool identity and descriptor types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::error::TempoError;

/// Longest tool name accepted by MCP clients.
const MAX_NAME_LEN: usize = 128;

/// Name under which a tool is exposed to clients.
/// Example: `get_time_and_date`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolName(String);

impl ToolName {
    /// Creates a new `ToolName`, validating the format.
    ///
    /// Names are 1-128 characters drawn from ASCII letters, digits,
    /// `_`, `-` and `.`.
    pub fn new(name: impl Into<String>) -> Result<Self, TempoError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TempoError::invalid_input("tool name cannot be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(TempoError::invalid_input(format!(
                "tool name exceeds {MAX_NAME_LEN} characters"
            )));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
        {
            return Err(TempoError::invalid_input(format!(
                "invalid character '{c}' in tool name"
            )));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ToolName {
    type Error = TempoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        name.0
    }
}

/// Static metadata describing a tool.
///
/// Tools here take no input, so the advertised schema is always an empty
/// object shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: ToolName,
    /// MCP description.
    pub description: String,
}

impl ToolDescriptor {
    pub fn new(name: ToolName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
        }
    }

    /// JSON Schema `inputSchema` advertised by `tools/list`.
    pub fn input_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }
}
