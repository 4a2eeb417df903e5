//! Immutable, ordered collection of tools.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use tempo_types::{DiagnosticError, ErrorKind, TempoError, ToolDescriptor};

use crate::clock::Clock;
use crate::handler::ToolHandler;
use crate::tools::time::TimeAndDateTool;

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two tools were registered under the same name.
    #[error("duplicate tool name: {name}")]
    Duplicate { name: String },
    /// A tool descriptor failed validation.
    #[error("invalid tool descriptor: {0}")]
    InvalidDescriptor(#[from] TempoError),
}

impl From<RegistryError> for TempoError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::InvalidDescriptor(inner) => inner,
            other => TempoError::new(ErrorKind::InvalidInput, other.to_string()),
        }
    }
}

impl DiagnosticError for RegistryError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Duplicate { name } => Some(format!("'{name}' is registered more than once.")),
            Self::InvalidDescriptor(_) => None,
        }
    }
}

/// The set of tools exposed by the server.
///
/// Fixed at construction: there is no way to add or remove a tool
/// afterwards, so every `tools/list` sees the same contents.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Builds a registry from tools in the order they should be listed.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Duplicate` if two tools share a name.
    pub fn new(tools: Vec<Arc<dyn ToolHandler>>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for tool in &tools {
            let name = tool.descriptor().name.as_str();
            if !seen.insert(name.to_string()) {
                return Err(RegistryError::Duplicate {
                    name: name.to_string(),
                });
            }
        }
        Ok(Self { tools })
    }

    /// The registry served by default: `get_time_and_date` only.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in descriptor is invalid.
    pub fn builtin(clock: Arc<dyn Clock>) -> Result<Self, RegistryError> {
        let time: Arc<dyn ToolHandler> = Arc::new(TimeAndDateTool::new(clock)?);
        Self::new(vec![time])
    }

    /// Looks up a tool by exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools
            .iter()
            .find(|t| t.descriptor().name.as_str() == name)
    }

    /// Descriptors of every tool, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.descriptors().map(|d| d.name.as_str()))
            .finish()
    }
}
