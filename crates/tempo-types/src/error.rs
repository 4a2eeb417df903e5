//! The error every tempo layer reports through at the CLI boundary.
//!
//! Layer crates keep their own `thiserror` enums and convert into
//! [`TempoError`] when a failure ends a command. [`DiagnosticError`] is
//! how those enums explain themselves to a human.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What went wrong, independent of the layer that noticed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No tool or method by that name.
    NotFound,
    /// The caller sent something unusable, such as a call without
    /// arguments.
    InvalidInput,
    /// stdin or stdout failed.
    Transport,
    /// A config file or `TEMPO_*` variable was rejected.
    Config,
    Internal,
}

/// A failure classified by [`ErrorKind`], optionally tagged with the step
/// that was running (`loading configuration`, `tempo call <tool>`, ...).
///
/// Displays as `[Kind] message (context)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempoError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: Option<String>,
}

impl TempoError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Names the step that failed. Replaces any earlier context.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// Shorthand for [`ErrorKind::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }
}

impl fmt::Display for TempoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)?;
        match &self.context {
            Some(step) => write!(f, " ({step})"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for TempoError {}

/// Human-facing explanation of an error, printed on stderr by the CLI.
pub trait DiagnosticError {
    /// Likely cause.
    fn hint(&self) -> Option<String> {
        None
    }
    /// A command or change that resolves it.
    fn fix(&self) -> Option<String> {
        None
    }
}
