//! # tempo-types
//!
//! Domain types for the tempo time server.
//! This crate contains pure data types with no I/O and no async
//! (serde is the only external dependency).

pub mod error;
pub mod tool;

// Re-exports for convenience.
pub use error::{DiagnosticError, ErrorKind, TempoError};
pub use tool::{ToolDescriptor, ToolName};
