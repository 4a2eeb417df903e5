//! CLI command definitions.

pub mod call;
pub mod list;
pub mod serve;
