//! Built-in tools.

pub mod time;
