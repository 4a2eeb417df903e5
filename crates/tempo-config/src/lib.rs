//! # tempo-config
//!
//! Configuration management for tempo.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, LOG_LEVEL_ENV};
pub use schema::{LogFormat, LoggingConfig, ServerConfig, TempoConfig};
