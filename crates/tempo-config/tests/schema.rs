//! Integration tests for tempo-config schema types.

use tempo_config::schema::{LogFormat, LoggingConfig, ServerConfig, TempoConfig};

#[test]
fn tempo_config_default_values() {
    let config = TempoConfig::default();
    assert_eq!(config.server.name, "time-server");
    assert_eq!(config.server.version, "0.0.1");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Plain);
}

#[test]
fn tempo_config_serde_roundtrip() {
    let config = TempoConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: TempoConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn log_format_is_lowercase() {
    let json = serde_json::to_string(&LogFormat::Json).expect("ser");
    assert_eq!(json, "\"json\"");
    let back: LogFormat = serde_json::from_str("\"plain\"").expect("de");
    assert_eq!(back, LogFormat::Plain);
}

#[test]
fn server_defaults() {
    let s = ServerConfig::default();
    assert_eq!(s.name, "time-server");
}

#[test]
fn logging_default_level() {
    let log = LoggingConfig::default();
    assert_eq!(log.level, "debug");
}

#[test]
fn deny_unknown_fields_rejects_extra_key() {
    let json = r#"{"server":{},"logging":{},"unknown_key":"bad"}"#;
    let result: Result<TempoConfig, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn deny_unknown_fields_rejects_extra_nested_key() {
    let json = r#"{"server":{"port":3000}}"#;
    let result: Result<TempoConfig, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn partial_config_uses_defaults_for_missing() {
    let json = r#"{"logging":{"level":"warn"}}"#;
    let config: TempoConfig = serde_json::from_str(json).expect("parse");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Plain); // default
    assert_eq!(config.server.name, "time-server"); // default
}
