//! Layering tests for `load_config`, run inside figment jails so file and
//! environment changes stay isolated.

use figment::Jail;

use tempo_config::{load_config, ConfigError, LogFormat, LOG_LEVEL_ENV};
use tempo_types::DiagnosticError;

#[test]
fn file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "tempo.toml",
            r#"
                [server]
                name = "clock"

                [logging]
                format = "json"
            "#,
        )?;
        jail.set_env(LOG_LEVEL_ENV, "info");

        let config = load_config(Some("tempo.toml")).expect("load");
        assert_eq!(config.server.name, "clock");
        assert_eq!(config.server.version, "0.0.1");
        assert_eq!(config.logging.format, LogFormat::Json);
        Ok(())
    });
}

#[test]
fn prefixed_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("tempo.toml", "[server]\nname = \"from-file\"\n")?;
        jail.set_env("TEMPO_SERVER_NAME", "from-env");

        let config = load_config(Some("tempo.toml")).expect("load");
        assert_eq!(config.server.name, "from-env");
        Ok(())
    });
}

#[test]
fn log_level_env_overrides_everything() {
    Jail::expect_with(|jail| {
        jail.create_file("tempo.toml", "[logging]\nlevel = \"warn\"\n")?;
        jail.set_env("TEMPO_LOGGING_LEVEL", "error");
        jail.set_env(LOG_LEVEL_ENV, "trace");

        let config = load_config(Some("tempo.toml")).expect("load");
        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn missing_file_is_reported() {
    Jail::expect_with(|_jail| {
        let err = load_config(Some("absent.toml")).expect_err("missing");
        assert!(matches!(err, ConfigError::NotFound { ref path } if path == "absent.toml"));
        assert!(err.fix().expect("fix").contains("--config"));
        Ok(())
    });
}

#[test]
fn unknown_key_in_file_fails() {
    Jail::expect_with(|jail| {
        jail.create_file("tempo.toml", "[server]\nport = 8080\n")?;

        let err = load_config(Some("tempo.toml")).expect_err("unknown key");
        assert!(matches!(err, ConfigError::Load(_)));
        assert!(err.to_string().starts_with("configuration error"));
        Ok(())
    });
}

#[test]
fn no_file_uses_defaults_and_env() {
    Jail::expect_with(|jail| {
        jail.set_env(LOG_LEVEL_ENV, "info");

        let config = load_config(None).expect("load");
        assert_eq!(config.server.name, "time-server");
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}
