//! Configuration loader (defaults + file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use tempo_types::{DiagnosticError, ErrorKind, TempoError};

use crate::schema::TempoConfig;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The explicitly requested config file does not exist.
    #[error("config file not found: {path}")]
    NotFound { path: String },
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

impl From<ConfigError> for TempoError {
    fn from(e: ConfigError) -> Self {
        TempoError::new(ErrorKind::Config, e.to_string())
    }
}

impl DiagnosticError for ConfigError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::NotFound { path } => Some(format!("Nothing exists at '{path}'.")),
            Self::Load(_) => Some(
                "A config file or TEMPO_* variable holds an unknown key or a value of the wrong type."
                    .into(),
            ),
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::NotFound { .. } => Some("Pass an existing file: tempo --config tempo.toml".into()),
            Self::Load(_) => Some(
                "Only [server] name/version and [logging] level/format are recognised.".into(),
            ),
        }
    }
}

/// Builds the layered figment without extracting it:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`TEMPO_` prefix, `_` as section separator)
/// 4. `LOG_LEVEL`, mapped onto `logging.level`
pub fn figment(config_path: Option<&str>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(TempoConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::prefixed("TEMPO_").split("_"))
        .merge(
            Env::raw()
                .only(&[LOG_LEVEL_ENV])
                .map(|_| "logging.level".into()),
        )
}

/// Loads configuration by merging all layers.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if `config_path` names a missing file,
/// or `ConfigError::Load` if any layer holds invalid data.
pub fn load_config(config_path: Option<&str>) -> Result<TempoConfig, ConfigError> {
    if let Some(path) = config_path {
        if !std::path::Path::new(path).is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_string(),
            });
        }
    }

    figment(config_path)
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
