// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::encoding::EnvelopeEncoding;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_envelope")]
    pub envelope: EnvelopeSettings,
    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeSettings {
    #[serde(default)]
    pub encoding: EnvelopeEncoding,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            envelope: default_envelope(),
            logging: default_logging(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config, loaded once from [`config_path`].
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| load_from(&config_path()))
}

/// `CBC_ENVELOPE_CONFIG` when set, otherwise `cbc-envelope.toml`
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// A missing file means built-in defaults; a broken one is reported and
/// also falls back to defaults.
pub fn load_from(config_path: &str) -> Config {
    if !Path::new(config_path).exists() {
        return Config::default();
    }

    match Config::from_path(config_path) {
        Ok(conf) => conf,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::warn!(path = %config_path, error = %_e, "invalid config, using built-in defaults");
            #[cfg(not(feature = "logging"))]
            eprintln!("Warning: {config_path} is invalid ({_e}), using built-in defaults");
            Config::default()
        }
    }
}
