use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{
    storage::{is_valid_key, json_backend::write_atomic},
    utils::{
        app_data_dir, ensure_dir,
        paths::{config_file_in, telemetry_file_in},
    },
};

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_HISTORY_KEY: &str = "nichiwari_history";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history_limit: usize,
    pub history_key: String,
    pub telemetry_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            history_key: DEFAULT_HISTORY_KEY.into(),
            telemetry_enabled: false,
            telemetry_path: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid(
                "history_limit must be at least 1".into(),
            ));
        }
        if !is_valid_key(&self.history_key) {
            return Err(ConfigError::Invalid(format!(
                "history_key `{}` may only contain lowercase letters, digits, `_` and `-`",
                self.history_key
            )));
        }
        Ok(())
    }

    /// Telemetry file, or `None` when telemetry is disabled.
    pub fn telemetry_target(&self, base: &Path) -> Option<PathBuf> {
        if !self.telemetry_enabled {
            return None;
        }
        Some(
            self.telemetry_path
                .clone()
                .unwrap_or_else(|| telemetry_file_in(base)),
        )
    }

    /// Applies a `key value` pair as typed at the CLI.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match key {
            "history_limit" => {
                next.history_limit = value.parse().map_err(|_| {
                    ConfigError::Invalid(format!("`{value}` is not a positive number"))
                })?;
            }
            "history_key" => next.history_key = value.to_string(),
            "telemetry_enabled" => {
                next.telemetry_enabled = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => {
                        return Err(ConfigError::Invalid(format!(
                            "`{value}` is not a boolean"
                        )))
                    }
                };
            }
            "telemetry_path" => {
                next.telemetry_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unknown configuration key `{other}`"
                )))
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Loads and saves [`Config`] as JSON under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(format!("json.{TMP_SUFFIX}"));
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
