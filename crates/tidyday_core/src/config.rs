//! Core configuration.
//!
//! # Responsibility
//! - Describe where and how the task list is persisted.
//! - Parse optional JSON overrides with defaults for every field.
//!
//! # Invariants
//! - A validated config always has a non-empty cookie name, an absolute
//!   cookie path and a positive retention window.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the task list cookie.
pub const DEFAULT_COOKIE_NAME: &str = "todos";
/// Application-wide cookie scope.
pub const DEFAULT_COOKIE_PATH: &str = "/";
/// One year, in seconds.
pub const DEFAULT_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Persistence and logging settings for the task list core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    pub max_age_secs: u32,
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            log_level: default_log_level().to_string(),
        }
    }
}

impl CoreConfig {
    /// Parses a JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown fields.
    /// - `ConfigError::Invalid` when `validate` fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.trim().is_empty() {
            return Err(ConfigError::Invalid("cookie_name cannot be empty".to_string()));
        }
        if self.cookie_name.contains(['=', ';']) {
            return Err(ConfigError::Invalid(format!(
                "cookie_name `{}` must not contain `=` or `;`",
                self.cookie_name
            )));
        }
        if !self.cookie_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "cookie_path must start with `/`, got `{}`",
                self.cookie_path
            )));
        }
        if self.max_age_secs == 0 {
            return Err(ConfigError::Invalid(
                "max_age_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
