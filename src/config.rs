//! Runtime configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `TAREAS_HOST` | `127.0.0.1` | Interface the HTTP server binds to |
//! | `TAREAS_PORT` | `8080` | Port the HTTP server binds to |
//! | `DATABASE_URL` | unset | `PostgreSQL` URL; tasks are kept in memory when unset |
//! | `TAREAS_DB_POOL_SIZE` | `8` | Maximum pooled database connections |
//! | `TAREAS_LOG_FORMAT` | `text` | `text` or `json` log lines |
//! | `TAREAS_MAX_TITLE_LENGTH` | `255` | Maximum title length in characters, at most 255 |
//! | `TAREAS_ALLOW_STATUS_RESUBMISSION` | `false` | Accept resubmitting the current status as a no-op |

use crate::task::{domain::TaskTitle, validation::ValidationConfig};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Why the value was refused.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            name,
            reason: reason.to_string(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// `PostgreSQL` connection URL; `None` selects the in-memory repository.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub db_pool_size: u32,
    /// Log line format.
    pub log_format: LogFormat,
    /// Validation limits and policies.
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            database_url: None,
            db_pool_size: 8,
            log_format: LogFormat::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but
    /// cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas::config::{Config, LogFormat};
    ///
    /// let config = Config::from_lookup(|name| match name {
    ///     "TAREAS_PORT" => Some("3000".to_owned()),
    ///     "TAREAS_LOG_FORMAT" => Some("json".to_owned()),
    ///     _ => None,
    /// })
    /// .expect("valid configuration");
    ///
    /// assert_eq!(config.port, 3000);
    /// assert_eq!(config.log_format, LogFormat::Json);
    /// assert!(config.database_url.is_none());
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let db_pool_size = parse_or(&read, "TAREAS_DB_POOL_SIZE", defaults.db_pool_size)?;
        if db_pool_size == 0 {
            return Err(ConfigError::invalid(
                "TAREAS_DB_POOL_SIZE",
                "must be at least 1",
            ));
        }
        let max_title_length = parse_or(
            &read,
            "TAREAS_MAX_TITLE_LENGTH",
            defaults.validation.max_title_length,
        )?;
        // The title column is as wide as the default limit.
        if !(1..=TaskTitle::MAX_LENGTH).contains(&max_title_length) {
            return Err(ConfigError::invalid(
                "TAREAS_MAX_TITLE_LENGTH",
                format!("must be between 1 and {}", TaskTitle::MAX_LENGTH),
            ));
        }

        Ok(Self {
            host: read("TAREAS_HOST").unwrap_or(defaults.host),
            port: parse_or(&read, "TAREAS_PORT", defaults.port)?,
            database_url: read("DATABASE_URL"),
            db_pool_size,
            log_format: parse_or(&read, "TAREAS_LOG_FORMAT", defaults.log_format)?,
            validation: ValidationConfig {
                max_title_length,
                allow_status_resubmission: parse_or(
                    &read,
                    "TAREAS_ALLOW_STATUS_RESUBMISSION",
                    defaults.validation.allow_status_resubmission,
                )?,
            },
        })
    }

    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(
    read: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    read(name).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|err| ConfigError::invalid(name, err))
    })
}
