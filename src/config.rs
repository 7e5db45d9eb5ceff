//! Runtime configuration loaded from the process environment.
//!
//! Reads `APP_ENV` and `PORT`, normalizing them into an [`AppConfig`] value
//! handed to the server binary and the HTTP adapter. Missing variables fall
//! back to development defaults; a malformed `PORT` is a typed error rather
//! than a panic.

use std::env;
use thiserror::Error;

/// Deployment environment the process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development (the default).
    Development,
    /// Production deployment.
    Production,
    /// Automated test runs.
    Test,
}

impl Environment {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    /// Parses an `APP_ENV` value, defaulting to development.
    ///
    /// `prod` is accepted as an alias for `production`; any unrecognized
    /// value means development.
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "test" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The `PORT` variable is not a TCP port number.
    #[error("invalid PORT value '{0}', expected an integer in 1..=65535")]
    InvalidPort(String),
}

/// Runtime configuration for the server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Active deployment environment.
    pub env: Environment,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Whether error responses may carry stack detail.
    pub show_error_stack: bool,
}

impl AppConfig {
    /// Listen port used when `PORT` is unset.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Loads configuration from `APP_ENV` and `PORT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set to something
    /// other than a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_value = env::var("APP_ENV").unwrap_or_default();
        let port_value = env::var("PORT").ok();
        Self::from_values(&env_value, port_value.as_deref())
    }

    /// Builds configuration from raw variable values.
    fn from_values(env_value: &str, port_value: Option<&str>) -> Result<Self, ConfigError> {
        let environment = Environment::from_env_value(env_value);
        let port = match port_value.map(str::trim) {
            None | Some("") => Self::DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or_else(|| ConfigError::InvalidPort(raw.to_owned()))?,
        };

        Ok(Self {
            env: environment,
            port,
            show_error_stack: environment != Environment::Production,
        })
    }
}
