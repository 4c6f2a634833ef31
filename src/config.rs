//! Demo configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the form is shown.
//! The library itself needs no configuration; only the `login-form` binary and its
//! [`crate::infrastructure::StaticAuthenticator`] read these values.
//!
//! ```bash
//! export LOGIN_DEMO_USERNAME="demo"
//! export LOGIN_DEMO_PASSWORD="password123"
//! export LOGIN_AUTH_DELAY_MS="500"
//! ```
//!
//! ## Required Variables
//!
//! - `LOGIN_DEMO_PASSWORD` - Password of the demo user (at least 6 characters)
//!
//! ## Optional Variables
//!
//! - `LOGIN_DEMO_USERNAME` - Username of the demo user (default: `demo`)
//! - `LOGIN_AUTH_DELAY_MS` - Simulated authentication latency (default: 500, max: 60000)
//! - `LOGIN_MAX_ATTEMPTS` - Attempts before the demo gives up (default: 3, range: 1-20)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::entities::{password_error, username_error};

/// Demo configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub demo_username: String,
    pub demo_password: String,
    pub auth_delay_ms: u64,
    pub max_attempts: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOGIN_DEMO_PASSWORD` is missing.
    pub fn from_env() -> Result<Self> {
        let demo_username = env::var("LOGIN_DEMO_USERNAME").unwrap_or_else(|_| "demo".to_string());
        let demo_password =
            env::var("LOGIN_DEMO_PASSWORD").context("LOGIN_DEMO_PASSWORD must be set")?;

        let auth_delay_ms = env::var("LOGIN_AUTH_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        let max_attempts = env::var("LOGIN_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            demo_username,
            demo_password,
            auth_delay_ms,
            max_attempts,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// The demo user must itself pass the form's field rules, otherwise nobody
    /// could ever log in through the form.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the demo username is blank or the demo password is too short
    /// - `auth_delay_ms` exceeds 60000
    /// - `max_attempts` is not between 1 and 20
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if let Some(err) = username_error(&self.demo_username) {
            anyhow::bail!("LOGIN_DEMO_USERNAME is invalid: {err}");
        }

        if let Some(err) = password_error(&self.demo_password) {
            anyhow::bail!("LOGIN_DEMO_PASSWORD is invalid: {err}");
        }

        if self.auth_delay_ms > 60_000 {
            anyhow::bail!(
                "LOGIN_AUTH_DELAY_MS is too large (max: 60000), got {}",
                self.auth_delay_ms
            );
        }

        if self.max_attempts == 0 || self.max_attempts > 20 {
            anyhow::bail!(
                "LOGIN_MAX_ATTEMPTS must be between 1 and 20, got {}",
                self.max_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Applies command line overrides and validates the result again.
    ///
    /// # Errors
    ///
    /// Returns an error if an override breaks one of the [`Config::validate`] rules.
    pub fn apply_overrides(&mut self, max_attempts: Option<u32>) -> Result<()> {
        if let Some(max_attempts) = max_attempts {
            self.max_attempts = max_attempts;
        }
        self.validate()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Demo user: {}", self.demo_username);
        tracing::info!("  Demo password: {}", mask_secret(&self.demo_password));
        tracing::info!("  Auth delay: {} ms", self.auth_delay_ms);
        tracing::info!("  Max attempts: {}", self.max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("demo_username", &self.demo_username)
            .field("demo_password", &mask_secret(&self.demo_password))
            .field("auth_delay_ms", &self.auth_delay_ms)
            .field("max_attempts", &self.max_attempts)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Masks a secret for logging, keeping only its length visible.
fn mask_secret(secret: &str) -> String {
    format!("*** ({} chars)", secret.chars().count())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
