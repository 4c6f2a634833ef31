//! Authenticator for a single, statically configured user.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::domain::Authenticator;
use crate::error::AuthError;

/// Message returned for any username/password mismatch.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Accepts exactly one username/password pair after a simulated delay.
///
/// Only the SHA-256 digest of the password is kept in memory. The delay
/// stands in for network latency so the busy state is visible in the demo.
pub struct StaticAuthenticator {
    username: String,
    password_hash: String,
    delay: Duration,
}

impl StaticAuthenticator {
    /// Creates an authenticator for the given user.
    pub fn new(username: impl Into<String>, password: &str, delay: Duration) -> Self {
        Self {
            username: username.into(),
            password_hash: hash_password(password),
            delay,
        }
    }

    /// Creates an authenticator for the demo user from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.demo_username.clone(),
            &config.demo_password,
            Duration::from_millis(config.auth_delay_ms),
        )
    }
}

/// Hex-encoded SHA-256 digest of a password.
fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        // hash first so both branches do the same work
        let password_ok = hash_password(password) == self.password_hash;
        if username == self.username && password_ok {
            Ok(())
        } else {
            debug!(username, "Credentials did not match the configured user");
            Err(AuthError::new(INVALID_CREDENTIALS))
        }
    }
}
