//! Error types shared by the form controller and its collaborators.

use serde::Serialize;
use thiserror::Error;

/// Message shown in the server banner when a rejection carries no text.
pub const DEFAULT_AUTH_FAILURE: &str = "Login failed. Please try again.";

/// Local validation failure for a single field.
///
/// The `Display` output is the exact message rendered next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

impl FieldError {
    /// Machine-readable code, used as the `validator` error code.
    pub fn code(self) -> &'static str {
        match self {
            FieldError::UsernameRequired => "username_required",
            FieldError::PasswordRequired => "password_required",
            FieldError::PasswordTooShort => "password_too_short",
        }
    }
}

/// Rejection returned by an [`crate::domain::Authenticator`].
///
/// Displays as [`AuthError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.user_message())]
pub struct AuthError {
    message: Option<String>,
}

impl AuthError {
    /// Rejection with a human-readable message, e.g. "Invalid credentials".
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Rejection without any message.
    pub fn unspecified() -> Self {
        Self { message: None }
    }

    /// The raw message supplied by the authenticator, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Text for the server banner, falling back to [`DEFAULT_AUTH_FAILURE`]
    /// when the message is missing or empty.
    pub fn user_message(&self) -> &str {
        match self.message.as_deref() {
            Some(msg) if !msg.is_empty() => msg,
            _ => DEFAULT_AUTH_FAILURE,
        }
    }
}

/// Misuse of the controller API by a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("field '{0}' cannot be edited")]
    ReadOnlyField(&'static str),
}
