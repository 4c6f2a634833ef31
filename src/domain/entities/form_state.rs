//! User-entered credentials and the local validation rules applied to them.

use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

use super::{ErrorState, Field};
use crate::error::FieldError;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Current text of the username and password inputs.
///
/// Both start empty and change only through field updates. `Debug` output
/// never includes the password.
#[derive(Clone, Default, PartialEq, Eq, Validate)]
pub struct FormState {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl FormState {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Current value of an input field. `Server` has no value.
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::Password => Some(&self.password),
            Field::Server => None,
        }
    }

    /// Replaces the value of an input field. Returns `false` for `Server`.
    pub fn set_value(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::Server => return false,
        }
        true
    }

    /// Runs the field rules and collects one message per failing field.
    ///
    /// The returned map only ever contains `username` and `password` keys.
    pub fn field_errors(&self) -> ErrorState {
        let Err(errors) = self.validate() else {
            return ErrorState::new();
        };

        let mut state = ErrorState::new();
        for (name, failures) in errors.field_errors() {
            let Ok(field) = name.parse::<Field>() else {
                continue;
            };
            if let Some(message) = failures.first().and_then(|e| e.message.as_ref()) {
                state.set(field, message.to_string());
            }
        }
        state
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Rule for the username input: must contain something besides whitespace.
pub fn username_error(username: &str) -> Option<FieldError> {
    username
        .trim()
        .is_empty()
        .then_some(FieldError::UsernameRequired)
}

/// Rule for the password input: required, then a minimum length.
///
/// Whitespace counts toward the length; nothing is trimmed.
pub fn password_error(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::PasswordRequired)
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        Some(FieldError::PasswordTooShort)
    } else {
        None
    }
}

fn to_validation_error(error: FieldError) -> ValidationError {
    ValidationError::new(error.code()).with_message(Cow::Owned(error.to_string()))
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    username_error(username).map_or(Ok(()), |e| Err(to_validation_error(e)))
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    password_error(password).map_or(Ok(()), |e| Err(to_validation_error(e)))
}
