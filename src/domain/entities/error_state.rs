//! Per-field error messages.

use serde::Serialize;
use std::collections::BTreeMap;

use super::Field;

/// Mapping from [`Field`] to a human-readable message.
///
/// A field with no entry has no error. Empty messages are never stored, so
/// `get` returning `Some` always means there is something to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorState {
    messages: BTreeMap<Field, String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    /// Sets the message for `field`. An empty message clears it instead.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.messages.remove(&field);
        } else {
            self.messages.insert(field, message);
        }
    }

    /// Removes the message for `field`, returning it if one was set.
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.messages.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for ErrorState {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut state = ErrorState::new();
        for (field, message) in iter {
            state.set(field, message);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_means_no_error() {
        let mut errors = ErrorState::new();
        errors.set(Field::Username, "Username is required");
        errors.set(Field::Username, "");

        assert!(!errors.has(Field::Username));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_clear_returns_previous_message() {
        let mut errors: ErrorState = [(Field::Server, "Invalid credentials")]
            .into_iter()
            .collect();

        assert_eq!(
            errors.clear(Field::Server),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(errors.clear(Field::Server), None);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let errors: ErrorState = [
            (Field::Password, "Password is required"),
            (Field::Username, "Username is required"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "Username is required",
                "password": "Password is required",
            })
        );
    }
}
