//! Synchronous state machine behind the login form.
//!
//! [`LoginForm`] owns the form values, the error map and the submission
//! status. Every transition is a plain method call, so the whole flow can be
//! driven without a runtime; [`super::FormController`] only adds the await on
//! the authenticator in between [`LoginForm::begin_submit`] and
//! [`LoginForm::complete_submit`].

use serde::Serialize;

use crate::domain::entities::{ErrorState, Field, FormState, SubmissionStatus};
use crate::error::{AuthError, FormError};

/// Result of asking the form to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; field errors were written, status stays `Idle`.
    Invalid,
    /// A submission is already in flight; nothing changed.
    Busy,
    /// Status is now `Submitting`; pass these credentials to the authenticator.
    Ready(FormState),
}

/// How a call to submit ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Field validation failed, the authenticator was not called.
    Invalid,
    /// Ignored because another submission was still pending.
    Ignored,
    /// The authenticator accepted the credentials.
    Authenticated,
    /// The authenticator rejected the credentials with this banner message.
    Rejected(String),
}

impl SubmitOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SubmitOutcome::Authenticated)
    }
}

/// Form values, errors and submission status of one mounted login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    form: FormState,
    errors: ErrorState,
    status: SubmissionStatus,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Stores a new value for an input and drops that input's error.
    ///
    /// Only the edited field's error is cleared; other field errors and the
    /// server banner stay until the next validation pass.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ReadOnlyField`] for [`Field::Server`].
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if !self.form.set_value(field, value.into()) {
            return Err(FormError::ReadOnlyField(field.as_str()));
        }
        self.errors.clear(field);
        Ok(())
    }

    /// Same as [`Self::update_field`] for a raw field name as sent by a renderer.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for names other than `username`,
    /// `password` or `server`, and [`FormError::ReadOnlyField`] for `server`.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.update_field(field, value)
    }

    /// Evaluates the field rules without touching any state.
    pub fn check(&self) -> (ErrorState, bool) {
        let errors = self.form.field_errors();
        let valid = errors.is_empty();
        (errors, valid)
    }

    /// Evaluates the field rules and replaces the whole error map with the result.
    ///
    /// A server error left over from an earlier attempt is discarded here too.
    pub fn validate(&mut self) -> (ErrorState, bool) {
        let (errors, valid) = self.check();
        self.errors = errors.clone();
        (errors, valid)
    }

    /// Validates and, if the form is clean, moves to `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.status.is_submitting() {
            return SubmitStart::Busy;
        }
        let (_, valid) = self.validate();
        if !valid {
            return SubmitStart::Invalid;
        }
        self.status = SubmissionStatus::Submitting;
        SubmitStart::Ready(self.form.clone())
    }

    /// Applies the authenticator's verdict and returns to `Idle`.
    pub fn complete_submit(&mut self, result: Result<(), AuthError>) -> SubmitOutcome {
        self.status = SubmissionStatus::Idle;
        match result {
            Ok(()) => SubmitOutcome::Authenticated,
            Err(err) => {
                let message = err.user_message().to_string();
                self.errors.set(Field::Server, message.clone());
                SubmitOutcome::Rejected(message)
            }
        }
    }

    /// Returns to `Idle` without a verdict, e.g. when the pending call was dropped.
    pub fn abort_submit(&mut self) {
        self.status = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DEFAULT_AUTH_FAILURE;

    fn filled(username: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.update_field(Field::Username, username).unwrap();
        form.update_field(Field::Password, password).unwrap();
        form
    }

    #[test]
    fn test_initial_state() {
        let form = LoginForm::new();

        assert_eq!(form.form().username, "");
        assert_eq!(form.form().password, "");
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_blank_usernames_are_invalid() {
        for username in ["", " ", "   ", "\t\n"] {
            let mut form = filled(username, "password123");
            let (errors, valid) = form.validate();

            assert!(!valid, "username {username:?}");
            assert_eq!(errors.get(Field::Username), Some("Username is required"));
            assert_eq!(form.errors(), &errors);
        }
    }

    #[test]
    fn test_password_rules() {
        let cases = [
            ("", Some("Password is required")),
            ("1", Some("Password must be at least 6 characters")),
            ("12345", Some("Password must be at least 6 characters")),
            ("123456", None),
            ("a longer passphrase", None),
        ];

        for (password, expected) in cases {
            let mut form = filled("testuser", password);
            let (errors, valid) = form.validate();

            assert_eq!(errors.get(Field::Password), expected, "password {password:?}");
            assert_eq!(valid, expected.is_none());
        }
    }

    #[test]
    fn test_update_clears_only_that_field() {
        let mut form = LoginForm::new();
        form.validate();
        assert!(form.errors().has(Field::Username));
        assert!(form.errors().has(Field::Password));

        // even an empty value clears the error until the next submit
        form.update_field(Field::Username, "").unwrap();

        assert!(!form.errors().has(Field::Username));
        assert_eq!(form.errors().get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_update_does_not_clear_server_error() {
        let mut form = filled("testuser", "password123");
        assert!(matches!(form.begin_submit(), SubmitStart::Ready(_)));
        form.complete_submit(Err(AuthError::new("Invalid credentials")));

        form.update_field(Field::Password, "password124").unwrap();

        assert_eq!(form.errors().get(Field::Server), Some("Invalid credentials"));
    }

    #[test]
    fn test_update_by_name() {
        let mut form = LoginForm::new();

        form.update_field_by_name("username", "alice").unwrap();
        assert_eq!(form.form().username, "alice");

        assert_eq!(
            form.update_field_by_name("email", "x"),
            Err(FormError::UnknownField("email".to_string()))
        );
        assert_eq!(
            form.update_field_by_name("server", "x"),
            Err(FormError::ReadOnlyField("server"))
        );
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut form = filled("testuser", "123");

        assert_eq!(form.begin_submit(), SubmitStart::Invalid);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(
            form.errors().get(Field::Password),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_valid_submit_hands_out_credentials() {
        let mut form = filled("testuser", "password123");

        let SubmitStart::Ready(credentials) = form.begin_submit() else {
            panic!("expected the form to be ready");
        };

        assert_eq!(credentials, FormState::new("testuser", "password123"));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_submit_while_submitting_is_busy() {
        let mut form = filled("testuser", "password123");
        form.begin_submit();
        // make the form invalid; a busy submit must not revalidate it
        form.update_field(Field::Username, "").unwrap();

        assert_eq!(form.begin_submit(), SubmitStart::Busy);
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_rejection_sets_server_error() {
        let mut form = filled("testuser", "password123");
        form.begin_submit();

        let outcome = form.complete_submit(Err(AuthError::new("Invalid credentials")));

        assert_eq!(outcome, SubmitOutcome::Rejected("Invalid credentials".to_string()));
        assert_eq!(form.errors().get(Field::Server), Some("Invalid credentials"));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let mut form = filled("testuser", "password123");
        form.begin_submit();

        form.complete_submit(Err(AuthError::unspecified()));

        assert_eq!(form.errors().get(Field::Server), Some(DEFAULT_AUTH_FAILURE));
    }

    #[test]
    fn test_success_leaves_no_errors() {
        let mut form = filled("testuser", "password123");
        form.begin_submit();

        assert_eq!(form.complete_submit(Ok(())), SubmitOutcome::Authenticated);
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_revalidation_discards_stale_server_error() {
        let mut form = filled("testuser", "password123");
        form.begin_submit();
        form.complete_submit(Err(AuthError::new("Invalid credentials")));

        form.update_field(Field::Password, "123").unwrap();
        assert_eq!(form.begin_submit(), SubmitStart::Invalid);

        assert!(!form.errors().has(Field::Server));
        assert!(form.errors().has(Field::Password));
    }

    #[test]
    fn test_check_is_pure() {
        let form = LoginForm::new();

        let (errors, valid) = form.check();

        assert!(!valid);
        assert_eq!(errors.len(), 2);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_abort_returns_to_idle_without_error() {
        let mut form = filled("testuser", "password123");
        form.begin_submit();

        form.abort_submit();

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = SubmitOutcome::Rejected("Invalid credentials".into());
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "rejected", "message": "Invalid credentials"})
        );
    }
}
