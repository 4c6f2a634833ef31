//! Async driver that connects the login form to an authenticator.

use std::sync::Arc;
use tokio::sync::watch;

use super::login_form::{LoginForm, SubmitOutcome, SubmitStart};
use crate::domain::Authenticator;
use crate::domain::entities::{ErrorState, Field};
use crate::error::{AuthError, FormError};
use crate::view::FormView;

/// Owns one [`LoginForm`] and runs submissions against an [`Authenticator`].
///
/// Every state change is published as a fresh [`FormView`] to subscribers,
/// so a renderer sees `Submitting` while the authenticator is pending.
///
/// # Examples
///
/// ```ignore
/// let mut controller = FormController::new(Arc::new(authenticator));
/// let mut views = controller.subscribe();
///
/// controller.update_field(Field::Username, "testuser")?;
/// controller.update_field(Field::Password, "password123")?;
/// if controller.submit().await.is_authenticated() {
///     // navigate away
/// }
/// ```
pub struct FormController<A: Authenticator + ?Sized> {
    state: LoginForm,
    authenticator: Arc<A>,
    view_tx: watch::Sender<FormView>,
}

impl<A: Authenticator + ?Sized> FormController<A> {
    pub fn new(authenticator: Arc<A>) -> Self {
        let state = LoginForm::new();
        let (view_tx, _) = watch::channel(FormView::render(&state));
        Self {
            state,
            authenticator,
            view_tx,
        }
    }

    /// Receiver that always holds the latest rendered view.
    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.view_tx.subscribe()
    }

    pub fn state(&self) -> &LoginForm {
        &self.state
    }

    pub fn view(&self) -> FormView {
        self.view_tx.borrow().clone()
    }

    /// Stores a new input value and clears that input's error.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ReadOnlyField`] for [`Field::Server`].
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.state.update_field(field, value)?;
        tracing::debug!(field = %field, "Field updated");
        self.publish();
        Ok(())
    }

    /// Forwards a raw `(name, value)` change event from a renderer.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a form field and
    /// [`FormError::ReadOnlyField`] for `server`.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.update_field(field, value)
    }

    /// Runs the field rules and replaces the error map with the result.
    pub fn validate(&mut self) -> (ErrorState, bool) {
        let result = self.state.validate();
        self.publish();
        result
    }

    /// Validates the form and, if it is clean, authenticates.
    ///
    /// Rejections never escape: they become the server error. The status is
    /// back to `Idle` when this returns, and also if the returned future is
    /// dropped or the authenticator panics while pending.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let credentials = match self.state.begin_submit() {
            SubmitStart::Ready(credentials) => credentials,
            SubmitStart::Invalid => {
                tracing::debug!(
                    errors = self.state.errors().len(),
                    "Login form failed validation"
                );
                self.publish();
                return SubmitOutcome::Invalid;
            }
            SubmitStart::Busy => {
                tracing::debug!("Submit ignored, a login attempt is already pending");
                return SubmitOutcome::Ignored;
            }
        };
        self.publish();
        tracing::info!(username = %credentials.username, "Submitting login");

        let guard = SubmitGuard {
            state: &mut self.state,
            view_tx: &self.view_tx,
            settled: false,
        };
        let result = self
            .authenticator
            .authenticate(&credentials.username, &credentials.password)
            .await;
        let outcome = guard.settle(result);

        match &outcome {
            SubmitOutcome::Authenticated => {
                tracing::info!(username = %credentials.username, "Login succeeded");
            }
            SubmitOutcome::Rejected(message) => {
                tracing::warn!(
                    username = %credentials.username,
                    reason = %message,
                    "Login rejected"
                );
            }
            _ => {}
        }
        outcome
    }

    fn publish(&self) {
        self.view_tx.send_replace(FormView::render(&self.state));
    }
}

/// Keeps the form in `Submitting` while the authenticator is pending.
///
/// If dropped before [`SubmitGuard::settle`], the form goes back to `Idle`.
struct SubmitGuard<'a> {
    state: &'a mut LoginForm,
    view_tx: &'a watch::Sender<FormView>,
    settled: bool,
}

impl SubmitGuard<'_> {
    fn settle(mut self, result: Result<(), AuthError>) -> SubmitOutcome {
        let outcome = self.state.complete_submit(result);
        self.settled = true;
        self.view_tx.send_replace(FormView::render(self.state));
        outcome
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::warn!("Login attempt abandoned before the authenticator settled");
        self.state.abort_submit();
        self.view_tx.send_replace(FormView::render(self.state));
    }
}
