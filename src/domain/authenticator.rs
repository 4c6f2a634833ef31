//! Boundary to the externally supplied credential check.

use async_trait::async_trait;
use std::future::Future;

use crate::error::AuthError;

/// Asynchronous credential check injected into the form controller.
///
/// This is the only I/O boundary of the form: the controller knows nothing
/// about transport, credential format or endpoints.
///
/// # Implementations
///
/// - [`crate::infrastructure::StaticAuthenticator`] - single configured user (demo binary)
/// - [`FnAuthenticator`] - adapts an async closure
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Checks the submitted credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the credentials are rejected. Its message is
    /// shown to the user as the form-level error.
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// [`Authenticator`] backed by a closure returning a future.
///
/// Created with [`from_fn`].
pub struct FnAuthenticator<F> {
    f: F,
}

/// Wraps `f` as an [`Authenticator`].
///
/// The closure receives owned copies of the username and password.
///
/// ```ignore
/// let auth = from_fn(|username, _password| async move {
///     if username == "admin" { Ok(()) } else { Err(AuthError::new("Invalid credentials")) }
/// });
/// ```
pub fn from_fn<F, Fut>(f: F) -> FnAuthenticator<F>
where
    F: Fn(String, String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), AuthError>> + Send + 'static,
{
    FnAuthenticator { f }
}

#[async_trait]
impl<F, Fut> Authenticator for FnAuthenticator<F>
where
    F: Fn(String, String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), AuthError>> + Send + 'static,
{
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        (self.f)(username.to_owned(), password.to_owned()).await
    }
}
