//! Domain layer of the login form.
//!
//! Holds the state the form is made of and the contract of the external
//! authentication action. Nothing here depends on a runtime or a renderer.
//!
//! # Architecture
//!
//! - [`entities`] - Form values, error map, submission status
//! - [`authenticator`] - Trait the injected credential check implements

pub mod authenticator;
pub mod entities;

pub use authenticator::{Authenticator, FnAuthenticator, from_fn};
#[cfg(test)]
pub use authenticator::MockAuthenticator;
