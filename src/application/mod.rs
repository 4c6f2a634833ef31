//! Application layer: the login form state machine and its async driver.
//!
//! - [`login_form::LoginForm`] - synchronous transitions (edit, validate, submit start/finish)
//! - [`form_controller::FormController`] - runs submissions against an injected
//!   [`crate::domain::Authenticator`] and publishes rendered views

pub mod form_controller;
pub mod login_form;

pub use form_controller::FormController;
pub use login_form::{LoginForm, SubmitOutcome, SubmitStart};
