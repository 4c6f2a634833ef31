//! # Login Form
//!
//! A headless login form: it holds a username and password, validates them
//! locally, hands valid credentials to an injected asynchronous authenticator
//! and exposes loading and error state to whatever renders it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Form values, error map, submission status and the
//!   [`domain::Authenticator`] contract
//! - **Application Layer** ([`application`]) - The synchronous [`application::LoginForm`]
//!   state machine and the async [`application::FormController`] driver
//! - **Infrastructure Layer** ([`infrastructure`]) - Concrete authenticators
//! - **View** ([`view`]) - Rendering instructions derived from state
//!
//! ## Flow
//!
//! ```text
//! Idle --submit(valid)--> Submitting --resolve--> Idle
//! Submitting --reject--> Idle            (server error set)
//! Idle --submit(invalid)--> Idle         (field errors set)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export LOGIN_DEMO_PASSWORD="password123"
//! cargo run -- --username demo
//! ```
//!
//! ## Configuration
//!
//! The demo binary reads its settings from environment variables via
//! [`config::Config`]. The library itself takes no configuration.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod view;

pub use application::FormController;
pub use error::{AuthError, FieldError, FormError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{FormController, LoginForm, SubmitOutcome};
    pub use crate::domain::entities::{ErrorState, Field, FormState, SubmissionStatus};
    pub use crate::domain::{Authenticator, from_fn};
    pub use crate::error::{AuthError, FieldError, FormError};
    pub use crate::view::FormView;
}
