//! Core data structures of the login form.

pub mod error_state;
pub mod field;
pub mod form_state;
pub mod status;

pub use error_state::ErrorState;
pub use field::Field;
pub use form_state::{FormState, MIN_PASSWORD_CHARS, password_error, username_error};
pub use status::SubmissionStatus;
