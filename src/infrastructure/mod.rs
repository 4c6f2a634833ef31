//! Infrastructure layer for concrete collaborators.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`static_authenticator`] - Single-user authenticator used by the demo binary

pub mod static_authenticator;

pub use static_authenticator::StaticAuthenticator;
