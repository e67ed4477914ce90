//! Authentication module for authgate.
//!
//! Password hashing, opaque token generation, and the credential and
//! session lifecycle service.

mod password;
mod service;
mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use service::{AuthError, AuthService};
pub use token::{generate_reset_token, generate_session_token};
