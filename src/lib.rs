//! authgate - user credential and session lifecycle service.
//!
//! Registers users, validates passwords, issues and revokes opaque
//! session tokens, and supports password reset via one-time tokens,
//! fronted by a small REST API.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    generate_reset_token, generate_session_token, hash_password, verify_password, AuthError,
    AuthService, PasswordError,
};
pub use config::Config;
pub use db::{Database, User, UserKey, UserRepository, UserUpdate};
pub use error::{AuthGateError, Result};
pub use web::{create_router, AppState, WebServer};
