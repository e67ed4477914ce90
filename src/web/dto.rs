//! Request and response types for the authgate HTTP adapter.
//!
//! Request bodies are form-encoded; responses are JSON.

use serde::{Deserialize, Serialize};

/// POST /users request body.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    /// Email to register.
    pub email: String,
    /// Cleartext password; hashed before storage.
    pub password: String,
}

/// POST /sessions request body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Email of the account.
    pub email: String,
    /// Cleartext password to validate.
    pub password: String,
}

/// POST /reset_password request body.
#[derive(Debug, Deserialize)]
pub struct ResetRequestForm {
    /// Email of the account to reset.
    pub email: String,
}

/// PUT /reset_password request body.
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordForm {
    /// Email of the account (echoed back in the response).
    pub email: String,
    /// Single-use reset token.
    pub reset_token: String,
    /// Replacement password.
    pub new_password: String,
}

/// Simple message payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Build a message payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Email plus message payload, used by register/login/update responses.
#[derive(Debug, Serialize)]
pub struct EmailMessageResponse {
    /// Echoed email.
    pub email: String,
    /// Human-readable message.
    pub message: String,
}

/// GET /profile response.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Email of the session's user.
    pub email: String,
}

/// POST /reset_password response.
#[derive(Debug, Serialize)]
pub struct ResetTokenResponse {
    /// Echoed email.
    pub email: String,
    /// Newly issued reset token.
    pub reset_token: String,
}
