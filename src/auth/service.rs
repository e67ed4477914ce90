//! Authentication and session lifecycle service.
//!
//! `AuthService` is the sole mutator of session and reset token fields.
//! It orchestrates registration, login validation, session issuance and
//! teardown, and the password-reset flow over an injected store handle.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::auth::token::{generate_reset_token, generate_session_token};
use crate::db::{User, UserKey, UserRepository, UserUpdate};

/// Errors surfaced by [`AuthService`] operations.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A user with this email already exists.
    #[error("email already registered")]
    AlreadyRegistered,

    /// No user with the given email.
    #[error("user not found")]
    UserNotFound,

    /// The reset token does not match any pending reset.
    #[error("invalid reset token")]
    InvalidToken,

    /// Session issuance failed because the user could not be resolved.
    #[error("session creation failed")]
    SessionCreationFailed,

    /// The user record does not exist in the store.
    #[error("user record not found")]
    NotFound,

    /// Password hashing failed. Fatal, not a business outcome.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Storage fault other than a lookup miss.
    #[error("database error: {0}")]
    Database(String),
}

impl From<crate::AuthGateError> for AuthError {
    fn from(e: crate::AuthGateError) -> Self {
        AuthError::Database(e.to_string())
    }
}

/// The credential and session state machine.
///
/// Constructed with an injected store handle; the pool is cheap to clone,
/// so the service can be shared freely across request handlers.
#[derive(Clone)]
pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    /// Create a new service over the given store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn repo(&self) -> UserRepository<'_> {
        UserRepository::new(&self.pool)
    }

    /// Register a new user.
    ///
    /// Fails with [`AuthError::AlreadyRegistered`] if a user with the
    /// email exists. Otherwise hashes the password and inserts a new
    /// record.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let repo = self.repo();

        if repo.find_by(UserKey::Email(email)).await?.is_some() {
            debug!(email = %email, "Registration rejected: email already registered");
            return Err(AuthError::AlreadyRegistered);
        }

        let password_hash = hash_password(password)?;
        let user = repo.insert(email, &password_hash).await?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    /// Validate login credentials.
    ///
    /// Returns `true` only when the email exists and the password
    /// matches. Unknown email and wrong password are indistinguishable
    /// to the caller. No state changes either way; session issuance is a
    /// separate explicit step.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let user = match self.repo().find_by(UserKey::Email(email)).await? {
            Some(user) => user,
            None => return Ok(false),
        };

        Ok(verify_password(password, &user.password))
    }

    /// Create a session for the user with the given email.
    ///
    /// Generates a fresh opaque token and stores it on the record,
    /// invalidating any prior session token. Intended to be called only
    /// after a successful [`login`](Self::login); a missing user is
    /// handled defensively as [`AuthError::SessionCreationFailed`].
    pub async fn create_session(&self, email: &str) -> Result<String, AuthError> {
        let repo = self.repo();

        let user = match repo.find_by(UserKey::Email(email)).await? {
            Some(user) => user,
            None => {
                warn!(email = %email, "Session creation failed: user not found");
                return Err(AuthError::SessionCreationFailed);
            }
        };

        if user.has_session() {
            debug!(user_id = user.id, "Superseding existing session token");
        }

        let token = generate_session_token();
        repo.update(
            user.id,
            &UserUpdate::new().session_token(Some(token.clone())),
        )
        .await?
        .ok_or(AuthError::SessionCreationFailed)?;

        info!(user_id = user.id, "Session created");
        Ok(token)
    }

    /// Resolve a session token to its user.
    ///
    /// Empty input short-circuits to `None` without a lookup. Pure read.
    pub async fn resolve_session(&self, session_token: &str) -> Result<Option<User>, AuthError> {
        if session_token.is_empty() {
            return Ok(None);
        }

        Ok(self
            .repo()
            .find_by(UserKey::SessionToken(session_token))
            .await?)
    }

    /// Destroy the session for the given user id.
    ///
    /// Clearing an already-absent session token is a no-op. Fails with
    /// [`AuthError::NotFound`] only if the user id does not exist.
    pub async fn destroy_session(&self, user_id: i64) -> Result<(), AuthError> {
        let updated = self
            .repo()
            .update(user_id, &UserUpdate::new().session_token(None))
            .await?;

        match updated {
            Some(_) => {
                info!(user_id = user_id, "Session destroyed");
                Ok(())
            }
            None => Err(AuthError::NotFound),
        }
    }

    /// Issue a password-reset token for the user with the given email.
    ///
    /// Overwrites any previously pending reset token; at most one reset
    /// is pending per user.
    pub async fn issue_reset_token(&self, email: &str) -> Result<String, AuthError> {
        let repo = self.repo();

        let user = match repo.find_by(UserKey::Email(email)).await? {
            Some(user) => user,
            None => {
                debug!(email = %email, "Reset token refused: user not found");
                return Err(AuthError::UserNotFound);
            }
        };

        if user.has_pending_reset() {
            debug!(user_id = user.id, "Overwriting pending reset token");
        }

        let token = generate_reset_token();
        repo.update(user.id, &UserUpdate::new().reset_token(Some(token.clone())))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        info!(user_id = user.id, "Reset token issued");
        Ok(token)
    }

    /// Consume a reset token and set a new password.
    ///
    /// The new hash is stored and the reset token cleared in the same
    /// update, so a token permits exactly one password change.
    pub async fn consume_reset_token(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let repo = self.repo();

        let user = match repo.find_by(UserKey::ResetToken(reset_token)).await? {
            Some(user) => user,
            None => {
                debug!("Password update refused: invalid reset token");
                return Err(AuthError::InvalidToken);
            }
        };

        let password_hash = hash_password(new_password)?;
        repo.update(
            user.id,
            &UserUpdate::new().password(password_hash).reset_token(None),
        )
        .await?
        .ok_or(AuthError::InvalidToken)?;

        info!(user_id = user.id, "Password updated via reset token");
        Ok(())
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish()
    }
}
