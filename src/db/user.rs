//! User model for authgate.

/// User entity representing a registered account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store at creation.
    pub id: i64,
    /// Email address. Uniqueness is enforced by AuthService before insert.
    pub email: String,
    /// Password hash (Argon2, PHC string). Never empty, never cleartext.
    pub password: String,
    /// Opaque session token. Present iff the user has an active session.
    pub session_token: Option<String>,
    /// Opaque reset token. Present iff a password reset is pending.
    pub reset_token: Option<String>,
    /// Account creation timestamp.
    pub created_at: String,
}

impl User {
    /// Check whether the user currently has an active session.
    pub fn has_session(&self) -> bool {
        self.session_token.is_some()
    }

    /// Check whether a password reset is pending for the user.
    pub fn has_pending_reset(&self) -> bool {
        self.reset_token.is_some()
    }
}

/// Unique attribute a user can be looked up by.
///
/// Exactly one match is expected for non-null values; zero matches is a
/// normal miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKey<'a> {
    /// Lookup by email address.
    Email(&'a str),
    /// Lookup by active session token.
    SessionToken(&'a str),
    /// Lookup by pending reset token.
    ResetToken(&'a str),
}

impl UserKey<'_> {
    /// Column name the key maps to.
    pub fn column(&self) -> &'static str {
        match self {
            UserKey::Email(_) => "email",
            UserKey::SessionToken(_) => "session_token",
            UserKey::ResetToken(_) => "reset_token",
        }
    }

    /// Value to match against.
    pub fn value(&self) -> &str {
        match self {
            UserKey::Email(v) | UserKey::SessionToken(v) | UserKey::ResetToken(v) => v,
        }
    }
}

/// Data for a partial update of an existing user.
///
/// Only fields that are set will be written. Token fields distinguish
/// "leave unchanged" (`None`) from "set to NULL" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New password hash (if changing password).
    pub password: Option<String>,
    /// New session token value, including clearing it.
    pub session_token: Option<Option<String>>,
    /// New reset token value, including clearing it.
    pub reset_token: Option<Option<String>>,
}

impl UserUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set or clear the session token.
    pub fn session_token(mut self, token: Option<String>) -> Self {
        self.session_token = Some(token);
        self
    }

    /// Set or clear the reset token.
    pub fn reset_token(mut self, token: Option<String>) -> Self {
        self.reset_token = Some(token);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.session_token.is_none() && self.reset_token.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_column() {
        assert_eq!(UserKey::Email("a@b.com").column(), "email");
        assert_eq!(UserKey::SessionToken("t").column(), "session_token");
        assert_eq!(UserKey::ResetToken("t").column(), "reset_token");
    }

    #[test]
    fn test_user_key_value() {
        assert_eq!(UserKey::Email("a@b.com").value(), "a@b.com");
        assert_eq!(UserKey::SessionToken("tok").value(), "tok");
    }

    #[test]
    fn test_user_update_builder() {
        let update = UserUpdate::new()
            .password("newhash")
            .reset_token(None);

        assert!(update.password.is_some());
        assert_eq!(update.reset_token, Some(None));
        assert!(update.session_token.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_user_update_empty() {
        let update = UserUpdate::new();
        assert!(update.is_empty());
    }

    #[test]
    fn test_user_state_helpers() {
        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            password: "hash".to_string(),
            session_token: Some("tok".to_string()),
            reset_token: None,
            created_at: "2024-01-01 00:00:00".to_string(),
        };

        assert!(user.has_session());
        assert!(!user.has_pending_reset());
    }
}
