//! User repository for authgate.
//!
//! CRUD operations over user records, keyed by id or by a unique
//! attribute (email, session token, reset token).

use sqlx::{QueryBuilder, SqlitePool};

use super::user::{User, UserKey, UserUpdate};
use crate::{AuthGateError, Result};

const USER_COLUMNS: &str = "id, email, password, session_token, reset_token, created_at";

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user record with the given email and password hash.
    ///
    /// Returns the stored record with the assigned ID. Uniqueness of the
    /// email is the caller's responsibility.
    pub async fn insert(&self, email: &str, password_hash: &str) -> Result<User> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(email)
            .bind(password_hash)
            .execute(self.pool)
            .await
            .map_err(|e| AuthGateError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AuthGateError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| AuthGateError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Find a user by a unique attribute.
    ///
    /// Returns `None` on a miss. At most one row is expected per non-null
    /// value; if more than one matches the first is returned.
    pub async fn find_by(&self, key: UserKey<'_>) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {} = ?",
            key.column()
        ))
        .bind(key.value())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| AuthGateError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Update a user by ID.
    ///
    /// Only fields that are set in the update will be modified, in a
    /// single UPDATE statement. Returns the updated user, or None if the
    /// id does not exist.
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut separated = query.separated(", ");

        if let Some(ref password) = update.password {
            separated.push("password = ");
            separated.push_bind_unseparated(password);
        }
        if let Some(ref session_token) = update.session_token {
            separated.push("session_token = ");
            separated.push_bind_unseparated(session_token.clone());
        }
        if let Some(ref reset_token) = update.reset_token {
            separated.push("reset_token = ");
            separated.push_bind_unseparated(reset_token.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| AuthGateError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await
            .map_err(|e| AuthGateError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
