//! Database module for authgate.
//!
//! Provides SQLite connectivity over a sqlx pool and embedded migration
//! management.

mod repository;
mod schema;
mod user;

pub use repository::UserRepository;
pub use schema::MIGRATIONS;
pub use user::{User, UserKey, UserUpdate};

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::Result;

/// Database wrapper managing the SQLite pool and migrations.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a database at the specified path.
    ///
    /// If the database file doesn't exist, it will be created.
    /// Migrations are automatically applied.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening database at {:?}", path);

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    pub async fn connect_in_memory() -> Result<Self> {
        debug!("Opening in-memory database");

        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(sqlx::Error::from)?
            .foreign_keys(true);

        // A single connection so every query sees the same memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Consume the wrapper, returning the pool.
    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }

    /// Get the current schema version.
    pub async fn schema_version(&self) -> Result<i64> {
        let table_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        )
        .fetch_one(&self.pool)
        .await?;

        if !table_exists {
            return Ok(0);
        }

        let version: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
                .fetch_one(&self.pool)
                .await?;

        Ok(version)
    }

    /// Apply pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        let current_version = self.schema_version().await?;
        let migrations = MIGRATIONS;

        if current_version as usize >= migrations.len() {
            debug!("Database is up to date (version {})", current_version);
            return Ok(());
        }

        info!(
            "Migrating database from version {} to {}",
            current_version,
            migrations.len()
        );

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version     INTEGER PRIMARY KEY,
                applied_at  TEXT NOT NULL DEFAULT (datetime('now'))
            )",
        )
        .execute(&self.pool)
        .await?;

        // Apply each pending migration in a transaction
        for (i, migration) in migrations.iter().enumerate().skip(current_version as usize) {
            let version = (i + 1) as i64;
            info!("Applying migration v{}", version);

            let mut tx = self.pool.begin().await?;

            sqlx::raw_sql(migration).execute(&mut *tx).await?;

            sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
                .bind(version)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
            debug!("Migration v{} applied successfully", version);
        }

        info!(
            "Database migration complete (now at version {})",
            migrations.len()
        );
        Ok(())
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?)",
        )
        .bind(table_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let db = Database::connect_in_memory().await.unwrap();
        assert!(db.schema_version().await.unwrap() > 0);
    }

    #[tokio::test]
    async fn test_migrations_applied() {
        let db = Database::connect_in_memory().await.unwrap();

        let version = db.schema_version().await.unwrap();
        assert_eq!(version as usize, MIGRATIONS.len());
    }

    #[tokio::test]
    async fn test_users_table_exists() {
        let db = Database::connect_in_memory().await.unwrap();

        assert!(db.table_exists("users").await.unwrap());
        assert!(db.table_exists("schema_version").await.unwrap());
        assert!(!db.table_exists("nonexistent").await.unwrap());
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = Database::connect_in_memory().await.unwrap();

        // Re-running must not reapply migrations
        db.migrate().await.unwrap();
        let version = db.schema_version().await.unwrap();
        assert_eq!(version as usize, MIGRATIONS.len());
    }

    #[tokio::test]
    async fn test_users_table_columns() {
        let db = Database::connect_in_memory().await.unwrap();

        // If a column were missing, this query would fail
        let result = sqlx::query(
            "SELECT id, email, password, session_token, reset_token, created_at
             FROM users LIMIT 0",
        )
        .fetch_all(db.pool())
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_users_table_indexes() {
        let db = Database::connect_in_memory().await.unwrap();

        for index in [
            "idx_users_email",
            "idx_users_session_token",
            "idx_users_reset_token",
        ] {
            let count: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name=?",
            )
            .bind(index)
            .fetch_one(db.pool())
            .await
            .unwrap();
            assert_eq!(count, 1, "missing index {index}");
        }
    }

    #[tokio::test]
    async fn test_connect_file_database() {
        let temp_dir = std::env::temp_dir().join("authgate_test_db");
        let _ = std::fs::remove_dir_all(&temp_dir);

        let db_path = temp_dir.join("test.db");

        {
            let db = Database::connect(&db_path).await.unwrap();
            assert!(db.table_exists("users").await.unwrap());
        }

        // Reopen: migrations must not be reapplied
        {
            let db = Database::connect(&db_path).await.unwrap();
            assert_eq!(db.schema_version().await.unwrap() as usize, MIGRATIONS.len());
        }

        let _ = std::fs::remove_dir_all(&temp_dir);
    }
}
