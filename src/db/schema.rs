//! Embedded database migrations for authgate.
//!
//! Each entry is one schema version, applied in order inside a
//! transaction and recorded in the `schema_version` table.

/// All migrations, in version order.
pub const MIGRATIONS: &[&str] = &[
    // v1: users table with session and reset token columns.
    //
    // Email intentionally carries no UNIQUE constraint: the duplicate
    // check happens in AuthService before insert. The indices exist for
    // the lookup paths only.
    "CREATE TABLE users (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        email          TEXT NOT NULL,
        password       TEXT NOT NULL,
        session_token  TEXT,
        reset_token    TEXT,
        created_at     TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX idx_users_email ON users(email);
    CREATE INDEX idx_users_session_token ON users(session_token);
    CREATE INDEX idx_users_reset_token ON users(reset_token);",
];
