//! Password hashing and verification for authgate.
//!
//! Uses Argon2id with a fresh random salt per hash.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use thiserror::Error;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password hashing failed (entropy or allocation failure).
    ///
    /// This is fatal: there is no way to continue the operation that
    /// needed the hash.
    #[error("password hashing failed: {0}")]
    HashError(String),
}

/// Create the Argon2 hasher with recommended parameters.
///
/// Parameters:
/// - Memory cost: 64 MB (65536 KiB)
/// - Time cost: 3 iterations
/// - Parallelism: 4 threads
fn create_argon2() -> Argon2<'static> {
    let m_cost = 65536;
    let t_cost = 3;
    let p_cost = 4;

    let params = Params::new(m_cost, t_cost, p_cost, None).expect("valid Argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Hash a password using Argon2id.
///
/// Returns a PHC-formatted hash string that includes the salt and
/// parameters. Hashing the same password twice yields different strings
/// because each call draws a fresh salt.
///
/// # Examples
///
/// ```
/// use authgate::hash_password;
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = create_argon2();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// Returns `true` only when the password matches. Any failure, including
/// a malformed stored hash, is reported as a mismatch rather than an
/// error.
///
/// # Examples
///
/// ```
/// use authgate::{hash_password, verify_password};
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(verify_password("my_secure_password", &hash));
/// assert!(!verify_password("wrong_password", &hash));
/// ```
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    // The parameters are taken from the parsed hash, not from create_argon2()
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
