//! Opaque token generation for sessions and password resets.
//!
//! Tokens are UUID v4 strings: 122 bits of randomness, used only as
//! lookup keys. They carry no decodable structure.

use uuid::Uuid;

/// Generate a fresh session token.
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a fresh password-reset token.
pub fn generate_reset_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_format() {
        let token = generate_session_token();
        // UUID v4 string form: 36 chars, hyphenated
        assert_eq!(token.len(), 36);
        assert!(Uuid::parse_str(&token).is_ok());
    }

    #[test]
    fn test_reset_token_format() {
        let token = generate_reset_token();
        assert_eq!(token.len(), 36);
        assert!(Uuid::parse_str(&token).is_ok());
    }

    #[test]
    fn test_token_uniqueness() {
        let a = generate_session_token();
        let b = generate_session_token();
        let c = generate_reset_token();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }
}
