//! Password hashing and verification using Argon2id.

use std::borrow::Cow;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use uuid::Uuid;

use crate::error::AuthError;

fn peppered<'a>(password: &'a str, pepper: Option<&str>) -> Cow<'a, str> {
    match pepper {
        Some(p) => Cow::Owned(format!("{p}{password}")),
        None => Cow::Borrowed(password),
    }
}

/// Hash a password into an Argon2id PHC string.
///
/// The salt is taken from a fresh random v4 UUID.
pub fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, AuthError> {
    let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())
        .map_err(|e| AuthError::Crypto(format!("salt error: {e}")))?;

    Argon2::default()
        .hash_password(peppered(password, pepper).as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Crypto(format!("hash error: {e}")))
}

/// Verify a plaintext password against an Argon2id PHC-format hash.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch, or
/// `Err(AuthError::Crypto)` if the stored hash is malformed.
pub fn verify_password(
    password: &str,
    hash: &str,
    pepper: Option<&str>,
) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::Crypto(format!("invalid hash format: {e}")))?;

    match Argon2::default().verify_password(peppered(password, pepper).as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Crypto(format!("verify error: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_matches() {
        let hash = hash_password("hr123", None).unwrap();
        assert!(verify_password("hr123", &hash, None).unwrap());
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = hash_password("hr123", None).unwrap();
        assert!(!verify_password("hr124", &hash, None).unwrap());
    }

    #[test]
    fn pepper_is_applied() {
        let hash = hash_password("manager123", Some("pepper!")).unwrap();
        assert!(verify_password("manager123", &hash, Some("pepper!")).unwrap());
        assert!(!verify_password("manager123", &hash, None).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("pm123", None).unwrap();
        let b = hash_password("pm123", None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_returns_error() {
        assert!(verify_password("pw", "not-a-hash", None).is_err());
    }
}
