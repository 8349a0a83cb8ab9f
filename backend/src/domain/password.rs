//! Credential hashing helpers built on argon2id.
//!
//! Hashes are stored as PHC strings so parameters travel with the hash and
//! can be tightened later without invalidating existing records.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

/// Errors raised while hashing or verifying a secret.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    /// The secret could not be hashed.
    #[error("failed to hash password: {message}")]
    Hash {
        /// Underlying failure description.
        message: String,
    },
    /// The stored hash is not a valid PHC string.
    #[error("stored password hash is malformed: {message}")]
    MalformedHash {
        /// Underlying failure description.
        message: String,
    },
}

/// Hash a secret into an argon2id PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| PasswordError::Hash {
            message: err.to_string(),
        })
}

/// Verify a candidate secret against a stored PHC string.
///
/// Returns `Ok(false)` for a well-formed hash that does not match, and an
/// error only when the stored hash itself is unreadable.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|err| PasswordError::MalformedHash {
        message: err.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("correct horse battery staple").expect("hashing succeeds");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery staple", &hash).expect("verify"));
        assert!(!verify_password("wrong password", &hash).expect("verify"));
    }

    #[rstest]
    fn hashes_are_salted() {
        let first = hash_password("secret-value").expect("hashing succeeds");
        let second = hash_password("secret-value").expect("hashing succeeds");
        assert_ne!(first, second);
    }

    #[rstest]
    fn malformed_stored_hash_is_an_error() {
        let err = verify_password("anything", "not-a-phc-string").expect_err("must fail");
        assert!(matches!(err, PasswordError::MalformedHash { .. }));
    }
}
