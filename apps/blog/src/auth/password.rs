// Password hashing utilities
// Uses bcrypt for salted password hashes

use bcrypt::{hash, verify};
use thiserror::Error;

pub use bcrypt::DEFAULT_COST;

/// Cheapest work factor bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Failure inside the bcrypt primitives
#[derive(Debug, Error)]
#[error("bcrypt failure: {0}")]
pub struct PasswordError(#[from] bcrypt::BcryptError);

/// Hashes a password using bcrypt at the given work factor
///
/// # Example
/// ```
/// use blog::auth::password::{hash_password, MIN_COST};
///
/// let hash = hash_password("my_password", MIN_COST).expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(hash(password, cost)?)
}

/// Verifies a password against a bcrypt hash
///
/// # Example
/// ```
/// use blog::auth::password::{hash_password, verify_password, MIN_COST};
///
/// let hash = hash_password("my_password", MIN_COST).unwrap();
/// assert!(verify_password("my_password", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    Ok(verify(password, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hash = hash_password("somepassword", MIN_COST).expect("valid hash");
        assert!(verify_password("somepassword", &hash).expect("valid verification"));
    }

    #[test]
    fn verify_wrong_password() {
        let hash = hash_password("somepassword", MIN_COST).expect("valid hash");
        assert!(!verify_password("otherpassword", &hash).expect("valid verification"));
    }

    #[test]
    fn hash_different_outputs() {
        let hash1 = hash_password("somepassword", MIN_COST).unwrap();
        let hash2 = hash_password("somepassword", MIN_COST).unwrap();

        // Salted, so never equal
        assert_ne!(hash1, hash2);
        assert!(verify_password("somepassword", &hash1).unwrap());
        assert!(verify_password("somepassword", &hash2).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("somepassword", "not-a-bcrypt-hash").is_err());
    }
}
