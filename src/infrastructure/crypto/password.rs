//! Password hashing and generation

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domain::{DomainError, DomainResult, PasswordHasher};

/// Length of the passwords handed out to newly created users
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

/// Hash a password using bcrypt
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    verify(password, hash)
}

/// Random alphanumeric password
pub fn generate_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

/// bcrypt-backed [`PasswordHasher`]
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> DomainResult<String> {
        hash_password(plain, self.cost)
            .map_err(|e| DomainError::Crypto(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, plain: &str, hash: &str) -> bool {
        // A malformed stored hash (e.g. the soft-delete sentinel) never matches
        verify_password(plain, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DELETED_PASSWORD_SENTINEL;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptHasher::new(4);
        let hashed = hasher.hash("secure_password_123").unwrap();

        assert!(hasher.verify("secure_password_123", &hashed));
        assert!(!hasher.verify("wrong_password", &hashed));
    }

    #[test]
    fn sentinel_never_verifies() {
        let hasher = BcryptHasher::new(4);
        assert!(!hasher.verify("#deleted", DELETED_PASSWORD_SENTINEL));
        assert!(!hasher.verify("", DELETED_PASSWORD_SENTINEL));
    }

    #[test]
    fn generated_passwords_are_alphanumeric() {
        let a = generate_password();
        let b = generate_password();
        assert_eq!(a.len(), GENERATED_PASSWORD_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
