//! Domain ports
//!
//! Trait contracts for outbound collaborators that are not repositories.

use crate::domain::DomainResult;

/// One-way password hashing.
///
/// `verify` returns `false` for a stored value that is not a valid hash, so
/// overwritten passwords simply never match.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> DomainResult<String>;
    fn verify(&self, plain: &str, hash: &str) -> bool;
}
