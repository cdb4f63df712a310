use thiserror::Error;

/// Errors raised by services and repositories.
///
/// The `Display` text of the client-facing variants is the message sent
/// back in the response envelope, so it must stay human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Whether the error comes from infrastructure rather than a violated
    /// business rule. Internal errors are never shown to the client verbatim.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Crypto(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_are_plain() {
        assert_eq!(DomainError::not_found("User").to_string(), "User not found");
        assert_eq!(
            DomainError::conflict("Email already in use").to_string(),
            "Email already in use"
        );
    }

    #[test]
    fn storage_errors_are_internal() {
        assert!(DomainError::Storage("disk full".into()).is_internal());
        assert!(DomainError::Crypto("bad cost".into()).is_internal());
        assert!(!DomainError::validation("Gender not valid").is_internal());
        assert!(!DomainError::forbidden("Cannot delete this user").is_internal());
    }
}
