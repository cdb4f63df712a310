//! Cryptographic helpers: password hashing and JWT handling

pub mod jwt;
pub mod password;

pub use jwt::{create_token, verify_token, JwtConfig, TokenClaims};
pub use password::{generate_password, BcryptHasher, GENERATED_PASSWORD_LENGTH};
