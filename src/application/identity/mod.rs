//! Identity module: user management & authentication
//!
//! `UserService` orchestrates the user-management use-cases,
//! `AuthService` issues tokens and `RoleService` lists and seeds roles.

pub mod auth;
pub mod roles;
pub mod service;

pub use auth::{AuthResult, AuthService};
pub use roles::{AdminSeed, DefaultAdmin, RoleService};
pub use service::UserService;
