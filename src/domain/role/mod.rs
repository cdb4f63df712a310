//! Role aggregate
//!
//! Contains the Role entity and repository interface.

pub mod model;
pub mod repository;

pub use model::{Role, RoleName};
pub use repository::RoleRepository;
