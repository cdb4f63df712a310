//! # Academic Backend
//!
//! User and role management for an academic institution: administrators
//! manage students, teachers and other administrators; every user can log
//! in and maintain their own password and email.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: entities, DTOs and repository contracts
//! - **application**: use-cases (`UserService`, `AuthService`, `RoleService`)
//! - **infrastructure**: SeaORM persistence, in-memory storage, crypto
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: errors, pagination, shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::{create_api_router, AppState};
