//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod class_repository;
pub mod repository_provider;
pub mod role_repository;
pub mod user_repository;

pub use class_repository::SeaOrmClassRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use role_repository::SeaOrmRoleRepository;
pub use user_repository::SeaOrmUserRepository;
