//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{ClassRepository, RepositoryProvider, RoleRepository, UserRepository};

use super::class_repository::SeaOrmClassRepository;
use super::role_repository::SeaOrmRoleRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    roles: SeaOrmRoleRepository,
    classes: SeaOrmClassRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            roles: SeaOrmRoleRepository::new(db.clone()),
            classes: SeaOrmClassRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn roles(&self) -> &dyn RoleRepository {
        &self.roles
    }

    fn classes(&self) -> &dyn ClassRepository {
        &self.classes
    }
}
