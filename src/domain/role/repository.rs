//! Role repository interface

use async_trait::async_trait;

use super::model::{Role, RoleName};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Role>>;

    /// Find role by its name
    async fn find_by_name(&self, name: RoleName) -> DomainResult<Option<Role>>;

    /// All roles, ordered by name
    async fn find_all(&self) -> DomainResult<Vec<Role>>;

    /// Insert a new role with a generated ID
    async fn create(&self, name: RoleName) -> DomainResult<Role>;
}
