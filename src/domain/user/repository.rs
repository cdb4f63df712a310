use async_trait::async_trait;

use super::{NewUser, User, UserFilter, UserPatch};
use crate::domain::{DomainResult, RoleName};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID, active or not
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Find the active user holding this DNI
    async fn find_by_dni(&self, dni: &str) -> DomainResult<Option<User>>;

    /// Find the active user holding this email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// One page of users matching the filter, plus the total match count
    async fn find_users_and_count(&self, filter: &UserFilter) -> DomainResult<(Vec<User>, u64)>;

    async fn create(&self, user: NewUser) -> DomainResult<User>;

    /// Apply a patch; `None` if no user has this ID
    async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<Option<User>>;

    /// Number of active users holding the given role
    async fn count_actives_by_role(&self, role: RoleName) -> DomainResult<u64>;
}
