//! Repository provider
//!
//! Unified access to the per-aggregate repositories. Services request only
//! the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let role = repos.roles().find_by_id(&role_id).await?;
//!     let admins = repos.users().count_actives_by_role(RoleName::Admin).await?;
//! }
//! ```

use super::class::ClassRepository;
use super::role::RoleRepository;
use super::user::UserRepository;

pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn roles(&self) -> &dyn RoleRepository;
    fn classes(&self) -> &dyn ClassRepository;
}
