//! Class repository interface

use async_trait::async_trait;

use super::dto::ClassFilter;
use super::model::{Class, ClassPatch, NewClass};
use crate::domain::DomainResult;

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Class>>;

    /// Exact, case-sensitive name match
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Class>>;

    /// One page of matching classes plus the total match count
    async fn find_classes_and_count(&self, filter: &ClassFilter)
        -> DomainResult<(Vec<Class>, u64)>;

    async fn create(&self, class: NewClass) -> DomainResult<Class>;

    /// `None` when no class has this ID
    async fn update(&self, id: &str, patch: ClassPatch) -> DomainResult<Option<Class>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}
