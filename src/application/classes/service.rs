//! Class service
//!
//! CRUD over the institution's classes with a paginated, searchable list.
//! Class names are unique; surrounding whitespace is not significant.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    Class, ClassFilter, ClassPatch, CreateClassDto, DomainError, DomainResult, GetClassDto,
    NewClass, RepositoryProvider, UpdateClassDto,
};
use crate::shared::PaginatedResult;

pub const CLASS_NAME_REQUIRED: &str = "Class name is required";
pub const CLASS_NAME_TAKEN: &str = "Class name already exists";

pub struct ClassService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ClassService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn get_classes(&self, dto: GetClassDto) -> DomainResult<PaginatedResult<Class>> {
        let filter = ClassFilter::from(&dto);
        let (classes, total) = self
            .repos
            .classes()
            .find_classes_and_count(&filter)
            .await?;
        Ok(PaginatedResult::new(
            classes,
            total,
            filter.pagination.page,
            filter.pagination.limit,
        ))
    }

    pub async fn get_class(&self, id: &str) -> DomainResult<Class> {
        self.repos
            .classes()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Class"))
    }

    pub async fn get_class_by_name(&self, name: &str) -> DomainResult<Class> {
        self.repos
            .classes()
            .find_by_name(name.trim())
            .await?
            .ok_or_else(|| DomainError::not_found("Class"))
    }

    pub async fn create_class(&self, dto: CreateClassDto) -> DomainResult<Class> {
        let name = required_name(&dto.name)?;
        self.validate_name(&name, None).await?;

        let class = self
            .repos
            .classes()
            .create(NewClass {
                name,
                description: dto.description.as_deref().and_then(description),
            })
            .await?;

        info!(class_id = %class.id, name = %class.name, "Class created");
        Ok(class)
    }

    pub async fn update_class(&self, id: &str, dto: UpdateClassDto) -> DomainResult<Class> {
        let existing = self.get_class(id).await?;

        let name = match dto.name.as_deref() {
            Some(raw) => {
                let name = required_name(raw)?;
                self.validate_name(&name, Some(&existing.id)).await?;
                Some(name)
            }
            None => None,
        };

        let patch = ClassPatch {
            name,
            description: dto.description.as_deref().map(description),
        };

        let class = self
            .repos
            .classes()
            .update(id, patch)
            .await?
            .ok_or_else(|| DomainError::not_found("Class"))?;

        info!(class_id = %class.id, "Class updated");
        Ok(class)
    }

    pub async fn delete_class(&self, id: &str) -> DomainResult<()> {
        if !self.repos.classes().delete(id).await? {
            return Err(DomainError::not_found("Class"));
        }
        info!(class_id = %id, "Class deleted");
        Ok(())
    }

    async fn validate_name(&self, name: &str, except_id: Option<&str>) -> DomainResult<()> {
        match self.repos.classes().find_by_name(name).await? {
            Some(other) if Some(other.id.as_str()) != except_id => {
                Err(DomainError::conflict(CLASS_NAME_TAKEN))
            }
            _ => Ok(()),
        }
    }
}

fn required_name(raw: &str) -> DomainResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation(CLASS_NAME_REQUIRED));
    }
    Ok(name.to_string())
}

/// Blank descriptions are stored as absent
fn description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
