use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::user_repository::{contains_pattern, sort_order};
use crate::domain::{
    Class, ClassFilter, ClassPatch, ClassRepository, ClassSortField, DomainError, DomainResult,
    NewClass,
};
use crate::infrastructure::database::entities::class;

pub struct SeaOrmClassRepository {
    db: DatabaseConnection,
}

impl SeaOrmClassRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn class_model_to_domain(model: class::Model) -> Class {
    Class {
        id: model.id,
        name: model.name,
        description: model.description,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn sort_column(field: ClassSortField) -> class::Column {
    match field {
        ClassSortField::Name => class::Column::Name,
        ClassSortField::CreatedAt => class::Column::CreatedAt,
    }
}

fn map_unique_violation(e: sea_orm::DbErr, name: &str) -> DomainError {
    if e.to_string().contains("UNIQUE") {
        DomainError::conflict(format!("Class {} already exists", name))
    } else {
        DomainError::from(e)
    }
}

#[async_trait]
impl ClassRepository for SeaOrmClassRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Class>> {
        Ok(class::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(class_model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Class>> {
        Ok(class::Entity::find()
            .filter(class::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .map(class_model_to_domain))
    }

    async fn find_classes_and_count(
        &self,
        filter: &ClassFilter,
    ) -> DomainResult<(Vec<Class>, u64)> {
        let mut query = class::Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(class::Column::Name.like(pattern.clone()))
                    .add(class::Column::Description.like(pattern)),
            );
        }

        query = match filter.order {
            Some((field, order)) => query.order_by(sort_column(field), sort_order(order)),
            None => query.order_by_desc(class::Column::CreatedAt),
        };
        query = query.order_by_asc(class::Column::Id);

        let total = query.clone().count(&self.db).await?;
        let classes = query
            .offset(filter.pagination.offset())
            .limit(filter.pagination.limit)
            .all(&self.db)
            .await?
            .into_iter()
            .map(class_model_to_domain)
            .collect();

        Ok((classes, total))
    }

    async fn create(&self, new_class: NewClass) -> DomainResult<Class> {
        let now = Utc::now();
        let name = new_class.name.clone();

        let model = class::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(new_class.name),
            description: Set(new_class.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_unique_violation(e, &name))?;

        Ok(class_model_to_domain(model))
    }

    async fn update(&self, id: &str, patch: ClassPatch) -> DomainResult<Option<Class>> {
        let Some(existing) = class::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let name = patch.name.clone().unwrap_or_else(|| existing.name.clone());

        let mut active: class::ActiveModel = existing.into();
        if let Some(new_name) = patch.name {
            active.name = Set(new_name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        active.updated_at = Set(Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| map_unique_violation(e, &name))?;
        Ok(Some(class_model_to_domain(model)))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let Some(existing) = class::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(false);
        };
        existing.delete(&self.db).await?;
        Ok(true)
    }
}
