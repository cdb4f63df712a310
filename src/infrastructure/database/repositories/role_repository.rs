use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, DomainResult, Role, RoleName, RoleRepository};
use crate::infrastructure::database::entities::role;

pub struct SeaOrmRoleRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn role_model_to_domain(model: role::Model) -> DomainResult<Role> {
    let name = RoleName::parse(&model.name)
        .ok_or_else(|| DomainError::Storage(format!("Unknown role name '{}'", model.name)))?;
    Ok(Role::new(model.id, name))
}

#[async_trait]
impl RoleRepository for SeaOrmRoleRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Role>> {
        role::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(role_model_to_domain)
            .transpose()
    }

    async fn find_by_name(&self, name: RoleName) -> DomainResult<Option<Role>> {
        role::Entity::find()
            .filter(role::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await?
            .map(role_model_to_domain)
            .transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Role>> {
        role::Entity::find()
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await?
            .into_iter()
            .map(role_model_to_domain)
            .collect()
    }

    async fn create(&self, name: RoleName) -> DomainResult<Role> {
        let model = role::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(name.as_str().to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                DomainError::conflict(format!("Role {} already exists", name))
            } else {
                DomainError::from(e)
            }
        })?;

        role_model_to_domain(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn create_and_find_roles() {
        let repo = SeaOrmRoleRepository::new(test_database().await);

        let admin = repo.create(RoleName::Admin).await.unwrap();
        repo.create(RoleName::Student).await.unwrap();

        let by_id = repo.find_by_id(&admin.id).await.unwrap().unwrap();
        assert_eq!(by_id, admin);

        let by_name = repo.find_by_name(RoleName::Student).await.unwrap().unwrap();
        assert_eq!(by_name.name, RoleName::Student);
        assert!(repo.find_by_name(RoleName::Teacher).await.unwrap().is_none());

        let names: Vec<RoleName> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec![RoleName::Admin, RoleName::Student]);
    }

    #[tokio::test]
    async fn duplicate_role_is_a_conflict() {
        let repo = SeaOrmRoleRepository::new(test_database().await);
        repo.create(RoleName::Teacher).await.unwrap();

        let err = repo.create(RoleName::Teacher).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
