use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::role_repository::role_model_to_domain;
use crate::domain::{
    DomainError, DomainResult, Gender, NewUser, RoleName, SortOrder, User, UserFilter, UserPatch,
    UserRepository, UserSortField,
};
use crate::infrastructure::database::entities::{role, user};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_joined(&self, id: &str) -> DomainResult<Option<User>> {
        user::Entity::find_by_id(id)
            .find_also_related(role::Entity)
            .one(&self.db)
            .await?
            .map(|(u, r)| user_model_to_domain(u, r))
            .transpose()
    }

    async fn find_active_by(&self, condition: Condition) -> DomainResult<Option<User>> {
        user::Entity::find()
            .filter(condition)
            .filter(user::Column::IsActive.eq(true))
            .find_also_related(role::Entity)
            .one(&self.db)
            .await?
            .map(|(u, r)| user_model_to_domain(u, r))
            .transpose()
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_gender_to_domain(gender: user::Gender) -> Gender {
    match gender {
        user::Gender::Male => Gender::Male,
        user::Gender::Female => Gender::Female,
        user::Gender::Other => Gender::Other,
    }
}

fn domain_gender_to_entity(gender: Gender) -> user::Gender {
    match gender {
        Gender::Male => user::Gender::Male,
        Gender::Female => user::Gender::Female,
        Gender::Other => user::Gender::Other,
    }
}

fn user_model_to_domain(model: user::Model, role: Option<role::Model>) -> DomainResult<User> {
    let role = role.ok_or_else(|| {
        DomainError::Storage(format!("User {} references a missing role", model.id))
    })?;

    Ok(User {
        id: model.id,
        dni: model.dni,
        email: model.email,
        name: model.name,
        last_name: model.last_name,
        gender: entity_gender_to_domain(model.gender),
        birth_date: model.birth_date,
        password_hash: model.password,
        role: role_model_to_domain(role)?,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
        deleted_at: model.deleted_at,
    })
}

/// `%term%` with LIKE wildcards in the term escaped, so they match literally
pub(super) fn contains_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}

fn sort_column(field: UserSortField) -> user::Column {
    match field {
        UserSortField::Name => user::Column::Name,
        UserSortField::LastName => user::Column::LastName,
        UserSortField::Email => user::Column::Email,
        UserSortField::Dni => user::Column::Dni,
        UserSortField::BirthDate => user::Column::BirthDate,
        UserSortField::CreatedAt => user::Column::CreatedAt,
    }
}

pub(super) fn sort_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.find_joined(id).await
    }

    async fn find_by_dni(&self, dni: &str) -> DomainResult<Option<User>> {
        self.find_active_by(Condition::all().add(user::Column::Dni.eq(dni)))
            .await
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.find_active_by(Condition::all().add(user::Column::Email.eq(email)))
            .await
    }

    async fn find_users_and_count(&self, filter: &UserFilter) -> DomainResult<(Vec<User>, u64)> {
        let mut query = user::Entity::find().find_also_related(role::Entity);

        if let Some(is_active) = filter.is_active {
            query = query.filter(user::Column::IsActive.eq(is_active));
        }

        if let Some(ref role_name) = filter.role {
            query = query.filter(role::Column::Name.eq(role_name.as_str()));
        }

        // Free-text search over names and identity fields. SQLite LIKE folds
        // ASCII case only.
        if let Some(ref search) = filter.search {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(user::Column::Name.like(pattern.clone()))
                    .add(user::Column::LastName.like(pattern.clone()))
                    .add(user::Column::Email.like(pattern.clone()))
                    .add(user::Column::Dni.like(pattern)),
            );
        }

        query = match filter.order {
            Some((field, order)) => query.order_by(sort_column(field), sort_order(order)),
            None => query.order_by_desc(user::Column::CreatedAt),
        };
        // Stable pages when the sort key has ties
        query = query.order_by_asc(user::Column::Id);

        let total = query.clone().count(&self.db).await?;

        let rows = query
            .offset(filter.pagination.offset())
            .limit(filter.pagination.limit)
            .all(&self.db)
            .await?;

        let users = rows
            .into_iter()
            .map(|(u, r)| user_model_to_domain(u, r))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok((users, total))
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        user::ActiveModel {
            id: Set(id.clone()),
            dni: Set(new_user.dni),
            email: Set(new_user.email),
            name: Set(new_user.name),
            last_name: Set(new_user.last_name),
            gender: Set(domain_gender_to_entity(new_user.gender)),
            birth_date: Set(new_user.birth_date),
            password: Set(new_user.password_hash),
            role_id: Set(new_user.role_id),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        }
        .insert(&self.db)
        .await?;

        self.find_joined(&id)
            .await?
            .ok_or_else(|| DomainError::Storage("User created but could not be retrieved".into()))
    }

    async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<Option<User>> {
        let Some(existing) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();

        if let Some(dni) = patch.dni {
            active.dni = Set(dni);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(gender) = patch.gender {
            active.gender = Set(domain_gender_to_entity(gender));
        }
        if let Some(birth_date) = patch.birth_date {
            active.birth_date = Set(birth_date);
        }
        if let Some(role_id) = patch.role_id {
            active.role_id = Set(role_id);
        }
        if let Some(hash) = patch.password_hash {
            active.password = Set(hash);
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(deleted_at) = patch.deleted_at {
            active.deleted_at = Set(Some(deleted_at));
        }

        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;

        self.find_joined(id).await
    }

    async fn count_actives_by_role(&self, role_name: RoleName) -> DomainResult<u64> {
        let count = user::Entity::find()
            .inner_join(role::Entity)
            .filter(role::Column::Name.eq(role_name.as_str()))
            .filter(user::Column::IsActive.eq(true))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
