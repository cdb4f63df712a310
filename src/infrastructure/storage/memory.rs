//! In-memory storage implementation

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    Class, ClassFilter, ClassPatch, ClassRepository, ClassSortField, DomainError, DomainResult,
    NewClass, NewUser, RepositoryProvider, Role, RoleName, RoleRepository, SortOrder, User,
    UserFilter, UserPatch, UserRepository, UserSortField,
};

type RoleTable = Arc<DashMap<String, Role>>;

/// In-memory roles for development and testing
pub struct InMemoryRoleRepository {
    roles: RoleTable,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self {
            roles: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Role>> {
        Ok(self.roles.get(id).map(|r| r.clone()))
    }

    async fn find_by_name(&self, name: RoleName) -> DomainResult<Option<Role>> {
        Ok(self
            .roles
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.iter().map(|r| r.value().clone()).collect();
        roles.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(roles)
    }

    async fn create(&self, name: RoleName) -> DomainResult<Role> {
        if self.find_by_name(name).await?.is_some() {
            return Err(DomainError::conflict(format!("Role {} already exists", name)));
        }
        let role = Role::new(uuid::Uuid::new_v4().to_string(), name);
        self.roles.insert(role.id.clone(), role.clone());
        Ok(role)
    }
}

/// In-memory users for development and testing.
///
/// Shares the role table with its [`InMemoryRoleRepository`] so that the
/// role reference of each user resolves like a foreign key.
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
    roles: RoleTable,
}

impl InMemoryUserRepository {
    pub fn new(roles: &InMemoryRoleRepository) -> Self {
        Self {
            users: DashMap::new(),
            roles: roles.roles.clone(),
        }
    }

    fn resolve_role(&self, role_id: &str) -> DomainResult<Role> {
        self.roles
            .get(role_id)
            .map(|r| r.clone())
            .ok_or_else(|| DomainError::Storage(format!("Unknown role id '{}'", role_id)))
    }

    fn find_active(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.is_active && pred(u.value()))
            .map(|u| u.value().clone())
    }
}

/// ASCII-only case folding, matching SQLite's LIKE
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

fn compare_by(field: UserSortField, a: &User, b: &User) -> Ordering {
    match field {
        UserSortField::Name => a.name.cmp(&b.name),
        UserSortField::LastName => a.last_name.cmp(&b.last_name),
        UserSortField::Email => a.email.cmp(&b.email),
        UserSortField::Dni => a.dni.cmp(&b.dni),
        UserSortField::BirthDate => a.birth_date.cmp(&b.birth_date),
        UserSortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn find_by_dni(&self, dni: &str) -> DomainResult<Option<User>> {
        Ok(self.find_active(|u| u.dni == dni))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self.find_active(|u| u.email == email))
    }

    async fn find_users_and_count(&self, filter: &UserFilter) -> DomainResult<(Vec<User>, u64)> {
        let mut matching: Vec<User> = self
            .users
            .iter()
            .map(|u| u.value().clone())
            .filter(|u| filter.is_active.map_or(true, |active| u.is_active == active))
            .filter(|u| {
                filter
                    .role
                    .as_deref()
                    .map_or(true, |role| u.role.name.as_str() == role)
            })
            .filter(|u| {
                filter.search.as_deref().map_or(true, |s| {
                    contains_ignore_case(&u.name, s)
                        || contains_ignore_case(&u.last_name, s)
                        || contains_ignore_case(&u.email, s)
                        || contains_ignore_case(&u.dni, s)
                })
            })
            .collect();

        matching.sort_by(|a, b| {
            let primary = match filter.order {
                Some((field, SortOrder::Asc)) => compare_by(field, a, b),
                Some((field, SortOrder::Desc)) => compare_by(field, b, a),
                None => b.created_at.cmp(&a.created_at),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.pagination.offset() as usize)
            .take(filter.pagination.limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        let role = self.resolve_role(&new_user.role_id)?;
        let now = Utc::now();

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            dni: new_user.dni,
            email: new_user.email,
            name: new_user.name,
            last_name: new_user.last_name,
            gender: new_user.gender,
            birth_date: new_user.birth_date,
            password_hash: new_user.password_hash,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<Option<User>> {
        let role = patch
            .role_id
            .as_deref()
            .map(|role_id| self.resolve_role(role_id))
            .transpose()?;

        let Some(mut entry) = self.users.get_mut(id) else {
            return Ok(None);
        };

        patch.apply_to(&mut entry);
        if let Some(role) = role {
            entry.role = role;
        }
        entry.updated_at = Utc::now();

        Ok(Some(entry.clone()))
    }

    async fn count_actives_by_role(&self, role: RoleName) -> DomainResult<u64> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.is_active && u.role.name == role)
            .count() as u64)
    }
}

/// In-memory classes. Names are unique, like the `classes` table.
#[derive(Default)]
pub struct InMemoryClassRepository {
    classes: DashMap<String, Class>,
}

impl InMemoryClassRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.classes
            .iter()
            .any(|c| c.name == name && Some(c.id.as_str()) != except_id)
    }
}

#[async_trait]
impl ClassRepository for InMemoryClassRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Class>> {
        Ok(self.classes.get(id).map(|c| c.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Class>> {
        Ok(self
            .classes
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value().clone()))
    }

    async fn find_classes_and_count(
        &self,
        filter: &ClassFilter,
    ) -> DomainResult<(Vec<Class>, u64)> {
        let mut matching: Vec<Class> = self
            .classes
            .iter()
            .map(|c| c.value().clone())
            .filter(|c| {
                filter.search.as_deref().map_or(true, |s| {
                    contains_ignore_case(&c.name, s)
                        || c
                            .description
                            .as_deref()
                            .is_some_and(|d| contains_ignore_case(d, s))
                })
            })
            .collect();

        matching.sort_by(|a, b| {
            let primary = match filter.order {
                Some((field, order)) => {
                    let ordering = match field {
                        ClassSortField::Name => a.name.cmp(&b.name),
                        ClassSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                    };
                    match order {
                        SortOrder::Asc => ordering,
                        SortOrder::Desc => ordering.reverse(),
                    }
                }
                None => b.created_at.cmp(&a.created_at),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.pagination.offset() as usize)
            .take(filter.pagination.limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn create(&self, new_class: NewClass) -> DomainResult<Class> {
        if self.name_taken(&new_class.name, None) {
            return Err(DomainError::conflict(format!(
                "Class {} already exists",
                new_class.name
            )));
        }
        let now = Utc::now();
        let class = Class {
            id: uuid::Uuid::new_v4().to_string(),
            name: new_class.name,
            description: new_class.description,
            created_at: now,
            updated_at: now,
        };
        self.classes.insert(class.id.clone(), class.clone());
        Ok(class)
    }

    async fn update(&self, id: &str, patch: ClassPatch) -> DomainResult<Option<Class>> {
        if let Some(name) = &patch.name {
            if self.name_taken(name, Some(id)) {
                return Err(DomainError::conflict(format!("Class {} already exists", name)));
            }
        }
        let Some(mut entry) = self.classes.get_mut(id) else {
            return Ok(None);
        };
        patch.apply_to(&mut entry);
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        Ok(self.classes.remove(id).is_some())
    }
}

/// [`RepositoryProvider`] over the in-memory repositories
pub struct InMemoryRepositoryProvider {
    users: InMemoryUserRepository,
    roles: InMemoryRoleRepository,
    classes: InMemoryClassRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let roles = InMemoryRoleRepository::new();
        let users = InMemoryUserRepository::new(&roles);
        Self {
            users,
            roles,
            classes: InMemoryClassRepository::new(),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
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
