//! Role queries and startup seeding

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DomainError, DomainResult, NewUser, PasswordHasher, RepositoryProvider, Role, RoleName,
};
use crate::infrastructure::crypto::generate_password;

/// Administrator account created on first start
#[derive(Debug, Clone)]
pub struct DefaultAdmin {
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    /// Plaintext initial password; a random one is generated when empty
    pub password: String,
}

/// Outcome of [`RoleService::ensure_default_admin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminSeed {
    /// An active user already holds the configured email or DNI
    Skipped,
    /// `generated_password` is set when no initial password was configured.
    /// It is not logged; the caller hands it to the operator once.
    Created { generated_password: Option<String> },
}

pub struct RoleService {
    repos: Arc<dyn RepositoryProvider>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RoleService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repos, hasher }
    }

    pub async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        self.repos.roles().find_all().await
    }

    /// Create every base role that is missing. Returns how many were created.
    pub async fn ensure_base_roles(&self) -> DomainResult<usize> {
        let mut created = 0;
        for name in RoleName::ALL {
            if self.repos.roles().find_by_name(name).await?.is_none() {
                self.repos.roles().create(name).await?;
                info!(role = %name, "Created base role");
                created += 1;
            }
        }
        Ok(created)
    }

    /// Create the configured administrator unless an active user already
    /// holds its email.
    pub async fn ensure_default_admin(&self, admin: DefaultAdmin) -> DomainResult<AdminSeed> {
        let users = self.repos.users();

        if users.find_by_email(&admin.email).await?.is_some() {
            return Ok(AdminSeed::Skipped);
        }
        if users.find_by_dni(&admin.dni).await?.is_some() {
            warn!(dni = %admin.dni, "Default admin DNI belongs to another user; skipping");
            return Ok(AdminSeed::Skipped);
        }

        let role = self
            .repos
            .roles()
            .find_by_name(RoleName::Admin)
            .await?
            .ok_or_else(|| DomainError::not_found("Role"))?;

        let generated_password = admin.password.is_empty().then(generate_password);
        let password = generated_password.as_deref().unwrap_or(&admin.password);

        let user = users
            .create(NewUser {
                dni: admin.dni,
                email: admin.email,
                name: admin.name,
                last_name: admin.last_name,
                gender: Default::default(),
                birth_date: chrono::Utc::now().date_naive(),
                password_hash: self.hasher.hash(password)?,
                role_id: role.id,
            })
            .await?;

        info!(
            user_id = %user.id,
            email = %user.email,
            generated_password = generated_password.is_some(),
            "Default admin created"
        );
        Ok(AdminSeed::Created { generated_password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::BcryptHasher;
    use crate::infrastructure::InMemoryRepositoryProvider;

    fn service() -> (RoleService, Arc<InMemoryRepositoryProvider>, Arc<BcryptHasher>) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hasher = Arc::new(BcryptHasher::new(4));
        (
            RoleService::new(repos.clone(), hasher.clone()),
            repos,
            hasher,
        )
    }

    fn admin(password: &str) -> DefaultAdmin {
        DefaultAdmin {
            dni: "00000000".into(),
            email: "admin@school.test".into(),
            name: "Admin".into(),
            last_name: "Root".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn base_roles_are_seeded_once() {
        let (service, _, _) = service();

        assert_eq!(service.ensure_base_roles().await.unwrap(), 3);
        assert_eq!(service.ensure_base_roles().await.unwrap(), 0);

        let names: Vec<RoleName> = service
            .list_roles()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec![RoleName::Admin, RoleName::Student, RoleName::Teacher]);
    }

    #[tokio::test]
    async fn default_admin_is_created_with_configured_password() {
        let (service, repos, hasher) = service();
        service.ensure_base_roles().await.unwrap();

        assert_eq!(
            service.ensure_default_admin(admin("s3cret")).await.unwrap(),
            AdminSeed::Created {
                generated_password: None
            }
        );
        assert_eq!(
            service.ensure_default_admin(admin("s3cret")).await.unwrap(),
            AdminSeed::Skipped
        );

        let stored = repos
            .users()
            .find_by_email("admin@school.test")
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_admin());
        assert!(hasher.verify("s3cret", &stored.password_hash));
        assert_eq!(repos.users().count_actives_by_role(RoleName::Admin).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn default_admin_without_password_gets_generated_one() {
        let (service, repos, hasher) = service();
        service.ensure_base_roles().await.unwrap();

        let AdminSeed::Created {
            generated_password: Some(password),
        } = service.ensure_default_admin(admin("")).await.unwrap()
        else {
            panic!("expected a generated password");
        };
        assert_eq!(password.len(), 12);

        let stored = repos
            .users()
            .find_by_email("admin@school.test")
            .await
            .unwrap()
            .unwrap();
        assert!(hasher.verify(&password, &stored.password_hash));
    }

    #[tokio::test]
    async fn default_admin_requires_admin_role() {
        let (service, _, _) = service();
        let err = service.ensure_default_admin(admin("x")).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Role"));
    }
}
