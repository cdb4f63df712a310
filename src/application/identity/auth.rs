//! Login use-case

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DomainError, DomainResult, PasswordHasher, RepositoryProvider, User, UserProfile,
};
use crate::infrastructure::crypto::{create_token, JwtConfig};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user: UserProfile,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    hasher: Arc<dyn PasswordHasher>,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        hasher: Arc<dyn PasswordHasher>,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            repos,
            hasher,
            jwt_config,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    /// Authenticate an active user by email + password and return a JWT.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        // find_by_email only sees active users, so deleted accounts fail here too
        let Some(user) = self.repos.users().find_by_email(email).await? else {
            warn!(email, "Login attempt for unknown or inactive account");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash) {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = create_token(
            &user.id,
            &user.email,
            user.role.name.as_str(),
            &self.jwt_config,
        )
        .map_err(|e| DomainError::Crypto(format!("Failed to create token: {}", e)))?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user: user.into(),
        })
    }

    /// Current account behind a verified token subject. Deleted or unknown
    /// accounts resolve to `None`, so their tokens stop working at once.
    pub async fn active_user(&self, user_id: &str) -> DomainResult<Option<User>> {
        Ok(self
            .repos
            .users()
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::identity::UserService;
    use crate::domain::{CreateUserDto, RoleName};
    use crate::infrastructure::crypto::{verify_token, BcryptHasher};
    use crate::infrastructure::InMemoryRepositoryProvider;

    struct Ctx {
        auth: AuthService,
        users: UserService,
    }

    async fn ctx() -> Ctx {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
        let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::new(4));
        repos.roles().create(RoleName::Admin).await.unwrap();
        let jwt = JwtConfig {
            secret: "test-secret".into(),
            ..Default::default()
        };
        Ctx {
            auth: AuthService::new(repos.clone(), hasher.clone(), jwt),
            users: UserService::new(repos, hasher),
        }
    }

    async fn create_admin(c: &Ctx, dni: &str, email: &str) -> (String, String) {
        let roles = c.auth.repos.roles().find_by_name(RoleName::Admin).await.unwrap().unwrap();
        let created = c
            .users
            .create_user(CreateUserDto {
                dni: dni.into(),
                email: email.into(),
                name: "Ada".into(),
                last_name: "Lovelace".into(),
                gender: None,
                birth_date: None,
                role_id: roles.id,
            })
            .await
            .unwrap();
        (created.user.id, created.password)
    }

    #[tokio::test]
    async fn login_issues_token_with_user_claims() {
        let c = ctx().await;
        let (id, password) = create_admin(&c, "1", "ada@school.test").await;

        let result = c.auth.login("ada@school.test", &password).await.unwrap();
        assert_eq!(result.token_type, "Bearer");
        assert_eq!(result.expires_in, 24 * 3600);
        assert_eq!(result.user.id, id);

        let claims = verify_token(&result.token, c.auth.jwt_config()).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "ada@school.test");
        assert_eq!(claims.role, "ADMIN");
    }

    #[tokio::test]
    async fn login_with_wrong_password_or_unknown_email_fails() {
        let c = ctx().await;
        let (_, password) = create_admin(&c, "1", "ada@school.test").await;

        let err = c.auth.login("ada@school.test", "wrong").await.unwrap_err();
        assert_eq!(err, DomainError::unauthorized(INVALID_CREDENTIALS));

        let err = c.auth.login("nobody@school.test", &password).await.unwrap_err();
        assert_eq!(err, DomainError::unauthorized(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn soft_deleted_user_cannot_login() {
        let c = ctx().await;
        create_admin(&c, "1", "keeper@school.test").await;
        let (id, password) = create_admin(&c, "2", "leaver@school.test").await;

        c.users.soft_delete_user(&id).await.unwrap();

        let err = c.auth.login("leaver@school.test", &password).await.unwrap_err();
        assert_eq!(err, DomainError::unauthorized(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn active_user_skips_deleted_accounts() {
        let c = ctx().await;
        create_admin(&c, "1", "keeper@school.test").await;
        let (id, _) = create_admin(&c, "2", "leaver@school.test").await;

        assert!(c.auth.active_user(&id).await.unwrap().is_some());
        c.users.soft_delete_user(&id).await.unwrap();
        assert!(c.auth.active_user(&id).await.unwrap().is_none());
        assert!(c.auth.active_user("missing").await.unwrap().is_none());
    }
}
