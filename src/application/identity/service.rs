//! User management service: application-layer orchestration
//!
//! All user-related business rules live here: role checks, identity
//! uniqueness among active users, the last-admin invariant and the
//! password lifecycle. HTTP handlers are thin wrappers around it.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    CreateUserDto, CreatedUser, DomainError, DomainResult, Gender, GetUserDto, NewUser,
    PasswordHasher, RepositoryProvider, Role, RoleName, UpdateEmailDto, UpdatePasswordDto,
    UpdateUserDto, User, UserFilter, UserPatch, UserProfile, UserView,
};
use crate::infrastructure::crypto::generate_password;
use crate::shared::PaginatedResult;

pub const ROLE_NOT_FOUND: &str = "Role does not exist";
pub const DNI_TAKEN: &str = "DNI already registered";
pub const EMAIL_TAKEN: &str = "Email already in use";
pub const INVALID_GENDER: &str = "Gender not valid";
pub const PASSWORDS_DO_NOT_MATCH: &str = "New passwords do not match";
pub const INCORRECT_PASSWORD: &str = "Incorrect password";
pub const LAST_ADMIN_ROLE_CHANGE: &str = "Cannot change this user role";
pub const LAST_ADMIN_DELETE: &str = "Cannot delete this user";

/// User service: orchestrates the user-management use-cases.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repos, hasher }
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a user with a generated password.
    ///
    /// The plaintext password is returned once, for out-of-band delivery;
    /// only its hash is stored.
    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<CreatedUser> {
        let role = self.role_or_throw(&dto.role_id).await?;

        let gender = match non_blank(dto.gender.as_deref()) {
            Some(raw) => parse_gender(raw)?,
            None => Gender::default(),
        };

        self.validate_dni(&dto.dni, None).await?;
        self.validate_email(&dto.email, None).await?;

        let password = generate_password();
        let password_hash = self.hasher.hash(&password)?;

        let user = self
            .repos
            .users()
            .create(NewUser {
                dni: dto.dni,
                email: dto.email,
                name: dto.name,
                last_name: dto.last_name,
                gender,
                birth_date: dto.birth_date.unwrap_or_else(|| Utc::now().date_naive()),
                password_hash,
                role_id: role.id,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role.name, "User created");

        Ok(CreatedUser {
            user: user.into(),
            password,
        })
    }

    /// Apply a partial update to an active user.
    pub async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<UserView> {
        let existing = self.active_user_or_throw(id).await?;

        let gender = non_blank(dto.gender.as_deref())
            .map(parse_gender)
            .transpose()?;

        if let Some(ref role_id) = dto.role_id {
            let role = self.role_or_throw(role_id).await?;
            if existing.is_admin() && !role.is_admin() {
                self.ensure_not_last_admin(&existing, LAST_ADMIN_ROLE_CHANGE)
                    .await?;
            }
        }

        if let Some(ref dni) = dto.dni {
            self.validate_dni(dni, Some(id)).await?;
        }
        if let Some(ref email) = dto.email {
            self.validate_email(email, Some(id)).await?;
        }

        let patch = UserPatch {
            dni: dto.dni,
            email: dto.email,
            name: dto.name,
            last_name: dto.last_name,
            gender,
            birth_date: dto.birth_date,
            role_id: dto.role_id,
            ..Default::default()
        };

        let updated = self.apply(id, patch).await?;
        info!(user_id = %id, "User updated");
        Ok(updated.into())
    }

    /// Deactivate a user, stamp the deletion time and overwrite its password.
    pub async fn soft_delete_user(&self, id: &str) -> DomainResult<()> {
        let user = self.active_user_or_throw(id).await?;

        if user.is_admin() {
            self.ensure_not_last_admin(&user, LAST_ADMIN_DELETE).await?;
        }

        self.apply(id, UserPatch::soft_delete(Utc::now())).await?;
        info!(user_id = %id, "User soft-deleted");
        Ok(())
    }

    /// Change a user's password after verifying the current one.
    pub async fn update_password(&self, id: &str, dto: UpdatePasswordDto) -> DomainResult<()> {
        if dto.new_password != dto.new_password_confirm {
            return Err(DomainError::validation(PASSWORDS_DO_NOT_MATCH));
        }

        let user = self.active_user_or_throw(id).await?;
        self.verify_current_password(&user, &dto.password)?;

        let new_hash = self.hasher.hash(&dto.new_password)?;
        self.apply(id, UserPatch::password(new_hash)).await?;

        info!(user_id = %id, "Password changed");
        Ok(())
    }

    /// Change a user's email after verifying the current password.
    pub async fn update_email(&self, id: &str, dto: UpdateEmailDto) -> DomainResult<()> {
        let user = self.active_user_or_throw(id).await?;
        self.verify_current_password(&user, &dto.password)?;
        self.validate_email(&dto.new_email, Some(id)).await?;

        self.apply(id, UserPatch::email(dto.new_email)).await?;

        info!(user_id = %id, "Email changed");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Get a single active user.
    pub async fn get_user(&self, id: &str) -> DomainResult<UserView> {
        Ok(self.active_user_or_throw(id).await?.into())
    }

    /// The caller's own profile.
    pub async fn user_profile(&self, id: &str) -> DomainResult<UserProfile> {
        Ok(self.active_user_or_throw(id).await?.into())
    }

    /// List users with filtering, search, sorting and pagination.
    pub async fn get_users(&self, dto: GetUserDto) -> DomainResult<PaginatedResult<UserView>> {
        let filter = UserFilter::from(&dto);
        let (users, total) = self.repos.users().find_users_and_count(&filter).await?;

        let page = PaginatedResult::new(
            users,
            total,
            filter.pagination.page,
            filter.pagination.limit,
        );
        Ok(page.map(UserView::from))
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn active_user_or_throw(&self, id: &str) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn role_or_throw(&self, role_id: &str) -> DomainResult<Role> {
        self.repos
            .roles()
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| DomainError::validation(ROLE_NOT_FOUND))
    }

    async fn apply(&self, id: &str, patch: UserPatch) -> DomainResult<User> {
        self.repos
            .users()
            .update(id, patch)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Best-effort read-then-act check; not guarded by a transaction.
    async fn ensure_not_last_admin(&self, user: &User, message: &str) -> DomainResult<()> {
        let admins = self
            .repos
            .users()
            .count_actives_by_role(RoleName::Admin)
            .await?;
        if admins <= 1 {
            warn!(user_id = %user.id, "Rejected operation on the last active admin");
            return Err(DomainError::forbidden(message));
        }
        Ok(())
    }

    fn verify_current_password(&self, user: &User, password: &str) -> DomainResult<()> {
        if self.hasher.verify(password, &user.password_hash) {
            Ok(())
        } else {
            Err(DomainError::validation(INCORRECT_PASSWORD))
        }
    }

    async fn validate_dni(&self, dni: &str, own_id: Option<&str>) -> DomainResult<()> {
        match self.repos.users().find_by_dni(dni).await? {
            Some(holder) if Some(holder.id.as_str()) != own_id => {
                Err(DomainError::conflict(DNI_TAKEN))
            }
            _ => Ok(()),
        }
    }

    async fn validate_email(&self, email: &str, own_id: Option<&str>) -> DomainResult<()> {
        match self.repos.users().find_by_email(email).await? {
            Some(holder) if Some(holder.id.as_str()) != own_id => {
                Err(DomainError::conflict(EMAIL_TAKEN))
            }
            _ => Ok(()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_gender(raw: &str) -> DomainResult<Gender> {
    Gender::parse(raw).ok_or_else(|| DomainError::validation(INVALID_GENDER))
}
