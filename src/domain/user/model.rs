use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::Role;

/// Value stored in place of the password hash of a soft-deleted user.
/// It is not a bcrypt hash, so verification against it always fails.
pub const DELETED_PASSWORD_SENTINEL: &str = "#deleted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Some(Self::Male),
            "FEMALE" => Some(Self::Female),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User model
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data needed to insert a user; ID and timestamps are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub password_hash: String,
    pub role_id: String,
}

/// Field-level changes applied by `UserRepository::update`.
/// `updated_at` is always refreshed by the repository.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub dni: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub role_id: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserPatch {
    /// Deactivate, stamp the deletion time and overwrite the password.
    pub fn soft_delete(at: DateTime<Utc>) -> Self {
        Self {
            is_active: Some(false),
            deleted_at: Some(at),
            password_hash: Some(DELETED_PASSWORD_SENTINEL.to_string()),
            ..Default::default()
        }
    }

    pub fn password(hash: String) -> Self {
        Self {
            password_hash: Some(hash),
            ..Default::default()
        }
    }

    pub fn email(email: String) -> Self {
        Self {
            email: Some(email),
            ..Default::default()
        }
    }

    /// Apply the patch to an in-memory user. `role_id` and timestamps are
    /// left to the repository, which resolves the role.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(dni) = &self.dni {
            user.dni = dni.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(last_name) = &self.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(gender) = self.gender {
            user.gender = gender;
        }
        if let Some(birth_date) = self.birth_date {
            user.birth_date = birth_date;
        }
        if let Some(hash) = &self.password_hash {
            user.password_hash = hash.clone();
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(deleted_at) = self.deleted_at {
            user.deleted_at = Some(deleted_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoleName;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: "u1".into(),
            dni: "12345678".into(),
            email: "ana@school.test".into(),
            name: "Ana".into(),
            last_name: "Pérez".into(),
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(2001, 4, 12).unwrap(),
            password_hash: "hash".into(),
            role: Role::new("r-admin", RoleName::Admin),
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn gender_parse_accepts_known_values_only() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("FEMALE"), Some(Gender::Female));
        assert_eq!(Gender::parse("Other"), Some(Gender::Other));
        assert_eq!(Gender::parse("robot"), None);
        assert_eq!(Gender::default(), Gender::Other);
    }

    #[test]
    fn soft_delete_patch_overwrites_password() {
        let mut user = sample_user();
        let at = Utc::now();
        UserPatch::soft_delete(at).apply_to(&mut user);

        assert!(!user.is_active);
        assert_eq!(user.deleted_at, Some(at));
        assert_eq!(user.password_hash, DELETED_PASSWORD_SENTINEL);
        assert_eq!(user.email, "ana@school.test");
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut user = sample_user();
        let before = user.clone();
        UserPatch::default().apply_to(&mut user);
        assert_eq!(user, before);
    }
}
