//! Read models returned by the user service. None of them carries the
//! password hash.

use chrono::{DateTime, NaiveDate, Utc};

use super::{Gender, User};
use crate::domain::RoleName;

/// Full user view for administrators
#[derive(Debug, Clone, PartialEq)]
pub struct UserView {
    pub id: String,
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub role_id: String,
    pub role: RoleName,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            dni: u.dni,
            email: u.email,
            name: u.name,
            last_name: u.last_name,
            gender: u.gender,
            birth_date: u.birth_date,
            role_id: u.role.id,
            role: u.role.name,
            is_active: u.is_active,
            created_at: u.created_at,
            updated_at: u.updated_at,
            deleted_at: u.deleted_at,
        }
    }
}

/// What a user sees about themselves: no role ID, flags or timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub role: RoleName,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            dni: u.dni,
            email: u.email,
            name: u.name,
            last_name: u.last_name,
            gender: u.gender,
            birth_date: u.birth_date,
            role: u.role.name,
        }
    }
}

/// Result of user creation. `password` is the generated plaintext and is
/// only ever available here.
#[derive(Debug, Clone)]
pub struct CreatedUser {
    pub user: UserView,
    pub password: String,
}
