//! User DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{
    CreateUserDto, CreatedUser, GetUserDto, UpdateEmailDto, UpdatePasswordDto, UpdateUserDto,
    UserProfile, UserView,
};

/// User API representation (admin view)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    /// `MALE`, `FEMALE` or `OTHER`
    pub gender: String,
    pub birth_date: NaiveDate,
    pub role_id: String,
    /// Role name, e.g. `STUDENT`
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<UserView> for UserDto {
    fn from(u: UserView) -> Self {
        Self {
            id: u.id,
            dni: u.dni,
            email: u.email,
            name: u.name,
            last_name: u.last_name,
            gender: u.gender.to_string(),
            birth_date: u.birth_date,
            role_id: u.role_id,
            role: u.role.to_string(),
            is_active: u.is_active,
            created_at: u.created_at,
            updated_at: u.updated_at,
            deleted_at: u.deleted_at,
        }
    }
}

/// Own profile of the caller
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub role: String,
}

impl From<UserProfile> for ProfileDto {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id,
            dni: p.dni,
            email: p.email,
            name: p.name,
            last_name: p.last_name,
            gender: p.gender.to_string(),
            birth_date: p.birth_date,
            role: p.role.to_string(),
        }
    }
}

/// Newly created user together with its one-time password
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    /// Generated plaintext password, shown only once
    pub password: String,
}

impl From<CreatedUser> for CreatedUserDto {
    fn from(c: CreatedUser) -> Self {
        Self {
            user: c.user.into(),
            password: c.password,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 20, message = "dni is required"))]
    pub dni: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "lastName is required"))]
    pub last_name: String,
    /// Defaults to `OTHER`
    pub gender: Option<String>,
    /// Defaults to the current date
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "roleId is required"))]
    pub role_id: String,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            dni: r.dni,
            email: r.email,
            name: r.name,
            last_name: r.last_name,
            gender: r.gender,
            birth_date: r.birth_date,
            role_id: r.role_id,
        }
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 20, message = "dni must not be empty"))]
    pub dni: Option<String>,
    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "lastName must not be empty"))]
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub role_id: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            dni: r.dni,
            email: r.email,
            name: r.name,
            last_name: r.last_name,
            gender: r.gender,
            birth_date: r.birth_date,
            role_id: r.role_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(length(min = 6, max = 128, message = "newPassword must be 6-128 characters"))]
    pub new_password: String,
    #[validate(length(min = 1, message = "newPasswordConfirm is required"))]
    pub new_password_confirm: String,
}

impl From<UpdatePasswordRequest> for UpdatePasswordDto {
    fn from(r: UpdatePasswordRequest) -> Self {
        Self {
            password: r.password,
            new_password: r.new_password,
            new_password_confirm: r.new_password_confirm,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailRequest {
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(email(message = "invalid email format"))]
    pub new_email: String,
}

impl From<UpdateEmailRequest> for UpdateEmailDto {
    fn from(r: UpdateEmailRequest) -> Self {
        Self {
            password: r.password,
            new_email: r.new_email,
        }
    }
}

/// List users query parameters. Values are taken as raw text; anything
/// unparsable falls back to its default.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Page number, starting at 1
    pub page: Option<String>,
    /// Page size (default 15, max 100)
    pub limit: Option<String>,
    /// `1` for active users, anything else for inactive ones
    pub is_active: Option<String>,
    /// Role name (ADMIN, TEACHER, STUDENT)
    pub role: Option<String>,
    /// Search in name, last name, email and dni
    pub s: Option<String>,
    /// name, lastName, email, dni, birthDate or createdAt
    pub order_by: Option<String>,
    /// asc or desc
    pub sort: Option<String>,
}

impl From<ListUsersParams> for GetUserDto {
    fn from(p: ListUsersParams) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            is_active: p.is_active,
            role: p.role,
            s: p.s,
            order_by: p.order_by,
            sort: p.sort,
        }
    }
}
