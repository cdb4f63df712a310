//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::AuthResult;
use crate::interfaces::http::modules::users::ProfileDto;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user: ProfileDto,
}

impl From<AuthResult> for LoginResponse {
    fn from(r: AuthResult) -> Self {
        Self {
            token: r.token,
            token_type: r.token_type,
            expires_in: r.expires_in,
            user: r.user.into(),
        }
    }
}
