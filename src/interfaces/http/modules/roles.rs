//! Role listing

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::RoleService;
use crate::domain::Role;
use crate::interfaces::http::common::{ApiResponse, ApiResult};

#[derive(Clone)]
pub struct RoleHandlerState {
    pub role_service: Arc<RoleService>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleDto {
    pub id: String,
    /// ADMIN, TEACHER or STUDENT
    pub name: String,
}

impl From<Role> for RoleDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "Roles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All roles", body = ApiResponse<Vec<RoleDto>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_roles(
    State(state): State<RoleHandlerState>,
) -> ApiResult<Json<ApiResponse<Vec<RoleDto>>>> {
    let roles = state.role_service.list_roles().await?;
    Ok(Json(ApiResponse::success(
        roles.into_iter().map(RoleDto::from).collect(),
    )))
}
