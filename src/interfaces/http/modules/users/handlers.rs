//! User management API handlers
//!
//! Admin endpoints for managing users plus the caller's own profile,
//! password and email. Delegates to `UserService`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateUserRequest, CreatedUserDto, ListUsersParams, ProfileDto, UpdateEmailRequest,
    UpdatePasswordRequest, UpdateUserRequest, UserDto,
};
use crate::application::UserService;
use crate::interfaces::http::common::{ApiResponse, ApiResult, Paginated, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(ListUsersParams),
    responses(
        (status = 200, description = "User list", body = ApiResponse<Paginated<UserDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    Query(params): Query<ListUsersParams>,
) -> ApiResult<Json<ApiResponse<Paginated<UserDto>>>> {
    let result = state.user_service.get_users(params.into()).await?;
    Ok(Json(ApiResponse::success(Paginated::from_result(result))))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<CreatedUserDto>),
        (status = 400, description = "Validation or business rule error")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CreatedUserDto>>)> {
    let created = state.user_service.create_user(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 400, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation or business rule error")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = state.user_service.update_user(&id, request.into()).await?;
    Ok(Json(ApiResponse::success_with_message(user.into(), "User updated")))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<String>),
        (status = 400, description = "User not found or last admin")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.user_service.soft_delete_user(&id).await?;
    Ok(Json(ApiResponse::message("User deleted")))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller profile", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_profile(
    State(state): State<UserHandlerState>,
    caller: AuthenticatedUser,
) -> ApiResult<Json<ApiResponse<ProfileDto>>> {
    let profile = state.user_service.user_profile(&caller.user_id).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/me/password",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = ApiResponse<String>),
        (status = 400, description = "Passwords do not match or current password is wrong")
    )
)]
pub async fn update_password(
    State(state): State<UserHandlerState>,
    caller: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .user_service
        .update_password(&caller.user_id, request.into())
        .await?;
    Ok(Json(ApiResponse::message("Password updated")))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/me/email",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateEmailRequest,
    responses(
        (status = 200, description = "Email updated", body = ApiResponse<String>),
        (status = 400, description = "Wrong password or email already in use")
    )
)]
pub async fn update_email(
    State(state): State<UserHandlerState>,
    caller: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<UpdateEmailRequest>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .user_service
        .update_email(&caller.user_id, request.into())
        .await?;
    Ok(Json(ApiResponse::message("Email updated")))
}
