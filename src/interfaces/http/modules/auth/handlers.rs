//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{LoginRequest, LoginResponse};
use crate::application::AuthService;
use crate::interfaces::http::common::{ApiResponse, ApiResult, ValidatedJson};

#[derive(Clone)]
pub struct AuthHandlerState {
    pub auth_service: Arc<AuthService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let result = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(ApiResponse::success(result.into())))
}
