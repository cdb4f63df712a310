//! Class API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{ClassDto, CreateClassRequest, ListClassesParams, UpdateClassRequest};
use crate::application::ClassService;
use crate::interfaces::http::common::{ApiResponse, ApiResult, Paginated, ValidatedJson};

#[derive(Clone)]
pub struct ClassHandlerState {
    pub class_service: Arc<ClassService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/classes",
    tag = "Classes",
    security(("bearer_auth" = [])),
    params(ListClassesParams),
    responses(
        (status = 200, description = "Class list", body = ApiResponse<Paginated<ClassDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_classes(
    State(state): State<ClassHandlerState>,
    Query(params): Query<ListClassesParams>,
) -> ApiResult<Json<ApiResponse<Paginated<ClassDto>>>> {
    let result = state.class_service.get_classes(params.into()).await?;
    Ok(Json(ApiResponse::success(Paginated::from_result(result))))
}

#[utoipa::path(
    post,
    path = "/api/v1/classes",
    tag = "Classes",
    security(("bearer_auth" = [])),
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Class created", body = ApiResponse<ClassDto>),
        (status = 400, description = "Validation error or name already exists")
    )
)]
pub async fn create_class(
    State(state): State<ClassHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateClassRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ClassDto>>)> {
    let class = state.class_service.create_class(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(class.into(), "Class created")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/classes/{id}",
    tag = "Classes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class details", body = ApiResponse<ClassDto>),
        (status = 400, description = "Class not found")
    )
)]
pub async fn get_class(
    State(state): State<ClassHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<ClassDto>>> {
    let class = state.class_service.get_class(&id).await?;
    Ok(Json(ApiResponse::success(class.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/classes/{id}",
    tag = "Classes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Class ID")),
    request_body = UpdateClassRequest,
    responses(
        (status = 200, description = "Class updated", body = ApiResponse<ClassDto>),
        (status = 400, description = "Validation error, class not found or name taken")
    )
)]
pub async fn update_class(
    State(state): State<ClassHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateClassRequest>,
) -> ApiResult<Json<ApiResponse<ClassDto>>> {
    let class = state.class_service.update_class(&id, request.into()).await?;
    Ok(Json(ApiResponse::success_with_message(class.into(), "Class updated")))
}

#[utoipa::path(
    delete,
    path = "/api/v1/classes/{id}",
    tag = "Classes",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class deleted", body = ApiResponse<String>),
        (status = 400, description = "Class not found")
    )
)]
pub async fn delete_class(
    State(state): State<ClassHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.class_service.delete_class(&id).await?;
    Ok(Json(ApiResponse::message("Class deleted")))
}
