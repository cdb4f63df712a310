//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::DomainError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Handler error. Wraps a [`DomainError`] so handlers can use `?`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound { .. }
            | DomainError::Validation(_)
            | DomainError::Conflict(_)
            | DomainError::Forbidden(_) => StatusCode::BAD_REQUEST,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Storage(_) | DomainError::Crypto(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if self.0.is_internal() {
            error!(error = %self.0, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
