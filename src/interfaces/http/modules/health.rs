//! Health check and API info handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use utoipa::ToSchema;

use crate::interfaces::http::common::ApiResponse;

pub const API_VERSION: &str = "v1";

/// Health check state. `db` is absent when running on in-memory storage.
#[derive(Clone)]
pub struct HealthState {
    pub db: Option<DatabaseConnection>,
    pub started_at: Arc<Instant>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<ComponentHealth>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
}

async fn ping(db: &DatabaseConnection) -> ComponentHealth {
    let started = Instant::now();
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    match db.execute(stmt).await {
        Ok(_) => ComponentHealth {
            status: "ok".to_string(),
            latency_ms: Some(started.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::error!(error = %e, "Health check database ping failed");
            ComponentHealth {
                status: "error".to_string(),
                latency_ms: None,
            }
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match &state.db {
        Some(db) => Some(ping(db).await),
        None => None,
    };

    let healthy = database.as_ref().map_or(true, |d| d.status == "ok");
    let (status, label) = if healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            database,
        }),
    )
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    /// Server time in milliseconds since the Unix epoch
    pub date: i64,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "API version and server time", body = ApiResponse<ApiInfo>)
    )
)]
pub async fn api_info() -> Json<ApiResponse<ApiInfo>> {
    Json(ApiResponse::success(ApiInfo {
        date: Utc::now().timestamp_millis(),
        version: API_VERSION.to_string(),
    }))
}
