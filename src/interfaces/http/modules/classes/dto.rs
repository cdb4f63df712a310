use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Class, CreateClassDto, GetClassDto, UpdateClassDto};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Class> for ClassDto {
    fn from(c: Class) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
}

impl From<CreateClassRequest> for CreateClassDto {
    fn from(r: CreateClassRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
        }
    }
}

/// Partial update; an empty description clears it
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
}

impl From<UpdateClassRequest> for UpdateClassDto {
    fn from(r: UpdateClassRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListClassesParams {
    /// Page number, starting at 1
    pub page: Option<String>,
    /// Page size (default 15, max 100)
    pub limit: Option<String>,
    /// Search in name and description
    pub s: Option<String>,
    /// name or createdAt
    pub order_by: Option<String>,
    /// asc or desc
    pub sort: Option<String>,
}

impl From<ListClassesParams> for GetClassDto {
    fn from(p: ListClassesParams) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            s: p.s,
            order_by: p.order_by,
            sort: p.sort,
        }
    }
}
