//! Response envelopes shared by every endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::PaginatedResult;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request successfully";

/// Standard API envelope.
///
/// On success: `{"success": true, "error": false, "message": "...", "data": {...}}`,
/// on failure: `{"success": false, "error": true, "message": "...", "data": null}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub error: bool,
    pub message: String,
    /// Payload. `null` on failure and for message-only responses
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, DEFAULT_SUCCESS_MESSAGE)
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            error: false,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: true,
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            error: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Page metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: u64,
    pub page_size: u64,
    /// Matching rows across all pages
    pub total: u64,
    pub total_pages: u64,
}

/// One page of a list: `{ content, meta }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    pub content: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn from_result<U>(result: PaginatedResult<U>) -> Self
    where
        T: From<U>,
    {
        Self {
            meta: PageMeta {
                current_page: result.page,
                page_size: result.limit,
                total: result.total,
                total_pages: result.total_pages,
            },
            content: result.items.into_iter().map(T::from).collect(),
        }
    }
}
