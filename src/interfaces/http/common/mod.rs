mod error;
mod response;
mod validated_json;

pub use error::{ApiError, ApiResult, INTERNAL_ERROR_MESSAGE};
pub use response::{ApiResponse, PageMeta, Paginated, DEFAULT_SUCCESS_MESSAGE};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
