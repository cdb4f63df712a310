//! JSON body extractor that also runs `validator` rules.
//!
//! Both malformed JSON and failed validation are rejected with 400 and the
//! standard error envelope, listing every failing field.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;

/// Like `axum::Json<T>`, but the value is guaranteed to pass `T::validate()`.
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    JsonError(JsonRejection),
    ValidationError(validator::ValidationErrors),
}

fn describe(errors: &validator::ValidationErrors) -> String {
    let mut field_errors: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();
    // field_errors() is a HashMap; keep the message stable
    field_errors.sort();

    if field_errors.is_empty() {
        "Validation failed".to_string()
    } else {
        field_errors.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::JsonError(rejection) => format!("Invalid JSON: {}", rejection.body_text()),
            Self::ValidationError(errors) => describe(&errors),
        };
        (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(email(message = "invalid email"))]
        email: String,
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<TestBody>) -> &'static str {
        "ok"
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/test", post(handler));
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let (status, _) = post_json(r#"{"name":"Ana","email":"ana@school.test"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) = post_json("not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn validation_failure_lists_fields() {
        let (status, body) = post_json(r#"{"name":"","email":"nope"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "email: invalid email; name: name is required");
    }
}
