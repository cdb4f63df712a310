//! Authentication middleware for Axum

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::application::AuthService;
use crate::domain::{RoleName, User};
use crate::infrastructure::crypto::verify_token;
use crate::interfaces::http::common::{ApiError, ApiResponse};

/// Authentication error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    InsufficientPermissions,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
            Self::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired"),
            Self::InsufficientPermissions => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

/// State needed to verify bearer tokens and resolve their subject
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: Arc<AuthService>,
}

/// Caller identity: token subject resolved against the stored account
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.name.as_str().to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == RoleName::Admin.as_str()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ").map(str::trim)
}

/// JWT bearer authentication. Inserts [`AuthenticatedUser`] into the
/// request extensions on success.
///
/// The role comes from the stored account, not the token, so a demoted or
/// deleted user loses access before the token expires.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(auth_header) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return AuthError::MissingToken.into_response();
    };

    let Some(token) = extract_token(auth_header) else {
        return AuthError::InvalidToken.into_response();
    };

    let claims = match verify_token(token, auth_state.auth_service.jwt_config()) {
        Ok(claims) if claims.is_expired() => return AuthError::ExpiredToken.into_response(),
        Ok(claims) => claims,
        Err(e) => {
            return match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AuthError::ExpiredToken.into_response()
                }
                _ => AuthError::InvalidToken.into_response(),
            }
        }
    };

    match auth_state.auth_service.active_user(&claims.sub).await {
        Ok(Some(user)) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::from_user(&user));
            next.run(request).await
        }
        Ok(None) => {
            warn!(user_id = %claims.sub, "Token subject is unknown or inactive");
            AuthError::InvalidToken.into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// Rejects non-admin callers. Must run after [`auth_middleware`].
pub async fn require_admin(request: Request<Body>, next: Next) -> Response {
    match request.extensions().get::<AuthenticatedUser>() {
        Some(user) if user.is_admin() => next.run(request).await,
        Some(_) => AuthError::InsufficientPermissions.into_response(),
        None => AuthError::MissingToken.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Basic abc"), None);
        assert_eq!(extract_token("abc"), None);
    }

    #[test]
    fn admin_is_detected_from_role_name() {
        let user = AuthenticatedUser {
            user_id: "1".into(),
            email: "a@b.c".into(),
            role: "ADMIN".into(),
        };
        assert!(user.is_admin());
        assert!(!AuthenticatedUser {
            role: "STUDENT".into(),
            ..user
        }
        .is_admin());
    }
}
