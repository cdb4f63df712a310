//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    http::{Method, StatusCode, Uri},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AuthService, ClassService, RoleService, UserService};
use crate::interfaces::http::common::{ApiResponse, PageMeta};
use crate::interfaces::http::middleware::{auth_middleware, require_admin, AuthState};
use crate::interfaces::http::modules::{auth, classes, health, request_id, roles, users};

/// Shared state of every route. Each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    pub role_service: Arc<RoleService>,
    pub class_service: Arc<ClassService>,
    pub db: Option<DatabaseConnection>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        auth_service: Arc<AuthService>,
        role_service: Arc<RoleService>,
        class_service: Arc<ClassService>,
        db: Option<DatabaseConnection>,
    ) -> Self {
        Self {
            user_service,
            auth_service,
            role_service,
            class_service,
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for auth::AuthHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            auth_service: Arc::clone(&s.auth_service),
        }
    }
}

impl FromRef<AppState> for roles::RoleHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            role_service: Arc::clone(&s.role_service),
        }
    }
}

impl FromRef<AppState> for classes::ClassHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            class_service: Arc::clone(&s.class_service),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            auth_service: Arc::clone(&s.auth_service),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token from /api/v1/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::api_info,
        health::health_check,
        auth::login,
        roles::list_roles,
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::delete_user,
        users::get_profile,
        users::update_password,
        users::update_email,
        classes::list_classes,
        classes::create_class,
        classes::get_class,
        classes::update_class,
        classes::delete_class,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PageMeta,
            health::ApiInfo,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            roles::RoleDto,
            users::UserDto,
            users::ProfileDto,
            users::CreatedUserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::UpdatePasswordRequest,
            users::UpdateEmailRequest,
            classes::ClassDto,
            classes::CreateClassRequest,
            classes::UpdateClassRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Login and JWT issuance"),
        (name = "Roles", description = "Base roles"),
        (name = "Users", description = "User administration and self-service profile"),
        (name = "Classes", description = "Class administration"),
    ),
    info(
        title = "Academic Management API",
        version = "1.0.0",
        description = "REST API for managing users and roles of an academic institution"
    )
)]
pub struct ApiDoc;

async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(format!(
            "[{}]: {} not found",
            method, uri
        ))),
    )
}

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let auth_state = AuthState::from_ref(&state);

    // Public
    let public_routes = Router::new().route("/auth/login", post(auth::login));

    // Any authenticated user
    let self_service_routes = Router::new()
        .route("/roles", get(roles::list_roles))
        .route("/users/me", get(users::get_profile))
        .route("/users/me/password", put(users::update_password))
        .route("/users/me/email", put(users::update_email))
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Admin only. The last layer added runs first, so authentication wraps the role check.
    let admin_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/classes",
            get(classes::list_classes).post(classes::create_class),
        )
        .route(
            "/classes/{id}",
            get(classes::get_class)
                .patch(classes::update_class)
                .delete(classes::delete_class),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    let api_routes = Router::new()
        .merge(public_routes)
        .merge(self_service_routes)
        .merge(admin_routes);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes =
        SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/", get(health::api_info))
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::DefaultAdmin;
    use crate::domain::{PasswordHasher, RepositoryProvider, RoleName};
    use crate::infrastructure::crypto::{BcryptHasher, JwtConfig};
    use crate::infrastructure::InMemoryRepositoryProvider;

    const ADMIN_EMAIL: &str = "admin@school.test";
    const ADMIN_PASSWORD: &str = "admin-pass";

    struct TestApp {
        router: Router,
        repos: Arc<dyn RepositoryProvider>,
    }

    async fn app() -> TestApp {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
        let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::new(4));
        let jwt = JwtConfig {
            secret: "router-test-secret".into(),
            ..Default::default()
        };

        let role_service = Arc::new(RoleService::new(repos.clone(), hasher.clone()));
        role_service.ensure_base_roles().await.unwrap();
        role_service
            .ensure_default_admin(DefaultAdmin {
                dni: "00000000".into(),
                email: ADMIN_EMAIL.into(),
                name: "Admin".into(),
                last_name: "Root".into(),
                password: ADMIN_PASSWORD.into(),
            })
            .await
            .unwrap();

        let state = AppState::new(
            Arc::new(UserService::new(repos.clone(), hasher.clone())),
            Arc::new(AuthService::new(repos.clone(), hasher, jwt)),
            role_service,
            Arc::new(ClassService::new(repos.clone())),
            None,
        );

        TestApp {
            router: create_api_router(state),
            repos,
        }
    }

    impl TestApp {
        async fn send(
            &self,
            method: &str,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut req = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
            let req = match body {
                Some(body) => req
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string())),
                None => req.body(Body::empty()),
            }
            .unwrap();

            let resp = self.router.clone().oneshot(req).await.unwrap();
            let status = resp.status();
            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .unwrap();
            let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, json)
        }

        async fn login(&self, email: &str, password: &str) -> String {
            let (status, body) = self
                .send(
                    "POST",
                    "/api/v1/auth/login",
                    None,
                    Some(json!({ "email": email, "password": password })),
                )
                .await;
            assert_eq!(status, StatusCode::OK, "{}", body);
            body["data"]["token"].as_str().unwrap().to_string()
        }

        async fn role_id(&self, name: RoleName) -> String {
            self.repos
                .roles()
                .find_by_name(name)
                .await
                .unwrap()
                .unwrap()
                .id
        }

        /// Creates a student through the API; returns (id, password)
        async fn create_student(&self, admin: &str, dni: &str, email: &str) -> (String, String) {
            self.create_with_role(admin, dni, email, RoleName::Student)
                .await
        }

        async fn create_with_role(
            &self,
            admin: &str,
            dni: &str,
            email: &str,
            role: RoleName,
        ) -> (String, String) {
            let role_id = self.role_id(role).await;
            let (status, body) = self
                .send(
                    "POST",
                    "/api/v1/users",
                    Some(admin),
                    Some(json!({
                        "dni": dni,
                        "email": email,
                        "name": "Student",
                        "lastName": "One",
                        "roleId": role_id,
                    })),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED, "{}", body);
            (
                body["data"]["id"].as_str().unwrap().to_string(),
                body["data"]["password"].as_str().unwrap().to_string(),
            )
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_envelope_404() {
        let app = app().await;
        let (status, body) = app.send("GET", "/api/v1/nowhere", None, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "[GET]: /api/v1/nowhere not found");
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = app().await;
        let (status, body) = app.send("GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn root_returns_version_in_envelope() {
        let app = app().await;
        let (status, body) = app.send("GET", "/", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["version"], "v1");
        assert!(body["data"]["date"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn login_with_bad_password_is_unauthorized() {
        let app = app().await;
        let (status, body) = app
            .send(
                "POST",
                "/api/v1/auth/login",
                None,
                Some(json!({ "email": ADMIN_EMAIL, "password": "wrong" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn protected_routes_require_token() {
        let app = app().await;
        let (status, _) = app.send("GET", "/api/v1/users", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app.send("GET", "/api/v1/roles", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_creates_and_lists_users() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (id, password) = app.create_student(&admin, "123", "s@school.test").await;
        assert_eq!(password.len(), 12);

        let (status, body) = app
            .send("GET", "/api/v1/users?role=student&page=abc", Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["meta"]["currentPage"], 1);
        assert_eq!(body["data"]["meta"]["pageSize"], 15);
        assert_eq!(body["data"]["meta"]["total"], 1);
        assert_eq!(body["data"]["content"][0]["id"], id.as_str());
        assert_eq!(body["data"]["content"][0]["gender"], "OTHER");
        assert!(body["data"]["content"][0].get("password").is_none());
    }

    #[tokio::test]
    async fn duplicate_dni_is_bad_request() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        app.create_student(&admin, "123", "a@school.test").await;

        let role_id = app.role_id(RoleName::Student).await;
        let (status, body) = app
            .send(
                "POST",
                "/api/v1/users",
                Some(&admin),
                Some(json!({
                    "dni": "123",
                    "email": "b@school.test",
                    "name": "B",
                    "lastName": "B",
                    "roleId": role_id,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "DNI already registered");
    }

    #[tokio::test]
    async fn invalid_body_is_bad_request() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (status, body) = app
            .send(
                "POST",
                "/api/v1/users",
                Some(&admin),
                Some(json!({ "dni": "1", "email": "not-an-email", "name": "A", "lastName": "B", "roleId": "x" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "email: invalid email format");
    }

    #[tokio::test]
    async fn non_admin_is_forbidden_on_admin_routes() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (_, password) = app.create_student(&admin, "123", "s@school.test").await;
        let student = app.login("s@school.test", &password).await;

        let (status, _) = app.send("GET", "/api/v1/users", Some(&student), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = app.send("GET", "/api/v1/users/me", Some(&student), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "s@school.test");
        assert_eq!(body["data"]["role"], "STUDENT");
        assert!(body["data"].get("roleId").is_none());

        let (status, body) = app.send("GET", "/api/v1/roles", Some(&student), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn last_admin_cannot_delete_itself() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (_, body) = app.send("GET", "/api/v1/users/me", Some(&admin), None).await;
        let admin_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = app
            .send("DELETE", &format!("/api/v1/users/{}", admin_id), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Cannot delete this user");
    }

    #[tokio::test]
    async fn deleted_user_cannot_login() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (id, password) = app.create_student(&admin, "123", "s@school.test").await;

        let (status, body) = app
            .send("DELETE", &format!("/api/v1/users/{}", id), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User deleted");

        let (status, _) = app
            .send(
                "POST",
                "/api/v1/auth/login",
                None,
                Some(json!({ "email": "s@school.test", "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = app
            .send("GET", &format!("/api/v1/users/{}", id), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn user_changes_own_password_and_email() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (_, password) = app.create_student(&admin, "123", "s@school.test").await;
        let student = app.login("s@school.test", &password).await;

        let (status, body) = app
            .send(
                "PUT",
                "/api/v1/users/me/password",
                Some(&student),
                Some(json!({
                    "password": password,
                    "newPassword": "brand-new",
                    "newPasswordConfirm": "different",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "New passwords do not match");

        let (status, _) = app
            .send(
                "PUT",
                "/api/v1/users/me/password",
                Some(&student),
                Some(json!({
                    "password": password,
                    "newPassword": "brand-new",
                    "newPasswordConfirm": "brand-new",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app
            .send(
                "PUT",
                "/api/v1/users/me/email",
                Some(&student),
                Some(json!({ "password": "brand-new", "newEmail": "new@school.test" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        app.login("new@school.test", "brand-new").await;
    }

    #[tokio::test]
    async fn admin_patches_user() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (id, _) = app.create_student(&admin, "123", "s@school.test").await;

        let (status, body) = app
            .send(
                "PATCH",
                &format!("/api/v1/users/{}", id),
                Some(&admin),
                Some(json!({ "name": "Renamed", "gender": "female" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["message"], "User updated");
        assert_eq!(body["data"]["name"], "Renamed");
        assert_eq!(body["data"]["gender"], "FEMALE");
        assert_eq!(body["data"]["lastName"], "One");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app().await;
        let req = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = app.router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.headers()["x-request-id"], "abc-123");

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = app.router.clone().oneshot(req).await.unwrap();
        let generated = resp.headers()["x-request-id"].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(generated).is_ok());
    }

    #[tokio::test]
    async fn token_of_deleted_admin_is_rejected() {
        let app = app().await;
        let root = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (id, password) = app
            .create_with_role(&root, "777", "second@school.test", RoleName::Admin)
            .await;
        let second = app.login("second@school.test", &password).await;

        let (status, _) = app.send("GET", "/api/v1/users", Some(&second), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app
            .send("DELETE", &format!("/api/v1/users/{}", id), Some(&root), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = app.send("GET", "/api/v1/users", Some(&second), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid authentication token");

        let (status, _) = app.send("GET", "/api/v1/users/me", Some(&second), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_of_demoted_admin_loses_admin_routes() {
        let app = app().await;
        let root = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (id, password) = app
            .create_with_role(&root, "777", "second@school.test", RoleName::Admin)
            .await;
        let second = app.login("second@school.test", &password).await;

        let student_role = app.role_id(RoleName::Student).await;
        let (status, body) = app
            .send(
                "PATCH",
                &format!("/api/v1/users/{}", id),
                Some(&root),
                Some(json!({ "roleId": student_role })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);

        let (status, _) = app.send("GET", "/api/v1/users", Some(&second), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = app.send("GET", "/api/v1/users/me", Some(&second), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["role"], "STUDENT");
    }

    #[tokio::test]
    async fn admin_manages_classes() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

        let (status, body) = app
            .send(
                "POST",
                "/api/v1/classes",
                Some(&admin),
                Some(json!({ "name": "1A", "description": "Morning group" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = app
            .send(
                "POST",
                "/api/v1/classes",
                Some(&admin),
                Some(json!({ "name": "1A" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Class name already exists");

        let (status, body) = app
            .send(
                "PATCH",
                &format!("/api/v1/classes/{}", id),
                Some(&admin),
                Some(json!({ "description": "" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["description"], Value::Null);

        let (status, body) = app
            .send("GET", "/api/v1/classes?s=1a&limit=abc", Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["meta"]["total"], 1);
        assert_eq!(body["data"]["meta"]["pageSize"], 15);
        assert_eq!(body["data"]["content"][0]["name"], "1A");

        let (status, body) = app
            .send("DELETE", &format!("/api/v1/classes/{}", id), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Class deleted");

        let (status, body) = app
            .send("GET", &format!("/api/v1/classes/{}", id), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Class not found");
    }

    #[tokio::test]
    async fn classes_are_admin_only() {
        let app = app().await;
        let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        let (_, password) = app.create_student(&admin, "123", "s@school.test").await;
        let student = app.login("s@school.test", &password).await;

        let (status, _) = app.send("GET", "/api/v1/classes", Some(&student), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, _) = app.send("GET", "/api/v1/classes", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
