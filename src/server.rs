//! Server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: database connection and
//! migrations, base-role and admin seeding, the REST API and graceful
//! shutdown.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{AdminSeed, AuthService, ClassService, RoleService, UserService};
use crate::config::AppConfig;
use crate::domain::{PasswordHasher, RepositoryProvider};
use crate::infrastructure::crypto::BcryptHasher;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, SeaOrmRepositoryProvider};
use crate::interfaces::http::{create_api_router, AppState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup
    pub auto_migrate: bool,
    /// Create the configured admin user if missing
    pub create_default_admin: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            create_default_admin: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running server.
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Connect, migrate, seed and start serving the REST API.
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting academic backend...");

        let db = init_database(&app_cfg.database_config()).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        // ── Repositories & Services ────────────────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let hasher: Arc<dyn PasswordHasher> =
            Arc::new(BcryptHasher::new(app_cfg.security.bcrypt_cost));

        let jwt_config = app_cfg.jwt_config();
        info!(
            "JWT configured with {}h token expiration",
            jwt_config.expiration_hours
        );

        let user_service = Arc::new(UserService::new(repos.clone(), hasher.clone()));
        let auth_service = Arc::new(AuthService::new(repos.clone(), hasher.clone(), jwt_config));
        let role_service = Arc::new(RoleService::new(repos.clone(), hasher));
        let class_service = Arc::new(ClassService::new(repos.clone()));

        // ── Seeding ────────────────────────────────────────────
        let created = role_service.ensure_base_roles().await?;
        if created > 0 {
            info!(created, "Base roles seeded");
        }

        if opts.create_default_admin {
            match role_service.ensure_default_admin(app_cfg.default_admin()).await {
                Ok(AdminSeed::Created {
                    generated_password: Some(password),
                }) => {
                    warn!("Default admin created with a generated password, printed once on stderr");
                    // Kept out of the log sinks
                    eprintln!(
                        "Initial password for {}: {}\nChange it after the first login.",
                        app_cfg.admin.email, password
                    );
                }
                Ok(AdminSeed::Created { .. }) => {
                    warn!("Default admin created; change its password immediately")
                }
                Ok(AdminSeed::Skipped) => {}
                Err(e) => error!("Failed to create default admin: {}", e),
            }
        }

        // ── REST API server ────────────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let state = AppState::new(
            user_service,
            auth_service,
            role_service,
            class_service,
            Some(db.clone()),
        );
        let api_router = create_api_router(state);

        let api_addr = app_cfg.server.address();
        let listener = tokio::net::TcpListener::bind(&api_addr).await?;
        info!("REST API server listening on http://{}", api_addr);
        info!("Swagger UI available at http://{}/api-docs/", api_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config: app_cfg,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the API task to drain (bounded by the shutdown timeout),
    /// then close the database.
    pub async fn wait(self) {
        info!("Waiting for in-flight requests to complete...");

        let timeout = Duration::from_secs(self.shutdown.timeout_secs());
        match tokio::time::timeout(timeout, self.api_task).await {
            Ok(Ok(())) => info!("REST API server stopped"),
            Ok(Err(e)) => error!("REST API server task panicked: {}", e),
            Err(_) => warn!(
                "REST API server did not stop within {}s; closing anyway",
                timeout.as_secs()
            ),
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }

        info!("Shutdown complete");
    }

    pub async fn shutdown(self) {
        info!("Shutting down...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing from the logging section. `RUST_LOG` wins over the
/// configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_seeds_and_shuts_down() {
        let dir = std::env::temp_dir().join(format!("academic-server-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut config = AppConfig::default();
        config.database.url = format!("sqlite://{}?mode=rwc", dir.join("test.db").display());
        config.server.host = "127.0.0.1".into();
        config.server.port = 0;
        config.security.bcrypt_cost = 4;
        config.admin.password = "initial".into();

        let handle = ServerHandle::start(ServerOptions {
            config,
            ..Default::default()
        })
        .await
        .unwrap();
        assert!(handle.is_running());

        let roles = handle.repos.roles().find_all().await.unwrap();
        assert_eq!(roles.len(), 3);
        let admin = handle
            .repos
            .users()
            .find_by_email("admin@academic.local")
            .await
            .unwrap();
        assert!(admin.is_some_and(|u| u.is_admin()));

        handle.shutdown().await;
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
