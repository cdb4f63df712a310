pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

pub use repositories::SeaOrmRepositoryProvider;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./academic.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./academic.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let db = Database::connect(&config.url).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Fresh in-memory SQLite database with all migrations applied
#[cfg(test)]
pub(crate) async fn test_database() -> DatabaseConnection {
    use sea_orm::ConnectOptions;
    use sea_orm_migration::MigratorTrait;

    // A single connection, otherwise every pooled connection sees its own
    // empty in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    migrator::Migrator::up(&db, None).await.unwrap();
    db
}
