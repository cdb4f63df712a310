//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/academic-backend/config.toml`).
//! A missing file is written out with defaults. A few environment variables
//! override file values so secrets can stay out of the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::DefaultAdmin;
use crate::infrastructure::crypto::JwtConfig;
use crate::infrastructure::DatabaseConfig;

pub const CONFIG_PATH_ENV: &str = "ACADEMIC_CONFIG";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const INITIAL_PASSWORD_ENV: &str = "INITIAL_USER_PASSWORD";

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: DatabaseConfig::default().url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: JwtConfig::default().secret,
            jwt_expiration_hours: 24,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. `info` or `academic_backend=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Administrator seeded on first start
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    pub dni: String,
    pub email: String,
    pub name: String,
    pub last_name: String,
    /// Initial password; empty means a random one is generated and printed on stderr
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            dni: "00000000".to_string(),
            email: "admin@academic.local".to_string(),
            name: "Admin".to_string(),
            last_name: "Academic".to_string(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

/// `~/.config/academic-backend/config.toml`, or `./config.toml` when no
/// config directory can be resolved
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("academic-backend").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

impl AppConfig {
    /// Load the file at `path`, creating it with defaults when absent, then
    /// apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            let config = Self::default();
            config.save(path)?;
            config
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(write_err)
    }

    /// Overrides taken from the environment. `lookup` is injected for tests.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = non_empty(DATABASE_URL_ENV) {
            self.database.url = url;
        }
        if let Some(secret) = non_empty(JWT_SECRET_ENV) {
            self.security.jwt_secret = secret;
        }
        if let Some(password) = non_empty(INITIAL_PASSWORD_ENV) {
            self.admin.password = password;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("security.jwt_secret must not be empty".into()));
        }
        if self.security.jwt_expiration_hours <= 0 {
            return Err(ConfigError::Invalid(
                "security.jwt_expiration_hours must be positive".into(),
            ));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.security.bcrypt_cost) {
            return Err(ConfigError::Invalid(format!(
                "security.bcrypt_cost must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        Ok(())
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.security.jwt_secret.clone(),
            expiration_hours: self.security.jwt_expiration_hours,
            ..Default::default()
        }
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
        }
    }

    pub fn default_admin(&self) -> DefaultAdmin {
        DefaultAdmin {
            dni: self.admin.dni.clone(),
            email: self.admin.email.clone(),
            name: self.admin.name.clone(),
            last_name: self.admin.last_name.clone(),
            password: self.admin.password.clone(),
        }
    }
}
