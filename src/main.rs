//! Academic backend server
//!
//! ```sh
//! # Run with default config (~/.config/academic-backend/config.toml)
//! academic-backend
//!
//! # Custom config path and port
//! academic-backend --config /etc/academic-backend/config.toml --port 8080
//!
//! # Validate config without starting
//! academic-backend --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use academic_backend::config::{AppConfig, CONFIG_PATH_ENV};
use academic_backend::default_config_path;
use academic_backend::server::{init_tracing, ServerHandle, ServerOptions};

/// REST API for user and role management of an academic institution.
#[derive(Parser, Debug)]
#[command(
    name = "academic-backend",
    version,
    about = "User and role management API for an academic institution",
    long_about = "Academic backend: REST API with JWT authentication for managing \
                  administrators, teachers and students.\n\n\
                  Default config: ~/.config/academic-backend/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the default admin user.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            if cli.check {
                eprintln!("Configuration is invalid: {}", e);
                return Err(e.into());
            }
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(
                    cli.log_level.as_deref().unwrap_or("info"),
                ))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
