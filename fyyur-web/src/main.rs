//! fyyur-web - Venue and artist booking directory
//!
//! Serves the booking directory UI and its JSON API from a local SQLite
//! database, creating the database on first run.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::{load_default_toml_config, load_toml_config, Settings};
use fyyur_common::db;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use fyyur_web::{build_router, AppState};

/// Command-line arguments for fyyur-web
#[derive(Parser, Debug)]
#[command(name = "fyyur-web")]
#[command(about = "Venue and artist booking directory")]
#[command(version)]
struct Args {
    /// Folder holding fyyur.db (falls back to FYYUR_ROOT_FOLDER, config.toml, then the OS default)
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "FYYUR_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FYYUR_PORT")]
    port: Option<u16>,

    /// Config file to use instead of the per-user config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Insert demo venues, artists and shows into an empty database
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fyyur_web=info,fyyur_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Fyyur (fyyur-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let toml = match &args.config {
        Some(path) => load_toml_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => load_default_toml_config(),
    };
    let settings = Settings::resolve(args.root_folder.as_deref(), args.host, args.port, &toml);

    let db_path = settings.database_path();
    info!("Database path: {}", db_path.display());

    let pool = db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;
    info!("✓ Database ready");

    if args.seed {
        db::seed_demo_data(&pool)
            .await
            .context("Failed to insert demo data")?;
    }

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", settings.host, settings.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("fyyur-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
