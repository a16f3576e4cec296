//! Campus Match service
//!
//! Reads configuration from TOML (~/.config/campus-match/config.toml or
//! $CAMPUS_MATCH_CONFIG), runs migrations and serves the REST API.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use campus_match::application::{DiscoveryService, InterestService, MatchService, SwipeService};
use campus_match::domain::RepositoryProvider;
use campus_match::infrastructure::database::migrator::Migrator;
use campus_match::shared::{AppError, InfraError};
use campus_match::{
    create_api_router, init_database, resolve_config_path, AppConfig, AppState,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = resolve_config_path();
    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_cfg.logging.level)),
        )
        .init();

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    info!("Starting Campus Match service...");

    // Must be installed before any metrics calls
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| InfraError::Config(format!("metrics recorder: {}", e)))?;
    info!("Prometheus metrics recorder installed");

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(InfraError::from(e).into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(InfraError::from(e).into());
    }
    info!("Migrations completed");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // ── Services ───────────────────────────────────────────────
    let state = AppState::new(
        Arc::new(SwipeService::new(repos.clone())),
        Arc::new(DiscoveryService::new(
            repos.clone(),
            app_cfg.discovery_settings(),
        )),
        Arc::new(MatchService::new(repos.clone())),
        Arc::new(InterestService::new(repos)),
        db.clone(),
        app_cfg.jwt_config(),
        prometheus_handle,
    );
    let router = create_api_router(state);

    // ── HTTP server ────────────────────────────────────────────
    let addr = app_cfg.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(InfraError::from)?;
    info!("REST API listening on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InfraError::from)?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Campus Match shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
