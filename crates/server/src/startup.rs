use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use migration::MigratorTrait;
use service::teacher::{repository::SeaOrmTeacherRepository, TeacherService};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` when it loads and validates, otherwise environment variables.
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable; falling back to environment");
            let cfg = AppConfig { server: ServerConfig::from_env(), database: DatabaseConfig::from_env() };
            cfg.database
                .validate()
                .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            Ok(cfg)
        }
    }
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}: {e}", server.bind_addr())))
}

/// Wire repository → service → router state over a live database connection.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(format!("readiness check failed: {e}")))?;

    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        info!("migrations applied");
    }

    let repo = Arc::new(SeaOrmTeacherRepository::new(db));
    let teachers = Arc::new(TeacherService::new(repo));
    Ok(routes::build_router(ServerState::new(teachers), build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only via process kill");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
/// Expects `.env` and the tracing subscriber to be set up by the caller.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting lms server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
