//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use auth::application::BootstrapAdmin;
use auth::domain::repository::{AdminRepository, AdminSessionRepository};
use auth::{AuthConfig, EnsureAdminUseCase, MemoryAuthRepository, PgAuthRepository};
use inventory::{MemoryServerRepository, PgServerRepository, SystemProber};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::build_app;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,inventory=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let auth_config = Arc::new(config.auth.clone());
    let prober = Arc::new(SystemProber::new(Arc::new(config.probe.clone())));

    let app = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let auth_repo = Arc::new(PgAuthRepository::new(pool.clone()));
            spawn_session_cleanup(auth_repo.clone());

            ensure_admin(&auth_repo, &auth_config, &config.bootstrap).await?;

            build_app(
                auth_repo,
                Arc::new(PgServerRepository::new(pool)),
                prober,
                auth_config,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; using in-memory stores, data will not survive a restart");

            let auth_repo = Arc::new(MemoryAuthRepository::new());
            spawn_session_cleanup(auth_repo.clone());
            ensure_admin(&auth_repo, &auth_config, &config.bootstrap).await?;

            build_app(
                auth_repo,
                Arc::new(MemoryServerRepository::new()),
                prober,
                auth_config,
            )
        }
    };

    // Start server
    let addr = config.listen_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Provision the admin account if the credential store is empty
async fn ensure_admin<A>(
    repo: &Arc<A>,
    config: &Arc<AuthConfig>,
    bootstrap: &BootstrapAdmin,
) -> anyhow::Result<()>
where
    A: AdminRepository + Send + Sync,
{
    EnsureAdminUseCase::new(repo.clone(), config.clone())
        .execute(bootstrap)
        .await?;
    Ok(())
}

/// Expired-session sweep period. The first sweep runs at startup.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Periodically delete expired admin sessions
///
/// Errors are logged and never stop the server.
fn spawn_session_cleanup<R>(repo: Arc<R>)
where
    R: AdminSessionRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            ticker.tick().await;
            match repo.cleanup_expired().await {
                Ok(sessions) => {
                    tracing::debug!(sessions_deleted = sessions, "Auth session cleanup completed");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Auth session cleanup failed, continuing anyway");
                }
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
