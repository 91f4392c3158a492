//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use launchpad_cache::{RedisPool, RedisSessionStore};
use launchpad_common::{AppConfig, AppError};
use launchpad_db::{
    connect, PgFundingRepository, PgMentorApplicationRepository, PgMentorshipRepository, PgPool,
    PgScheduledCallRepository, PgStartupRepository, PgUserRepository,
};
use launchpad_service::{LogNotifier, ServiceContext, ServiceContextBuilder, ServiceSettings};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the rate limit settings are unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let router = apply_rate_limit(create_router(), &config.rate_limit)?.merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(
        migrations = config.database.run_migrations,
        "PostgreSQL connection established"
    );

    info!("Connecting to Redis...");
    let redis = RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis pool created");

    let service_context = build_service_context(&config, &pool, &redis)?;

    Ok(AppState::new(service_context, config, pool, redis))
}

/// Wire the Postgres repositories and the Redis session store into a context
pub fn build_service_context(
    config: &AppConfig,
    pool: &PgPool,
    redis: &RedisPool,
) -> Result<ServiceContext, AppError> {
    let settings =
        ServiceSettings::from_config(config).map_err(|e| AppError::Config(e.to_string()))?;

    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .startup_repo(Arc::new(PgStartupRepository::new(pool.clone())))
        .mentor_application_repo(Arc::new(PgMentorApplicationRepository::new(pool.clone())))
        .mentorship_repo(Arc::new(PgMentorshipRepository::new(pool.clone())))
        .call_repo(Arc::new(PgScheduledCallRepository::new(pool.clone())))
        .funding_repo(Arc::new(PgFundingRepository::new(pool.clone())))
        .session_store(Arc::new(RedisSessionStore::new(redis.clone())))
        .notifier(Arc::new(LogNotifier))
        .settings(settings)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    // Peer addresses feed the rate limiter's key extractor
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
