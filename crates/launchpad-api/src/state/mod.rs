//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration, and the pools probed by the readiness check.

use std::sync::Arc;

use launchpad_cache::RedisPool;
use launchpad_common::AppConfig;
use launchpad_db::PgPool;
use launchpad_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    db: PgPool,
    redis: RedisPool,
}

impl AppState {
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        db: PgPool,
        redis: RedisPool,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            db,
            redis,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// PostgreSQL pool
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Redis pool
    pub fn redis(&self) -> &RedisPool {
        &self.redis
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .field("redis", &self.redis)
            .finish()
    }
}
