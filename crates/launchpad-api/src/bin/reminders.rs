//! One-shot reminder sweep
//!
//! Intended for a scheduler such as cron:
//! ```bash
//! cargo run -p launchpad-api --bin launchpad-reminders
//! ```
//!
//! Exits non-zero when the sweep cannot run or leaves calls unreminded.

use chrono::Utc;
use launchpad_cache::RedisPool;
use launchpad_common::{try_init_tracing, AppConfig, AppError};
use launchpad_service::CallService;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!(error = %e, "Reminder sweep failed");
            std::process::exit(1);
        }
    }
}

/// Returns `false` when some reminders failed and were left for the next run
async fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let pool = launchpad_db::connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    let redis = RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    let ctx = launchpad_api::build_service_context(&config, &pool, &redis)?;

    let now = Utc::now();
    let result = CallService::new(&ctx).send_reminders(now).await?;

    info!(
        at = %now,
        candidates = result.candidates,
        sent = result.sent,
        skipped = result.skipped,
        failed = result.failed,
        "Reminder sweep finished"
    );

    if result.failed > 0 {
        warn!(failed = result.failed, "Some reminders will be retried on the next sweep");
        return Ok(false);
    }
    Ok(true)
}
