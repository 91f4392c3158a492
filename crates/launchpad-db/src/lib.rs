//! # launchpad-db
//!
//! Database layer implementing the repository traits of `launchpad-core`
//! with PostgreSQL via SQLx. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the transactional
//!   accept-request and approve-mentor paths
//!
//! ## Usage
//!
//! ```rust,ignore
//! use launchpad_common::AppConfig;
//! use launchpad_core::traits::UserRepository;
//! use launchpad_db::{connect, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = connect(&config.database).await?;
//!     let users = PgUserRepository::new(pool);
//!     let count = users.count().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{connect, create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgFundingRepository, PgMentorApplicationRepository, PgMentorshipRepository,
    PgScheduledCallRepository, PgStartupRepository, PgUserRepository,
};
