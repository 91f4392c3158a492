//! # launchpad-cache
//!
//! Redis layer backing opaque session tokens.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: `session:{token}` keys with a TTL, indexed per user
//!   so every session of an account can be revoked at once
//!
//! ## Example
//!
//! ```ignore
//! use launchpad_cache::{RedisPool, RedisSessionStore};
//! use launchpad_core::SessionStore;
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! let sessions = RedisSessionStore::new(pool);
//!
//! sessions.create(&token, user_id, config.session.ttl_seconds).await?;
//! let owner = sessions.resolve(&token).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{RedisSessionStore, SESSION_PREFIX, USER_SESSIONS_PREFIX};
