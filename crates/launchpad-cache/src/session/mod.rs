//! Session storage module.
//!
//! Maps opaque bearer/cookie tokens to user ids.

mod redis_session_store;

pub use redis_session_store::{RedisSessionStore, SESSION_PREFIX, USER_SESSIONS_PREFIX};
