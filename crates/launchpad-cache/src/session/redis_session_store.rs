//! Session token storage in Redis.
//!
//! Each token lives under `session:{token}` holding the owner's user id and
//! expires with the session TTL. A per-user set `user_sessions:{user_id}`
//! tracks live tokens so an account can be logged out everywhere.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use launchpad_core::traits::{RepoResult, SessionStore};

use crate::pool::{RedisPool, RedisPoolError};

/// Key prefix for session tokens
pub const SESSION_PREFIX: &str = "session:";
/// Key prefix for the per-user token index
pub const USER_SESSIONS_PREFIX: &str = "user_sessions:";

/// Redis-backed [`SessionStore`]
#[derive(Clone, Debug)]
pub struct RedisSessionStore {
    pool: RedisPool,
}

impl RedisSessionStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    fn user_key(user_id: Uuid) -> String {
        format!("{USER_SESSIONS_PREFIX}{user_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    #[instrument(skip(self, token))]
    async fn create(&self, token: &str, user_id: Uuid, ttl_seconds: u64) -> RepoResult<()> {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;

        // The index outlives every session it lists
        redis::pipe()
            .atomic()
            .set_ex(Self::key(token), user_id.to_string(), ttl_seconds)
            .ignore()
            .sadd(&user_key, token)
            .ignore()
            .expire(&user_key, ttl)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(RedisPoolError::from)?;

        debug!("Stored session");
        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn resolve(&self, token: &str) -> RepoResult<Option<Uuid>> {
        let mut conn = self.pool.get().await?;
        let value: Option<String> = conn
            .get(Self::key(token))
            .await
            .map_err(RedisPoolError::from)?;

        match value {
            Some(raw) => Uuid::parse_str(&raw)
                .map(Some)
                .map_err(|e| RedisPoolError::Corrupt(e.to_string()).into()),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str) -> RepoResult<()> {
        let key = Self::key(token);
        let mut conn = self.pool.get().await?;

        let owner: Option<String> = conn.get(&key).await.map_err(RedisPoolError::from)?;
        if let Some(user_id) = owner {
            conn.srem::<_, _, ()>(format!("{USER_SESSIONS_PREFIX}{user_id}"), token)
                .await
                .map_err(RedisPoolError::from)?;
        }

        let deleted: i64 = conn.del(&key).await.map_err(RedisPoolError::from)?;
        if deleted > 0 {
            debug!("Revoked session");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_all(&self, user_id: Uuid) -> RepoResult<u64> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;

        let tokens: Vec<String> = conn.smembers(&user_key).await.map_err(RedisPoolError::from)?;
        let mut removed: u64 = 0;
        if !tokens.is_empty() {
            let keys: Vec<String> = tokens.iter().map(|t| Self::key(t)).collect();
            let deleted: i64 = conn.del(&keys).await.map_err(RedisPoolError::from)?;
            removed = u64::try_from(deleted).unwrap_or(0);
        }
        conn.del::<_, ()>(&user_key).await.map_err(RedisPoolError::from)?;

        info!(count = removed, "Revoked all sessions for user");
        Ok(removed)
    }
}
