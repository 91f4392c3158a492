//! Session store port - opaque tokens mapped to user ids

use async_trait::async_trait;
use uuid::Uuid;

use super::RepoResult;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a session token for a user with a time-to-live
    async fn create(&self, token: &str, user_id: Uuid, ttl_seconds: u64) -> RepoResult<()>;

    /// User id of a live session, `None` when unknown or expired
    async fn resolve(&self, token: &str) -> RepoResult<Option<Uuid>>;

    /// Revoke one session. Revoking an unknown token is not an error.
    async fn revoke(&self, token: &str) -> RepoResult<()>;

    /// Revoke every session of a user, returning how many were removed
    async fn revoke_all(&self, user_id: Uuid) -> RepoResult<u64>;
}
