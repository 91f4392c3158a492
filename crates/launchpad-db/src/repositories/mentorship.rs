//! PostgreSQL implementation of MentorshipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use launchpad_core::traits::{MentorshipRepository, Page, RepoResult, RequestQuery};
use launchpad_core::{
    DomainError, MentorshipRelationship, MentorshipRequest, RelationshipMessage,
    RelationshipStatus, ReviewStatus,
};

use crate::mappers::map_all;
use crate::models::{MentorshipRelationshipModel, MentorshipRequestModel, RelationshipMessageModel};

use super::error::{guarded, map_db_error, map_unique_violation};

/// PostgreSQL implementation of MentorshipRepository
#[derive(Clone)]
pub struct PgMentorshipRepository {
    pool: PgPool,
}

impl PgMentorshipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MentorshipRepository for PgMentorshipRepository {
    // ------------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn find_request(&self, id: Uuid) -> RepoResult<Option<MentorshipRequest>> {
        let result = sqlx::query_as::<_, MentorshipRequestModel>(
            r"
            SELECT id, mentor_id, startup_id, initiated_by, message, status, responded_at,
                   created_at, updated_at
            FROM mentorship_requests
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MentorshipRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending_request(
        &self,
        mentor_id: Uuid,
        startup_id: Uuid,
    ) -> RepoResult<Option<MentorshipRequest>> {
        let result = sqlx::query_as::<_, MentorshipRequestModel>(
            r"
            SELECT id, mentor_id, startup_id, initiated_by, message, status, responded_at,
                   created_at, updated_at
            FROM mentorship_requests
            WHERE mentor_id = $1 AND startup_id = $2 AND status = 'PENDING'
            ",
        )
        .bind(mentor_id)
        .bind(startup_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MentorshipRequest::try_from).transpose()
    }

    #[instrument(skip(self, request), fields(request_id = %request.id))]
    async fn create_request(&self, request: &MentorshipRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO mentorship_requests (id, mentor_id, startup_id, initiated_by, message,
                                             status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(request.id)
        .bind(request.mentor_id)
        .bind(request.startup_id)
        .bind(request.initiated_by.as_str())
        .bind(&request.message)
        .bind(request.status.as_str())
        .bind(request.created_at)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicatePendingRequest))?;

        Ok(())
    }

    #[instrument(skip(self, request), fields(request_id = %request.id))]
    async fn reject_request(&self, request: &MentorshipRequest) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE mentorship_requests
            SET status = 'REJECTED', responded_at = $2, updated_at = $3
            WHERE id = $1 AND status = 'PENDING'
            ",
        )
        .bind(request.id)
        .bind(request.responded_at)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(guarded(result.rows_affected()))
    }

    #[instrument(
        skip(self, request, relationship),
        fields(request_id = %request.id, relationship_id = %relationship.id)
    )]
    async fn accept_request(
        &self,
        request: &MentorshipRequest,
        relationship: &MentorshipRelationship,
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE mentorship_requests
            SET status = 'APPROVED', responded_at = $2, updated_at = $3
            WHERE id = $1 AND status = 'PENDING'
            ",
        )
        .bind(request.id)
        .bind(request.responded_at)
        .bind(request.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !guarded(result.rows_affected()) {
            return Ok(false);
        }

        sqlx::query(
            r"
            INSERT INTO mentorship_relationships (id, mentor_id, startup_id, request_id,
                                                  status, started_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(relationship.id)
        .bind(relationship.mentor_id)
        .bind(relationship.startup_id)
        .bind(relationship.request_id)
        .bind(relationship.status.as_str())
        .bind(relationship.started_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RelationshipAlreadyActive))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn list_requests(&self, query: RequestQuery) -> RepoResult<Vec<MentorshipRequest>> {
        let rows = sqlx::query_as::<_, MentorshipRequestModel>(
            r"
            SELECT r.id, r.mentor_id, r.startup_id, r.initiated_by, r.message, r.status,
                   r.responded_at, r.created_at, r.updated_at
            FROM mentorship_requests r
            JOIN startups s ON s.id = r.startup_id
            WHERE ($1::UUID IS NULL OR r.mentor_id = $1 OR s.owner_id = $1)
              AND ($2::TEXT IS NULL OR r.status = $2)
            ORDER BY r.created_at DESC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(query.party_id)
        .bind(query.status.map(ReviewStatus::as_str))
        .bind(query.page.limit)
        .bind(query.page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn count_pending_requests(&self, user_id: Uuid, incoming: bool) -> RepoResult<i64> {
        // Incoming: the user stands on the side opposite the initiator
        let sql = if incoming {
            r"
            SELECT COUNT(*)
            FROM mentorship_requests r
            JOIN startups s ON s.id = r.startup_id
            WHERE r.status = 'PENDING'
              AND ((r.mentor_id = $1 AND r.initiated_by = 'STARTUP')
                OR (s.owner_id = $1 AND r.initiated_by = 'MENTOR'))
            "
        } else {
            r"
            SELECT COUNT(*)
            FROM mentorship_requests r
            JOIN startups s ON s.id = r.startup_id
            WHERE r.status = 'PENDING'
              AND ((r.mentor_id = $1 AND r.initiated_by = 'MENTOR')
                OR (s.owner_id = $1 AND r.initiated_by = 'STARTUP'))
            "
        };

        sqlx::query_scalar::<_, i64>(sql)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    // ------------------------------------------------------------------------
    // Relationships
    // ------------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn find_relationship(&self, id: Uuid) -> RepoResult<Option<MentorshipRelationship>> {
        let result = sqlx::query_as::<_, MentorshipRelationshipModel>(
            r"
            SELECT id, mentor_id, startup_id, request_id, status, started_at, ended_at
            FROM mentorship_relationships
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MentorshipRelationship::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_active_relationship(
        &self,
        mentor_id: Uuid,
        startup_id: Uuid,
    ) -> RepoResult<Option<MentorshipRelationship>> {
        let result = sqlx::query_as::<_, MentorshipRelationshipModel>(
            r"
            SELECT id, mentor_id, startup_id, request_id, status, started_at, ended_at
            FROM mentorship_relationships
            WHERE mentor_id = $1 AND startup_id = $2 AND status = 'ACTIVE'
            ",
        )
        .bind(mentor_id)
        .bind(startup_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MentorshipRelationship::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_relationships(
        &self,
        party_id: Option<Uuid>,
        status: Option<RelationshipStatus>,
    ) -> RepoResult<Vec<MentorshipRelationship>> {
        let rows = sqlx::query_as::<_, MentorshipRelationshipModel>(
            r"
            SELECT m.id, m.mentor_id, m.startup_id, m.request_id, m.status, m.started_at,
                   m.ended_at
            FROM mentorship_relationships m
            JOIN startups s ON s.id = m.startup_id
            WHERE ($1::UUID IS NULL OR m.mentor_id = $1 OR s.owner_id = $1)
              AND ($2::TEXT IS NULL OR m.status = $2)
            ORDER BY m.started_at DESC
            ",
        )
        .bind(party_id)
        .bind(status.map(RelationshipStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self, relationship), fields(relationship_id = %relationship.id))]
    async fn end_relationship(&self, relationship: &MentorshipRelationship) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE mentorship_relationships
            SET status = 'ENDED', ended_at = $2
            WHERE id = $1 AND status = 'ACTIVE'
            ",
        )
        .bind(relationship.id)
        .bind(relationship.ended_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(guarded(result.rows_affected()))
    }

    #[instrument(skip(self))]
    async fn count_active_relationships(&self, user_id: Uuid) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM mentorship_relationships m
            JOIN startups s ON s.id = m.startup_id
            WHERE m.status = 'ACTIVE' AND (m.mentor_id = $1 OR s.owner_id = $1)
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    // ------------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------------

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create_message(&self, message: &RelationshipMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO relationship_messages (id, relationship_id, sender_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(message.id)
        .bind(message.relationship_id)
        .bind(message.sender_id)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_messages(
        &self,
        relationship_id: Uuid,
        page: Page,
    ) -> RepoResult<Vec<RelationshipMessage>> {
        let rows = sqlx::query_as::<_, RelationshipMessageModel>(
            r"
            SELECT id, relationship_id, sender_id, content, created_at
            FROM relationship_messages
            WHERE relationship_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(relationship_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }
}
