//! PostgreSQL implementation of ScheduledCallRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use launchpad_core::traits::{RepoResult, ScheduledCallRepository};
use launchpad_core::{CallStatus, ScheduledCall};

use crate::mappers::map_all;
use crate::models::ScheduledCallModel;

use super::error::{guarded, map_db_error};

/// PostgreSQL implementation of ScheduledCallRepository
#[derive(Clone)]
pub struct PgScheduledCallRepository {
    pool: PgPool,
}

impl PgScheduledCallRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduledCallRepository for PgScheduledCallRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ScheduledCall>> {
        let result = sqlx::query_as::<_, ScheduledCallModel>(
            r"
            SELECT id, relationship_id, proposed_by_id, scheduled_at, duration_minutes, agenda,
                   status, responded_by_id, reminder_sent, created_at, updated_at
            FROM scheduled_calls
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ScheduledCall::try_from).transpose()
    }

    #[instrument(skip(self, call), fields(call_id = %call.id))]
    async fn create(&self, call: &ScheduledCall) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO scheduled_calls (id, relationship_id, proposed_by_id, scheduled_at,
                                         duration_minutes, agenda, status, reminder_sent,
                                         created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(call.id)
        .bind(call.relationship_id)
        .bind(call.proposed_by_id)
        .bind(call.scheduled_at)
        .bind(call.duration_minutes)
        .bind(&call.agenda)
        .bind(call.status.as_str())
        .bind(call.reminder_sent)
        .bind(call.created_at)
        .bind(call.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, call), fields(call_id = %call.id, status = %call.status))]
    async fn update_status(
        &self,
        call: &ScheduledCall,
        expected: CallStatus,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE scheduled_calls
            SET status = $3, responded_by_id = $4, updated_at = $5
            WHERE id = $1 AND status = $2
            ",
        )
        .bind(call.id)
        .bind(expected.as_str())
        .bind(call.status.as_str())
        .bind(call.responded_by_id)
        .bind(call.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(guarded(result.rows_affected()))
    }

    #[instrument(skip(self))]
    async fn list_by_relationship(&self, relationship_id: Uuid) -> RepoResult<Vec<ScheduledCall>> {
        let rows = sqlx::query_as::<_, ScheduledCallModel>(
            r"
            SELECT id, relationship_id, proposed_by_id, scheduled_at, duration_minutes, agenda,
                   status, responded_by_id, reminder_sent, created_at, updated_at
            FROM scheduled_calls
            WHERE relationship_id = $1
            ORDER BY scheduled_at ASC
            ",
        )
        .bind(relationship_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn list_upcoming_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<ScheduledCall>> {
        let rows = sqlx::query_as::<_, ScheduledCallModel>(
            r"
            SELECT c.id, c.relationship_id, c.proposed_by_id, c.scheduled_at,
                   c.duration_minutes, c.agenda, c.status, c.responded_by_id,
                   c.reminder_sent, c.created_at, c.updated_at
            FROM scheduled_calls c
            JOIN mentorship_relationships m ON m.id = c.relationship_id
            JOIN startups s ON s.id = m.startup_id
            WHERE m.status = 'ACTIVE'
              AND c.status IN ('PROPOSED', 'CONFIRMED')
              AND c.scheduled_at > $2
              AND (m.mentor_id = $1 OR s.owner_id = $1)
            ORDER BY c.scheduled_at ASC
            LIMIT $3
            ",
        )
        .bind(user_id)
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn find_due_reminders(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<ScheduledCall>> {
        let rows = sqlx::query_as::<_, ScheduledCallModel>(
            r"
            SELECT id, relationship_id, proposed_by_id, scheduled_at, duration_minutes, agenda,
                   status, responded_by_id, reminder_sent, created_at, updated_at
            FROM scheduled_calls
            WHERE status = 'CONFIRMED'
              AND reminder_sent = FALSE
              AND scheduled_at BETWEEN $1 AND $2
            ORDER BY scheduled_at ASC
            ",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn mark_reminder_sent(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE scheduled_calls
            SET reminder_sent = TRUE, updated_at = NOW()
            WHERE id = $1 AND reminder_sent = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(guarded(result.rows_affected()))
    }
}
