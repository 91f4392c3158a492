//! PostgreSQL implementation of StartupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use launchpad_core::traits::{Page, RepoResult, StartupRepository};
use launchpad_core::{Startup, StartupStatus};

use crate::mappers::{map_all, status_counts};
use crate::models::{StartupModel, StatusCountModel};

use super::error::{guarded, map_db_error};

/// PostgreSQL implementation of StartupRepository
#[derive(Clone)]
pub struct PgStartupRepository {
    pool: PgPool,
}

impl PgStartupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StartupRepository for PgStartupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>> {
        let result = sqlx::query_as::<_, StartupModel>(
            r"
            SELECT id, owner_id, name, description, industry, stage, website, status,
                   review_note, reviewed_by, reviewed_at, created_at, updated_at
            FROM startups
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Startup::try_from).transpose()
    }

    #[instrument(skip(self, startup), fields(startup_id = %startup.id))]
    async fn create(&self, startup: &Startup) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO startups (id, owner_id, name, description, industry, stage, website,
                                  status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(startup.id)
        .bind(startup.owner_id)
        .bind(&startup.name)
        .bind(&startup.description)
        .bind(&startup.industry)
        .bind(&startup.stage)
        .bind(&startup.website)
        .bind(startup.status.as_str())
        .bind(startup.created_at)
        .bind(startup.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, startup), fields(startup_id = %startup.id, status = %startup.status))]
    async fn update(&self, startup: &Startup, expected: StartupStatus) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE startups
            SET name = $3, description = $4, industry = $5, stage = $6, website = $7,
                status = $8, review_note = $9, reviewed_by = $10, reviewed_at = $11,
                updated_at = $12
            WHERE id = $1 AND status = $2
            ",
        )
        .bind(startup.id)
        .bind(expected.as_str())
        .bind(&startup.name)
        .bind(&startup.description)
        .bind(&startup.industry)
        .bind(&startup.stage)
        .bind(&startup.website)
        .bind(startup.status.as_str())
        .bind(&startup.review_note)
        .bind(startup.reviewed_by)
        .bind(startup.reviewed_at)
        .bind(startup.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(guarded(result.rows_affected()))
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<Startup>> {
        let rows = sqlx::query_as::<_, StartupModel>(
            r"
            SELECT id, owner_id, name, description, industry, stage, website, status,
                   review_note, reviewed_by, reviewed_at, created_at, updated_at
            FROM startups
            WHERE owner_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn list_by_status(
        &self,
        status: Option<StartupStatus>,
        page: Page,
    ) -> RepoResult<Vec<Startup>> {
        let rows = sqlx::query_as::<_, StartupModel>(
            r"
            SELECT id, owner_id, name, description, industry, stage, website, status,
                   review_note, reviewed_by, reviewed_at, created_at, updated_at
            FROM startups
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(status.map(StartupStatus::as_str))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn count_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<(StartupStatus, i64)>> {
        let rows = sqlx::query_as::<_, StatusCountModel>(
            r"
            SELECT status, COUNT(*) AS count
            FROM startups
            WHERE owner_id = $1
            GROUP BY status
            ",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        status_counts(rows)
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: StartupStatus) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM startups WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
