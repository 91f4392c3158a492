//! PostgreSQL implementation of FundingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use launchpad_core::traits::{FundingRepository, Page, RepoResult};
use launchpad_core::{DomainError, FundingApplication, FundingOpportunity, ReviewStatus};

use crate::mappers::map_all;
use crate::models::{FundingApplicationModel, FundingOpportunityModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FundingRepository
#[derive(Clone)]
pub struct PgFundingRepository {
    pool: PgPool,
}

impl PgFundingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FundingRepository for PgFundingRepository {
    // ------------------------------------------------------------------------
    // Opportunities
    // ------------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn find_opportunity(&self, id: Uuid) -> RepoResult<Option<FundingOpportunity>> {
        let result = sqlx::query_as::<_, FundingOpportunityModel>(
            r"
            SELECT id, title, description, amount, deadline, is_open, created_by,
                   created_at, updated_at
            FROM funding_opportunities
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FundingOpportunity::from))
    }

    #[instrument(skip(self))]
    async fn list_opportunities(
        &self,
        open_only: bool,
        page: Page,
    ) -> RepoResult<Vec<FundingOpportunity>> {
        let rows = sqlx::query_as::<_, FundingOpportunityModel>(
            r"
            SELECT id, title, description, amount, deadline, is_open, created_by,
                   created_at, updated_at
            FROM funding_opportunities
            WHERE NOT $1 OR (is_open AND (deadline IS NULL OR deadline > NOW()))
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(open_only)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(FundingOpportunity::from).collect())
    }

    #[instrument(skip(self, opportunity), fields(opportunity_id = %opportunity.id))]
    async fn create_opportunity(&self, opportunity: &FundingOpportunity) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO funding_opportunities (id, title, description, amount, deadline, is_open,
                                               created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(opportunity.id)
        .bind(&opportunity.title)
        .bind(&opportunity.description)
        .bind(opportunity.amount)
        .bind(opportunity.deadline)
        .bind(opportunity.is_open)
        .bind(opportunity.created_by)
        .bind(opportunity.created_at)
        .bind(opportunity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, opportunity), fields(opportunity_id = %opportunity.id))]
    async fn update_opportunity(&self, opportunity: &FundingOpportunity) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE funding_opportunities
            SET title = $2, description = $3, amount = $4, deadline = $5, is_open = $6,
                updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(opportunity.id)
        .bind(&opportunity.title)
        .bind(&opportunity.description)
        .bind(opportunity.amount)
        .bind(opportunity.deadline)
        .bind(opportunity.is_open)
        .bind(opportunity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OpportunityNotFound(opportunity.id));
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Applications
    // ------------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn find_application(&self, id: Uuid) -> RepoResult<Option<FundingApplication>> {
        let result = sqlx::query_as::<_, FundingApplicationModel>(
            r"
            SELECT id, opportunity_id, innovator_id, startup_id, pitch, requested_amount,
                   status, decided_by, decided_at, created_at, updated_at
            FROM funding_applications
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FundingApplication::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending_application(
        &self,
        opportunity_id: Uuid,
        innovator_id: Uuid,
    ) -> RepoResult<Option<FundingApplication>> {
        let result = sqlx::query_as::<_, FundingApplicationModel>(
            r"
            SELECT id, opportunity_id, innovator_id, startup_id, pitch, requested_amount,
                   status, decided_by, decided_at, created_at, updated_at
            FROM funding_applications
            WHERE opportunity_id = $1 AND innovator_id = $2 AND status = 'PENDING'
            ",
        )
        .bind(opportunity_id)
        .bind(innovator_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FundingApplication::try_from).transpose()
    }

    #[instrument(skip(self, application), fields(application_id = %application.id))]
    async fn create_application(&self, application: &FundingApplication) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO funding_applications (id, opportunity_id, innovator_id, startup_id,
                                              pitch, requested_amount, status,
                                              created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(application.id)
        .bind(application.opportunity_id)
        .bind(application.innovator_id)
        .bind(application.startup_id)
        .bind(&application.pitch)
        .bind(application.requested_amount)
        .bind(application.status.as_str())
        .bind(application.created_at)
        .bind(application.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateApplication))?;

        Ok(())
    }

    #[instrument(
        skip(self, application),
        fields(application_id = %application.id, status = %application.status)
    )]
    async fn update_application_status(&self, application: &FundingApplication) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE funding_applications
            SET status = $2, decided_by = $3, decided_at = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(application.id)
        .bind(application.status.as_str())
        .bind(application.decided_by)
        .bind(application.decided_at)
        .bind(application.updated_at)
        .execute(&self.pool)
        .await
        // Re-opening as PENDING can collide with a newer pending application
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateApplication))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FundingApplicationNotFound(application.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_applications_by_innovator(
        &self,
        innovator_id: Uuid,
    ) -> RepoResult<Vec<FundingApplication>> {
        let rows = sqlx::query_as::<_, FundingApplicationModel>(
            r"
            SELECT id, opportunity_id, innovator_id, startup_id, pitch, requested_amount,
                   status, decided_by, decided_at, created_at, updated_at
            FROM funding_applications
            WHERE innovator_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(innovator_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn list_applications_by_opportunity(
        &self,
        opportunity_id: Uuid,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> RepoResult<Vec<FundingApplication>> {
        let rows = sqlx::query_as::<_, FundingApplicationModel>(
            r"
            SELECT id, opportunity_id, innovator_id, startup_id, pitch, requested_amount,
                   status, decided_by, decided_at, created_at, updated_at
            FROM funding_applications
            WHERE opportunity_id = $1 AND ($2::TEXT IS NULL OR status = $2)
            ORDER BY created_at ASC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(opportunity_id)
        .bind(status.map(ReviewStatus::as_str))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn count_applications(
        &self,
        status: ReviewStatus,
        innovator_id: Option<Uuid>,
    ) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM funding_applications
            WHERE status = $1 AND ($2::UUID IS NULL OR innovator_id = $2)
            ",
        )
        .bind(status.as_str())
        .bind(innovator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
