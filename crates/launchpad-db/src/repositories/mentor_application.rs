//! PostgreSQL implementation of MentorApplicationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use launchpad_core::traits::{MentorApplicationRepository, Page, RepoResult};
use launchpad_core::{DomainError, MentorApplication, MentorProfile, ReviewStatus, UserRole};

use crate::mappers::map_all;
use crate::models::{MentorApplicationModel, MentorProfileModel};

use super::error::{guarded, map_db_error, map_unique_violation};

/// PostgreSQL implementation of MentorApplicationRepository
#[derive(Clone)]
pub struct PgMentorApplicationRepository {
    pool: PgPool,
}

impl PgMentorApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MentorApplicationRepository for PgMentorApplicationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MentorApplication>> {
        let result = sqlx::query_as::<_, MentorApplicationModel>(
            r"
            SELECT id, user_id, expertise, experience_years, bio, linkedin_url, status,
                   review_note, reviewed_by, reviewed_at, created_at, updated_at
            FROM mentor_applications
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MentorApplication::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_blocking_for_user(
        &self,
        user_id: Uuid,
    ) -> RepoResult<Option<MentorApplication>> {
        let result = sqlx::query_as::<_, MentorApplicationModel>(
            r"
            SELECT id, user_id, expertise, experience_years, bio, linkedin_url, status,
                   review_note, reviewed_by, reviewed_at, created_at, updated_at
            FROM mentor_applications
            WHERE user_id = $1 AND status IN ('PENDING', 'APPROVED')
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MentorApplication::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<MentorApplication>> {
        let rows = sqlx::query_as::<_, MentorApplicationModel>(
            r"
            SELECT id, user_id, expertise, experience_years, bio, linkedin_url, status,
                   review_note, reviewed_by, reviewed_at, created_at, updated_at
            FROM mentor_applications
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self))]
    async fn list_by_status(
        &self,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> RepoResult<Vec<MentorApplication>> {
        let rows = sqlx::query_as::<_, MentorApplicationModel>(
            r"
            SELECT id, user_id, expertise, experience_years, bio, linkedin_url, status,
                   review_note, reviewed_by, reviewed_at, created_at, updated_at
            FROM mentor_applications
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at ASC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(status.map(ReviewStatus::as_str))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }

    #[instrument(skip(self, application), fields(application_id = %application.id))]
    async fn create(&self, application: &MentorApplication) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO mentor_applications (id, user_id, expertise, experience_years, bio,
                                             linkedin_url, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(application.id)
        .bind(application.user_id)
        .bind(&application.expertise)
        .bind(application.experience_years)
        .bind(&application.bio)
        .bind(&application.linkedin_url)
        .bind(application.status.as_str())
        .bind(application.created_at)
        .bind(application.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::MentorApplicationExists))?;

        Ok(())
    }

    #[instrument(
        skip(self, application),
        fields(application_id = %application.id, status = %application.status)
    )]
    async fn save_review(&self, application: &MentorApplication) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE mentor_applications
            SET status = $2, review_note = $3, reviewed_by = $4, reviewed_at = $5,
                updated_at = $6
            WHERE id = $1 AND status = 'PENDING'
            ",
        )
        .bind(application.id)
        .bind(application.status.as_str())
        .bind(&application.review_note)
        .bind(application.reviewed_by)
        .bind(application.reviewed_at)
        .bind(application.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !guarded(result.rows_affected()) {
            // Dropping the transaction rolls it back
            return Ok(false);
        }

        if application.status == ReviewStatus::Approved {
            // Only plain users are promoted; an existing higher role is kept
            let promoted = sqlx::query(
                "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 AND role = $3",
            )
            .bind(application.user_id)
            .bind(UserRole::Mentor.as_str())
            .bind(UserRole::User.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if promoted.rows_affected() == 0 {
                let current: Option<String> =
                    sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
                        .bind(application.user_id)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(map_db_error)?;

                match current {
                    None => return Err(DomainError::UserNotFound(application.user_id)),
                    Some(role) => warn!(
                        user_id = %application.user_id,
                        role = %role,
                        "Applicant already holds a role above USER, promotion skipped"
                    ),
                }
            } else {
                info!(user_id = %application.user_id, "User promoted to MENTOR");
            }
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: ReviewStatus) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mentor_applications WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_mentor_profiles(&self, page: Page) -> RepoResult<Vec<MentorProfile>> {
        let rows = sqlx::query_as::<_, MentorProfileModel>(
            r"
            SELECT u.email, u.name, u.role, u.is_disabled,
                   u.created_at AS user_created_at, u.updated_at AS user_updated_at,
                   a.id, a.user_id, a.expertise, a.experience_years, a.bio, a.linkedin_url,
                   a.status, a.review_note, a.reviewed_by, a.reviewed_at,
                   a.created_at, a.updated_at
            FROM users u
            JOIN mentor_applications a ON a.user_id = u.id AND a.status = 'APPROVED'
            WHERE u.role = 'MENTOR' AND u.is_disabled = FALSE
            ORDER BY u.name
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_all(rows)
    }
}
