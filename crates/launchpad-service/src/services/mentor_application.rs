//! Mentor application service
//!
//! A USER applies; an admin approves (promoting the account to MENTOR in
//! the same transaction) or rejects.

use launchpad_core::{
    Caller, DomainError, MentorApplication, Notification, NotificationKind, Page, ReviewStatus,
    UserRole,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{MentorApplicationRequest, MentorApplicationResponse, ReviewRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Mentor application service
pub struct MentorApplicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MentorApplicationService<'a> {
    /// Create a new MentorApplicationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply for the MENTOR role
    #[instrument(skip(self, request))]
    pub async fn apply(
        &self,
        caller: &Caller,
        request: MentorApplicationRequest,
    ) -> ServiceResult<MentorApplicationResponse> {
        caller.require_role(UserRole::User)?;

        if let Some(existing) = self
            .ctx
            .mentor_application_repo()
            .find_blocking_for_user(caller.user_id)
            .await?
        {
            warn!(
                application_id = %existing.id,
                status = %existing.status,
                "Mentor application rejected: one already exists"
            );
            return Err(DomainError::MentorApplicationExists.into());
        }

        let application = MentorApplication::new(
            Uuid::new_v4(),
            caller.user_id,
            request.expertise,
            request.experience_years,
            request.bio,
            request.linkedin_url,
        );
        self.ctx.mentor_application_repo().create(&application).await?;

        info!(application_id = %application.id, "Mentor application submitted");

        Ok(MentorApplicationResponse::from(&application))
    }

    /// The caller's applications, newest first
    #[instrument(skip(self))]
    pub async fn list_mine(&self, caller: &Caller) -> ServiceResult<Vec<MentorApplicationResponse>> {
        let applications = self
            .ctx
            .mentor_application_repo()
            .list_by_user(caller.user_id)
            .await?;

        Ok(applications
            .into_iter()
            .map(MentorApplicationResponse::from)
            .collect())
    }

    /// One application, visible to its applicant and admins
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: &Caller,
        application_id: Uuid,
    ) -> ServiceResult<MentorApplicationResponse> {
        let application = self.load(application_id).await?;
        if !caller.is(application.user_id) && !caller.is_admin() {
            return Err(DomainError::NotApplicant.into());
        }

        Ok(MentorApplicationResponse::from(&application))
    }

    /// Admin listing, optionally by status
    #[instrument(skip(self))]
    pub async fn list_by_status(
        &self,
        caller: &Caller,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> ServiceResult<Vec<MentorApplicationResponse>> {
        caller.require_admin()?;

        let applications = self
            .ctx
            .mentor_application_repo()
            .list_by_status(status, page)
            .await?;

        Ok(applications
            .into_iter()
            .map(MentorApplicationResponse::from)
            .collect())
    }

    /// Admin review. Approval promotes a USER applicant to MENTOR atomically;
    /// an applicant who meanwhile became ADMIN keeps that role.
    #[instrument(skip(self, request))]
    pub async fn review(
        &self,
        caller: &Caller,
        application_id: Uuid,
        request: ReviewRequest,
    ) -> ServiceResult<MentorApplicationResponse> {
        caller.require_admin()?;

        let mut application = self.load(application_id).await?;
        application.review(caller.user_id, request.decision, request.note)?;

        if !self
            .ctx
            .mentor_application_repo()
            .save_review(&application)
            .await?
        {
            return Err(ServiceError::stale("Mentor application"));
        }

        info!(
            application_id = %application_id,
            user_id = %application.user_id,
            status = %application.status,
            "Mentor application reviewed"
        );

        self.ctx
            .notify(Notification::new(
                application.user_id,
                NotificationKind::MentorApplicationReviewed,
                application.id,
                format!("Your mentor application was {}", application.status),
            ))
            .await;

        Ok(MentorApplicationResponse::from(&application))
    }

    async fn load(&self, application_id: Uuid) -> ServiceResult<MentorApplication> {
        self.ctx
            .mentor_application_repo()
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| DomainError::MentorApplicationNotFound(application_id).into())
    }
}
