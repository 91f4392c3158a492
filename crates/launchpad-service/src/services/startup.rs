//! Startup service
//!
//! Submission, owner edits, admin review, and the terminal FINISHED /
//! ARCHIVED transitions of a startup.

use launchpad_core::{
    Caller, DomainError, Notification, NotificationKind, Page, Startup, StartupDetails,
    StartupStatus, UserRole,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CreateStartupRequest, ReviewRequest, StartupResponse, UpdateStartupRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Startup service
pub struct StartupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StartupService<'a> {
    /// Create a new StartupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a startup for review. Only USER accounts own startups.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: &Caller,
        request: CreateStartupRequest,
    ) -> ServiceResult<StartupResponse> {
        caller.require_role(UserRole::User)?;

        let startup = Startup::new(Uuid::new_v4(), caller.user_id, request.into());
        self.ctx.startup_repo().create(&startup).await?;

        info!(startup_id = %startup.id, owner_id = %startup.owner_id, "Startup submitted");

        Ok(StartupResponse::from(&startup))
    }

    /// Approved startups are visible to everyone; others only to the owner and admins
    #[instrument(skip(self))]
    pub async fn get(&self, caller: &Caller, startup_id: Uuid) -> ServiceResult<StartupResponse> {
        let startup = self.load(startup_id).await?;

        if !startup.is_approved() && !startup.is_owned_by(caller.user_id) && !caller.is_admin() {
            return Err(DomainError::NotStartupOwner.into());
        }

        Ok(StartupResponse::from(&startup))
    }

    /// Public catalog of approved startups
    #[instrument(skip(self))]
    pub async fn list_approved(&self, page: Page) -> ServiceResult<Vec<StartupResponse>> {
        let startups = self
            .ctx
            .startup_repo()
            .list_by_status(Some(StartupStatus::Approved), page)
            .await?;

        Ok(startups.into_iter().map(StartupResponse::from).collect())
    }

    /// The caller's own startups in every status
    #[instrument(skip(self))]
    pub async fn list_mine(&self, caller: &Caller) -> ServiceResult<Vec<StartupResponse>> {
        let startups = self.ctx.startup_repo().list_by_owner(caller.user_id).await?;
        Ok(startups.into_iter().map(StartupResponse::from).collect())
    }

    /// Admin listing, optionally by status
    #[instrument(skip(self))]
    pub async fn list_by_status(
        &self,
        caller: &Caller,
        status: Option<StartupStatus>,
        page: Page,
    ) -> ServiceResult<Vec<StartupResponse>> {
        caller.require_admin()?;

        let startups = self.ctx.startup_repo().list_by_status(status, page).await?;
        Ok(startups.into_iter().map(StartupResponse::from).collect())
    }

    /// Owner edit. Editing a REJECTED startup resubmits it.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: &Caller,
        startup_id: Uuid,
        request: UpdateStartupRequest,
    ) -> ServiceResult<StartupResponse> {
        let mut startup = self.load(startup_id).await?;
        if !startup.is_owned_by(caller.user_id) {
            warn!(startup_id = %startup_id, "Update rejected: not the owner");
            return Err(DomainError::NotStartupOwner.into());
        }

        let details = request.merge_into(current_details(&startup));
        let previous = startup.apply_update(details)?;
        self.persist(&startup, previous).await?;

        info!(
            startup_id = %startup_id,
            status = %startup.status,
            "Startup updated"
        );

        Ok(StartupResponse::from(&startup))
    }

    /// Admin review: PENDING -> APPROVED / REJECTED
    #[instrument(skip(self, request))]
    pub async fn review(
        &self,
        caller: &Caller,
        startup_id: Uuid,
        request: ReviewRequest,
    ) -> ServiceResult<StartupResponse> {
        caller.require_admin()?;

        let mut startup = self.load(startup_id).await?;
        let previous = startup.review(caller.user_id, request.decision, request.note)?;
        self.persist(&startup, previous).await?;

        info!(
            startup_id = %startup_id,
            reviewer_id = %caller.user_id,
            status = %startup.status,
            "Startup reviewed"
        );

        self.ctx
            .notify(Notification::new(
                startup.owner_id,
                NotificationKind::StartupReviewed,
                startup.id,
                format!("Your startup \"{}\" was {}", startup.name, startup.status),
            ))
            .await;

        Ok(StartupResponse::from(&startup))
    }

    /// APPROVED -> FINISHED, by the owner or an admin
    #[instrument(skip(self))]
    pub async fn finish(&self, caller: &Caller, startup_id: Uuid) -> ServiceResult<StartupResponse> {
        let mut startup = self.load(startup_id).await?;
        if !startup.is_owned_by(caller.user_id) && !caller.is_admin() {
            return Err(DomainError::NotStartupOwner.into());
        }

        let previous = startup.finish()?;
        self.persist(&startup, previous).await?;

        info!(startup_id = %startup_id, actor_id = %caller.user_id, "Startup finished");
        Ok(StartupResponse::from(&startup))
    }

    /// APPROVED -> ARCHIVED, by the owner only
    #[instrument(skip(self))]
    pub async fn archive(
        &self,
        caller: &Caller,
        startup_id: Uuid,
    ) -> ServiceResult<StartupResponse> {
        let mut startup = self.load(startup_id).await?;
        if !startup.is_owned_by(caller.user_id) {
            return Err(DomainError::NotStartupOwner.into());
        }

        let previous = startup.archive()?;
        self.persist(&startup, previous).await?;

        info!(startup_id = %startup_id, "Startup archived");
        Ok(StartupResponse::from(&startup))
    }

    async fn load(&self, startup_id: Uuid) -> ServiceResult<Startup> {
        self.ctx
            .startup_repo()
            .find_by_id(startup_id)
            .await?
            .ok_or_else(|| DomainError::StartupNotFound(startup_id).into())
    }

    async fn persist(&self, startup: &Startup, expected: StartupStatus) -> ServiceResult<()> {
        if self.ctx.startup_repo().update(startup, expected).await? {
            Ok(())
        } else {
            Err(ServiceError::stale("Startup"))
        }
    }
}

fn current_details(startup: &Startup) -> StartupDetails {
    StartupDetails {
        name: startup.name.clone(),
        description: startup.description.clone(),
        industry: startup.industry.clone(),
        stage: startup.stage.clone(),
        website: startup.website.clone(),
    }
}
