//! Funding service
//!
//! Admin-managed opportunities and the applications innovators submit
//! against them.

use chrono::Utc;
use launchpad_core::{
    Caller, DomainError, FundingApplication, FundingOpportunity, Notification, NotificationKind,
    Page, ReviewStatus, UserRole,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    CreateOpportunityRequest, FundingApplicationRequest, FundingApplicationResponse,
    FundingDecisionRequest, OpportunityResponse, UpdateOpportunityRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Funding service
pub struct FundingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FundingService<'a> {
    /// Create a new FundingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Opportunities
    // ========================================================================

    /// Opportunities currently accepting applications
    #[instrument(skip(self))]
    pub async fn list_open(&self, page: Page) -> ServiceResult<Vec<OpportunityResponse>> {
        let opportunities = self.ctx.funding_repo().list_opportunities(true, page).await?;
        Ok(opportunities
            .into_iter()
            .map(OpportunityResponse::from)
            .collect())
    }

    /// Every opportunity, closed ones included (admin)
    #[instrument(skip(self))]
    pub async fn list_all(
        &self,
        caller: &Caller,
        page: Page,
    ) -> ServiceResult<Vec<OpportunityResponse>> {
        caller.require_admin()?;

        let opportunities = self
            .ctx
            .funding_repo()
            .list_opportunities(false, page)
            .await?;
        Ok(opportunities
            .into_iter()
            .map(OpportunityResponse::from)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get_opportunity(&self, opportunity_id: Uuid) -> ServiceResult<OpportunityResponse> {
        let opportunity = self.load_opportunity(opportunity_id).await?;
        Ok(OpportunityResponse::from(&opportunity))
    }

    /// Publish an opportunity (admin)
    #[instrument(skip(self, request))]
    pub async fn create_opportunity(
        &self,
        caller: &Caller,
        request: CreateOpportunityRequest,
    ) -> ServiceResult<OpportunityResponse> {
        caller.require_admin()?;

        let opportunity = FundingOpportunity::new(
            Uuid::new_v4(),
            request.title,
            request.description,
            request.amount,
            request.deadline,
            caller.user_id,
        );
        self.ctx.funding_repo().create_opportunity(&opportunity).await?;

        info!(opportunity_id = %opportunity.id, amount = opportunity.amount, "Funding opportunity created");
        Ok(OpportunityResponse::from(&opportunity))
    }

    /// Edit an opportunity (admin)
    #[instrument(skip(self, request))]
    pub async fn update_opportunity(
        &self,
        caller: &Caller,
        opportunity_id: Uuid,
        request: UpdateOpportunityRequest,
    ) -> ServiceResult<OpportunityResponse> {
        caller.require_admin()?;

        let mut opportunity = self.load_opportunity(opportunity_id).await?;
        if let Some(title) = request.title {
            opportunity.title = title;
        }
        if let Some(description) = request.description {
            opportunity.description = description;
        }
        if let Some(amount) = request.amount {
            opportunity.amount = amount;
        }
        if request.deadline.is_some() {
            opportunity.deadline = request.deadline;
        }
        opportunity.updated_at = Utc::now();

        self.ctx.funding_repo().update_opportunity(&opportunity).await?;

        info!(opportunity_id = %opportunity_id, "Funding opportunity updated");
        Ok(OpportunityResponse::from(&opportunity))
    }

    /// Stop accepting applications (admin)
    #[instrument(skip(self))]
    pub async fn close_opportunity(
        &self,
        caller: &Caller,
        opportunity_id: Uuid,
    ) -> ServiceResult<OpportunityResponse> {
        caller.require_admin()?;

        let mut opportunity = self.load_opportunity(opportunity_id).await?;
        opportunity.close();
        self.ctx.funding_repo().update_opportunity(&opportunity).await?;

        info!(opportunity_id = %opportunity_id, "Funding opportunity closed");
        Ok(OpportunityResponse::from(&opportunity))
    }

    // ========================================================================
    // Applications
    // ========================================================================

    /// Apply to an open opportunity. One PENDING application per
    /// (opportunity, innovator).
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        caller: &Caller,
        opportunity_id: Uuid,
        request: FundingApplicationRequest,
    ) -> ServiceResult<FundingApplicationResponse> {
        caller.require_role(UserRole::User)?;

        let opportunity = self.load_opportunity(opportunity_id).await?;
        opportunity.ensure_accepting(Utc::now())?;

        if let Some(startup_id) = request.startup_id {
            let startup = self
                .ctx
                .startup_repo()
                .find_by_id(startup_id)
                .await?
                .ok_or(DomainError::StartupNotFound(startup_id))?;
            if !startup.is_owned_by(caller.user_id) {
                return Err(DomainError::NotStartupOwner.into());
            }
        }

        if self
            .ctx
            .funding_repo()
            .find_pending_application(opportunity_id, caller.user_id)
            .await?
            .is_some()
        {
            warn!(opportunity_id = %opportunity_id, "Application rejected: one is already pending");
            return Err(DomainError::DuplicateApplication.into());
        }

        let application = FundingApplication::new(
            Uuid::new_v4(),
            opportunity_id,
            caller.user_id,
            request.startup_id,
            request.pitch,
            request.requested_amount,
        );
        self.ctx.funding_repo().create_application(&application).await?;

        info!(
            application_id = %application.id,
            opportunity_id = %opportunity_id,
            "Funding application submitted"
        );

        Ok(FundingApplicationResponse::from(&application))
    }

    /// The caller's applications
    #[instrument(skip(self))]
    pub async fn list_mine(&self, caller: &Caller) -> ServiceResult<Vec<FundingApplicationResponse>> {
        let applications = self
            .ctx
            .funding_repo()
            .list_applications_by_innovator(caller.user_id)
            .await?;

        Ok(applications
            .into_iter()
            .map(FundingApplicationResponse::from)
            .collect())
    }

    /// One application, visible to its applicant and admins
    #[instrument(skip(self))]
    pub async fn get_application(
        &self,
        caller: &Caller,
        application_id: Uuid,
    ) -> ServiceResult<FundingApplicationResponse> {
        let application = self.load_application(application_id).await?;
        if !caller.is(application.innovator_id) && !caller.is_admin() {
            return Err(DomainError::NotApplicant.into());
        }

        Ok(FundingApplicationResponse::from(&application))
    }

    /// Applications of one opportunity, optionally by status (admin)
    #[instrument(skip(self))]
    pub async fn list_for_opportunity(
        &self,
        caller: &Caller,
        opportunity_id: Uuid,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> ServiceResult<Vec<FundingApplicationResponse>> {
        caller.require_admin()?;
        self.load_opportunity(opportunity_id).await?;

        let applications = self
            .ctx
            .funding_repo()
            .list_applications_by_opportunity(opportunity_id, status, page)
            .await?;

        Ok(applications
            .into_iter()
            .map(FundingApplicationResponse::from)
            .collect())
    }

    /// Admin status overwrite. Any status may follow any status.
    #[instrument(skip(self, request))]
    pub async fn decide(
        &self,
        caller: &Caller,
        application_id: Uuid,
        request: FundingDecisionRequest,
    ) -> ServiceResult<FundingApplicationResponse> {
        caller.require_admin()?;

        let mut application = self.load_application(application_id).await?;
        let previous = application.set_status(request.status, caller.user_id);
        self.ctx
            .funding_repo()
            .update_application_status(&application)
            .await?;

        info!(
            application_id = %application_id,
            from = %previous,
            to = %application.status,
            decided_by = %caller.user_id,
            "Funding application status set"
        );

        self.ctx
            .notify(Notification::new(
                application.innovator_id,
                NotificationKind::FundingDecided,
                application.id,
                format!("Your funding application is now {}", application.status),
            ))
            .await;

        Ok(FundingApplicationResponse::from(&application))
    }

    async fn load_opportunity(&self, opportunity_id: Uuid) -> ServiceResult<FundingOpportunity> {
        self.ctx
            .funding_repo()
            .find_opportunity(opportunity_id)
            .await?
            .ok_or_else(|| DomainError::OpportunityNotFound(opportunity_id).into())
    }

    async fn load_application(&self, application_id: Uuid) -> ServiceResult<FundingApplication> {
        self.ctx
            .funding_repo()
            .find_application(application_id)
            .await?
            .ok_or_else(|| DomainError::FundingApplicationNotFound(application_id).into())
    }
}
