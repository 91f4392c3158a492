//! Dashboard service - role-specific read-only summaries

use chrono::Utc;
use launchpad_core::{Caller, ReviewStatus, StartupStatus, UserRole};
use tracing::instrument;

use crate::dto::{
    AdminDashboard, CallResponse, DashboardResponse, MentorDashboard, StartupCounts,
    UserDashboard,
};

use super::call::DEFAULT_UPCOMING_LIMIT;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Summary matching the caller's role
    #[instrument(skip(self))]
    pub async fn get(&self, caller: &Caller) -> ServiceResult<DashboardResponse> {
        match caller.role {
            UserRole::User => self.user_dashboard(caller).await.map(DashboardResponse::User),
            UserRole::Mentor => self
                .mentor_dashboard(caller)
                .await
                .map(DashboardResponse::Mentor),
            UserRole::Admin => self.admin_dashboard().await.map(DashboardResponse::Admin),
        }
    }

    async fn user_dashboard(&self, caller: &Caller) -> ServiceResult<UserDashboard> {
        let mentorship = self.ctx.mentorship_repo();
        let counts = self.ctx.startup_repo().count_by_owner(caller.user_id).await?;

        Ok(UserDashboard {
            startups: StartupCounts::from_pairs(&counts),
            pending_incoming_requests: mentorship
                .count_pending_requests(caller.user_id, true)
                .await?,
            pending_outgoing_requests: mentorship
                .count_pending_requests(caller.user_id, false)
                .await?,
            pending_funding_applications: self
                .ctx
                .funding_repo()
                .count_applications(ReviewStatus::Pending, Some(caller.user_id))
                .await?,
        })
    }

    async fn mentor_dashboard(&self, caller: &Caller) -> ServiceResult<MentorDashboard> {
        let mentorship = self.ctx.mentorship_repo();
        let upcoming = self
            .ctx
            .call_repo()
            .list_upcoming_for_user(caller.user_id, Utc::now(), DEFAULT_UPCOMING_LIMIT)
            .await?;

        Ok(MentorDashboard {
            pending_incoming_requests: mentorship
                .count_pending_requests(caller.user_id, true)
                .await?,
            active_relationships: mentorship
                .count_active_relationships(caller.user_id)
                .await?,
            upcoming_calls: upcoming.into_iter().map(CallResponse::from).collect(),
        })
    }

    async fn admin_dashboard(&self) -> ServiceResult<AdminDashboard> {
        Ok(AdminDashboard {
            pending_startups: self
                .ctx
                .startup_repo()
                .count_by_status(StartupStatus::Pending)
                .await?,
            pending_mentor_applications: self
                .ctx
                .mentor_application_repo()
                .count_by_status(ReviewStatus::Pending)
                .await?,
            pending_funding_applications: self
                .ctx
                .funding_repo()
                .count_applications(ReviewStatus::Pending, None)
                .await?,
            total_users: self.ctx.user_repo().count().await?,
        })
    }
}
