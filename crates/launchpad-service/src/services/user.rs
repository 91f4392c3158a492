//! User service
//!
//! Handles the caller's own account, the mentor directory, and admin account
//! management.

use launchpad_core::{Caller, Page, UserRole};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{MentorProfileResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by ID (admin)
    #[instrument(skip(self))]
    pub async fn get_user(&self, caller: &Caller, user_id: Uuid) -> ServiceResult<UserResponse> {
        caller.require_admin()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(UserResponse::from(&user))
    }

    /// Mentor directory: enabled mentors with their approved application
    #[instrument(skip(self))]
    pub async fn list_mentors(&self, page: Page) -> ServiceResult<Vec<MentorProfileResponse>> {
        let profiles = self
            .ctx
            .mentor_application_repo()
            .list_mentor_profiles(page)
            .await?;

        Ok(profiles.into_iter().map(MentorProfileResponse::from).collect())
    }

    /// List accounts, optionally by role (admin)
    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        caller: &Caller,
        role: Option<UserRole>,
        page: Page,
    ) -> ServiceResult<Vec<UserResponse>> {
        caller.require_admin()?;

        let users = self.ctx.user_repo().list(role, page).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Change an account's role (admin)
    #[instrument(skip(self))]
    pub async fn set_role(
        &self,
        caller: &Caller,
        user_id: Uuid,
        role: UserRole,
    ) -> ServiceResult<UserResponse> {
        caller.require_admin()?;
        if caller.is(user_id) {
            warn!("Admin attempted to change own role");
            return Err(ServiceError::validation("Admins cannot change their own role"));
        }

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        let previous = user.role;
        if previous != role {
            self.ctx.user_repo().set_role(user_id, role).await?;
            user.set_role(role);
            info!(user_id = %user_id, from = %previous, to = %role, "User role changed");
        }

        Ok(UserResponse::from(&user))
    }

    /// Disable or re-enable an account (admin). Disabling revokes every session.
    #[instrument(skip(self))]
    pub async fn set_disabled(
        &self,
        caller: &Caller,
        user_id: Uuid,
        disabled: bool,
    ) -> ServiceResult<UserResponse> {
        caller.require_admin()?;
        if caller.is(user_id) {
            warn!("Admin attempted to disable own account");
            return Err(ServiceError::validation("Admins cannot disable their own account"));
        }

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        self.ctx.user_repo().set_disabled(user_id, disabled).await?;
        user.set_disabled(disabled);

        if disabled {
            let revoked = self.ctx.session_store().revoke_all(user_id).await?;
            info!(user_id = %user_id, revoked_sessions = revoked, "User disabled");
        } else {
            info!(user_id = %user_id, "User re-enabled");
        }

        Ok(UserResponse::from(&user))
    }
}
