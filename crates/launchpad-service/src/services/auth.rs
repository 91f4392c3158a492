//! Authentication service
//!
//! Handles registration, login, logout, and resolving a session token into
//! the caller identity every other service takes.

use launchpad_common::{generate_session_token, looks_like_session_token, AppError};
use launchpad_core::{normalize_email, Caller, DomainError, User, UserRole};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account and open a session for it
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        // Policy check and hash before touching the database
        let password_hash = self.ctx.passwords().hash_new(&request.password)?;

        if self.ctx.user_repo().email_exists(&email).await? {
            warn!("Registration rejected: email already in use");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let role = if self.ctx.settings().admin.is_bootstrap_admin(&email) {
            UserRole::Admin
        } else {
            UserRole::User
        };

        let user = User::new(Uuid::new_v4(), &email, request.name.trim().to_string(), role);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        self.open_session(&user).await
    }

    /// Verify credentials and open a session
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .passwords()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: invalid password"))?;

        // Only revealed once the password is proven
        if user.is_disabled {
            warn!(user_id = %user.id, "Login rejected: account disabled");
            return Err(AppError::AccountDisabled.into());
        }

        info!(user_id = %user.id, "User logged in");

        self.open_session(&user).await
    }

    /// Revoke a session. Unknown tokens are ignored.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        if looks_like_session_token(token) {
            self.ctx.session_store().revoke(token).await?;
            debug!("Session revoked");
        }
        Ok(())
    }

    /// Resolve a session token into the caller. The role is read from the
    /// account on every call, so a role change applies on the next request.
    #[instrument(skip(self, token))]
    pub async fn resolve_caller(&self, token: Option<&str>) -> ServiceResult<Caller> {
        let token = token.ok_or(ServiceError::App(AppError::MissingSession))?;
        if !looks_like_session_token(token) {
            return Err(AppError::InvalidSession.into());
        }

        let user_id = self
            .ctx
            .session_store()
            .resolve(token)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidSession))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidSession))?;

        if user.is_disabled {
            return Err(AppError::AccountDisabled.into());
        }

        Ok(Caller::new(user.id, user.role))
    }

    /// The caller's own account
    #[instrument(skip(self))]
    pub async fn current_user(&self, caller: &Caller) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", caller.user_id))?;

        Ok(UserResponse::from(&user))
    }

    async fn open_session(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = generate_session_token();
        let ttl = self.ctx.settings().session_ttl_seconds;

        self.ctx.session_store().create(&token, user.id, ttl).await?;

        Ok(AuthResponse {
            user: UserResponse::from(user),
            token,
            expires_in: ttl,
        })
    }
}
