//! Session extractors
//!
//! The session token is read from a `Bearer` Authorization header first and
//! from the session cookie second. The caller's role is re-read from the
//! account on every request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization, Cookie},
    TypedHeader,
};
use launchpad_core::Caller;
use launchpad_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw session token presented with the request, if any
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        {
            return Ok(Self(Some(bearer.token().to_string())));
        }

        let app_state = AppState::from_ref(state);
        let cookie_name = &app_state.config().session.cookie_name;
        let token = TypedHeader::<Cookie>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|TypedHeader(cookie)| cookie.get(cookie_name).map(str::to_string))
            .filter(|t| !t.is_empty());

        Ok(Self(token))
    }
}

/// Authenticated caller resolved from the session
#[derive(Debug, Clone, Copy)]
pub struct AuthCaller(pub Caller);

#[async_trait]
impl<S> FromRequestParts<S> for AuthCaller
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let SessionToken(token) = SessionToken::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);

        let caller = AuthService::new(app_state.service_context())
            .resolve_caller(token.as_deref())
            .await
            .inspect_err(|e| tracing::debug!(error = %e, "Session rejected"))?;

        Ok(Self(caller))
    }
}
