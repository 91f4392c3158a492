//! Authentication handlers
//!
//! Endpoints for registration, login, logout, and session inspection.
//! Register and login return the token in the body and set it as a cookie.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use launchpad_service::dto::{LoginRequest, RegisterRequest, SessionResponse};
use launchpad_service::AuthService;

use crate::extractors::{AuthCaller, SessionToken, ValidatedJson};
use crate::response::{cleared_session_cookie, session_cookie, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let response = AuthService::new(state.service_context())
        .register(request)
        .await?;
    let cookie = session_cookie(&state.config().session, &response.token)?;
    Ok(Created((AppendHeaders([(SET_COOKIE, cookie)]), Json(response))))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let response = AuthService::new(state.service_context()).login(request).await?;
    let cookie = session_cookie(&state.config().session, &response.token)?;
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(response)))
}

/// Revoke the presented session and clear the cookie
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> ApiResult<impl IntoResponse> {
    if let Some(token) = token {
        AuthService::new(state.service_context()).logout(&token).await?;
    }
    let cookie = cleared_session_cookie(&state.config().session)?;
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), NoContent))
}

/// The caller behind the presented session
///
/// GET /auth/session
pub async fn session(AuthCaller(caller): AuthCaller) -> Json<SessionResponse> {
    Json(SessionResponse {
        user_id: caller.user_id,
        role: caller.role,
    })
}
