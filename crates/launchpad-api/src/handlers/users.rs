//! User handlers
//!
//! The caller's own account and the public mentor directory.

use axum::{extract::State, Json};
use launchpad_service::dto::{MentorProfileResponse, UserResponse};
use launchpad_service::{AuthService, UserService};

use crate::extractors::{AuthCaller, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult<Json<UserResponse>> {
    let response = AuthService::new(state.service_context())
        .current_user(&caller)
        .await?;
    Ok(Json(response))
}

/// Approved, enabled mentors with their expertise
///
/// GET /mentors
pub async fn list_mentors(
    State(state): State<AppState>,
    _caller: AuthCaller,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<MentorProfileResponse>>> {
    let response = UserService::new(state.service_context())
        .list_mentors(page)
        .await?;
    Ok(Json(response))
}
