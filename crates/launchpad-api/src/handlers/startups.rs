//! Startup handlers
//!
//! Submission, catalog, owner edits, and the finish / archive transitions.

use axum::{extract::State, Json};
use launchpad_service::dto::{CreateStartupRequest, StartupResponse, UpdateStartupRequest};
use launchpad_service::StartupService;

use crate::extractors::{AuthCaller, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /startups
pub async fn create_startup(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(request): ValidatedJson<CreateStartupRequest>,
) -> ApiResult<Created<Json<StartupResponse>>> {
    let response = StartupService::new(state.service_context())
        .create(&caller, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Approved startups
///
/// GET /startups
pub async fn list_startups(
    State(state): State<AppState>,
    _caller: AuthCaller,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<StartupResponse>>> {
    let response = StartupService::new(state.service_context())
        .list_approved(page)
        .await?;
    Ok(Json(response))
}

/// GET /startups/@me
pub async fn list_my_startups(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult<Json<Vec<StartupResponse>>> {
    let response = StartupService::new(state.service_context())
        .list_mine(&caller)
        .await?;
    Ok(Json(response))
}

/// GET /startups/{startup_id}
pub async fn get_startup(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(startup_id): IdPath,
) -> ApiResult<Json<StartupResponse>> {
    let response = StartupService::new(state.service_context())
        .get(&caller, startup_id)
        .await?;
    Ok(Json(response))
}

/// PATCH /startups/{startup_id}
pub async fn update_startup(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(startup_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateStartupRequest>,
) -> ApiResult<Json<StartupResponse>> {
    let response = StartupService::new(state.service_context())
        .update(&caller, startup_id, request)
        .await?;
    Ok(Json(response))
}

/// POST /startups/{startup_id}/finish
pub async fn finish_startup(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(startup_id): IdPath,
) -> ApiResult<Json<StartupResponse>> {
    let response = StartupService::new(state.service_context())
        .finish(&caller, startup_id)
        .await?;
    Ok(Json(response))
}

/// POST /startups/{startup_id}/archive
pub async fn archive_startup(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(startup_id): IdPath,
) -> ApiResult<Json<StartupResponse>> {
    let response = StartupService::new(state.service_context())
        .archive(&caller, startup_id)
        .await?;
    Ok(Json(response))
}
