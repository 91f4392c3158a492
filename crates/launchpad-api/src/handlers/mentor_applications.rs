//! Mentor application handlers

use axum::{extract::State, Json};
use launchpad_service::dto::{MentorApplicationRequest, MentorApplicationResponse};
use launchpad_service::MentorApplicationService;

use crate::extractors::{AuthCaller, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /mentor-applications
pub async fn apply(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(request): ValidatedJson<MentorApplicationRequest>,
) -> ApiResult<Created<Json<MentorApplicationResponse>>> {
    let response = MentorApplicationService::new(state.service_context())
        .apply(&caller, request)
        .await?;
    Ok(Created(Json(response)))
}

/// GET /mentor-applications/@me
pub async fn list_my_applications(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult<Json<Vec<MentorApplicationResponse>>> {
    let response = MentorApplicationService::new(state.service_context())
        .list_mine(&caller)
        .await?;
    Ok(Json(response))
}

/// GET /mentor-applications/{application_id}
pub async fn get_application(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(application_id): IdPath,
) -> ApiResult<Json<MentorApplicationResponse>> {
    let response = MentorApplicationService::new(state.service_context())
        .get(&caller, application_id)
        .await?;
    Ok(Json(response))
}
