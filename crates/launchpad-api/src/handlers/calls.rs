//! Scheduled call handlers

use axum::{extract::State, Json};
use launchpad_service::dto::{CallResponse, ProposeCallRequest};
use launchpad_service::CallService;

use crate::extractors::{AuthCaller, IdPath, LimitFilter, QueryFilter, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /mentorship/relationships/{relationship_id}/calls
pub async fn propose_call(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(relationship_id): IdPath,
    ValidatedJson(request): ValidatedJson<ProposeCallRequest>,
) -> ApiResult<Created<Json<CallResponse>>> {
    let response = CallService::new(state.service_context())
        .propose(&caller, relationship_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// GET /mentorship/relationships/{relationship_id}/calls
pub async fn list_calls(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(relationship_id): IdPath,
) -> ApiResult<Json<Vec<CallResponse>>> {
    let response = CallService::new(state.service_context())
        .list_for_relationship(&caller, relationship_id)
        .await?;
    Ok(Json(response))
}

/// Proposed and confirmed calls still ahead, soonest first
///
/// GET /calls/upcoming?limit=
pub async fn upcoming_calls(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    QueryFilter(filter): QueryFilter<LimitFilter>,
) -> ApiResult<Json<Vec<CallResponse>>> {
    let response = CallService::new(state.service_context())
        .upcoming(&caller, filter.limit)
        .await?;
    Ok(Json(response))
}

/// POST /calls/{call_id}/confirm
pub async fn confirm_call(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(call_id): IdPath,
) -> ApiResult<Json<CallResponse>> {
    let response = CallService::new(state.service_context())
        .confirm(&caller, call_id)
        .await?;
    Ok(Json(response))
}

/// POST /calls/{call_id}/decline
pub async fn decline_call(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(call_id): IdPath,
) -> ApiResult<Json<CallResponse>> {
    let response = CallService::new(state.service_context())
        .decline(&caller, call_id)
        .await?;
    Ok(Json(response))
}
