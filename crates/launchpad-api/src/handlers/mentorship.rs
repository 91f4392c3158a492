//! Mentorship handlers
//!
//! Requests between mentors and startups, the relationships they open,
//! and the messages exchanged inside a relationship.

use axum::{extract::State, Json};
use launchpad_core::{RelationshipStatus, ReviewStatus};
use launchpad_service::dto::{
    CreateMentorshipRequest, DecideRequest, MentorshipRequestResponse, MessageResponse,
    RelationshipResponse, RequestDecisionResponse, SendMessageRequest,
};
use launchpad_service::MentorshipService;

use crate::extractors::{AuthCaller, IdPath, Pagination, QueryFilter, StatusFilter, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

// ============================================================================
// Requests
// ============================================================================

/// POST /mentorship/requests
pub async fn create_request(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(request): ValidatedJson<CreateMentorshipRequest>,
) -> ApiResult<Created<Json<MentorshipRequestResponse>>> {
    let response = MentorshipService::new(state.service_context())
        .create_request(&caller, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Requests the caller is a party to; every request for admins
///
/// GET /mentorship/requests?status=
pub async fn list_requests(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    QueryFilter(filter): QueryFilter<StatusFilter<ReviewStatus>>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<MentorshipRequestResponse>>> {
    let response = MentorshipService::new(state.service_context())
        .list_requests(&caller, filter.status, page)
        .await?;
    Ok(Json(response))
}

/// GET /mentorship/requests/{request_id}
pub async fn get_request(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(request_id): IdPath,
) -> ApiResult<Json<MentorshipRequestResponse>> {
    let response = MentorshipService::new(state.service_context())
        .get_request(&caller, request_id)
        .await?;
    Ok(Json(response))
}

/// Accept or decline, by the counterparty of the initiator
///
/// POST /mentorship/requests/{request_id}/decision
pub async fn decide_request(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(request_id): IdPath,
    ValidatedJson(request): ValidatedJson<DecideRequest>,
) -> ApiResult<Json<RequestDecisionResponse>> {
    let response = MentorshipService::new(state.service_context())
        .decide(&caller, request_id, request)
        .await?;
    Ok(Json(response))
}

/// POST /mentorship/requests/{request_id}/withdraw
pub async fn withdraw_request(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(request_id): IdPath,
) -> ApiResult<Json<MentorshipRequestResponse>> {
    let response = MentorshipService::new(state.service_context())
        .withdraw(&caller, request_id)
        .await?;
    Ok(Json(response))
}

// ============================================================================
// Relationships
// ============================================================================

/// GET /mentorship/relationships?status=
pub async fn list_relationships(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    QueryFilter(filter): QueryFilter<StatusFilter<RelationshipStatus>>,
) -> ApiResult<Json<Vec<RelationshipResponse>>> {
    let response = MentorshipService::new(state.service_context())
        .list_relationships(&caller, filter.status)
        .await?;
    Ok(Json(response))
}

/// GET /mentorship/relationships/{relationship_id}
pub async fn get_relationship(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(relationship_id): IdPath,
) -> ApiResult<Json<RelationshipResponse>> {
    let response = MentorshipService::new(state.service_context())
        .get_relationship(&caller, relationship_id)
        .await?;
    Ok(Json(response))
}

/// POST /mentorship/relationships/{relationship_id}/end
pub async fn end_relationship(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(relationship_id): IdPath,
) -> ApiResult<Json<RelationshipResponse>> {
    let response = MentorshipService::new(state.service_context())
        .end_relationship(&caller, relationship_id)
        .await?;
    Ok(Json(response))
}

// ============================================================================
// Messages
// ============================================================================

/// POST /mentorship/relationships/{relationship_id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(relationship_id): IdPath,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let response = MentorshipService::new(state.service_context())
        .send_message(&caller, relationship_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Oldest first
///
/// GET /mentorship/relationships/{relationship_id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(relationship_id): IdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let response = MentorshipService::new(state.service_context())
        .list_messages(&caller, relationship_id, page)
        .await?;
    Ok(Json(response))
}
