//! Admin handlers
//!
//! User management, startup and mentor application review, funding
//! opportunity management, application decisions, and the reminder sweep.
//! Every service call below checks the ADMIN role itself.

use axum::{extract::State, Json};
use launchpad_core::{ReviewStatus, StartupStatus, UserRole};
use launchpad_service::dto::{
    CreateOpportunityRequest, FundingApplicationResponse, FundingDecisionRequest,
    MentorApplicationResponse, OpportunityResponse, ReminderSweepResponse, ReviewRequest,
    SetDisabledRequest, SetRoleRequest, StartupResponse, UpdateOpportunityRequest, UserResponse,
};
use launchpad_service::{
    CallService, FundingService, MentorApplicationService, StartupService, UserService,
};

use crate::extractors::{
    AuthCaller, IdPath, Pagination, QueryFilter, RoleFilter, StatusFilter, ValidatedJson,
};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

// ============================================================================
// Users
// ============================================================================

/// GET /admin/users?role=
pub async fn list_users(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    QueryFilter(filter): QueryFilter<RoleFilter<UserRole>>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let response = UserService::new(state.service_context())
        .list_users(&caller, filter.role, page)
        .await?;
    Ok(Json(response))
}

/// GET /admin/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let response = UserService::new(state.service_context())
        .get_user(&caller, user_id)
        .await?;
    Ok(Json(response))
}

/// PUT /admin/users/{user_id}/role
pub async fn set_user_role(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<SetRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    let response = UserService::new(state.service_context())
        .set_role(&caller, user_id, request.role)
        .await?;
    Ok(Json(response))
}

/// PUT /admin/users/{user_id}/disabled
pub async fn set_user_disabled(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<SetDisabledRequest>,
) -> ApiResult<Json<UserResponse>> {
    let response = UserService::new(state.service_context())
        .set_disabled(&caller, user_id, request.disabled)
        .await?;
    Ok(Json(response))
}

// ============================================================================
// Startups
// ============================================================================

/// GET /admin/startups?status=
pub async fn list_startups(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    QueryFilter(filter): QueryFilter<StatusFilter<StartupStatus>>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<StartupResponse>>> {
    let response = StartupService::new(state.service_context())
        .list_by_status(&caller, filter.status, page)
        .await?;
    Ok(Json(response))
}

/// POST /admin/startups/{startup_id}/review
pub async fn review_startup(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(startup_id): IdPath,
    ValidatedJson(request): ValidatedJson<ReviewRequest>,
) -> ApiResult<Json<StartupResponse>> {
    let response = StartupService::new(state.service_context())
        .review(&caller, startup_id, request)
        .await?;
    Ok(Json(response))
}

// ============================================================================
// Mentor applications
// ============================================================================

/// GET /admin/mentor-applications?status=
pub async fn list_mentor_applications(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    QueryFilter(filter): QueryFilter<StatusFilter<ReviewStatus>>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<MentorApplicationResponse>>> {
    let response = MentorApplicationService::new(state.service_context())
        .list_by_status(&caller, filter.status, page)
        .await?;
    Ok(Json(response))
}

/// Approval grants the MENTOR role
///
/// POST /admin/mentor-applications/{application_id}/review
pub async fn review_mentor_application(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(application_id): IdPath,
    ValidatedJson(request): ValidatedJson<ReviewRequest>,
) -> ApiResult<Json<MentorApplicationResponse>> {
    let response = MentorApplicationService::new(state.service_context())
        .review(&caller, application_id, request)
        .await?;
    Ok(Json(response))
}

// ============================================================================
// Funding
// ============================================================================

/// Every opportunity, open or not
///
/// GET /admin/funding/opportunities
pub async fn list_opportunities(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<OpportunityResponse>>> {
    let response = FundingService::new(state.service_context())
        .list_all(&caller, page)
        .await?;
    Ok(Json(response))
}

/// POST /admin/funding/opportunities
pub async fn create_opportunity(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(request): ValidatedJson<CreateOpportunityRequest>,
) -> ApiResult<Created<Json<OpportunityResponse>>> {
    let response = FundingService::new(state.service_context())
        .create_opportunity(&caller, request)
        .await?;
    Ok(Created(Json(response)))
}

/// PATCH /admin/funding/opportunities/{opportunity_id}
pub async fn update_opportunity(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(opportunity_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateOpportunityRequest>,
) -> ApiResult<Json<OpportunityResponse>> {
    let response = FundingService::new(state.service_context())
        .update_opportunity(&caller, opportunity_id, request)
        .await?;
    Ok(Json(response))
}

/// POST /admin/funding/opportunities/{opportunity_id}/close
pub async fn close_opportunity(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(opportunity_id): IdPath,
) -> ApiResult<Json<OpportunityResponse>> {
    let response = FundingService::new(state.service_context())
        .close_opportunity(&caller, opportunity_id)
        .await?;
    Ok(Json(response))
}

/// GET /admin/funding/opportunities/{opportunity_id}/applications?status=
pub async fn list_opportunity_applications(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(opportunity_id): IdPath,
    QueryFilter(filter): QueryFilter<StatusFilter<ReviewStatus>>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<FundingApplicationResponse>>> {
    let response = FundingService::new(state.service_context())
        .list_for_opportunity(&caller, opportunity_id, filter.status, page)
        .await?;
    Ok(Json(response))
}

/// Sets any status, including back to PENDING
///
/// POST /admin/funding/applications/{application_id}/decision
pub async fn decide_funding_application(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(application_id): IdPath,
    ValidatedJson(request): ValidatedJson<FundingDecisionRequest>,
) -> ApiResult<Json<FundingApplicationResponse>> {
    let response = FundingService::new(state.service_context())
        .decide(&caller, application_id, request)
        .await?;
    Ok(Json(response))
}

// ============================================================================
// Reminders
// ============================================================================

/// Run one reminder sweep now
///
/// POST /admin/calls/reminders
pub async fn run_reminders(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult<Json<ReminderSweepResponse>> {
    let response = CallService::new(state.service_context())
        .trigger_reminders(&caller)
        .await?;
    Ok(Json(response))
}
