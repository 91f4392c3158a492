//! Funding handlers
//!
//! Open opportunities and the caller's own applications. Opportunity
//! management and decisions live under the admin routes.

use axum::{extract::State, Json};
use launchpad_service::dto::{
    FundingApplicationRequest, FundingApplicationResponse, OpportunityResponse,
};
use launchpad_service::FundingService;

use crate::extractors::{AuthCaller, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Opportunities still accepting applications
///
/// GET /funding/opportunities
pub async fn list_open_opportunities(
    State(state): State<AppState>,
    _caller: AuthCaller,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<OpportunityResponse>>> {
    let response = FundingService::new(state.service_context())
        .list_open(page)
        .await?;
    Ok(Json(response))
}

/// GET /funding/opportunities/{opportunity_id}
pub async fn get_opportunity(
    State(state): State<AppState>,
    _caller: AuthCaller,
    IdPath(opportunity_id): IdPath,
) -> ApiResult<Json<OpportunityResponse>> {
    let response = FundingService::new(state.service_context())
        .get_opportunity(opportunity_id)
        .await?;
    Ok(Json(response))
}

/// POST /funding/opportunities/{opportunity_id}/applications
pub async fn submit_application(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(opportunity_id): IdPath,
    ValidatedJson(request): ValidatedJson<FundingApplicationRequest>,
) -> ApiResult<Created<Json<FundingApplicationResponse>>> {
    let response = FundingService::new(state.service_context())
        .submit(&caller, opportunity_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// GET /funding/applications/@me
pub async fn list_my_applications(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult<Json<Vec<FundingApplicationResponse>>> {
    let response = FundingService::new(state.service_context())
        .list_mine(&caller)
        .await?;
    Ok(Json(response))
}

/// GET /funding/applications/{application_id}
pub async fn get_application(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    IdPath(application_id): IdPath,
) -> ApiResult<Json<FundingApplicationResponse>> {
    let response = FundingService::new(state.service_context())
        .get_application(&caller, application_id)
        .await?;
    Ok(Json(response))
}
