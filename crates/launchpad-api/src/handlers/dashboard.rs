//! Dashboard handler

use axum::{extract::State, Json};
use launchpad_service::dto::DashboardResponse;
use launchpad_service::DashboardService;

use crate::extractors::AuthCaller;
use crate::response::ApiResult;
use crate::state::AppState;

/// Summary for the caller's role, tagged with `role`
///
/// GET /dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
) -> ApiResult<Json<DashboardResponse>> {
    let response = DashboardService::new(state.service_context())
        .get(&caller)
        .await?;
    Ok(Json(response))
}
