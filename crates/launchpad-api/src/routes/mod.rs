//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{
    admin, auth, calls, dashboard, funding, health, mentor_applications, mentorship, startups,
    users,
};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(startup_routes())
        .merge(mentor_application_routes())
        .merge(mentorship_routes())
        .merge(call_routes())
        .merge(funding_routes())
        .route("/dashboard", get(dashboard::get_dashboard))
        .nest("/admin", admin_routes())
}

/// Session routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/session", get(auth::session))
}

/// Account and mentor directory routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/mentors", get(users::list_mentors))
}

/// Startup routes
fn startup_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/startups",
            get(startups::list_startups).post(startups::create_startup),
        )
        .route("/startups/@me", get(startups::list_my_startups))
        .route(
            "/startups/:startup_id",
            get(startups::get_startup).patch(startups::update_startup),
        )
        .route("/startups/:startup_id/finish", post(startups::finish_startup))
        .route("/startups/:startup_id/archive", post(startups::archive_startup))
}

/// Mentor application routes
fn mentor_application_routes() -> Router<AppState> {
    Router::new()
        .route("/mentor-applications", post(mentor_applications::apply))
        .route(
            "/mentor-applications/@me",
            get(mentor_applications::list_my_applications),
        )
        .route(
            "/mentor-applications/:application_id",
            get(mentor_applications::get_application),
        )
}

/// Mentorship request, relationship, and message routes
fn mentorship_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/mentorship/requests",
            get(mentorship::list_requests).post(mentorship::create_request),
        )
        .route("/mentorship/requests/:request_id", get(mentorship::get_request))
        .route(
            "/mentorship/requests/:request_id/decision",
            post(mentorship::decide_request),
        )
        .route(
            "/mentorship/requests/:request_id/withdraw",
            post(mentorship::withdraw_request),
        )
        .route(
            "/mentorship/relationships",
            get(mentorship::list_relationships),
        )
        .route(
            "/mentorship/relationships/:relationship_id",
            get(mentorship::get_relationship),
        )
        .route(
            "/mentorship/relationships/:relationship_id/end",
            post(mentorship::end_relationship),
        )
        .route(
            "/mentorship/relationships/:relationship_id/messages",
            get(mentorship::list_messages).post(mentorship::send_message),
        )
        .route(
            "/mentorship/relationships/:relationship_id/calls",
            get(calls::list_calls).post(calls::propose_call),
        )
}

/// Call routes
fn call_routes() -> Router<AppState> {
    Router::new()
        .route("/calls/upcoming", get(calls::upcoming_calls))
        .route("/calls/:call_id/confirm", post(calls::confirm_call))
        .route("/calls/:call_id/decline", post(calls::decline_call))
}

/// Funding routes
fn funding_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/funding/opportunities",
            get(funding::list_open_opportunities),
        )
        .route(
            "/funding/opportunities/:opportunity_id",
            get(funding::get_opportunity),
        )
        .route(
            "/funding/opportunities/:opportunity_id/applications",
            post(funding::submit_application),
        )
        .route(
            "/funding/applications/@me",
            get(funding::list_my_applications),
        )
        .route(
            "/funding/applications/:application_id",
            get(funding::get_application),
        )
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", get(admin::list_users))
        .route("/users/:user_id", get(admin::get_user))
        .route("/users/:user_id/role", put(admin::set_user_role))
        .route("/users/:user_id/disabled", put(admin::set_user_disabled))
        // Startups
        .route("/startups", get(admin::list_startups))
        .route("/startups/:startup_id/review", post(admin::review_startup))
        // Mentor applications
        .route("/mentor-applications", get(admin::list_mentor_applications))
        .route(
            "/mentor-applications/:application_id/review",
            post(admin::review_mentor_application),
        )
        // Funding
        .route(
            "/funding/opportunities",
            get(admin::list_opportunities).post(admin::create_opportunity),
        )
        .route(
            "/funding/opportunities/:opportunity_id",
            patch(admin::update_opportunity),
        )
        .route(
            "/funding/opportunities/:opportunity_id/close",
            post(admin::close_opportunity),
        )
        .route(
            "/funding/opportunities/:opportunity_id/applications",
            get(admin::list_opportunity_applications),
        )
        .route(
            "/funding/applications/:application_id/decision",
            post(admin::decide_funding_application),
        )
        // Calls
        .route("/calls/reminders", post(admin::run_reminders))
}
