//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Parties of an ACTIVE mentorship, built through the public API
struct Mentorship {
    admin: AuthResponse,
    founder: AuthResponse,
    mentor: AuthResponse,
    startup: StartupResponse,
    relationship: RelationshipResponse,
}

/// Submit a startup as `founder` and have `admin` approve it
async fn approved_startup(
    server: &TestServer,
    founder: &AuthResponse,
    admin: &AuthResponse,
) -> StartupResponse {
    let response = server
        .post_auth(
            "/api/v1/startups",
            &founder.token,
            &CreateStartupRequest::unique(),
        )
        .await
        .unwrap();
    let startup: StartupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/admin/startups/{}/review", startup.id),
            &admin.token,
            &ReviewRequest::approve(),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

/// Register an account and promote it through an approved mentor application
async fn approved_mentor(server: &TestServer, admin: &AuthResponse) -> AuthResponse {
    let mentor = server.register_user().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/mentor-applications",
            &mentor.token,
            &MentorApplicationRequest::default(),
        )
        .await
        .unwrap();
    let application: MentorApplicationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/admin/mentor-applications/{}/review", application.id),
            &admin.token,
            &ReviewRequest::approve(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    mentor
}

async fn active_mentorship(server: &TestServer) -> Mentorship {
    let admin = server.register_admin().await.unwrap();
    let founder = server.register_user().await.unwrap();
    let startup = approved_startup(server, &founder, &admin).await;
    let mentor = approved_mentor(server, &admin).await;

    let response = server
        .post_auth(
            "/api/v1/mentorship/requests",
            &founder.token,
            &CreateMentorshipRequest {
                mentor_id: mentor.user.id,
                startup_id: startup.id,
                message: "Would love your help with pricing".to_string(),
            },
        )
        .await
        .unwrap();
    let request: MentorshipRequestResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(request.initiated_by, "STARTUP");

    let response = server
        .post_auth(
            &format!("/api/v1/mentorship/requests/{}/decision", request.id),
            &mentor.token,
            &DecideRequest {
                decision: "APPROVE",
            },
        )
        .await
        .unwrap();
    let decision: RequestDecisionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(decision.request.status, "APPROVED");
    let relationship = decision.relationship.expect("approval opens a relationship");

    Mentorship {
        admin,
        founder,
        mentor,
        startup,
        relationship,
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("register sets the session cookie");
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "USER");
    assert!(!auth.user.is_disabled);
    assert!(!auth.token.is_empty());
    assert!(auth.expires_in > 0);
    assert!(cookie.starts_with(&format!("launchpad_session={}", auth.token)));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let duplicate = RegisterRequest::with_email(&request.email.to_uppercase());
    let response = server.post("/api/v1/auth/register", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post("/api/v1/auth/register", &serde_json::json!({ "email": 42 }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

#[tokio::test]
async fn test_bootstrap_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.register_admin().await.unwrap();
    assert_eq!(admin.user.role, "ADMIN");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: unique_email("nobody"),
        password: "WrongPass123!".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_session_and_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = server.register_user().await.unwrap();

    let response = server
        .get_auth("/api/v1/auth/session", &auth.token)
        .await
        .unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.user_id, auth.user.id);
    assert_eq!(session.role, "USER");

    // The cookie works as well as the bearer header
    let response = server
        .client
        .get(format!("{}/api/v1/users/@me", server.base_url()))
        .header("Cookie", format!("launchpad_session={}", auth.token))
        .send()
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);

    let response = server
        .post_action("/api/v1/auth/logout", &auth.token)
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
            .map(|c| c.contains("Max-Age=0")),
        Some(true)
    );
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/auth/session", &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_unauthenticated_requests() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/users/@me").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");

    let response = server
        .get_auth("/api/v1/dashboard", "not-a-session")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_SESSION");
}

// ============================================================================
// Startup Tests
// ============================================================================

#[tokio::test]
async fn test_startup_review_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.register_admin().await.unwrap();
    let founder = server.register_user().await.unwrap();
    let stranger = server.register_user().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/startups",
            &founder.token,
            &CreateStartupRequest::unique(),
        )
        .await
        .unwrap();
    let startup: StartupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(startup.status, "PENDING");
    assert_eq!(startup.owner_id, founder.user.id);

    // Pending startups are private to the owner and admins
    let path = format!("/api/v1/startups/{}", startup.id);
    let response = server.get_auth(&path, &stranger.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Only admins review
    let review_path = format!("/api/v1/admin/startups/{}/review", startup.id);
    let response = server
        .post_auth(&review_path, &founder.token, &ReviewRequest::approve())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth(&review_path, &admin.token, &ReviewRequest::reject("Needs traction"))
        .await
        .unwrap();
    let rejected: StartupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rejected.status, "REJECTED");
    assert_eq!(rejected.review_note.as_deref(), Some("Needs traction"));

    // Editing a rejected startup sends it back for review
    let response = server
        .patch_auth(
            &path,
            &founder.token,
            &serde_json::json!({ "description": "Now with paying customers" }),
        )
        .await
        .unwrap();
    let resubmitted: StartupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(resubmitted.status, "PENDING");

    let response = server
        .post_auth(&review_path, &admin.token, &ReviewRequest::approve())
        .await
        .unwrap();
    let approved: StartupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(approved.status, "APPROVED");

    let response = server.get_auth(&path, &stranger.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A second review is an invalid transition
    let response = server
        .post_auth(&review_path, &admin.token, &ReviewRequest::approve())
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .post_action(&format!("{path}/finish"), &founder.token)
        .await
        .unwrap();
    let finished: StartupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(finished.status, "FINISHED");

    let response = server
        .post_action(&format!("{path}/archive"), &founder.token)
        .await
        .unwrap();
    let archived: StartupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(archived.status, "ARCHIVED");

    let response = server
        .get_auth("/api/v1/startups/@me", &founder.token)
        .await
        .unwrap();
    let mine: Vec<StartupResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
}

#[tokio::test]
async fn test_startup_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register_user().await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/startups/{}", uuid::Uuid::new_v4()), &user.token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_STARTUP");

    let response = server
        .get_auth("/api/v1/startups/not-a-uuid", &user.token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Mentor Tests
// ============================================================================

#[tokio::test]
async fn test_mentor_application_grants_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.register_admin().await.unwrap();
    let mentor = approved_mentor(&server, &admin).await;

    // The new role applies to the existing session
    let response = server
        .get_auth("/api/v1/auth/session", &mentor.token)
        .await
        .unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.role, "MENTOR");

    let response = server
        .get_auth("/api/v1/mentors?limit=100", &mentor.token)
        .await
        .unwrap();
    let mentors: Vec<MentorProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mentors.iter().any(|m| m.user_id == mentor.user.id));

    // Mentors cannot apply again
    let response = server
        .post_auth(
            "/api/v1/mentor-applications",
            &mentor.token,
            &MentorApplicationRequest::default(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Mentorship Tests
// ============================================================================

#[tokio::test]
async fn test_mentorship_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let m = active_mentorship(&server).await;
    assert_eq!(m.relationship.status, "ACTIVE");
    assert_eq!(m.relationship.mentor_id, m.mentor.user.id);
    assert_eq!(m.relationship.startup_id, m.startup.id);

    let messages_path = format!(
        "/api/v1/mentorship/relationships/{}/messages",
        m.relationship.id
    );
    for (token, content) in [
        (&m.founder.token, "Hi! Pricing deck attached."),
        (&m.mentor.token, "Looks good, let's talk Tuesday."),
    ] {
        let response = server
            .post_auth(
                &messages_path,
                token,
                &SendMessageRequest {
                    content: content.to_string(),
                },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth(&messages_path, &m.mentor.token)
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().any(|msg| msg.sender_id == m.founder.user.id));

    // Outsiders cannot read the thread
    let outsider = server.register_user().await.unwrap();
    let response = server
        .get_auth(&messages_path, &outsider.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // A second request for the same pair is refused while the relationship is active
    let response = server
        .post_auth(
            "/api/v1/mentorship/requests",
            &m.founder.token,
            &CreateMentorshipRequest {
                mentor_id: m.mentor.user.id,
                startup_id: m.startup.id,
                message: "Again?".to_string(),
            },
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "RELATIONSHIP_ALREADY_ACTIVE");

    let response = server
        .post_action(
            &format!("/api/v1/mentorship/relationships/{}/end", m.relationship.id),
            &m.mentor.token,
        )
        .await
        .unwrap();
    let ended: RelationshipResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ended.status, "ENDED");

    let response = server
        .post_auth(
            &messages_path,
            &m.founder.token,
            &SendMessageRequest {
                content: "Still there?".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_mentorship_request_withdraw() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.register_admin().await.unwrap();
    let founder = server.register_user().await.unwrap();
    let startup = approved_startup(&server, &founder, &admin).await;
    let mentor = approved_mentor(&server, &admin).await;

    // Mentors may initiate too
    let response = server
        .post_auth(
            "/api/v1/mentorship/requests",
            &mentor.token,
            &CreateMentorshipRequest {
                mentor_id: mentor.user.id,
                startup_id: startup.id,
                message: "I can help with hiring".to_string(),
            },
        )
        .await
        .unwrap();
    let request: MentorshipRequestResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(request.initiated_by, "MENTOR");

    let withdraw_path = format!("/api/v1/mentorship/requests/{}/withdraw", request.id);
    let response = server
        .post_action(&withdraw_path, &founder.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_action(&withdraw_path, &mentor.token)
        .await
        .unwrap();
    let withdrawn: MentorshipRequestResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(withdrawn.status, "REJECTED");

    let response = server
        .get_auth("/api/v1/mentorship/requests?status=PENDING", &founder.token)
        .await
        .unwrap();
    let pending: Vec<MentorshipRequestResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pending.is_empty());
}

// ============================================================================
// Call Tests
// ============================================================================

#[tokio::test]
async fn test_call_confirmation_and_reminders() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let m = active_mentorship(&server).await;
    let calls_path = format!("/api/v1/mentorship/relationships/{}/calls", m.relationship.id);

    let response = server
        .post_auth(
            &calls_path,
            &m.founder.token,
            &ProposeCallRequest {
                scheduled_at: Utc::now() + Duration::minutes(45),
                duration_minutes: 30,
                agenda: Some("Pricing review".to_string()),
            },
        )
        .await
        .unwrap();
    let call: CallResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(call.status, "PROPOSED");
    assert_eq!(call.proposed_by_id, m.founder.user.id);

    // The proposer cannot confirm their own call
    let confirm_path = format!("/api/v1/calls/{}/confirm", call.id);
    let response = server
        .post_action(&confirm_path, &m.founder.token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "CANNOT_CONFIRM_OWN_PROPOSAL");

    let response = server
        .post_action(&confirm_path, &m.mentor.token)
        .await
        .unwrap();
    let confirmed: CallResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(confirmed.status, "CONFIRMED");

    let response = server
        .get_auth("/api/v1/calls/upcoming", &m.mentor.token)
        .await
        .unwrap();
    let upcoming: Vec<CallResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(upcoming.iter().any(|c| c.id == call.id));

    // Only admins trigger the sweep
    let response = server
        .post_action("/api/v1/admin/calls/reminders", &m.founder.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_action("/api/v1/admin/calls/reminders", &m.admin.token)
        .await
        .unwrap();
    let sweep: ReminderSweepResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sweep.failed, 0);

    // Concurrent sweeps may have claimed it first; either way it is marked
    let response = server.get_auth(&calls_path, &m.mentor.token).await.unwrap();
    let calls: Vec<CallResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let reminded = calls.iter().find(|c| c.id == call.id).unwrap();
    assert!(reminded.reminder_sent);
}

#[tokio::test]
async fn test_call_in_the_past_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let m = active_mentorship(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/mentorship/relationships/{}/calls", m.relationship.id),
            &m.mentor.token,
            &ProposeCallRequest {
                scheduled_at: Utc::now() - Duration::hours(1),
                duration_minutes: 30,
                agenda: None,
            },
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "CALL_NOT_IN_FUTURE");
}

// ============================================================================
// Funding Tests
// ============================================================================

#[tokio::test]
async fn test_funding_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.register_admin().await.unwrap();
    let founder = server.register_user().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/admin/funding/opportunities",
            &admin.token,
            &CreateOpportunityRequest::unique(),
        )
        .await
        .unwrap();
    let opportunity: OpportunityResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(opportunity.is_open);
    assert!(opportunity.accepting_applications);

    let apply_path = format!(
        "/api/v1/funding/opportunities/{}/applications",
        opportunity.id
    );
    let body = FundingApplicationRequest {
        startup_id: None,
        pitch: "We roast coffee with sunlight".to_string(),
        requested_amount: Some(25_000),
    };
    let response = server
        .post_auth(&apply_path, &founder.token, &body)
        .await
        .unwrap();
    let application: FundingApplicationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(application.status, "PENDING");
    assert_eq!(application.innovator_id, founder.user.id);

    let response = server
        .post_auth(&apply_path, &founder.token, &body)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "DUPLICATE_APPLICATION");

    let response = server
        .get_auth(
            &format!(
                "/api/v1/admin/funding/opportunities/{}/applications",
                opportunity.id
            ),
            &admin.token,
        )
        .await
        .unwrap();
    let applications: Vec<FundingApplicationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(applications.len(), 1);

    let response = server
        .post_auth(
            &format!(
                "/api/v1/admin/funding/applications/{}/decision",
                application.id
            ),
            &admin.token,
            &FundingDecisionRequest { status: "APPROVED" },
        )
        .await
        .unwrap();
    let decided: FundingApplicationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(decided.status, "APPROVED");

    let response = server
        .post_action(
            &format!(
                "/api/v1/admin/funding/opportunities/{}/close",
                opportunity.id
            ),
            &admin.token,
        )
        .await
        .unwrap();
    let closed: OpportunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!closed.is_open);

    let response = server
        .get_auth("/api/v1/funding/opportunities", &founder.token)
        .await
        .unwrap();
    let open: Vec<OpportunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(open.iter().all(|o| o.id != opportunity.id));

    let response = server
        .get_auth("/api/v1/funding/applications/@me", &founder.token)
        .await
        .unwrap();
    let mine: Vec<FundingApplicationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].opportunity_id, opportunity.id);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_disable_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.register_admin().await.unwrap();
    let register = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    let user: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/users", &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/admin/users/{}/disabled", user.user.id),
            &admin.token,
            &SetDisabledRequest { disabled: true },
        )
        .await
        .unwrap();
    let disabled: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(disabled.is_disabled);

    // Existing sessions are revoked and new logins refused
    let response = server
        .get_auth("/api/v1/auth/session", &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "ACCOUNT_DISABLED");

    // Admins cannot lock themselves out
    let response = server
        .put_auth(
            &format!("/api/v1/admin/users/{}/role", admin.user.id),
            &admin.token,
            &SetRoleRequest { role: "USER" },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_dashboards() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let m = active_mentorship(&server).await;

    let response = server
        .get_auth("/api/v1/dashboard", &m.founder.token)
        .await
        .unwrap();
    let dashboard: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard["role"], "USER");
    assert_eq!(dashboard["startups"]["approved"], 1);

    let response = server
        .get_auth("/api/v1/dashboard", &m.mentor.token)
        .await
        .unwrap();
    let dashboard: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard["role"], "MENTOR");
    assert_eq!(dashboard["active_relationships"], 1);

    let response = server
        .get_auth("/api/v1/dashboard", &m.admin.token)
        .await
        .unwrap();
    let dashboard: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard["role"], "ADMIN");
    assert!(dashboard["total_users"].as_i64().unwrap_or_default() >= 3);
}
