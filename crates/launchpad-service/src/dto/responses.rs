//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Status fields
//! serialize as their canonical upper-case text.

use chrono::{DateTime, Utc};
use launchpad_core::{
    CallStatus, Initiator, RelationshipStatus, ReviewStatus, StartupStatus, UserRole,
};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// User / Auth Responses
// ============================================================================

/// Account as seen by its owner and by admins
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Session opened by register or login
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    /// Opaque session token, also set as an HTTP-only cookie
    pub token: String,
    pub expires_in: u64,
}

/// The caller resolved from a session
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionResponse {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Mentor directory entry
#[derive(Debug, Clone, Serialize)]
pub struct MentorProfileResponse {
    pub user_id: Uuid,
    pub name: String,
    pub expertise: String,
    pub experience_years: i32,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub mentor_since: Option<DateTime<Utc>>,
}

// ============================================================================
// Startup / Mentor Application Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StartupResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub stage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub status: StartupStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MentorApplicationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub expertise: String,
    pub experience_years: i32,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub status: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Mentorship Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MentorshipRequestResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub initiated_by: Initiator,
    pub message: String,
    pub status: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelationshipResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub request_id: Uuid,
    pub status: RelationshipStatus,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Outcome of accepting or declining a request
#[derive(Debug, Clone, Serialize)]
pub struct RequestDecisionResponse {
    pub request: MentorshipRequestResponse,
    /// Present when the request was accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub relationship_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Call Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CallResponse {
    pub id: Uuid,
    pub relationship_id: Uuid,
    pub proposed_by_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    pub status: CallStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_by_id: Option<Uuid>,
    pub reminder_sent: bool,
    pub created_at: DateTime<Utc>,
}

/// Tally of one reminder sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReminderSweepResponse {
    /// Calls found inside the window
    pub candidates: usize,
    /// Calls reminded and marked
    pub sent: usize,
    /// Calls already marked by a concurrent sweep
    pub skipped: usize,
    /// Calls left unmarked for the next sweep
    pub failed: usize,
}

// ============================================================================
// Funding Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct OpportunityResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub is_open: bool,
    /// Open and before its deadline at response time
    pub accepting_applications: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FundingApplicationResponse {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub innovator_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_id: Option<Uuid>,
    pub pitch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_amount: Option<i64>,
    pub status: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Role-specific summary, tagged with the caller's role
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "UPPERCASE")]
pub enum DashboardResponse {
    User(UserDashboard),
    Mentor(MentorDashboard),
    Admin(AdminDashboard),
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDashboard {
    pub startups: StartupCounts,
    pub pending_incoming_requests: i64,
    pub pending_outgoing_requests: i64,
    pub pending_funding_applications: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MentorDashboard {
    pub pending_incoming_requests: i64,
    pub active_relationships: i64,
    pub upcoming_calls: Vec<CallResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub pending_startups: i64,
    pub pending_mentor_applications: i64,
    pub pending_funding_applications: i64,
    pub total_users: i64,
}

/// Startups per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StartupCounts {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub finished: i64,
    pub archived: i64,
}

impl StartupCounts {
    pub fn from_pairs(pairs: &[(StartupStatus, i64)]) -> Self {
        let mut counts = Self::default();
        for (status, count) in pairs {
            let slot = match status {
                StartupStatus::Pending => &mut counts.pending,
                StartupStatus::Approved => &mut counts.approved,
                StartupStatus::Rejected => &mut counts.rejected,
                StartupStatus::Finished => &mut counts.finished,
                StartupStatus::Archived => &mut counts.archived,
            };
            *slot += count;
        }
        counts
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let label = |ok: bool| if ok { "healthy" } else { "unhealthy" }.to_string();
        Self {
            status: if database_healthy && redis_healthy {
                "ready"
            } else {
                "not_ready"
            }
            .to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label(database_healthy),
                redis: label(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
