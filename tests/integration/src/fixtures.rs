//! Test fixtures and data generators
//!
//! Request bodies the tests send and the subset of each response they read.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!(
        "{}-{}",
        COUNTER.fetch_add(1, Ordering::SeqCst),
        Uuid::new_v4().simple()
    )
}

/// Email that no other test run will reuse
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", unique_suffix())
}

// ============================================================================
// Requests
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self::with_email(&unique_email("user"))
    }

    pub fn with_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: "Test User".to_string(),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Startup submission
#[derive(Debug, Serialize)]
pub struct CreateStartupRequest {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub stage: String,
    pub website: Option<String>,
}

impl CreateStartupRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Startup {}", unique_suffix()),
            description: "Solar-powered coffee roasting".to_string(),
            industry: "Energy".to_string(),
            stage: "Seed".to_string(),
            website: Some("https://example.com".to_string()),
        }
    }
}

/// Mentor application
#[derive(Debug, Serialize)]
pub struct MentorApplicationRequest {
    pub expertise: String,
    pub experience_years: i32,
    pub bio: String,
}

impl Default for MentorApplicationRequest {
    fn default() -> Self {
        Self {
            expertise: "Go-to-market".to_string(),
            experience_years: 12,
            bio: "Scaled two B2B companies".to_string(),
        }
    }
}

/// Admin review verdict
#[derive(Debug, Serialize)]
pub struct ReviewRequest {
    pub decision: &'static str,
    pub note: Option<String>,
}

impl ReviewRequest {
    pub fn approve() -> Self {
        Self {
            decision: "APPROVE",
            note: None,
        }
    }

    pub fn reject(note: &str) -> Self {
        Self {
            decision: "REJECT",
            note: Some(note.to_string()),
        }
    }
}

/// Mentorship request
#[derive(Debug, Serialize)]
pub struct CreateMentorshipRequest {
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub message: String,
}

/// Counterparty decision on a mentorship request
#[derive(Debug, Serialize)]
pub struct DecideRequest {
    pub decision: &'static str,
}

/// Relationship message
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Call proposal
#[derive(Debug, Serialize)]
pub struct ProposeCallRequest {
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub agenda: Option<String>,
}

/// Funding opportunity
#[derive(Debug, Serialize)]
pub struct CreateOpportunityRequest {
    pub title: String,
    pub description: String,
    pub amount: i64,
    pub deadline: Option<DateTime<Utc>>,
}

impl CreateOpportunityRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Seed Grant {}", unique_suffix()),
            description: "Non-dilutive grant".to_string(),
            amount: 50_000,
            deadline: None,
        }
    }
}

/// Funding application
#[derive(Debug, Serialize)]
pub struct FundingApplicationRequest {
    pub startup_id: Option<Uuid>,
    pub pitch: String,
    pub requested_amount: Option<i64>,
}

/// Admin status overwrite on a funding application
#[derive(Debug, Serialize)]
pub struct FundingDecisionRequest {
    pub status: &'static str,
}

/// Admin role change
#[derive(Debug, Serialize)]
pub struct SetRoleRequest {
    pub role: &'static str,
}

/// Admin account toggle
#[derive(Debug, Serialize)]
pub struct SetDisabledRequest {
    pub disabled: bool,
}

// ============================================================================
// Responses
// ============================================================================

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub expires_in: u64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_disabled: bool,
}

/// Resolved session
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub user_id: Uuid,
    pub role: String,
}

/// Mentor directory entry
#[derive(Debug, Deserialize)]
pub struct MentorProfileResponse {
    pub user_id: Uuid,
    pub expertise: String,
}

/// Startup response
#[derive(Debug, Deserialize)]
pub struct StartupResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub status: String,
    pub review_note: Option<String>,
}

/// Mentor application response
#[derive(Debug, Deserialize)]
pub struct MentorApplicationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
}

/// Mentorship request response
#[derive(Debug, Deserialize)]
pub struct MentorshipRequestResponse {
    pub id: Uuid,
    pub initiated_by: String,
    pub status: String,
}

/// Relationship response
#[derive(Debug, Deserialize)]
pub struct RelationshipResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub status: String,
}

/// Outcome of deciding a mentorship request
#[derive(Debug, Deserialize)]
pub struct RequestDecisionResponse {
    pub request: MentorshipRequestResponse,
    pub relationship: Option<RelationshipResponse>,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
}

/// Call response
#[derive(Debug, Deserialize)]
pub struct CallResponse {
    pub id: Uuid,
    pub proposed_by_id: Uuid,
    pub status: String,
    pub reminder_sent: bool,
}

/// Reminder sweep counts
#[derive(Debug, Deserialize)]
pub struct ReminderSweepResponse {
    pub candidates: usize,
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Opportunity response
#[derive(Debug, Deserialize)]
pub struct OpportunityResponse {
    pub id: Uuid,
    pub title: String,
    pub is_open: bool,
    pub accepting_applications: bool,
}

/// Funding application response
#[derive(Debug, Deserialize)]
pub struct FundingApplicationResponse {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub innovator_id: Uuid,
    pub status: String,
}
