//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use launchpad_core::{Decision, ReviewStatus, StartupDetails, UserRole};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Startup Requests
// ============================================================================

/// Submit a new startup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStartupRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Industry must be 1-100 characters"))]
    pub industry: String,

    #[validate(length(min = 1, max = 50, message = "Stage must be 1-50 characters"))]
    pub stage: String,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
}

impl From<CreateStartupRequest> for StartupDetails {
    fn from(request: CreateStartupRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            industry: request.industry,
            stage: request.stage,
            website: request.website,
        }
    }
}

/// Partial update of a startup; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStartupRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Industry must be 1-100 characters"))]
    pub industry: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Stage must be 1-50 characters"))]
    pub stage: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
}

impl UpdateStartupRequest {
    /// Overlay the provided fields on the current details
    pub fn merge_into(self, current: StartupDetails) -> StartupDetails {
        StartupDetails {
            name: self.name.unwrap_or(current.name),
            description: self.description.unwrap_or(current.description),
            industry: self.industry.unwrap_or(current.industry),
            stage: self.stage.unwrap_or(current.stage),
            website: self.website.or(current.website),
        }
    }
}

/// Admin verdict on a startup or mentor application
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewRequest {
    pub decision: Decision,

    #[validate(length(max = 2000, message = "Note must be at most 2000 characters"))]
    pub note: Option<String>,
}

// ============================================================================
// Mentor Application Requests
// ============================================================================

/// Apply for the MENTOR role
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MentorApplicationRequest {
    #[validate(length(min = 1, max = 200, message = "Expertise must be 1-200 characters"))]
    pub expertise: String,

    #[validate(range(min = 0, max = 70, message = "Experience must be 0-70 years"))]
    pub experience_years: i32,

    #[validate(length(min = 1, max = 5000, message = "Bio must be 1-5000 characters"))]
    pub bio: String,

    #[validate(url(message = "LinkedIn URL must be a valid URL"))]
    pub linkedin_url: Option<String>,
}

// ============================================================================
// Mentorship Requests
// ============================================================================

/// Open a mentorship request between a mentor and a startup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMentorshipRequest {
    pub mentor_id: Uuid,

    pub startup_id: Uuid,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,
}

/// Accept or decline a mentorship request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DecideRequest {
    pub decision: Decision,
}

/// Post a message inside a relationship
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub content: String,
}

// ============================================================================
// Call Requests
// ============================================================================

/// Propose a call inside a relationship
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProposeCallRequest {
    pub scheduled_at: DateTime<Utc>,

    #[validate(range(min = 15, max = 240, message = "Duration must be 15-240 minutes"))]
    pub duration_minutes: i32,

    #[validate(length(max = 2000, message = "Agenda must be at most 2000 characters"))]
    pub agenda: Option<String>,
}

// ============================================================================
// Funding Requests
// ============================================================================

/// Publish a funding opportunity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOpportunityRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,

    pub deadline: Option<DateTime<Utc>>,
}

/// Partial update of an opportunity
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOpportunityRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: Option<i64>,

    pub deadline: Option<DateTime<Utc>>,
}

/// Apply to a funding opportunity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FundingApplicationRequest {
    pub startup_id: Option<Uuid>,

    #[validate(length(min = 1, max = 5000, message = "Pitch must be 1-5000 characters"))]
    pub pitch: String,

    #[validate(range(min = 1, message = "Requested amount must be positive"))]
    pub requested_amount: Option<i64>,
}

/// Admin status overwrite on a funding application
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FundingDecisionRequest {
    pub status: ReviewStatus,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Change an account's role
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetRoleRequest {
    pub role: UserRole,
}

/// Disable or re-enable an account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetDisabledRequest {
    pub disabled: bool,
}
