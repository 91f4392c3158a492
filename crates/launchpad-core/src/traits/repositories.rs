//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Methods named `save_*` / `update_*` that
//! return `bool` are status-guarded: `false` means the row was no longer in
//! the expected state (a concurrent writer won) and nothing was changed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    CallStatus, FundingApplication, FundingOpportunity, MentorApplication, MentorProfile,
    MentorshipRelationship, MentorshipRequest, RelationshipMessage, RelationshipStatus,
    ScheduledCall, Startup, StartupStatus, User, UserRole,
};
use crate::error::DomainError;
use crate::value_objects::ReviewStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Limit/offset pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Clamp limit to 1..=100 and offset to >= 0
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user. A taken email fails with `EmailAlreadyExists`.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Change a user's role
    async fn set_role(&self, id: Uuid, role: UserRole) -> RepoResult<()>;

    /// Disable or re-enable an account
    async fn set_disabled(&self, id: Uuid, disabled: bool) -> RepoResult<()>;

    /// List users, optionally filtered by role
    async fn list(&self, role: Option<UserRole>, page: Page) -> RepoResult<Vec<User>>;

    /// Total number of accounts
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Startup Repository
// ============================================================================

#[async_trait]
pub trait StartupRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>>;

    async fn create(&self, startup: &Startup) -> RepoResult<()>;

    /// Persist every mutable column, guarded on the previous status
    async fn update(&self, startup: &Startup, expected: StartupStatus) -> RepoResult<bool>;

    /// All startups owned by a user, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<Startup>>;

    /// Startups in a status (all statuses when `None`), newest first
    async fn list_by_status(
        &self,
        status: Option<StartupStatus>,
        page: Page,
    ) -> RepoResult<Vec<Startup>>;

    /// Per-status counts of a user's startups
    async fn count_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<(StartupStatus, i64)>>;

    async fn count_by_status(&self, status: StartupStatus) -> RepoResult<i64>;
}

// ============================================================================
// Mentor Application Repository
// ============================================================================

#[async_trait]
pub trait MentorApplicationRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MentorApplication>>;

    /// The user's PENDING or APPROVED application, if any
    async fn find_blocking_for_user(&self, user_id: Uuid)
        -> RepoResult<Option<MentorApplication>>;

    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<MentorApplication>>;

    async fn list_by_status(
        &self,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> RepoResult<Vec<MentorApplication>>;

    /// Insert a PENDING application. A second blocking application for the
    /// same user fails with `MentorApplicationExists`.
    async fn create(&self, application: &MentorApplication) -> RepoResult<()>;

    /// Write a review outcome, guarded on PENDING. When the outcome is
    /// APPROVED the applicant is promoted to MENTOR in the same transaction.
    async fn save_review(&self, application: &MentorApplication) -> RepoResult<bool>;

    async fn count_by_status(&self, status: ReviewStatus) -> RepoResult<i64>;

    /// Enabled MENTOR accounts joined with their approved application
    async fn list_mentor_profiles(&self, page: Page) -> RepoResult<Vec<MentorProfile>>;
}

// ============================================================================
// Mentorship Repository
// ============================================================================

/// Filter for request listings
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestQuery {
    /// Restrict to requests where this user is the mentor or the startup owner
    pub party_id: Option<Uuid>,
    pub status: Option<ReviewStatus>,
    pub page: Page,
}

#[async_trait]
pub trait MentorshipRepository: Send + Sync {
    // Requests

    async fn find_request(&self, id: Uuid) -> RepoResult<Option<MentorshipRequest>>;

    /// The PENDING request of a (mentor, startup) pair, if any
    async fn find_pending_request(
        &self,
        mentor_id: Uuid,
        startup_id: Uuid,
    ) -> RepoResult<Option<MentorshipRequest>>;

    /// Insert a PENDING request. A second pending request for the pair
    /// fails with `DuplicatePendingRequest`.
    async fn create_request(&self, request: &MentorshipRequest) -> RepoResult<()>;

    /// Persist a rejected/withdrawn request, guarded on PENDING
    async fn reject_request(&self, request: &MentorshipRequest) -> RepoResult<bool>;

    /// Mark the request APPROVED (guarded on PENDING) and insert the
    /// relationship in one transaction. An existing ACTIVE relationship for
    /// the pair fails with `RelationshipAlreadyActive` and nothing is written.
    async fn accept_request(
        &self,
        request: &MentorshipRequest,
        relationship: &MentorshipRelationship,
    ) -> RepoResult<bool>;

    async fn list_requests(&self, query: RequestQuery) -> RepoResult<Vec<MentorshipRequest>>;

    /// PENDING requests awaiting this user's answer (`incoming`) or opened
    /// by this user (`!incoming`)
    async fn count_pending_requests(&self, user_id: Uuid, incoming: bool) -> RepoResult<i64>;

    // Relationships

    async fn find_relationship(&self, id: Uuid) -> RepoResult<Option<MentorshipRelationship>>;

    async fn find_active_relationship(
        &self,
        mentor_id: Uuid,
        startup_id: Uuid,
    ) -> RepoResult<Option<MentorshipRelationship>>;

    /// Relationships where the user is the mentor or the startup owner
    /// (every relationship when `party_id` is `None`)
    async fn list_relationships(
        &self,
        party_id: Option<Uuid>,
        status: Option<RelationshipStatus>,
    ) -> RepoResult<Vec<MentorshipRelationship>>;

    /// Persist an ENDED relationship, guarded on ACTIVE
    async fn end_relationship(&self, relationship: &MentorshipRelationship) -> RepoResult<bool>;

    async fn count_active_relationships(&self, user_id: Uuid) -> RepoResult<i64>;

    // Messages

    async fn create_message(&self, message: &RelationshipMessage) -> RepoResult<()>;

    /// Messages oldest first
    async fn list_messages(
        &self,
        relationship_id: Uuid,
        page: Page,
    ) -> RepoResult<Vec<RelationshipMessage>>;
}

// ============================================================================
// Scheduled Call Repository
// ============================================================================

#[async_trait]
pub trait ScheduledCallRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ScheduledCall>>;

    async fn create(&self, call: &ScheduledCall) -> RepoResult<()>;

    /// Persist status and responder, guarded on the previous status
    async fn update_status(&self, call: &ScheduledCall, expected: CallStatus)
        -> RepoResult<bool>;

    /// Calls of a relationship ordered by start time
    async fn list_by_relationship(&self, relationship_id: Uuid) -> RepoResult<Vec<ScheduledCall>>;

    /// PROPOSED or CONFIRMED calls after `now` in any ACTIVE relationship
    /// the user is a party of
    async fn list_upcoming_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<ScheduledCall>>;

    /// CONFIRMED calls with `reminder_sent = false` starting in `[from, to]`
    async fn find_due_reminders(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<ScheduledCall>>;

    /// Set `reminder_sent`, guarded on it still being false
    async fn mark_reminder_sent(&self, id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Funding Repository
// ============================================================================

#[async_trait]
pub trait FundingRepository: Send + Sync {
    // Opportunities

    async fn find_opportunity(&self, id: Uuid) -> RepoResult<Option<FundingOpportunity>>;

    async fn list_opportunities(
        &self,
        open_only: bool,
        page: Page,
    ) -> RepoResult<Vec<FundingOpportunity>>;

    async fn create_opportunity(&self, opportunity: &FundingOpportunity) -> RepoResult<()>;

    async fn update_opportunity(&self, opportunity: &FundingOpportunity) -> RepoResult<()>;

    // Applications

    async fn find_application(&self, id: Uuid) -> RepoResult<Option<FundingApplication>>;

    async fn find_pending_application(
        &self,
        opportunity_id: Uuid,
        innovator_id: Uuid,
    ) -> RepoResult<Option<FundingApplication>>;

    /// Insert a PENDING application. A second pending application for the
    /// (opportunity, innovator) pair fails with `DuplicateApplication`.
    async fn create_application(&self, application: &FundingApplication) -> RepoResult<()>;

    /// Unconditional status overwrite
    async fn update_application_status(&self, application: &FundingApplication)
        -> RepoResult<()>;

    async fn list_applications_by_innovator(
        &self,
        innovator_id: Uuid,
    ) -> RepoResult<Vec<FundingApplication>>;

    async fn list_applications_by_opportunity(
        &self,
        opportunity_id: Uuid,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> RepoResult<Vec<FundingApplication>>;

    /// Applications in a status, optionally restricted to one innovator
    async fn count_applications(
        &self,
        status: ReviewStatus,
        innovator_id: Option<Uuid>,
    ) -> RepoResult<i64>;
}
