//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::UserRole;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Startup not found: {0}")]
    StartupNotFound(Uuid),

    #[error("Mentor application not found: {0}")]
    MentorApplicationNotFound(Uuid),

    #[error("Mentorship request not found: {0}")]
    RequestNotFound(Uuid),

    #[error("Mentorship relationship not found: {0}")]
    RelationshipNotFound(Uuid),

    #[error("Scheduled call not found: {0}")]
    CallNotFound(Uuid),

    #[error("Funding opportunity not found: {0}")]
    OpportunityNotFound(Uuid),

    #[error("Funding application not found: {0}")]
    FundingApplicationNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Call must be scheduled in the future")]
    CallNotInFuture,

    #[error("Call duration must be between {min} and {max} minutes")]
    InvalidCallDuration { min: i32, max: i32 },

    #[error("Cannot mentor a startup you own")]
    SelfMentorship,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Requires {0} role")]
    RoleRequired(UserRole),

    #[error("Not the startup owner")]
    NotStartupOwner,

    #[error("Only the non-initiating party may respond to this request")]
    NotCounterparty,

    #[error("Only the initiating party may withdraw this request")]
    NotInitiator,

    #[error("Not a party of this mentorship")]
    NotRelationshipParty,

    #[error("Cannot confirm a call you proposed")]
    CannotConfirmOwnProposal,

    #[error("Not the owner of this application")]
    NotApplicant,

    #[error("Account is disabled")]
    AccountDisabled,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("A pending mentorship request already exists for this mentor and startup")]
    DuplicatePendingRequest,

    #[error("An active mentorship already exists for this mentor and startup")]
    RelationshipAlreadyActive,

    #[error("A pending application already exists for this opportunity")]
    DuplicateApplication,

    #[error("A pending or approved mentor application already exists")]
    MentorApplicationExists,

    #[error("Funding opportunity is closed")]
    OpportunityClosed,

    #[error("Startup must be approved (current status: {0})")]
    StartupNotApproved(String),

    #[error("User {0} is not an active mentor")]
    NotAMentor(Uuid),

    #[error("Cannot {action} {entity} in status {from}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        action: &'static str,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Session store error: {0}")]
    SessionStoreError(String),

    #[error("Notification error: {0}")]
    NotificationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Build an invalid transition error from any displayable status
    pub fn invalid_transition(
        entity: &'static str,
        from: impl std::fmt::Display,
        action: &'static str,
    ) -> Self {
        Self::InvalidTransition {
            entity,
            from: from.to_string(),
            action,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::StartupNotFound(_) => "UNKNOWN_STARTUP",
            Self::MentorApplicationNotFound(_) => "UNKNOWN_MENTOR_APPLICATION",
            Self::RequestNotFound(_) => "UNKNOWN_MENTORSHIP_REQUEST",
            Self::RelationshipNotFound(_) => "UNKNOWN_MENTORSHIP",
            Self::CallNotFound(_) => "UNKNOWN_CALL",
            Self::OpportunityNotFound(_) => "UNKNOWN_OPPORTUNITY",
            Self::FundingApplicationNotFound(_) => "UNKNOWN_FUNDING_APPLICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::CallNotInFuture => "CALL_NOT_IN_FUTURE",
            Self::InvalidCallDuration { .. } => "INVALID_CALL_DURATION",
            Self::SelfMentorship => "SELF_MENTORSHIP",

            // Authorization
            Self::RoleRequired(_) => "ROLE_REQUIRED",
            Self::NotStartupOwner => "NOT_STARTUP_OWNER",
            Self::NotCounterparty => "NOT_COUNTERPARTY",
            Self::NotInitiator => "NOT_INITIATOR",
            Self::NotRelationshipParty => "NOT_RELATIONSHIP_PARTY",
            Self::CannotConfirmOwnProposal => "CANNOT_CONFIRM_OWN_PROPOSAL",
            Self::NotApplicant => "NOT_APPLICANT",
            Self::AccountDisabled => "ACCOUNT_DISABLED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::DuplicatePendingRequest => "DUPLICATE_PENDING_REQUEST",
            Self::RelationshipAlreadyActive => "RELATIONSHIP_ALREADY_ACTIVE",
            Self::DuplicateApplication => "DUPLICATE_APPLICATION",
            Self::MentorApplicationExists => "MENTOR_APPLICATION_EXISTS",
            Self::OpportunityClosed => "OPPORTUNITY_CLOSED",
            Self::StartupNotApproved(_) => "STARTUP_NOT_APPROVED",
            Self::NotAMentor(_) => "NOT_A_MENTOR",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::SessionStoreError(_) => "SESSION_STORE_ERROR",
            Self::NotificationError(_) => "NOTIFICATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::StartupNotFound(_)
                | Self::MentorApplicationNotFound(_)
                | Self::RequestNotFound(_)
                | Self::RelationshipNotFound(_)
                | Self::CallNotFound(_)
                | Self::OpportunityNotFound(_)
                | Self::FundingApplicationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::CallNotInFuture
                | Self::InvalidCallDuration { .. }
                | Self::SelfMentorship
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::RoleRequired(_)
                | Self::NotStartupOwner
                | Self::NotCounterparty
                | Self::NotInitiator
                | Self::NotRelationshipParty
                | Self::CannotConfirmOwnProposal
                | Self::NotApplicant
                | Self::AccountDisabled
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::DuplicatePendingRequest
                | Self::RelationshipAlreadyActive
                | Self::DuplicateApplication
                | Self::MentorApplicationExists
                | Self::OpportunityClosed
                | Self::StartupNotApproved(_)
                | Self::NotAMentor(_)
                | Self::InvalidTransition { .. }
        )
    }
}
