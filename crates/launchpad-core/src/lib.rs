//! # launchpad-core
//!
//! Domain layer containing entities, lifecycle transitions, value objects and
//! the ports (repository, session and notifier traits) the outer layers implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

#[macro_use]
mod macros;

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_email, CallStatus, FundingApplication, FundingOpportunity, Initiator,
    MentorApplication, MentorProfile, MentorshipRelationship, MentorshipRequest,
    RelationshipMessage, RelationshipParties, RelationshipStatus, ReminderWindow,
    ScheduledCall, Startup, StartupDetails, StartupStatus, User, UserRole,
};
pub use error::DomainError;
pub use traits::{
    FundingRepository, MentorApplicationRepository, MentorshipRepository, Notification,
    NotificationKind, Notifier, Page, RepoResult, RequestQuery, ScheduledCallRepository,
    SessionStore, StartupRepository, UserRepository,
};
pub use value_objects::{Caller, Decision, ReviewStatus};
