//! Domain entities - core business objects and their lifecycle transitions

mod funding;
mod mentor_application;
mod mentorship;
mod scheduled_call;
mod startup;
mod user;

pub use funding::{FundingApplication, FundingOpportunity};
pub use mentor_application::{MentorApplication, MentorProfile};
pub use mentorship::{
    Initiator, MentorshipRelationship, MentorshipRequest, RelationshipMessage,
    RelationshipParties, RelationshipStatus,
};
pub use scheduled_call::{CallStatus, ReminderWindow, ScheduledCall};
pub use startup::{Startup, StartupDetails, StartupStatus};
pub use user::{normalize_email, User, UserRole};
