//! Database models - SQLx-compatible structs for PostgreSQL tables

mod funding;
mod mentor_application;
mod mentorship;
mod scheduled_call;
mod startup;
mod user;

pub use funding::{FundingApplicationModel, FundingOpportunityModel};
pub use mentor_application::{MentorApplicationModel, MentorProfileModel};
pub use mentorship::{MentorshipRelationshipModel, MentorshipRequestModel, RelationshipMessageModel};
pub use scheduled_call::ScheduledCallModel;
pub use startup::{StartupModel, StatusCountModel};
pub use user::UserModel;
