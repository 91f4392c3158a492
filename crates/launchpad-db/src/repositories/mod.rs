//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in launchpad-core.
//! Status transitions are written with `WHERE status = <expected>` so a
//! concurrent writer that got there first makes the update a no-op.

mod error;
mod funding;
mod mentor_application;
mod mentorship;
mod scheduled_call;
mod startup;
mod user;

pub use funding::PgFundingRepository;
pub use mentor_application::PgMentorApplicationRepository;
pub use mentorship::PgMentorshipRepository;
pub use scheduled_call::PgScheduledCallRepository;
pub use startup::PgStartupRepository;
pub use user::PgUserRepository;
