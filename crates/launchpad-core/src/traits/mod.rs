//! Ports implemented by the infrastructure layer

mod notifier;
mod repositories;
mod session;

pub use notifier::{Notification, NotificationKind, Notifier};
pub use repositories::{
    FundingRepository, MentorApplicationRepository, MentorshipRepository, Page, RepoResult,
    RequestQuery, ScheduledCallRepository, StartupRepository, UserRepository,
};
pub use session::SessionStore;
