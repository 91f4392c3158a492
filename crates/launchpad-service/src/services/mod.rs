//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod call;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod funding;
pub mod mentor_application;
pub mod mentorship;
pub mod notifier;
pub mod startup;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use call::CallService;
pub use context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use funding::FundingService;
pub use mentor_application::MentorApplicationService;
pub use mentorship::MentorshipService;
pub use notifier::LogNotifier;
pub use startup::StartupService;
pub use user::UserService;
