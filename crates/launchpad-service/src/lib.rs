//! # launchpad-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Every operation takes the resolved [`Caller`](launchpad_core::Caller)
//! explicitly; services hold no per-request state of their own.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CallService, DashboardService, FundingService, LogNotifier,
    MentorApplicationService, MentorshipService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, ServiceSettings, StartupService, UserService,
};
