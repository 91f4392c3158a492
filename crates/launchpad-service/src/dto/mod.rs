//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateMentorshipRequest, CreateOpportunityRequest, CreateStartupRequest, DecideRequest,
    FundingApplicationRequest, FundingDecisionRequest, LoginRequest, MentorApplicationRequest,
    ProposeCallRequest, RegisterRequest, ReviewRequest, SendMessageRequest, SetDisabledRequest,
    SetRoleRequest, UpdateOpportunityRequest, UpdateStartupRequest,
};

pub use responses::{
    AdminDashboard, AuthResponse, CallResponse, DashboardResponse, FundingApplicationResponse,
    HealthChecks, HealthResponse, MentorApplicationResponse, MentorDashboard,
    MentorProfileResponse, MentorshipRequestResponse, MessageResponse, OpportunityResponse,
    ReadinessResponse, RelationshipResponse, ReminderSweepResponse, RequestDecisionResponse,
    SessionResponse, StartupCounts, StartupResponse, UserDashboard, UserResponse,
};
