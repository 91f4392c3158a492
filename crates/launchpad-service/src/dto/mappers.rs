//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::Utc;
use launchpad_core::{
    FundingApplication, FundingOpportunity, MentorApplication, MentorProfile,
    MentorshipRelationship, MentorshipRequest, RelationshipMessage, ScheduledCall, Startup, User,
};

use super::responses::{
    CallResponse, FundingApplicationResponse, MentorApplicationResponse, MentorProfileResponse,
    MentorshipRequestResponse, MessageResponse, OpportunityResponse, RelationshipResponse,
    StartupResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            is_disabled: user.is_disabled,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<MentorProfile> for MentorProfileResponse {
    fn from(profile: MentorProfile) -> Self {
        Self {
            user_id: profile.user.id,
            name: profile.user.name,
            expertise: profile.application.expertise,
            experience_years: profile.application.experience_years,
            bio: profile.application.bio,
            linkedin_url: profile.application.linkedin_url,
            mentor_since: profile.application.reviewed_at,
        }
    }
}

// ============================================================================
// Startup / Mentor Application Mappers
// ============================================================================

impl From<&Startup> for StartupResponse {
    fn from(startup: &Startup) -> Self {
        Self {
            id: startup.id,
            owner_id: startup.owner_id,
            name: startup.name.clone(),
            description: startup.description.clone(),
            industry: startup.industry.clone(),
            stage: startup.stage.clone(),
            website: startup.website.clone(),
            status: startup.status,
            review_note: startup.review_note.clone(),
            reviewed_at: startup.reviewed_at,
            created_at: startup.created_at,
            updated_at: startup.updated_at,
        }
    }
}

impl From<Startup> for StartupResponse {
    fn from(startup: Startup) -> Self {
        Self::from(&startup)
    }
}

impl From<&MentorApplication> for MentorApplicationResponse {
    fn from(application: &MentorApplication) -> Self {
        Self {
            id: application.id,
            user_id: application.user_id,
            expertise: application.expertise.clone(),
            experience_years: application.experience_years,
            bio: application.bio.clone(),
            linkedin_url: application.linkedin_url.clone(),
            status: application.status,
            review_note: application.review_note.clone(),
            reviewed_at: application.reviewed_at,
            created_at: application.created_at,
        }
    }
}

impl From<MentorApplication> for MentorApplicationResponse {
    fn from(application: MentorApplication) -> Self {
        Self::from(&application)
    }
}

// ============================================================================
// Mentorship Mappers
// ============================================================================

impl From<&MentorshipRequest> for MentorshipRequestResponse {
    fn from(request: &MentorshipRequest) -> Self {
        Self {
            id: request.id,
            mentor_id: request.mentor_id,
            startup_id: request.startup_id,
            initiated_by: request.initiated_by,
            message: request.message.clone(),
            status: request.status,
            responded_at: request.responded_at,
            created_at: request.created_at,
        }
    }
}

impl From<MentorshipRequest> for MentorshipRequestResponse {
    fn from(request: MentorshipRequest) -> Self {
        Self::from(&request)
    }
}

impl From<&MentorshipRelationship> for RelationshipResponse {
    fn from(relationship: &MentorshipRelationship) -> Self {
        Self {
            id: relationship.id,
            mentor_id: relationship.mentor_id,
            startup_id: relationship.startup_id,
            request_id: relationship.request_id,
            status: relationship.status,
            started_at: relationship.started_at,
            ended_at: relationship.ended_at,
        }
    }
}

impl From<MentorshipRelationship> for RelationshipResponse {
    fn from(relationship: MentorshipRelationship) -> Self {
        Self::from(&relationship)
    }
}

impl From<RelationshipMessage> for MessageResponse {
    fn from(message: RelationshipMessage) -> Self {
        Self {
            id: message.id,
            relationship_id: message.relationship_id,
            sender_id: message.sender_id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

// ============================================================================
// Call Mappers
// ============================================================================

impl From<&ScheduledCall> for CallResponse {
    fn from(call: &ScheduledCall) -> Self {
        Self {
            id: call.id,
            relationship_id: call.relationship_id,
            proposed_by_id: call.proposed_by_id,
            scheduled_at: call.scheduled_at,
            duration_minutes: call.duration_minutes,
            agenda: call.agenda.clone(),
            status: call.status,
            responded_by_id: call.responded_by_id,
            reminder_sent: call.reminder_sent,
            created_at: call.created_at,
        }
    }
}

impl From<ScheduledCall> for CallResponse {
    fn from(call: ScheduledCall) -> Self {
        Self::from(&call)
    }
}

// ============================================================================
// Funding Mappers
// ============================================================================

impl From<&FundingOpportunity> for OpportunityResponse {
    fn from(opportunity: &FundingOpportunity) -> Self {
        Self {
            id: opportunity.id,
            title: opportunity.title.clone(),
            description: opportunity.description.clone(),
            amount: opportunity.amount,
            deadline: opportunity.deadline,
            is_open: opportunity.is_open,
            accepting_applications: opportunity.accepts_applications(Utc::now()),
            created_at: opportunity.created_at,
        }
    }
}

impl From<FundingOpportunity> for OpportunityResponse {
    fn from(opportunity: FundingOpportunity) -> Self {
        Self::from(&opportunity)
    }
}

impl From<&FundingApplication> for FundingApplicationResponse {
    fn from(application: &FundingApplication) -> Self {
        Self {
            id: application.id,
            opportunity_id: application.opportunity_id,
            innovator_id: application.innovator_id,
            startup_id: application.startup_id,
            pitch: application.pitch.clone(),
            requested_amount: application.requested_amount,
            status: application.status,
            decided_at: application.decided_at,
            created_at: application.created_at,
        }
    }
}

impl From<FundingApplication> for FundingApplicationResponse {
    fn from(application: FundingApplication) -> Self {
        Self::from(&application)
    }
}
