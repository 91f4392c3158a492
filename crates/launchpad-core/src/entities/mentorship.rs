//! Mentorship requests, the relationships they produce, and relationship messages

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::{Decision, ReviewStatus};

text_enum! {
    /// Which side opened a mentorship request
    Initiator, "initiator" {
        Mentor => "MENTOR",
        Startup => "STARTUP",
    }
}

impl Initiator {
    /// The side allowed to answer a request opened by `self`
    #[inline]
    pub fn counterpart(self) -> Self {
        match self {
            Self::Mentor => Self::Startup,
            Self::Startup => Self::Mentor,
        }
    }
}

text_enum! {
    /// Mentorship relationship status
    RelationshipStatus, "relationship status" {
        Active => "ACTIVE",
        Ended => "ENDED",
    }
}

/// The two people on either side of a mentorship: the mentor and the
/// owner of the startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipParties {
    pub mentor_id: Uuid,
    pub owner_id: Uuid,
}

impl RelationshipParties {
    pub fn new(mentor_id: Uuid, owner_id: Uuid) -> Self {
        Self { mentor_id, owner_id }
    }

    /// Which side `user_id` is on, if any
    pub fn side_of(&self, user_id: Uuid) -> Option<Initiator> {
        if user_id == self.mentor_id {
            Some(Initiator::Mentor)
        } else if user_id == self.owner_id {
            Some(Initiator::Startup)
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(&self, user_id: Uuid) -> bool {
        self.side_of(user_id).is_some()
    }

    /// The party opposite `user_id`
    pub fn other(&self, user_id: Uuid) -> Option<Uuid> {
        match self.side_of(user_id)? {
            Initiator::Mentor => Some(self.owner_id),
            Initiator::Startup => Some(self.mentor_id),
        }
    }

    /// User id standing on `side`
    pub fn on(&self, side: Initiator) -> Uuid {
        match side {
            Initiator::Mentor => self.mentor_id,
            Initiator::Startup => self.owner_id,
        }
    }
}

/// Mentorship request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorshipRequest {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub initiated_by: Initiator,
    pub message: String,
    pub status: ReviewStatus,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MentorshipRequest {
    pub fn new(
        id: Uuid,
        mentor_id: Uuid,
        startup_id: Uuid,
        initiated_by: Initiator,
        message: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            mentor_id,
            startup_id,
            initiated_by,
            message,
            status: ReviewStatus::Pending,
            responded_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Only the non-initiating party may accept or decline
    pub fn ensure_can_decide(
        &self,
        parties: &RelationshipParties,
        actor_id: Uuid,
    ) -> Result<(), DomainError> {
        match parties.side_of(actor_id) {
            Some(side) if side == self.initiated_by.counterpart() => Ok(()),
            _ => Err(DomainError::NotCounterparty),
        }
    }

    /// Only the initiating party may withdraw
    pub fn ensure_can_withdraw(
        &self,
        parties: &RelationshipParties,
        actor_id: Uuid,
    ) -> Result<(), DomainError> {
        match parties.side_of(actor_id) {
            Some(side) if side == self.initiated_by => Ok(()),
            _ => Err(DomainError::NotInitiator),
        }
    }

    /// PENDING -> APPROVED / REJECTED
    pub fn decide(&mut self, decision: Decision) -> Result<(), DomainError> {
        self.respond(decision.outcome(), "decide")
    }

    /// PENDING -> REJECTED, by the initiator
    pub fn withdraw(&mut self) -> Result<(), DomainError> {
        self.respond(ReviewStatus::Rejected, "withdraw")
    }

    fn respond(&mut self, to: ReviewStatus, action: &'static str) -> Result<(), DomainError> {
        if !self.status.is_pending() {
            return Err(DomainError::invalid_transition(
                "mentorship request",
                self.status,
                action,
            ));
        }
        let now = Utc::now();
        self.status = to;
        self.responded_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}

/// Mentorship relationship entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorshipRelationship {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub request_id: Uuid,
    pub status: RelationshipStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl MentorshipRelationship {
    /// ACTIVE relationship born from an approved request
    pub fn from_request(id: Uuid, request: &MentorshipRequest) -> Result<Self, DomainError> {
        if request.status != ReviewStatus::Approved {
            return Err(DomainError::invalid_transition(
                "mentorship request",
                request.status,
                "start a relationship from",
            ));
        }
        Ok(Self {
            id,
            mentor_id: request.mentor_id,
            startup_id: request.startup_id,
            request_id: request.id,
            status: RelationshipStatus::Active,
            started_at: request.responded_at.unwrap_or_else(Utc::now),
            ended_at: None,
        })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == RelationshipStatus::Active
    }

    /// Conflict unless ACTIVE
    pub fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(DomainError::invalid_transition(
                "mentorship",
                self.status,
                "use",
            ))
        }
    }

    /// ACTIVE -> ENDED
    pub fn end(&mut self) -> Result<(), DomainError> {
        if !self.is_active() {
            return Err(DomainError::invalid_transition("mentorship", self.status, "end"));
        }
        self.status = RelationshipStatus::Ended;
        self.ended_at = Some(Utc::now());
        Ok(())
    }
}

/// Message exchanged inside a relationship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipMessage {
    pub id: Uuid,
    pub relationship_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl RelationshipMessage {
    pub const MAX_LEN: usize = 5000;

    pub fn new(
        id: Uuid,
        relationship_id: Uuid,
        sender_id: Uuid,
        content: String,
    ) -> Result<Self, DomainError> {
        let len = content.trim().chars().count();
        if len == 0 || content.chars().count() > Self::MAX_LEN {
            return Err(DomainError::ValidationError(format!(
                "Message must be between 1 and {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self {
            id,
            relationship_id,
            sender_id,
            content,
            created_at: Utc::now(),
        })
    }
}
