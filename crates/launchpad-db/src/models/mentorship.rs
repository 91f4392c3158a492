//! Mentorship database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for mentorship_requests table
#[derive(Debug, Clone, FromRow)]
pub struct MentorshipRequestModel {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub initiated_by: String,
    pub message: String,
    pub status: String,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for mentorship_relationships table
#[derive(Debug, Clone, FromRow)]
pub struct MentorshipRelationshipModel {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub startup_id: Uuid,
    pub request_id: Uuid,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// Database model for relationship_messages table
#[derive(Debug, Clone, FromRow)]
pub struct RelationshipMessageModel {
    pub id: Uuid,
    pub relationship_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
