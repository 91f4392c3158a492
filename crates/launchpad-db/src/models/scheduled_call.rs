//! Scheduled call database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for scheduled_calls table
#[derive(Debug, Clone, FromRow)]
pub struct ScheduledCallModel {
    pub id: Uuid,
    pub relationship_id: Uuid,
    pub proposed_by_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub agenda: Option<String>,
    pub status: String,
    pub responded_by_id: Option<Uuid>,
    pub reminder_sent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
