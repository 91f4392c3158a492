//! Startup database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for startups table
#[derive(Debug, Clone, FromRow)]
pub struct StartupModel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub stage: String,
    pub website: Option<String>,
    pub status: String,
    pub review_note: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `SELECT status, COUNT(*)` row
#[derive(Debug, Clone, FromRow)]
pub struct StatusCountModel {
    pub status: String,
    pub count: i64,
}
