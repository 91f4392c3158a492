//! Funding database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for funding_opportunities table
#[derive(Debug, Clone, FromRow)]
pub struct FundingOpportunityModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub amount: i64,
    pub deadline: Option<DateTime<Utc>>,
    pub is_open: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for funding_applications table
#[derive(Debug, Clone, FromRow)]
pub struct FundingApplicationModel {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub innovator_id: Uuid,
    pub startup_id: Option<Uuid>,
    pub pitch: String,
    pub requested_amount: Option<i64>,
    pub status: String,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
