//! Mentor application database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for mentor_applications table
#[derive(Debug, Clone, FromRow)]
pub struct MentorApplicationModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub expertise: String,
    pub experience_years: i32,
    pub bio: String,
    pub linkedin_url: Option<String>,
    pub status: String,
    pub review_note: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mentor directory row: user columns joined with the approved application.
/// The user id comes from `application.user_id`.
#[derive(Debug, Clone, FromRow)]
pub struct MentorProfileModel {
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_disabled: bool,
    pub user_created_at: DateTime<Utc>,
    pub user_updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub application: MentorApplicationModel,
}
