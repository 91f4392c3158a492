//! Mentor application entity - the approval flow that grants the MENTOR role

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::{Decision, ReviewStatus};

/// Mentor application entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub expertise: String,
    pub experience_years: i32,
    pub bio: String,
    pub linkedin_url: Option<String>,
    pub status: ReviewStatus,
    pub review_note: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MentorApplication {
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        expertise: String,
        experience_years: i32,
        bio: String,
        linkedin_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            expertise,
            experience_years,
            bio,
            linkedin_url,
            status: ReviewStatus::Pending,
            review_note: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// PENDING and APPROVED applications block a new one from the same user
    #[inline]
    pub fn blocks_reapplication(&self) -> bool {
        matches!(self.status, ReviewStatus::Pending | ReviewStatus::Approved)
    }

    /// PENDING -> APPROVED / REJECTED
    pub fn review(
        &mut self,
        reviewer_id: Uuid,
        decision: Decision,
        note: Option<String>,
    ) -> Result<(), DomainError> {
        if !self.status.is_pending() {
            return Err(DomainError::invalid_transition(
                "mentor application",
                self.status,
                "review",
            ));
        }
        let now = Utc::now();
        self.status = decision.outcome();
        self.review_note = note;
        self.reviewed_by = Some(reviewer_id);
        self.reviewed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}

/// Mentor directory entry: a MENTOR account with its approved application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorProfile {
    pub user: User,
    pub application: MentorApplication,
}
