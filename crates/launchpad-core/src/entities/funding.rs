//! Funding opportunities and the applications submitted against them

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::ReviewStatus;

/// Funding opportunity entity, published by an admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingOpportunity {
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

impl FundingOpportunity {
    pub fn new(
        id: Uuid,
        title: String,
        description: String,
        amount: i64,
        deadline: Option<DateTime<Utc>>,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            amount,
            deadline,
            is_open: true,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Open and, when a deadline is set, not past it
    pub fn accepts_applications(&self, now: DateTime<Utc>) -> bool {
        self.is_open && self.deadline.is_none_or(|deadline| now < deadline)
    }

    pub fn ensure_accepting(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.accepts_applications(now) {
            Ok(())
        } else {
            Err(DomainError::OpportunityClosed)
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.updated_at = Utc::now();
    }
}

/// Funding application entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingApplication {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub innovator_id: Uuid,
    pub startup_id: Option<Uuid>,
    pub pitch: String,
    pub requested_amount: Option<i64>,
    pub status: ReviewStatus,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FundingApplication {
    pub fn new(
        id: Uuid,
        opportunity_id: Uuid,
        innovator_id: Uuid,
        startup_id: Option<Uuid>,
        pitch: String,
        requested_amount: Option<i64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            opportunity_id,
            innovator_id,
            startup_id,
            pitch,
            requested_amount,
            status: ReviewStatus::Pending,
            decided_by: None,
            decided_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Admin override: any status may follow any status.
    ///
    /// Returns the previous status.
    pub fn set_status(&mut self, status: ReviewStatus, admin_id: Uuid) -> ReviewStatus {
        let previous = self.status;
        let now = Utc::now();
        self.status = status;
        self.decided_by = Some(admin_id);
        self.decided_at = Some(now);
        self.updated_at = now;
        previous
    }
}
