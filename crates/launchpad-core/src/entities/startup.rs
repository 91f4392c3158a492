//! Startup entity - an innovator's submission subject to admin review

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::Decision;

text_enum! {
    /// Startup lifecycle status
    StartupStatus, "startup status" {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Finished => "FINISHED",
        Archived => "ARCHIVED",
    }
}

impl StartupStatus {
    /// FINISHED and ARCHIVED accept no further changes
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Finished | Self::Archived)
    }
}

/// Owner-editable fields of a startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupDetails {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub stage: String,
    pub website: Option<String>,
}

/// Startup entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub stage: String,
    pub website: Option<String>,
    pub status: StartupStatus,
    pub review_note: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Startup {
    /// Create a new PENDING submission
    pub fn new(id: Uuid, owner_id: Uuid, details: StartupDetails) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            name: details.name,
            description: details.description,
            industry: details.industry,
            stage: details.stage,
            website: details.website,
            status: StartupStatus::Pending,
            review_note: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == StartupStatus::Approved
    }

    /// Replace the editable fields. A rejected startup is resubmitted.
    ///
    /// Returns the status the row had before the change.
    pub fn apply_update(&mut self, details: StartupDetails) -> Result<StartupStatus, DomainError> {
        let previous = self.status;
        if previous.is_closed() {
            return Err(DomainError::invalid_transition("startup", previous, "update"));
        }

        self.name = details.name;
        self.description = details.description;
        self.industry = details.industry;
        self.stage = details.stage;
        self.website = details.website;

        if previous == StartupStatus::Rejected {
            self.status = StartupStatus::Pending;
            self.review_note = None;
            self.reviewed_by = None;
            self.reviewed_at = None;
        }
        self.updated_at = Utc::now();
        Ok(previous)
    }

    /// PENDING -> APPROVED / REJECTED
    pub fn review(
        &mut self,
        reviewer_id: Uuid,
        decision: Decision,
        note: Option<String>,
    ) -> Result<StartupStatus, DomainError> {
        let next = match decision {
            Decision::Approve => StartupStatus::Approved,
            Decision::Reject => StartupStatus::Rejected,
        };
        let previous = self.transition(StartupStatus::Pending, next, "review")?;
        let now = Utc::now();
        self.review_note = note;
        self.reviewed_by = Some(reviewer_id);
        self.reviewed_at = Some(now);
        Ok(previous)
    }

    /// APPROVED -> FINISHED
    pub fn finish(&mut self) -> Result<StartupStatus, DomainError> {
        self.transition(StartupStatus::Approved, StartupStatus::Finished, "finish")
    }

    /// APPROVED -> ARCHIVED
    pub fn archive(&mut self) -> Result<StartupStatus, DomainError> {
        self.transition(StartupStatus::Approved, StartupStatus::Archived, "archive")
    }

    fn transition(
        &mut self,
        from: StartupStatus,
        to: StartupStatus,
        action: &'static str,
    ) -> Result<StartupStatus, DomainError> {
        if self.status != from {
            return Err(DomainError::invalid_transition("startup", self.status, action));
        }
        let previous = self.status;
        self.status = to;
        self.updated_at = Utc::now();
        Ok(previous)
    }
}
