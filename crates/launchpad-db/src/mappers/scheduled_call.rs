//! Scheduled call model -> entity mapper

use launchpad_core::{DomainError, ScheduledCall};

use super::parse_column;
use crate::models::ScheduledCallModel;

impl TryFrom<ScheduledCallModel> for ScheduledCall {
    type Error = DomainError;

    fn try_from(model: ScheduledCallModel) -> Result<Self, Self::Error> {
        Ok(ScheduledCall {
            id: model.id,
            relationship_id: model.relationship_id,
            proposed_by_id: model.proposed_by_id,
            scheduled_at: model.scheduled_at,
            duration_minutes: model.duration_minutes,
            agenda: model.agenda,
            status: parse_column(&model.status, "scheduled_calls.status")?,
            responded_by_id: model.responded_by_id,
            reminder_sent: model.reminder_sent,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
