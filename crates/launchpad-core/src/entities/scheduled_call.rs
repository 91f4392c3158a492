//! Scheduled call entity - a meeting proposal inside a mentorship

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::DomainError;

text_enum! {
    /// Scheduled call status
    CallStatus, "call status" {
        Proposed => "PROPOSED",
        Confirmed => "CONFIRMED",
        Declined => "DECLINED",
    }
}

/// Scheduled call entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCall {
    pub id: Uuid,
    pub relationship_id: Uuid,
    pub proposed_by_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub agenda: Option<String>,
    pub status: CallStatus,
    pub responded_by_id: Option<Uuid>,
    pub reminder_sent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduledCall {
    pub const MIN_DURATION_MINUTES: i32 = 15;
    pub const MAX_DURATION_MINUTES: i32 = 240;
    pub const MAX_AGENDA_LEN: usize = 2000;

    /// Build a PROPOSED call, validating time, duration and agenda against `now`
    pub fn propose(
        id: Uuid,
        relationship_id: Uuid,
        proposed_by_id: Uuid,
        scheduled_at: DateTime<Utc>,
        duration_minutes: i32,
        agenda: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if scheduled_at <= now {
            return Err(DomainError::CallNotInFuture);
        }
        if !(Self::MIN_DURATION_MINUTES..=Self::MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(DomainError::InvalidCallDuration {
                min: Self::MIN_DURATION_MINUTES,
                max: Self::MAX_DURATION_MINUTES,
            });
        }
        if agenda
            .as_ref()
            .is_some_and(|a| a.chars().count() > Self::MAX_AGENDA_LEN)
        {
            return Err(DomainError::ValidationError(format!(
                "Agenda must be at most {} characters",
                Self::MAX_AGENDA_LEN
            )));
        }

        Ok(Self {
            id,
            relationship_id,
            proposed_by_id,
            scheduled_at,
            duration_minutes,
            agenda,
            status: CallStatus::Proposed,
            responded_by_id: None,
            reminder_sent: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// PROPOSED -> CONFIRMED. The proposer can never confirm.
    pub fn confirm(&mut self, actor_id: Uuid) -> Result<(), DomainError> {
        if actor_id == self.proposed_by_id {
            return Err(DomainError::CannotConfirmOwnProposal);
        }
        if self.status != CallStatus::Proposed {
            return Err(DomainError::invalid_transition("call", self.status, "confirm"));
        }
        self.respond(actor_id, CallStatus::Confirmed);
        Ok(())
    }

    /// PROPOSED / CONFIRMED -> DECLINED, by either party
    pub fn decline(&mut self, actor_id: Uuid) -> Result<CallStatus, DomainError> {
        let previous = self.status;
        if previous == CallStatus::Declined {
            return Err(DomainError::invalid_transition("call", previous, "decline"));
        }
        self.respond(actor_id, CallStatus::Declined);
        Ok(previous)
    }

    /// CONFIRMED, not yet reminded, and starting inside the window
    pub fn is_due_for_reminder(&self, window: ReminderWindow, now: DateTime<Utc>) -> bool {
        let (from, to) = window.bounds(now);
        self.status == CallStatus::Confirmed
            && !self.reminder_sent
            && self.scheduled_at >= from
            && self.scheduled_at <= to
    }

    fn respond(&mut self, actor_id: Uuid, to: CallStatus) {
        self.status = to;
        self.responded_by_id = Some(actor_id);
        self.updated_at = Utc::now();
    }
}

/// Longest lookahead the reminder sweep accepts, in minutes (one week)
pub const MAX_REMINDER_LOOKAHEAD_MINUTES: i64 = 7 * 24 * 60;

/// Lookahead window of the reminder sweep, relative to now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    start: Duration,
    end: Duration,
}

impl Default for ReminderWindow {
    fn default() -> Self {
        Self {
            start: Duration::minutes(30),
            end: Duration::minutes(60),
        }
    }
}

impl ReminderWindow {
    /// Window from `start_minutes` to `end_minutes` ahead of now.
    ///
    /// Both ends must lie within [`MAX_REMINDER_LOOKAHEAD_MINUTES`].
    pub fn new(start_minutes: i64, end_minutes: i64) -> Result<Self, DomainError> {
        let invalid = || {
            DomainError::ValidationError(format!(
                "Invalid reminder window: {start_minutes}..{end_minutes} minutes \
                 (must satisfy 0 <= start < end <= {MAX_REMINDER_LOOKAHEAD_MINUTES})"
            ))
        };
        if start_minutes < 0
            || end_minutes <= start_minutes
            || end_minutes > MAX_REMINDER_LOOKAHEAD_MINUTES
        {
            return Err(invalid());
        }

        let start = Duration::try_minutes(start_minutes).ok_or_else(invalid)?;
        let end = Duration::try_minutes(end_minutes).ok_or_else(invalid)?;
        Ok(Self { start, end })
    }

    pub fn start_minutes(&self) -> i64 {
        self.start.num_minutes()
    }

    pub fn end_minutes(&self) -> i64 {
        self.end.num_minutes()
    }

    /// Inclusive absolute bounds relative to `now`, saturating at the latest
    /// representable instant
    pub fn bounds(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let shift = |delta: Duration| {
            now.checked_add_signed(delta)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
        };
        (shift(self.start), shift(self.end))
    }
}
