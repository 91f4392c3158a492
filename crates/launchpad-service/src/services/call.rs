//! Scheduled call service
//!
//! Proposals inside a relationship, confirmation by the other party,
//! declines, and the reminder sweep.

use chrono::{DateTime, Utc};
use launchpad_core::{
    Caller, CallStatus, DomainError, Notification, NotificationKind, RelationshipParties,
    ScheduledCall,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CallResponse, ProposeCallRequest, ReminderSweepResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::mentorship::{ensure_visible, MentorshipService};

/// Upcoming calls returned when the caller names no limit
pub const DEFAULT_UPCOMING_LIMIT: i64 = 20;

/// Scheduled call service
pub struct CallService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CallService<'a> {
    /// Create a new CallService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Propose a call in an ACTIVE relationship the caller is a party of
    #[instrument(skip(self, request))]
    pub async fn propose(
        &self,
        caller: &Caller,
        relationship_id: Uuid,
        request: ProposeCallRequest,
    ) -> ServiceResult<CallResponse> {
        let (relationship, parties) = MentorshipService::new(self.ctx)
            .load_relationship(relationship_id)
            .await?;
        let other = parties
            .other(caller.user_id)
            .ok_or(DomainError::NotRelationshipParty)?;
        relationship.ensure_active()?;

        let call = ScheduledCall::propose(
            Uuid::new_v4(),
            relationship.id,
            caller.user_id,
            request.scheduled_at,
            request.duration_minutes,
            request.agenda,
            Utc::now(),
        )?;
        self.ctx.call_repo().create(&call).await?;

        info!(
            call_id = %call.id,
            relationship_id = %relationship_id,
            scheduled_at = %call.scheduled_at,
            "Call proposed"
        );

        self.ctx
            .notify(Notification::new(
                other,
                NotificationKind::CallProposed,
                call.id,
                format!("A call was proposed for {}", call.scheduled_at),
            ))
            .await;

        Ok(CallResponse::from(&call))
    }

    /// PROPOSED -> CONFIRMED, by the party that did not propose
    #[instrument(skip(self))]
    pub async fn confirm(&self, caller: &Caller, call_id: Uuid) -> ServiceResult<CallResponse> {
        let mut call = self.load(call_id).await?;
        let (relationship, parties) = MentorshipService::new(self.ctx)
            .load_relationship(call.relationship_id)
            .await?;
        if !parties.contains(caller.user_id) {
            return Err(DomainError::NotRelationshipParty.into());
        }

        call.confirm(caller.user_id)
            .inspect_err(|e| warn!(call_id = %call_id, error = %e, "Call confirmation rejected"))?;
        relationship.ensure_active()?;
        self.persist(&call, CallStatus::Proposed).await?;

        info!(call_id = %call_id, confirmed_by = %caller.user_id, "Call confirmed");

        self.ctx
            .notify(Notification::new(
                call.proposed_by_id,
                NotificationKind::CallConfirmed,
                call.id,
                format!("Your call on {} was confirmed", call.scheduled_at),
            ))
            .await;

        Ok(CallResponse::from(&call))
    }

    /// PROPOSED / CONFIRMED -> DECLINED, by either party. The other party is
    /// notified after the write; a failed notification does not undo it.
    #[instrument(skip(self))]
    pub async fn decline(&self, caller: &Caller, call_id: Uuid) -> ServiceResult<CallResponse> {
        let mut call = self.load(call_id).await?;
        let (_, parties) = MentorshipService::new(self.ctx)
            .load_relationship(call.relationship_id)
            .await?;
        let other = parties
            .other(caller.user_id)
            .ok_or(DomainError::NotRelationshipParty)?;

        let previous = call.decline(caller.user_id)?;
        self.persist(&call, previous).await?;

        info!(call_id = %call_id, from = %previous, declined_by = %caller.user_id, "Call declined");

        self.ctx
            .notify(Notification::new(
                other,
                NotificationKind::CallDeclined,
                call.id,
                format!("The call on {} was declined", call.scheduled_at),
            ))
            .await;

        Ok(CallResponse::from(&call))
    }

    /// Calls of a relationship ordered by start time
    #[instrument(skip(self))]
    pub async fn list_for_relationship(
        &self,
        caller: &Caller,
        relationship_id: Uuid,
    ) -> ServiceResult<Vec<CallResponse>> {
        let (relationship, parties) = MentorshipService::new(self.ctx)
            .load_relationship(relationship_id)
            .await?;
        ensure_visible(caller, &parties)?;

        let calls = self
            .ctx
            .call_repo()
            .list_by_relationship(relationship.id)
            .await?;
        Ok(calls.into_iter().map(CallResponse::from).collect())
    }

    /// Open calls ahead of the caller across their active relationships
    #[instrument(skip(self))]
    pub async fn upcoming(
        &self,
        caller: &Caller,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<CallResponse>> {
        let limit = limit.unwrap_or(DEFAULT_UPCOMING_LIMIT).clamp(1, 100);
        let calls = self
            .ctx
            .call_repo()
            .list_upcoming_for_user(caller.user_id, Utc::now(), limit)
            .await?;

        Ok(calls.into_iter().map(CallResponse::from).collect())
    }

    /// Admin-triggered reminder sweep
    #[instrument(skip(self))]
    pub async fn trigger_reminders(&self, caller: &Caller) -> ServiceResult<ReminderSweepResponse> {
        caller.require_admin()?;
        self.send_reminders(Utc::now()).await
    }

    /// Remind both parties of every CONFIRMED call starting inside the
    /// configured window of an ACTIVE relationship, then mark it. A call is only marked once every
    /// notification went out, so failures are retried by the next sweep.
    #[instrument(skip(self))]
    pub async fn send_reminders(&self, now: DateTime<Utc>) -> ServiceResult<ReminderSweepResponse> {
        let window = self.ctx.settings().reminder_window;
        let (from, to) = window.bounds(now);

        let due: Vec<ScheduledCall> = self
            .ctx
            .call_repo()
            .find_due_reminders(from, to)
            .await?
            .into_iter()
            .filter(|call| call.is_due_for_reminder(window, now))
            .collect();

        let mut result = ReminderSweepResponse {
            candidates: due.len(),
            ..ReminderSweepResponse::default()
        };

        for call in &due {
            let parties = match MentorshipService::new(self.ctx)
                .load_relationship(call.relationship_id)
                .await
            {
                Ok((relationship, _)) if !relationship.is_active() => {
                    debug!(
                        call_id = %call.id,
                        relationship_id = %relationship.id,
                        status = %relationship.status,
                        "Reminder skipped: relationship no longer active"
                    );
                    result.skipped += 1;
                    continue;
                }
                Ok((_, parties)) => parties,
                Err(e) => {
                    warn!(call_id = %call.id, error = %e, "Reminder skipped: relationship unavailable");
                    result.failed += 1;
                    continue;
                }
            };

            if !self.deliver_reminder(call, &parties, now).await {
                result.failed += 1;
                continue;
            }

            match self.ctx.call_repo().mark_reminder_sent(call.id).await {
                Ok(true) => result.sent += 1,
                Ok(false) => {
                    debug!(call_id = %call.id, "Reminder already marked by another sweep");
                    result.skipped += 1;
                }
                Err(e) => {
                    warn!(call_id = %call.id, error = %e, "Failed to mark reminder as sent");
                    result.failed += 1;
                }
            }
        }

        info!(
            candidates = result.candidates,
            sent = result.sent,
            skipped = result.skipped,
            failed = result.failed,
            "Reminder sweep finished"
        );

        Ok(result)
    }

    async fn deliver_reminder(
        &self,
        call: &ScheduledCall,
        parties: &RelationshipParties,
        now: DateTime<Utc>,
    ) -> bool {
        let minutes = (call.scheduled_at - now).num_minutes();
        let mut delivered = true;

        for recipient in [parties.mentor_id, parties.owner_id] {
            let notification = Notification::new(
                recipient,
                NotificationKind::CallReminder,
                call.id,
                format!("Your call starts in {minutes} minutes"),
            );
            if let Err(e) = self.ctx.notifier().notify(&notification).await {
                warn!(call_id = %call.id, recipient_id = %recipient, error = %e, "Reminder delivery failed");
                delivered = false;
            }
        }

        delivered
    }

    async fn load(&self, call_id: Uuid) -> ServiceResult<ScheduledCall> {
        self.ctx
            .call_repo()
            .find_by_id(call_id)
            .await?
            .ok_or_else(|| DomainError::CallNotFound(call_id).into())
    }

    async fn persist(&self, call: &ScheduledCall, expected: CallStatus) -> ServiceResult<()> {
        if self.ctx.call_repo().update_status(call, expected).await? {
            Ok(())
        } else {
            Err(ServiceError::stale("Scheduled call"))
        }
    }
}
