//! Notifier port - outbound notifications to a single user

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::RepoResult;

text_enum! {
    /// What a notification is about
    NotificationKind, "notification kind" {
        RequestReceived => "REQUEST_RECEIVED",
        RequestDecided => "REQUEST_DECIDED",
        CallProposed => "CALL_PROPOSED",
        CallConfirmed => "CALL_CONFIRMED",
        CallDeclined => "CALL_DECLINED",
        CallReminder => "CALL_REMINDER",
        MentorApplicationReviewed => "MENTOR_APPLICATION_REVIEWED",
        StartupReviewed => "STARTUP_REVIEWED",
        FundingDecided => "FUNDING_DECIDED",
    }
}

/// A single notification addressed to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    /// Id of the entity the notification refers to
    pub subject_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        recipient_id: Uuid,
        kind: NotificationKind,
        subject_id: Uuid,
        message: impl Into<String>,
    ) -> Self {
        Self {
            recipient_id,
            kind,
            subject_id,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification
    async fn notify(&self, notification: &Notification) -> RepoResult<()>;
}
