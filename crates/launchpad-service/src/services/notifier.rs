//! Notifier implementation writing one structured log event per notification

use async_trait::async_trait;
use launchpad_core::traits::{Notification, Notifier, RepoResult};
use tracing::info;

/// Delivers notifications to the log stream
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> RepoResult<()> {
        info!(
            target: "launchpad::notifications",
            recipient_id = %notification.recipient_id,
            kind = %notification.kind,
            subject_id = %notification.subject_id,
            message = %notification.message,
            "Notification"
        );
        Ok(())
    }
}
