//! Service context - dependency container for services
//!
//! Holds every port (repositories, session store, notifier) as a trait
//! object, so the same services run against PostgreSQL/Redis in production
//! and against in-memory fakes in tests.

use std::sync::Arc;

use launchpad_common::{AdminConfig, AppConfig, PasswordService};
use launchpad_core::traits::{
    FundingRepository, MentorApplicationRepository, MentorshipRepository, Notification,
    Notifier, ScheduledCallRepository, SessionStore, StartupRepository, UserRepository,
};
use launchpad_core::ReminderWindow;
use tracing::warn;

use super::error::{ServiceError, ServiceResult};
use super::notifier::LogNotifier;

/// Tunables the services read at call time
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Lifetime of a newly opened session
    pub session_ttl_seconds: u64,
    /// Emails that register as ADMIN
    pub admin: AdminConfig,
    /// Reminder sweep lookahead
    pub reminder_window: ReminderWindow,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            session_ttl_seconds: 7 * 24 * 60 * 60,
            admin: AdminConfig::default(),
            reminder_window: ReminderWindow::default(),
        }
    }
}

impl ServiceSettings {
    /// Derive settings from the application config
    ///
    /// # Errors
    /// Returns a validation error when the reminder window is empty or negative
    pub fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        Ok(Self {
            session_ttl_seconds: config.session.ttl_seconds,
            admin: config.admin.clone(),
            reminder_window: ReminderWindow::new(
                config.reminders.window_start_minutes,
                config.reminders.window_end_minutes,
            )?,
        })
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    startup_repo: Arc<dyn StartupRepository>,
    mentor_application_repo: Arc<dyn MentorApplicationRepository>,
    mentorship_repo: Arc<dyn MentorshipRepository>,
    call_repo: Arc<dyn ScheduledCallRepository>,
    funding_repo: Arc<dyn FundingRepository>,

    // Sessions and outbound notifications
    session_store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,

    passwords: PasswordService,
    settings: ServiceSettings,
}

impl ServiceContext {
    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn startup_repo(&self) -> &dyn StartupRepository {
        self.startup_repo.as_ref()
    }

    pub fn mentor_application_repo(&self) -> &dyn MentorApplicationRepository {
        self.mentor_application_repo.as_ref()
    }

    pub fn mentorship_repo(&self) -> &dyn MentorshipRepository {
        self.mentorship_repo.as_ref()
    }

    pub fn call_repo(&self) -> &dyn ScheduledCallRepository {
        self.call_repo.as_ref()
    }

    pub fn funding_repo(&self) -> &dyn FundingRepository {
        self.funding_repo.as_ref()
    }

    // === Sessions / notifications ===

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Send a notification after the triggering write has committed.
    /// Failures are logged and never undo the write.
    pub async fn notify(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(&notification).await {
            warn!(
                error = %e,
                recipient_id = %notification.recipient_id,
                kind = %notification.kind,
                subject_id = %notification.subject_id,
                "Notification delivery failed"
            );
        }
    }

    // === Settings ===

    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_store", &"SessionStore")
            .field("notifier", &"Notifier")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    startup_repo: Option<Arc<dyn StartupRepository>>,
    mentor_application_repo: Option<Arc<dyn MentorApplicationRepository>>,
    mentorship_repo: Option<Arc<dyn MentorshipRepository>>,
    call_repo: Option<Arc<dyn ScheduledCallRepository>>,
    funding_repo: Option<Arc<dyn FundingRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    settings: Option<ServiceSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn startup_repo(mut self, repo: Arc<dyn StartupRepository>) -> Self {
        self.startup_repo = Some(repo);
        self
    }

    pub fn mentor_application_repo(mut self, repo: Arc<dyn MentorApplicationRepository>) -> Self {
        self.mentor_application_repo = Some(repo);
        self
    }

    pub fn mentorship_repo(mut self, repo: Arc<dyn MentorshipRepository>) -> Self {
        self.mentorship_repo = Some(repo);
        self
    }

    pub fn call_repo(mut self, repo: Arc<dyn ScheduledCallRepository>) -> Self {
        self.call_repo = Some(repo);
        self
    }

    pub fn funding_repo(mut self, repo: Arc<dyn FundingRepository>) -> Self {
        self.funding_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Defaults to [`LogNotifier`]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Defaults to [`ServiceSettings::default`]
    pub fn settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            startup_repo: self.startup_repo.ok_or_else(|| missing("startup_repo"))?,
            mentor_application_repo: self
                .mentor_application_repo
                .ok_or_else(|| missing("mentor_application_repo"))?,
            mentorship_repo: self.mentorship_repo.ok_or_else(|| missing("mentorship_repo"))?,
            call_repo: self.call_repo.ok_or_else(|| missing("call_repo"))?,
            funding_repo: self.funding_repo.ok_or_else(|| missing("funding_repo"))?,
            session_store: self.session_store.ok_or_else(|| missing("session_store"))?,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(LogNotifier)),
            passwords: PasswordService::new(),
            settings: self.settings.unwrap_or_default(),
        })
    }
}

fn missing(name: &str) -> ServiceError {
    ServiceError::validation(format!("{name} is required"))
}
