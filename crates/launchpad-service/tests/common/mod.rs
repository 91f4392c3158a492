//! In-memory implementations of the core ports plus fixtures for service
//! workflow tests. Uniqueness and status guards mirror the database schema.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use launchpad_common::AdminConfig;
use launchpad_core::traits::{
    FundingRepository, MentorApplicationRepository, MentorshipRepository, Notification,
    Notifier, Page, RepoResult, RequestQuery, ScheduledCallRepository, SessionStore,
    StartupRepository, UserRepository,
};
use launchpad_core::{
    normalize_email, CallStatus, Caller, Decision, DomainError, FundingApplication,
    FundingOpportunity, Initiator, MentorApplication, MentorProfile, MentorshipRelationship,
    MentorshipRequest, RelationshipMessage, RelationshipStatus, ReminderWindow, ReviewStatus,
    ScheduledCall, Startup, StartupStatus, User, UserRole,
};
use launchpad_service::dto::{
    CreateMentorshipRequest, CreateStartupRequest, DecideRequest, ReviewRequest,
};
use launchpad_service::{
    MentorshipService, ServiceContext, ServiceContextBuilder, ServiceSettings, StartupService,
};

pub const BOOTSTRAP_ADMIN: &str = "root@launchpad.test";

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Default)]
struct State {
    users: HashMap<Uuid, (User, String)>,
    startups: HashMap<Uuid, Startup>,
    mentor_applications: HashMap<Uuid, MentorApplication>,
    requests: HashMap<Uuid, MentorshipRequest>,
    relationships: HashMap<Uuid, MentorshipRelationship>,
    messages: Vec<RelationshipMessage>,
    calls: HashMap<Uuid, ScheduledCall>,
    opportunities: HashMap<Uuid, FundingOpportunity>,
    applications: HashMap<Uuid, FundingApplication>,
    sessions: HashMap<String, Uuid>,
}

impl State {
    fn owner_of(&self, startup_id: Uuid) -> Option<Uuid> {
        self.startups.get(&startup_id).map(|s| s.owner_id)
    }

    fn is_party(&self, user_id: Uuid, mentor_id: Uuid, startup_id: Uuid) -> bool {
        mentor_id == user_id || self.owner_of(startup_id) == Some(user_id)
    }
}

/// Every repository and the session store over one mutex-guarded state
#[derive(Default)]
pub struct InMemory {
    state: Mutex<State>,
}

impl InMemory {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("state lock")
    }

    pub fn insert_user(&self, user: User) {
        self.lock().users.insert(user.id, (user, "unused-hash".into()));
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.lock().users.get(&id).map(|(u, _)| u.clone())
    }

    pub fn request(&self, id: Uuid) -> Option<MentorshipRequest> {
        self.lock().requests.get(&id).cloned()
    }

    pub fn relationships_for_pair(&self, mentor_id: Uuid, startup_id: Uuid) -> Vec<MentorshipRelationship> {
        self.lock()
            .relationships
            .values()
            .filter(|r| r.mentor_id == mentor_id && r.startup_id == startup_id)
            .cloned()
            .collect()
    }

    pub fn pending_requests_for_pair(&self, mentor_id: Uuid, startup_id: Uuid) -> usize {
        self.lock()
            .requests
            .values()
            .filter(|r| r.mentor_id == mentor_id && r.startup_id == startup_id && r.status.is_pending())
            .count()
    }

    pub fn call(&self, id: Uuid) -> Option<ScheduledCall> {
        self.lock().calls.get(&id).cloned()
    }

    /// Write a call directly, bypassing the propose-time validation
    pub fn put_call(&self, call: ScheduledCall) {
        self.lock().calls.insert(call.id, call);
    }

    pub fn session_count(&self, user_id: Uuid) -> usize {
        self.lock().sessions.values().filter(|u| **u == user_id).count()
    }
}

fn paginate<T>(mut items: Vec<T>, page: Page) -> Vec<T> {
    let offset = usize::try_from(page.offset).unwrap_or(0);
    let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
    items.drain(..offset.min(items.len()));
    items.truncate(limit);
    items
}

#[async_trait]
impl UserRepository for InMemory {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.user(id))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = normalize_email(email);
        Ok(self
            .lock()
            .users
            .values()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(UserRepository::find_by_email(self, email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.lock();
        if state.users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        state
            .users
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        Ok(self.lock().users.get(&id).map(|(_, h)| h.clone()))
    }

    async fn set_role(&self, id: Uuid, role: UserRole) -> RepoResult<()> {
        let mut state = self.lock();
        let (user, _) = state.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.set_role(role);
        Ok(())
    }

    async fn set_disabled(&self, id: Uuid, disabled: bool) -> RepoResult<()> {
        let mut state = self.lock();
        let (user, _) = state.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.set_disabled(disabled);
        Ok(())
    }

    async fn list(&self, role: Option<UserRole>, page: Page) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self
            .lock()
            .users
            .values()
            .map(|(u, _)| u.clone())
            .filter(|u| role.is_none_or(|r| u.role == r))
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(users, page))
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.lock().users.len() as i64)
    }
}

#[async_trait]
impl StartupRepository for InMemory {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>> {
        Ok(self.lock().startups.get(&id).cloned())
    }

    async fn create(&self, startup: &Startup) -> RepoResult<()> {
        self.lock().startups.insert(startup.id, startup.clone());
        Ok(())
    }

    async fn update(&self, startup: &Startup, expected: StartupStatus) -> RepoResult<bool> {
        let mut state = self.lock();
        match state.startups.get_mut(&startup.id) {
            Some(current) if current.status == expected => {
                *current = startup.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<Startup>> {
        let mut startups: Vec<Startup> = self
            .lock()
            .startups
            .values()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect();
        startups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(startups)
    }

    async fn list_by_status(
        &self,
        status: Option<StartupStatus>,
        page: Page,
    ) -> RepoResult<Vec<Startup>> {
        let mut startups: Vec<Startup> = self
            .lock()
            .startups
            .values()
            .filter(|s| status.is_none_or(|st| s.status == st))
            .cloned()
            .collect();
        startups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(startups, page))
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<(StartupStatus, i64)>> {
        let state = self.lock();
        Ok(StartupStatus::ALL
            .iter()
            .map(|status| {
                let n = state
                    .startups
                    .values()
                    .filter(|s| s.owner_id == owner_id && s.status == *status)
                    .count() as i64;
                (*status, n)
            })
            .filter(|(_, n)| *n > 0)
            .collect())
    }

    async fn count_by_status(&self, status: StartupStatus) -> RepoResult<i64> {
        Ok(self
            .lock()
            .startups
            .values()
            .filter(|s| s.status == status)
            .count() as i64)
    }
}

#[async_trait]
impl MentorApplicationRepository for InMemory {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MentorApplication>> {
        Ok(self.lock().mentor_applications.get(&id).cloned())
    }

    async fn find_blocking_for_user(&self, user_id: Uuid) -> RepoResult<Option<MentorApplication>> {
        Ok(self
            .lock()
            .mentor_applications
            .values()
            .find(|a| a.user_id == user_id && a.blocks_reapplication())
            .cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> RepoResult<Vec<MentorApplication>> {
        Ok(self
            .lock()
            .mentor_applications
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(
        &self,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> RepoResult<Vec<MentorApplication>> {
        let applications: Vec<MentorApplication> = self
            .lock()
            .mentor_applications
            .values()
            .filter(|a| status.is_none_or(|st| a.status == st))
            .cloned()
            .collect();
        Ok(paginate(applications, page))
    }

    async fn create(&self, application: &MentorApplication) -> RepoResult<()> {
        let mut state = self.lock();
        if state
            .mentor_applications
            .values()
            .any(|a| a.user_id == application.user_id && a.blocks_reapplication())
        {
            return Err(DomainError::MentorApplicationExists);
        }
        state
            .mentor_applications
            .insert(application.id, application.clone());
        Ok(())
    }

    async fn save_review(&self, application: &MentorApplication) -> RepoResult<bool> {
        let mut state = self.lock();
        match state.mentor_applications.get_mut(&application.id) {
            Some(current) if current.status.is_pending() => *current = application.clone(),
            _ => return Ok(false),
        }
        if application.status == ReviewStatus::Approved {
            if let Some((user, _)) = state.users.get_mut(&application.user_id) {
                if user.role == UserRole::User {
                    user.set_role(UserRole::Mentor);
                }
            }
        }
        Ok(true)
    }

    async fn count_by_status(&self, status: ReviewStatus) -> RepoResult<i64> {
        Ok(self
            .lock()
            .mentor_applications
            .values()
            .filter(|a| a.status == status)
            .count() as i64)
    }

    async fn list_mentor_profiles(&self, page: Page) -> RepoResult<Vec<MentorProfile>> {
        let state = self.lock();
        let profiles: Vec<MentorProfile> = state
            .mentor_applications
            .values()
            .filter(|a| a.status == ReviewStatus::Approved)
            .filter_map(|a| {
                let (user, _) = state.users.get(&a.user_id)?;
                user.is_active_mentor().then(|| MentorProfile {
                    user: user.clone(),
                    application: a.clone(),
                })
            })
            .collect();
        Ok(paginate(profiles, page))
    }
}

#[async_trait]
impl MentorshipRepository for InMemory {
    async fn find_request(&self, id: Uuid) -> RepoResult<Option<MentorshipRequest>> {
        Ok(self.request(id))
    }

    async fn find_pending_request(
        &self,
        mentor_id: Uuid,
        startup_id: Uuid,
    ) -> RepoResult<Option<MentorshipRequest>> {
        Ok(self
            .lock()
            .requests
            .values()
            .find(|r| r.mentor_id == mentor_id && r.startup_id == startup_id && r.status.is_pending())
            .cloned())
    }

    async fn create_request(&self, request: &MentorshipRequest) -> RepoResult<()> {
        let mut state = self.lock();
        if state.requests.values().any(|r| {
            r.mentor_id == request.mentor_id
                && r.startup_id == request.startup_id
                && r.status.is_pending()
        }) {
            return Err(DomainError::DuplicatePendingRequest);
        }
        state.requests.insert(request.id, request.clone());
        Ok(())
    }

    async fn reject_request(&self, request: &MentorshipRequest) -> RepoResult<bool> {
        let mut state = self.lock();
        match state.requests.get_mut(&request.id) {
            Some(current) if current.status.is_pending() => {
                *current = request.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn accept_request(
        &self,
        request: &MentorshipRequest,
        relationship: &MentorshipRelationship,
    ) -> RepoResult<bool> {
        let mut state = self.lock();
        if !state
            .requests
            .get(&request.id)
            .is_some_and(|r| r.status.is_pending())
        {
            return Ok(false);
        }
        if state.relationships.values().any(|r| {
            r.request_id == request.id
                || (r.mentor_id == relationship.mentor_id
                    && r.startup_id == relationship.startup_id
                    && r.is_active())
        }) {
            return Err(DomainError::RelationshipAlreadyActive);
        }
        state.requests.insert(request.id, request.clone());
        state
            .relationships
            .insert(relationship.id, relationship.clone());
        Ok(true)
    }

    async fn list_requests(&self, query: RequestQuery) -> RepoResult<Vec<MentorshipRequest>> {
        let state = self.lock();
        let requests: Vec<MentorshipRequest> = state
            .requests
            .values()
            .filter(|r| {
                query
                    .party_id
                    .is_none_or(|p| state.is_party(p, r.mentor_id, r.startup_id))
            })
            .filter(|r| query.status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        Ok(paginate(requests, query.page))
    }

    async fn count_pending_requests(&self, user_id: Uuid, incoming: bool) -> RepoResult<i64> {
        let state = self.lock();
        Ok(state
            .requests
            .values()
            .filter(|r| r.status.is_pending())
            .filter(|r| {
                let user_side = if r.mentor_id == user_id {
                    Some(Initiator::Mentor)
                } else if state.owner_of(r.startup_id) == Some(user_id) {
                    Some(Initiator::Startup)
                } else {
                    None
                };
                let answering = r.initiated_by.counterpart();
                match user_side {
                    Some(side) if incoming => side == answering,
                    Some(side) => side == r.initiated_by,
                    None => false,
                }
            })
            .count() as i64)
    }

    async fn find_relationship(&self, id: Uuid) -> RepoResult<Option<MentorshipRelationship>> {
        Ok(self.lock().relationships.get(&id).cloned())
    }

    async fn find_active_relationship(
        &self,
        mentor_id: Uuid,
        startup_id: Uuid,
    ) -> RepoResult<Option<MentorshipRelationship>> {
        Ok(self
            .lock()
            .relationships
            .values()
            .find(|r| r.mentor_id == mentor_id && r.startup_id == startup_id && r.is_active())
            .cloned())
    }

    async fn list_relationships(
        &self,
        party_id: Option<Uuid>,
        status: Option<RelationshipStatus>,
    ) -> RepoResult<Vec<MentorshipRelationship>> {
        let state = self.lock();
        Ok(state
            .relationships
            .values()
            .filter(|r| party_id.is_none_or(|p| state.is_party(p, r.mentor_id, r.startup_id)))
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect())
    }

    async fn end_relationship(&self, relationship: &MentorshipRelationship) -> RepoResult<bool> {
        let mut state = self.lock();
        match state.relationships.get_mut(&relationship.id) {
            Some(current) if current.is_active() => {
                *current = relationship.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn count_active_relationships(&self, user_id: Uuid) -> RepoResult<i64> {
        let state = self.lock();
        Ok(state
            .relationships
            .values()
            .filter(|r| r.is_active() && state.is_party(user_id, r.mentor_id, r.startup_id))
            .count() as i64)
    }

    async fn create_message(&self, message: &RelationshipMessage) -> RepoResult<()> {
        self.lock().messages.push(message.clone());
        Ok(())
    }

    async fn list_messages(
        &self,
        relationship_id: Uuid,
        page: Page,
    ) -> RepoResult<Vec<RelationshipMessage>> {
        let messages: Vec<RelationshipMessage> = self
            .lock()
            .messages
            .iter()
            .filter(|m| m.relationship_id == relationship_id)
            .cloned()
            .collect();
        Ok(paginate(messages, page))
    }
}

#[async_trait]
impl ScheduledCallRepository for InMemory {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ScheduledCall>> {
        Ok(self.call(id))
    }

    async fn create(&self, call: &ScheduledCall) -> RepoResult<()> {
        self.put_call(call.clone());
        Ok(())
    }

    async fn update_status(&self, call: &ScheduledCall, expected: CallStatus) -> RepoResult<bool> {
        let mut state = self.lock();
        match state.calls.get_mut(&call.id) {
            Some(current) if current.status == expected => {
                current.status = call.status;
                current.responded_by_id = call.responded_by_id;
                current.updated_at = call.updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_by_relationship(&self, relationship_id: Uuid) -> RepoResult<Vec<ScheduledCall>> {
        let mut calls: Vec<ScheduledCall> = self
            .lock()
            .calls
            .values()
            .filter(|c| c.relationship_id == relationship_id)
            .cloned()
            .collect();
        calls.sort_by_key(|c| c.scheduled_at);
        Ok(calls)
    }

    async fn list_upcoming_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<ScheduledCall>> {
        let state = self.lock();
        let mut calls: Vec<ScheduledCall> = state
            .calls
            .values()
            .filter(|c| matches!(c.status, CallStatus::Proposed | CallStatus::Confirmed))
            .filter(|c| c.scheduled_at > now)
            .filter(|c| {
                state.relationships.get(&c.relationship_id).is_some_and(|r| {
                    r.is_active() && state.is_party(user_id, r.mentor_id, r.startup_id)
                })
            })
            .cloned()
            .collect();
        calls.sort_by_key(|c| c.scheduled_at);
        calls.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(calls)
    }

    async fn find_due_reminders(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<ScheduledCall>> {
        Ok(self
            .lock()
            .calls
            .values()
            .filter(|c| c.status == CallStatus::Confirmed && !c.reminder_sent)
            .filter(|c| c.scheduled_at >= from && c.scheduled_at <= to)
            .cloned()
            .collect())
    }

    async fn mark_reminder_sent(&self, id: Uuid) -> RepoResult<bool> {
        let mut state = self.lock();
        match state.calls.get_mut(&id) {
            Some(call) if !call.reminder_sent => {
                call.reminder_sent = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl FundingRepository for InMemory {
    async fn find_opportunity(&self, id: Uuid) -> RepoResult<Option<FundingOpportunity>> {
        Ok(self.lock().opportunities.get(&id).cloned())
    }

    async fn list_opportunities(
        &self,
        open_only: bool,
        page: Page,
    ) -> RepoResult<Vec<FundingOpportunity>> {
        let now = Utc::now();
        let opportunities: Vec<FundingOpportunity> = self
            .lock()
            .opportunities
            .values()
            .filter(|o| !open_only || o.accepts_applications(now))
            .cloned()
            .collect();
        Ok(paginate(opportunities, page))
    }

    async fn create_opportunity(&self, opportunity: &FundingOpportunity) -> RepoResult<()> {
        self.lock()
            .opportunities
            .insert(opportunity.id, opportunity.clone());
        Ok(())
    }

    async fn update_opportunity(&self, opportunity: &FundingOpportunity) -> RepoResult<()> {
        let mut state = self.lock();
        let current = state
            .opportunities
            .get_mut(&opportunity.id)
            .ok_or(DomainError::OpportunityNotFound(opportunity.id))?;
        *current = opportunity.clone();
        Ok(())
    }

    async fn find_application(&self, id: Uuid) -> RepoResult<Option<FundingApplication>> {
        Ok(self.lock().applications.get(&id).cloned())
    }

    async fn find_pending_application(
        &self,
        opportunity_id: Uuid,
        innovator_id: Uuid,
    ) -> RepoResult<Option<FundingApplication>> {
        Ok(self
            .lock()
            .applications
            .values()
            .find(|a| {
                a.opportunity_id == opportunity_id
                    && a.innovator_id == innovator_id
                    && a.status.is_pending()
            })
            .cloned())
    }

    async fn create_application(&self, application: &FundingApplication) -> RepoResult<()> {
        let mut state = self.lock();
        if state.applications.values().any(|a| {
            a.opportunity_id == application.opportunity_id
                && a.innovator_id == application.innovator_id
                && a.status.is_pending()
        }) {
            return Err(DomainError::DuplicateApplication);
        }
        state
            .applications
            .insert(application.id, application.clone());
        Ok(())
    }

    async fn update_application_status(&self, application: &FundingApplication) -> RepoResult<()> {
        let mut state = self.lock();
        if application.status.is_pending()
            && state.applications.values().any(|a| {
                a.id != application.id
                    && a.opportunity_id == application.opportunity_id
                    && a.innovator_id == application.innovator_id
                    && a.status.is_pending()
            })
        {
            return Err(DomainError::DuplicateApplication);
        }
        let current = state
            .applications
            .get_mut(&application.id)
            .ok_or(DomainError::FundingApplicationNotFound(application.id))?;
        *current = application.clone();
        Ok(())
    }

    async fn list_applications_by_innovator(
        &self,
        innovator_id: Uuid,
    ) -> RepoResult<Vec<FundingApplication>> {
        Ok(self
            .lock()
            .applications
            .values()
            .filter(|a| a.innovator_id == innovator_id)
            .cloned()
            .collect())
    }

    async fn list_applications_by_opportunity(
        &self,
        opportunity_id: Uuid,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> RepoResult<Vec<FundingApplication>> {
        let applications: Vec<FundingApplication> = self
            .lock()
            .applications
            .values()
            .filter(|a| a.opportunity_id == opportunity_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        Ok(paginate(applications, page))
    }

    async fn count_applications(
        &self,
        status: ReviewStatus,
        innovator_id: Option<Uuid>,
    ) -> RepoResult<i64> {
        Ok(self
            .lock()
            .applications
            .values()
            .filter(|a| a.status == status)
            .filter(|a| innovator_id.is_none_or(|i| a.innovator_id == i))
            .count() as i64)
    }
}

#[async_trait]
impl SessionStore for InMemory {
    async fn create(&self, token: &str, user_id: Uuid, _ttl_seconds: u64) -> RepoResult<()> {
        self.lock().sessions.insert(token.to_string(), user_id);
        Ok(())
    }

    async fn resolve(&self, token: &str) -> RepoResult<Option<Uuid>> {
        Ok(self.lock().sessions.get(token).copied())
    }

    async fn revoke(&self, token: &str) -> RepoResult<()> {
        self.lock().sessions.remove(token);
        Ok(())
    }

    async fn revoke_all(&self, user_id: Uuid) -> RepoResult<u64> {
        let mut state = self.lock();
        let before = state.sessions.len();
        state.sessions.retain(|_, u| *u != user_id);
        Ok((before - state.sessions.len()) as u64)
    }
}

// ============================================================================
// Notifier
// ============================================================================

/// Records every notification; can be switched into a failing mode
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("notifier lock").clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::NotificationError("delivery down".into()));
        }
        self.sent
            .lock()
            .expect("notifier lock")
            .push(notification.clone());
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub struct TestApp {
    pub ctx: ServiceContext,
    pub store: Arc<InMemory>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemory::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let settings = ServiceSettings {
            session_ttl_seconds: 3600,
            admin: AdminConfig {
                bootstrap_emails: vec![BOOTSTRAP_ADMIN.to_string()],
            },
            reminder_window: ReminderWindow::default(),
        };

        let ctx = ServiceContextBuilder::new()
            .user_repo(store.clone())
            .startup_repo(store.clone())
            .mentor_application_repo(store.clone())
            .mentorship_repo(store.clone())
            .call_repo(store.clone())
            .funding_repo(store.clone())
            .session_store(store.clone())
            .notifier(notifier.clone())
            .settings(settings)
            .build()
            .expect("context");

        Self {
            ctx,
            store,
            notifier,
        }
    }

    /// Seed an account holding `role` and return it as a caller
    pub fn seed(&self, role: UserRole) -> Caller {
        let id = Uuid::new_v4();
        let user = User::new(id, &format!("{id}@launchpad.test"), format!("user-{id}"), role);
        self.store.insert_user(user);
        Caller::new(id, role)
    }

    pub fn innovator(&self) -> Caller {
        self.seed(UserRole::User)
    }

    pub fn mentor(&self) -> Caller {
        self.seed(UserRole::Mentor)
    }

    pub fn admin(&self) -> Caller {
        self.seed(UserRole::Admin)
    }

    /// A startup owned by `owner` and approved by a fresh admin
    pub async fn approved_startup(&self, owner: &Caller) -> Uuid {
        let startups = StartupService::new(&self.ctx);
        let created = startups
            .create(owner, startup_request("Acme Rockets"))
            .await
            .expect("create startup");
        startups
            .review(
                &self.admin(),
                created.id,
                ReviewRequest {
                    decision: Decision::Approve,
                    note: None,
                },
            )
            .await
            .expect("approve startup");
        created.id
    }

    /// Mentor-initiated request accepted by the owner; returns the relationship id
    pub async fn active_relationship(&self, mentor: &Caller, owner: &Caller) -> Uuid {
        let startup_id = self.approved_startup(owner).await;
        let mentorship = MentorshipService::new(&self.ctx);
        let request = mentorship
            .create_request(mentor, mentorship_request(mentor.user_id, startup_id))
            .await
            .expect("create request");
        mentorship
            .decide(
                owner,
                request.id,
                DecideRequest {
                    decision: Decision::Approve,
                },
            )
            .await
            .expect("accept request")
            .relationship
            .expect("relationship")
            .id
    }
}

pub fn startup_request(name: &str) -> CreateStartupRequest {
    CreateStartupRequest {
        name: name.to_string(),
        description: "Reusable launch vehicles".to_string(),
        industry: "Aerospace".to_string(),
        stage: "Seed".to_string(),
        website: None,
    }
}

pub fn mentorship_request(mentor_id: Uuid, startup_id: Uuid) -> CreateMentorshipRequest {
    CreateMentorshipRequest {
        mentor_id,
        startup_id,
        message: "Happy to help with go-to-market".to_string(),
    }
}
