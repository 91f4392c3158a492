//! Mentorship service
//!
//! Requests between a mentor and a startup, the relationships an accepted
//! request produces, and the messages exchanged inside a relationship.

use launchpad_core::{
    Caller, DomainError, Initiator, MentorshipRelationship, MentorshipRequest, Notification,
    NotificationKind, Page, RelationshipMessage, RelationshipParties, RelationshipStatus,
    RequestQuery, ReviewStatus, Startup,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    CreateMentorshipRequest, DecideRequest, MentorshipRequestResponse, MessageResponse,
    RelationshipResponse, RequestDecisionResponse, SendMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Mentorship service
pub struct MentorshipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MentorshipService<'a> {
    /// Create a new MentorshipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Open a request. The initiating side follows from the caller: the
    /// named mentor initiates as MENTOR, the startup owner as STARTUP.
    #[instrument(skip(self, request), fields(mentor_id = %request.mentor_id, startup_id = %request.startup_id))]
    pub async fn create_request(
        &self,
        caller: &Caller,
        request: CreateMentorshipRequest,
    ) -> ServiceResult<MentorshipRequestResponse> {
        let startup = self.load_startup(request.startup_id).await?;

        if startup.is_owned_by(request.mentor_id) {
            return Err(DomainError::SelfMentorship.into());
        }

        let initiator = if caller.is(request.mentor_id) {
            Initiator::Mentor
        } else if startup.is_owned_by(caller.user_id) {
            Initiator::Startup
        } else {
            warn!("Request rejected: caller is neither the mentor nor the startup owner");
            return Err(DomainError::NotRelationshipParty.into());
        };

        let mentor = self
            .ctx
            .user_repo()
            .find_by_id(request.mentor_id)
            .await?
            .ok_or(DomainError::UserNotFound(request.mentor_id))?;
        if !mentor.is_active_mentor() {
            return Err(DomainError::NotAMentor(mentor.id).into());
        }

        if !startup.is_approved() {
            return Err(DomainError::StartupNotApproved(startup.status.to_string()).into());
        }

        let mentorship = self.ctx.mentorship_repo();
        if mentorship
            .find_active_relationship(mentor.id, startup.id)
            .await?
            .is_some()
        {
            return Err(DomainError::RelationshipAlreadyActive.into());
        }
        if mentorship
            .find_pending_request(mentor.id, startup.id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicatePendingRequest.into());
        }

        let entity = MentorshipRequest::new(
            Uuid::new_v4(),
            mentor.id,
            startup.id,
            initiator,
            request.message,
        );
        mentorship.create_request(&entity).await?;

        info!(
            request_id = %entity.id,
            initiated_by = %initiator,
            "Mentorship request created"
        );

        let parties = RelationshipParties::new(mentor.id, startup.owner_id);
        self.ctx
            .notify(Notification::new(
                parties.on(initiator.counterpart()),
                NotificationKind::RequestReceived,
                entity.id,
                format!("New mentorship request for \"{}\"", startup.name),
            ))
            .await;

        Ok(MentorshipRequestResponse::from(&entity))
    }

    /// One request, visible to either party and admins
    #[instrument(skip(self))]
    pub async fn get_request(
        &self,
        caller: &Caller,
        request_id: Uuid,
    ) -> ServiceResult<MentorshipRequestResponse> {
        let request = self.load_request(request_id).await?;
        let parties = self.parties(request.mentor_id, request.startup_id).await?;
        ensure_visible(caller, &parties)?;

        Ok(MentorshipRequestResponse::from(&request))
    }

    /// Requests the caller is a party of (every request for admins)
    #[instrument(skip(self))]
    pub async fn list_requests(
        &self,
        caller: &Caller,
        status: Option<ReviewStatus>,
        page: Page,
    ) -> ServiceResult<Vec<MentorshipRequestResponse>> {
        let query = RequestQuery {
            party_id: (!caller.is_admin()).then_some(caller.user_id),
            status,
            page,
        };

        let requests = self.ctx.mentorship_repo().list_requests(query).await?;
        Ok(requests
            .into_iter()
            .map(MentorshipRequestResponse::from)
            .collect())
    }

    /// Accept or decline, by the non-initiating party. Acceptance creates the
    /// ACTIVE relationship in the same transaction.
    #[instrument(skip(self, request))]
    pub async fn decide(
        &self,
        caller: &Caller,
        request_id: Uuid,
        request: DecideRequest,
    ) -> ServiceResult<RequestDecisionResponse> {
        let mut entity = self.load_request(request_id).await?;
        let parties = self.parties(entity.mentor_id, entity.startup_id).await?;

        entity
            .ensure_can_decide(&parties, caller.user_id)
            .inspect_err(|_| warn!(request_id = %request_id, "Decision rejected: not the counterparty"))?;
        entity.decide(request.decision)?;

        let mentorship = self.ctx.mentorship_repo();
        let relationship = if entity.status == ReviewStatus::Approved {
            if mentorship
                .find_active_relationship(entity.mentor_id, entity.startup_id)
                .await?
                .is_some()
            {
                return Err(DomainError::RelationshipAlreadyActive.into());
            }

            let relationship = MentorshipRelationship::from_request(Uuid::new_v4(), &entity)?;
            if !mentorship.accept_request(&entity, &relationship).await? {
                return Err(ServiceError::stale("Mentorship request"));
            }
            Some(relationship)
        } else {
            if !mentorship.reject_request(&entity).await? {
                return Err(ServiceError::stale("Mentorship request"));
            }
            None
        };

        info!(
            request_id = %request_id,
            status = %entity.status,
            relationship_id = ?relationship.as_ref().map(|r| r.id),
            "Mentorship request decided"
        );

        self.ctx
            .notify(Notification::new(
                parties.on(entity.initiated_by),
                NotificationKind::RequestDecided,
                entity.id,
                format!("Your mentorship request was {}", entity.status),
            ))
            .await;

        Ok(RequestDecisionResponse {
            request: MentorshipRequestResponse::from(&entity),
            relationship: relationship.map(RelationshipResponse::from),
        })
    }

    /// Cancel a PENDING request, by its initiator. Recorded as REJECTED.
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        caller: &Caller,
        request_id: Uuid,
    ) -> ServiceResult<MentorshipRequestResponse> {
        let mut entity = self.load_request(request_id).await?;
        let parties = self.parties(entity.mentor_id, entity.startup_id).await?;

        entity.ensure_can_withdraw(&parties, caller.user_id)?;
        entity.withdraw()?;

        if !self.ctx.mentorship_repo().reject_request(&entity).await? {
            return Err(ServiceError::stale("Mentorship request"));
        }

        info!(request_id = %request_id, "Mentorship request withdrawn");
        Ok(MentorshipRequestResponse::from(&entity))
    }

    // ========================================================================
    // Relationships
    // ========================================================================

    /// One relationship, visible to either party and admins
    #[instrument(skip(self))]
    pub async fn get_relationship(
        &self,
        caller: &Caller,
        relationship_id: Uuid,
    ) -> ServiceResult<RelationshipResponse> {
        let (relationship, parties) = self.load_relationship(relationship_id).await?;
        ensure_visible(caller, &parties)?;

        Ok(RelationshipResponse::from(&relationship))
    }

    /// Relationships the caller is a party of (every relationship for admins)
    #[instrument(skip(self))]
    pub async fn list_relationships(
        &self,
        caller: &Caller,
        status: Option<RelationshipStatus>,
    ) -> ServiceResult<Vec<RelationshipResponse>> {
        let party_id = (!caller.is_admin()).then_some(caller.user_id);
        let relationships = self
            .ctx
            .mentorship_repo()
            .list_relationships(party_id, status)
            .await?;

        Ok(relationships
            .into_iter()
            .map(RelationshipResponse::from)
            .collect())
    }

    /// ACTIVE -> ENDED, by either party
    #[instrument(skip(self))]
    pub async fn end_relationship(
        &self,
        caller: &Caller,
        relationship_id: Uuid,
    ) -> ServiceResult<RelationshipResponse> {
        let (mut relationship, parties) = self.load_relationship(relationship_id).await?;
        if !parties.contains(caller.user_id) {
            return Err(DomainError::NotRelationshipParty.into());
        }

        relationship.end()?;
        if !self
            .ctx
            .mentorship_repo()
            .end_relationship(&relationship)
            .await?
        {
            return Err(ServiceError::stale("Mentorship"));
        }

        info!(relationship_id = %relationship_id, actor_id = %caller.user_id, "Mentorship ended");
        Ok(RelationshipResponse::from(&relationship))
    }

    // ========================================================================
    // Messages
    // ========================================================================

    /// Post a message. Sender must be a party and the relationship ACTIVE.
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        caller: &Caller,
        relationship_id: Uuid,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let (relationship, parties) = self.load_relationship(relationship_id).await?;
        if !parties.contains(caller.user_id) {
            return Err(DomainError::NotRelationshipParty.into());
        }
        relationship.ensure_active()?;

        let message = RelationshipMessage::new(
            Uuid::new_v4(),
            relationship.id,
            caller.user_id,
            request.content,
        )?;
        self.ctx.mentorship_repo().create_message(&message).await?;

        info!(message_id = %message.id, relationship_id = %relationship_id, "Message sent");
        Ok(MessageResponse::from(message))
    }

    /// Messages oldest first, for either party and admins
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        caller: &Caller,
        relationship_id: Uuid,
        page: Page,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let (relationship, parties) = self.load_relationship(relationship_id).await?;
        ensure_visible(caller, &parties)?;

        let messages = self
            .ctx
            .mentorship_repo()
            .list_messages(relationship.id, page)
            .await?;

        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// A relationship together with the two people on it
    pub(crate) async fn load_relationship(
        &self,
        relationship_id: Uuid,
    ) -> ServiceResult<(MentorshipRelationship, RelationshipParties)> {
        let relationship = self
            .ctx
            .mentorship_repo()
            .find_relationship(relationship_id)
            .await?
            .ok_or(DomainError::RelationshipNotFound(relationship_id))?;
        let parties = self
            .parties(relationship.mentor_id, relationship.startup_id)
            .await?;

        Ok((relationship, parties))
    }

    async fn parties(&self, mentor_id: Uuid, startup_id: Uuid) -> ServiceResult<RelationshipParties> {
        let startup = self.load_startup(startup_id).await?;
        Ok(RelationshipParties::new(mentor_id, startup.owner_id))
    }

    async fn load_startup(&self, startup_id: Uuid) -> ServiceResult<Startup> {
        self.ctx
            .startup_repo()
            .find_by_id(startup_id)
            .await?
            .ok_or_else(|| DomainError::StartupNotFound(startup_id).into())
    }

    async fn load_request(&self, request_id: Uuid) -> ServiceResult<MentorshipRequest> {
        self.ctx
            .mentorship_repo()
            .find_request(request_id)
            .await?
            .ok_or_else(|| DomainError::RequestNotFound(request_id).into())
    }
}

/// Parties and admins may read a request or relationship
pub(crate) fn ensure_visible(caller: &Caller, parties: &RelationshipParties) -> ServiceResult<()> {
    if parties.contains(caller.user_id) || caller.is_admin() {
        Ok(())
    } else {
        Err(DomainError::NotRelationshipParty.into())
    }
}
