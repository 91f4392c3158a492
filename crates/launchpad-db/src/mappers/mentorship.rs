//! Mentorship model -> entity mappers

use launchpad_core::{
    DomainError, MentorshipRelationship, MentorshipRequest, RelationshipMessage,
};

use super::parse_column;
use crate::models::{MentorshipRelationshipModel, MentorshipRequestModel, RelationshipMessageModel};

impl TryFrom<MentorshipRequestModel> for MentorshipRequest {
    type Error = DomainError;

    fn try_from(model: MentorshipRequestModel) -> Result<Self, Self::Error> {
        Ok(MentorshipRequest {
            id: model.id,
            mentor_id: model.mentor_id,
            startup_id: model.startup_id,
            initiated_by: parse_column(&model.initiated_by, "mentorship_requests.initiated_by")?,
            message: model.message,
            status: parse_column(&model.status, "mentorship_requests.status")?,
            responded_at: model.responded_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<MentorshipRelationshipModel> for MentorshipRelationship {
    type Error = DomainError;

    fn try_from(model: MentorshipRelationshipModel) -> Result<Self, Self::Error> {
        Ok(MentorshipRelationship {
            id: model.id,
            mentor_id: model.mentor_id,
            startup_id: model.startup_id,
            request_id: model.request_id,
            status: parse_column(&model.status, "mentorship_relationships.status")?,
            started_at: model.started_at,
            ended_at: model.ended_at,
        })
    }
}

impl TryFrom<RelationshipMessageModel> for RelationshipMessage {
    type Error = DomainError;

    fn try_from(model: RelationshipMessageModel) -> Result<Self, Self::Error> {
        Ok(RelationshipMessage {
            id: model.id,
            relationship_id: model.relationship_id,
            sender_id: model.sender_id,
            content: model.content,
            created_at: model.created_at,
        })
    }
}
