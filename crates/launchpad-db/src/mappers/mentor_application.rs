//! Mentor application model -> entity mappers

use launchpad_core::{DomainError, MentorApplication, MentorProfile, User};

use super::parse_column;
use crate::models::{MentorApplicationModel, MentorProfileModel};

impl TryFrom<MentorApplicationModel> for MentorApplication {
    type Error = DomainError;

    fn try_from(model: MentorApplicationModel) -> Result<Self, Self::Error> {
        Ok(MentorApplication {
            id: model.id,
            user_id: model.user_id,
            expertise: model.expertise,
            experience_years: model.experience_years,
            bio: model.bio,
            linkedin_url: model.linkedin_url,
            status: parse_column(&model.status, "mentor_applications.status")?,
            review_note: model.review_note,
            reviewed_by: model.reviewed_by,
            reviewed_at: model.reviewed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<MentorProfileModel> for MentorProfile {
    type Error = DomainError;

    fn try_from(model: MentorProfileModel) -> Result<Self, Self::Error> {
        Ok(MentorProfile {
            user: User {
                id: model.application.user_id,
                email: model.email,
                name: model.name,
                role: parse_column(&model.role, "users.role")?,
                is_disabled: model.is_disabled,
                created_at: model.user_created_at,
                updated_at: model.user_updated_at,
            },
            application: MentorApplication::try_from(model.application)?,
        })
    }
}
