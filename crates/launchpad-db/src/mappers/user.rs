//! User model -> entity mapper

use launchpad_core::{DomainError, User};

use super::parse_column;
use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            email: model.email,
            name: model.name,
            role: parse_column(&model.role, "users.role")?,
            is_disabled: model.is_disabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
