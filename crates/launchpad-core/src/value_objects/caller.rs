//! Caller - the resolved identity passed into every guarded operation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::UserRole;
use crate::error::DomainError;

/// Authenticated caller: user id plus the role read at resolution time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Caller {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    #[inline]
    pub fn is(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Fail unless the caller holds exactly `role`
    pub fn require_role(&self, role: UserRole) -> Result<(), DomainError> {
        if self.role == role {
            Ok(())
        } else {
            Err(DomainError::RoleRequired(role))
        }
    }

    pub fn require_admin(&self) -> Result<(), DomainError> {
        self.require_role(UserRole::Admin)
    }

    /// Fail unless the caller holds one of `roles`.
    ///
    /// The error names the first role of the list.
    pub fn require_any(&self, roles: &[UserRole]) -> Result<(), DomainError> {
        if roles.contains(&self.role) {
            return Ok(());
        }
        Err(DomainError::RoleRequired(
            roles.first().copied().unwrap_or(UserRole::Admin),
        ))
    }
}
