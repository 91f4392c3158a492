//! User entity - an account holding exactly one role

use chrono::{DateTime, Utc};
use uuid::Uuid;

text_enum! {
    /// Account role
    UserRole, "role" {
        User => "USER",
        Mentor => "MENTOR",
        Admin => "ADMIN",
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new enabled user. The email is normalized.
    pub fn new(id: Uuid, email: &str, name: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: normalize_email(email),
            name,
            role,
            is_disabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_mentor(&self) -> bool {
        self.role == UserRole::Mentor
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Mentors and admins cannot own startups
    #[inline]
    pub fn can_own_startup(&self) -> bool {
        self.role == UserRole::User
    }

    /// An enabled account holding the MENTOR role
    pub fn is_active_mentor(&self) -> bool {
        self.is_mentor() && !self.is_disabled
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
        self.updated_at = Utc::now();
    }
}

/// Lower-case and trim an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User::new(Uuid::new_v4(), "Someone@Example.com ", "Someone".into(), role)
    }

    #[test]
    fn test_email_normalized() {
        assert_eq!(user(UserRole::User).email, "someone@example.com");
    }

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!("mentor".parse::<UserRole>().unwrap(), UserRole::Mentor);
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(" USER ".parse::<UserRole>().unwrap(), UserRole::User);
        assert!("innovator".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_canonical_output() {
        assert_eq!(UserRole::Mentor.to_string(), "MENTOR");
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
        let parsed: UserRole = serde_json::from_str("\"mentor\"").unwrap();
        assert_eq!(parsed, UserRole::Mentor);
    }

    #[test]
    fn test_only_users_own_startups() {
        assert!(user(UserRole::User).can_own_startup());
        assert!(!user(UserRole::Mentor).can_own_startup());
        assert!(!user(UserRole::Admin).can_own_startup());
    }

    #[test]
    fn test_disabled_mentor_is_not_active() {
        let mut mentor = user(UserRole::Mentor);
        assert!(mentor.is_active_mentor());
        mentor.set_disabled(true);
        assert!(!mentor.is_active_mentor());
    }
}
