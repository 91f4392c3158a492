//! Review decisions and the three-state review outcome

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

text_enum! {
    /// Outcome of a reviewed submission (mentor application, mentorship
    /// request, funding application)
    ReviewStatus, "status" {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

impl ReviewStatus {
    #[inline]
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}

/// A reviewer's verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Reject => "REJECT",
        }
    }

    /// Status a pending item moves to under this decision
    pub fn outcome(self) -> ReviewStatus {
        match self {
            Self::Approve => ReviewStatus::Approved,
            Self::Reject => ReviewStatus::Rejected,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "APPROVE" | "APPROVED" | "ACCEPT" | "ACCEPTED" => Ok(Self::Approve),
            "REJECT" | "REJECTED" | "DECLINE" | "DECLINED" => Ok(Self::Reject),
            _ => Err(DomainError::ValidationError(format!("Invalid decision: {s}"))),
        }
    }
}

impl TryFrom<String> for Decision {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Decision> for &'static str {
    fn from(value: Decision) -> Self {
        value.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_aliases() {
        assert_eq!("accept".parse::<Decision>().unwrap(), Decision::Approve);
        assert_eq!("APPROVED".parse::<Decision>().unwrap(), Decision::Approve);
        assert_eq!("Decline".parse::<Decision>().unwrap(), Decision::Reject);
        assert!("maybe".parse::<Decision>().is_err());
    }

    #[test]
    fn test_decision_outcome() {
        assert_eq!(Decision::Approve.outcome(), ReviewStatus::Approved);
        assert_eq!(Decision::Reject.outcome(), ReviewStatus::Rejected);
    }

    #[test]
    fn test_review_status_case_insensitive() {
        assert_eq!(
            "pending".parse::<ReviewStatus>().unwrap(),
            ReviewStatus::Pending
        );
        assert_eq!(ReviewStatus::Rejected.to_string(), "REJECTED");
        assert!("ARCHIVED".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_form() {
        let json = serde_json::to_string(&ReviewStatus::Approved).unwrap();
        assert_eq!(json, "\"APPROVED\"");

        let parsed: Decision = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(parsed, Decision::Reject);
    }
}
