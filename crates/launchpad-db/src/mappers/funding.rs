//! Funding model -> entity mappers

use launchpad_core::{DomainError, FundingApplication, FundingOpportunity};

use super::parse_column;
use crate::models::{FundingApplicationModel, FundingOpportunityModel};

impl From<FundingOpportunityModel> for FundingOpportunity {
    fn from(model: FundingOpportunityModel) -> Self {
        FundingOpportunity {
            id: model.id,
            title: model.title,
            description: model.description,
            amount: model.amount,
            deadline: model.deadline,
            is_open: model.is_open,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl TryFrom<FundingApplicationModel> for FundingApplication {
    type Error = DomainError;

    fn try_from(model: FundingApplicationModel) -> Result<Self, Self::Error> {
        Ok(FundingApplication {
            id: model.id,
            opportunity_id: model.opportunity_id,
            innovator_id: model.innovator_id,
            startup_id: model.startup_id,
            pitch: model.pitch,
            requested_amount: model.requested_amount,
            status: parse_column(&model.status, "funding_applications.status")?,
            decided_by: model.decided_by,
            decided_at: model.decided_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
