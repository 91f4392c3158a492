//! Startup model -> entity mapper

use launchpad_core::{DomainError, Startup, StartupStatus};

use super::parse_column;
use crate::models::{StartupModel, StatusCountModel};

impl TryFrom<StartupModel> for Startup {
    type Error = DomainError;

    fn try_from(model: StartupModel) -> Result<Self, Self::Error> {
        Ok(Startup {
            id: model.id,
            owner_id: model.owner_id,
            name: model.name,
            description: model.description,
            industry: model.industry,
            stage: model.stage,
            website: model.website,
            status: parse_column(&model.status, "startups.status")?,
            review_note: model.review_note,
            reviewed_by: model.reviewed_by,
            reviewed_at: model.reviewed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert `GROUP BY status` rows
pub fn status_counts(rows: Vec<StatusCountModel>) -> Result<Vec<(StartupStatus, i64)>, DomainError> {
    rows.into_iter()
        .map(|row| Ok((parse_column(&row.status, "startups.status")?, row.count)))
        .collect()
}
