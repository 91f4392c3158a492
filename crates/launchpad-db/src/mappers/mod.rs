//! Model to entity mappers
//!
//! Rows are converted with `TryFrom<Model> for Entity`: status columns are
//! text and a value outside the enum is reported as a database error.

mod funding;
mod mentor_application;
mod mentorship;
mod scheduled_call;
mod startup;
mod user;

use std::str::FromStr;

use launchpad_core::DomainError;

pub use startup::status_counts;

/// Parse a text column into its domain enum
pub(crate) fn parse_column<T>(value: &str, column: &'static str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    value
        .parse()
        .map_err(|_| DomainError::DatabaseError(format!("Unexpected {column} value: {value}")))
}

/// Convert a batch of rows
pub(crate) fn map_all<M, E>(rows: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}
