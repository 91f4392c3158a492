//! Value objects - immutable types that represent domain concepts

mod caller;
mod decision;

pub use caller::Caller;
pub use decision::{Decision, ReviewStatus};
