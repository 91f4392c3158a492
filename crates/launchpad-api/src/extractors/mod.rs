//! Axum extractors for request handling
//!
//! Custom extractors for sessions, validation, pagination, and filters.

mod auth;
mod filter;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthCaller, SessionToken};
pub use filter::{LimitFilter, QueryFilter, RoleFilter, StatusFilter};
pub use pagination::{Pagination, PaginationParams};
pub use path::IdPath;
pub use validated::ValidatedJson;
