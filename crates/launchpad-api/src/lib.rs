//! # launchpad-api
//!
//! REST API server built with the Axum framework.
//!
//! Every route lives under `/api/v1` except the health probes. Callers are
//! identified by an opaque session token, sent either as a bearer token or
//! as the session cookie.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_service_context, create_app, create_app_state, run};
pub use state::AppState;
