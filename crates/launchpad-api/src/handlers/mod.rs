//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod calls;
pub mod dashboard;
pub mod funding;
pub mod health;
pub mod mentor_applications;
pub mod mentorship;
pub mod startups;
pub mod users;
