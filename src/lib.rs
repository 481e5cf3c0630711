//! Server-rendered dashboards for a tutoring platform.
//!
//! The platform backend owns every aggregate (totals, per-subject stats,
//! peak hours, trailing-week trends); this frontend fetches one summary
//! per page load and turns it into HTML. Sessions live in an encrypted
//! cookie, so the only state here is configuration.

pub mod auth;
pub mod backend;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod templates_structs;
