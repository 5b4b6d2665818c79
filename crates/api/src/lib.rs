//! HTTP API for the Rivera Pro marketing site backend.
//!
//! Serves the public portfolio and inquiry endpoints plus the authenticated
//! admin surface used by the site editor. Built on axum with a tower-http
//! middleware stack (CORS, request IDs, timeouts, tracing, panic recovery).

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
