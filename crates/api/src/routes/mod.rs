//! Route table for the API.
//!
//! Each resource lives in its own submodule and exposes a `router()`
//! function. [`api_routes`] assembles the full `/api/v1` tree; `/health`
//! mounts at the root.

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod health;
pub mod inquiries;
pub mod projects;
pub mod site;

/// All routes nested under `/api/v1`.
///
/// ```text
/// /auth/login              login (POST)
/// /auth/refresh            refresh tokens (POST)
/// /auth/logout             logout (POST, auth)
/// /auth/session            current admin info (GET, auth)
///
/// /projects                portfolio cards (?category=&limit=)
/// /projects/categories     distinct categories
/// /projects/{id}           full project detail
///
/// /inquiries/quote         submit quote request (POST)
/// /inquiries/contact       submit contact message (POST)
///
/// /admin/projects          list (GET, auth), create (POST multipart, auth)
/// /admin/projects/{id}     update (PUT multipart, auth), delete (DELETE, auth)
/// /admin/inquiries         list inquiries (GET, auth)
///
/// /site/brand              active brand preset (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout, session).
        .nest("/auth", auth::router())
        // Public portfolio.
        .nest("/projects", projects::router())
        // Public inquiry forms.
        .nest("/inquiries", inquiries::router())
        // Authenticated admin surface.
        .nest("/admin", admin::router())
        // Site branding.
        .nest("/site", site::router())
}
