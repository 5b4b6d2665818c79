//! Route definitions for the authenticated `/admin` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{admin_projects, inquiries};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require a live admin session (enforced by handler extractors).
///
/// ```text
/// GET    /projects        -> full project records for the admin table
/// POST   /projects        -> create project (multipart)
/// PUT    /projects/{id}   -> update project (multipart)
/// DELETE /projects/{id}   -> delete project + stored images
/// GET    /inquiries       -> list submitted inquiries
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(admin_projects::list).post(admin_projects::create),
        )
        .route(
            "/projects/{id}",
            put(admin_projects::update).delete(admin_projects::delete),
        )
        .route("/inquiries", get(inquiries::list))
}
