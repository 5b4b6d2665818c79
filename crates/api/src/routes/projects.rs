//! Route definitions for the public `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /             -> list portfolio cards (?category=&limit=)
/// GET /categories   -> distinct categories
/// GET /{id}         -> full project detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list))
        .route("/categories", get(projects::categories))
        .route("/{id}", get(projects::get_by_id))
}
