//! Route definitions for the `/site` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Routes mounted at `/site`.
///
/// ```text
/// GET /brand  -> active brand preset
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/brand", get(site::brand))
}
