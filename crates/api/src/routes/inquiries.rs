//! Route definitions for the public `/inquiries` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// POST /quote    -> submit a quote request
/// POST /contact  -> submit a contact message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(inquiries::submit_quote))
        .route("/contact", post(inquiries::submit_contact))
}
