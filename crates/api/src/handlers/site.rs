//! Handlers for the `/site` resource (branding info).

use axum::extract::State;
use axum::Json;
use rivera_core::brand::BrandConfig;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/site/brand
///
/// The active brand preset (company name, tagline, contact details,
/// placeholder image). The frontend reads this once at startup so the same
/// build can serve either brand.
pub async fn brand(State(state): State<AppState>) -> AppResult<Json<BrandConfig>> {
    Ok(Json(state.config.brand.clone()))
}
