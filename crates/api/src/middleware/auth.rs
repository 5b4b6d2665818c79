//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use rivera_core::error::CoreError;
use rivera_core::types::DbId;
use rivera_db::repositories::SessionRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Beyond signature and expiry checks, this extractor verifies that the
/// session named in the token's `sid` claim is still active, so a logout
/// takes effect immediately even for unexpired access tokens.
///
/// Use it as an extractor parameter in any handler that requires auth:
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(user_id = admin.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The admin user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The session the token was issued under (from `claims.sid`).
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let session = SessionRepo::find_active_by_id(&state.pool, claims.sid).await?;
        if session.is_none() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session has been revoked or expired".into(),
            )));
        }

        Ok(AuthAdmin {
            user_id: claims.sub,
            session_id: claims.sid,
        })
    }
}
