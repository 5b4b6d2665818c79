//! Handlers for the `/auth` resource (login, refresh, logout, session).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use rivera_core::error::CoreError;
use rivera_core::types::DbId;
use rivera_db::models::admin_user::{AdminUser, CreateAdminUser};
use rivera_db::repositories::{AdminUserRepo, SessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

/// Minimum password length accepted for the bootstrap admin account.
const MIN_PASSWORD_LENGTH: usize = 12;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public admin info embedded in [`AuthResponse`] and returned by
/// `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find admin by email.
    let user = AdminUserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Check if the account is active.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Check if the account is temporarily locked.
    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    // 4. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        // 5. On failure: increment counter, lock if threshold exceeded.
        AdminUserRepo::increment_failed_login(&state.pool, user.id).await?;

        let new_count = user.failed_login_count + 1;
        if new_count >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            AdminUserRepo::lock_account(&state.pool, user.id, lock_until).await?;
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 6. On success: reset failed count, set last_login_at.
    AdminUserRepo::record_successful_login(&state.pool, user.id).await?;

    // 7. Create a session and issue tokens.
    let response = create_auth_response(&state, &user, user_agent(&headers)).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the provided refresh token.
    let token_hash = hash_refresh_token(&input.refresh_token);

    // 2. Find matching active session.
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 4. Find the owning admin account.
    let user = AdminUserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 5. Create a replacement session and issue new tokens.
    let response = create_auth_response(&state, &user, user_agent(&headers)).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke the session behind the presented access token. Returns 204 No
/// Content. Other sessions for the same admin stay live.
pub async fn logout(State(state): State<AppState>, auth: AuthAdmin) -> AppResult<StatusCode> {
    SessionRepo::revoke(&state.pool, auth.session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
///
/// Return the authenticated admin's public info. The admin UI calls this on
/// load to decide whether a stored token is still usable.
pub async fn session(State(state): State<AppState>, auth: AuthAdmin) -> AppResult<Json<UserInfo>> {
    let user = AdminUserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserInfo {
        id: user.id,
        email: user.email,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a session row, then generate tokens bound to it.
///
/// The session row is created first because the access token embeds the
/// session id in its `sid` claim.
async fn create_auth_response(
    state: &AppState,
    user: &AdminUser,
    user_agent: Option<String>,
) -> AppResult<AuthResponse> {
    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = rivera_db::models::session::CreateSession {
        user_id: user.id,
        refresh_token_hash: refresh_hash,
        user_agent,
        expires_at,
    };
    let session = SessionRepo::create(&state.pool, &session_input).await?;

    let access_token = generate_access_token(user.id, session.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        user: UserInfo {
            id: user.id,
            email: user.email.clone(),
        },
    })
}

/// Extract the `User-Agent` header value, if present and valid UTF-8.
fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// Create the bootstrap admin account from `ADMIN_EMAIL` / `ADMIN_PASSWORD`
/// if it does not exist yet.
///
/// Called once at startup. Does nothing when the variables are unset or the
/// account already exists, so restarts are safe.
pub async fn ensure_admin_user(pool: &rivera_db::DbPool) -> Result<(), AppError> {
    let (Ok(email), Ok(password)) = (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD"))
    else {
        tracing::info!("ADMIN_EMAIL / ADMIN_PASSWORD not set, skipping admin bootstrap");
        return Ok(());
    };

    if AdminUserRepo::find_by_email(pool, &email).await?.is_some() {
        tracing::info!(email = %email, "Admin account already exists, skipping bootstrap");
        return Ok(());
    }

    validate_password_strength(&password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateAdminUser {
        email: email.clone(),
        password_hash,
    };
    AdminUserRepo::create(pool, &input).await?;

    tracing::info!(email = %email, "Created bootstrap admin account");
    Ok(())
}
