//! Admin session model and DTOs.

use rivera_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub user_agent: Option<String>,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub user_agent: Option<String>,
    pub expires_at: Timestamp,
}
