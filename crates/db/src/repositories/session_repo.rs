//! Repository for the `admin_sessions` table.

use chrono::Utc;
use rivera_core::types::DbId;

use crate::models::session::{AdminSession, CreateSession};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, refresh_token_hash, user_agent, expires_at, \
                       is_revoked, created_at, updated_at";

/// Provides CRUD operations for admin sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateSession) -> Result<AdminSession, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO admin_sessions
                 (user_id, refresh_token_hash, user_agent, expires_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(input.user_id)
            .bind(&input.refresh_token_hash)
            .bind(&input.user_agent)
            .bind(input.expires_at)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find an active session by its refresh token hash.
    ///
    /// Only returns sessions that are not revoked and not expired.
    pub async fn find_by_refresh_token_hash(
        pool: &DbPool,
        hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_sessions
             WHERE refresh_token_hash = ?
               AND is_revoked = 0
               AND expires_at > ?"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(hash)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Find a session by id, only if it is still active.
    ///
    /// Access tokens carry the session id, so this is the liveness check
    /// behind every authenticated request.
    pub async fn find_active_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_sessions
             WHERE id = ?
               AND is_revoked = 0
               AND expires_at > ?"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(id)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_sessions SET is_revoked = 1, updated_at = ?
             WHERE id = ? AND is_revoked = 0",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
