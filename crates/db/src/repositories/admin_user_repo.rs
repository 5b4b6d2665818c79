//! Repository for the `admin_users` table.

use chrono::Utc;
use rivera_core::types::{DbId, Timestamp};

use crate::models::admin_user::{AdminUser, CreateAdminUser};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, is_active, failed_login_count, \
                       locked_until, last_login_at, created_at, updated_at";

/// Provides CRUD operations for admin users.
pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Insert a new admin user, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateAdminUser) -> Result<AdminUser, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO admin_users (email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find an admin user by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE id = ?");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an admin user by email (case-sensitive).
    pub async fn find_by_email(
        pool: &DbPool,
        email: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE email = ?");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Increment the failed login counter by 1.
    pub async fn increment_failed_login(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE admin_users
             SET failed_login_count = failed_login_count + 1, updated_at = ?
             WHERE id = ?",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Lock an account until the specified timestamp.
    pub async fn lock_account(
        pool: &DbPool,
        id: DbId,
        until: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admin_users SET locked_until = ?, updated_at = ? WHERE id = ?")
            .bind(until)
            .bind(Utc::now())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a successful login: reset `failed_login_count` to 0, clear
    /// `locked_until`, and set `last_login_at` to now.
    pub async fn record_successful_login(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        let now = Utc::now();
        sqlx::query(
            "UPDATE admin_users
             SET failed_login_count = 0, locked_until = NULL,
                 last_login_at = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Deactivate an account by setting `is_active = false`.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_users SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
