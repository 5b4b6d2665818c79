//! Admin user entity model and DTOs.

use rivera_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full admin user row from the `admin_users` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an admin user.
#[derive(Debug)]
pub struct CreateAdminUser {
    pub email: String,
    pub password_hash: String,
}
