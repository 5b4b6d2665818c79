//! Repository for the `inquiries` table.

use chrono::Utc;

use crate::models::inquiry::{Inquiry, NewInquiry};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, kind, name, email, phone, address, project_type, budget, timeline, message, created_at";

/// Provides persistence for quote requests and contact messages.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry, returning the created row.
    pub async fn create(pool: &DbPool, input: &NewInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries
                 (kind, name, email, phone, address, project_type, budget, timeline, message,
                  created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.kind)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.project_type)
            .bind(&input.budget)
            .bind(&input.timeline)
            .bind(&input.message)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all inquiries, most recent first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Inquiry>(&query).fetch_all(pool).await
    }
}
