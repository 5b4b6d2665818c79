//! Inquiry entity model and DTOs.
//!
//! Quote requests and contact messages share one table, distinguished by
//! `kind`.

use rivera_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub const KIND_QUOTE: &str = "quote";
pub const KIND_CONTACT: &str = "contact";

/// An inquiry row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for recording an inquiry.
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: String,
}
