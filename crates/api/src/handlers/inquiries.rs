//! Handlers for the `/inquiries` resource.
//!
//! The public site submits quote requests and contact messages here; the
//! admin surface lists them. Submissions are validated with `validator`
//! derives before touching the database.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rivera_core::error::CoreError;
use rivera_db::models::inquiry::{Inquiry, NewInquiry, KIND_CONTACT, KIND_QUOTE};
use rivera_db::repositories::InquiryRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /inquiries/quote` (the "Get a Quote" form).
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    #[validate(length(min = 1, message = "Project description is required"))]
    pub description: String,
}

/// Request body for `POST /inquiries/contact` (the general contact form).
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/inquiries/quote
pub async fn submit_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteRequest>,
) -> AppResult<(StatusCode, Json<Inquiry>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let input = NewInquiry {
        kind: KIND_QUOTE.to_string(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        address: input.address,
        project_type: input.project_type,
        budget: input.budget,
        timeline: input.timeline,
        message: input.description,
    };
    let inquiry = InquiryRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// POST /api/v1/inquiries/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<(StatusCode, Json<Inquiry>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let input = NewInquiry {
        kind: KIND_CONTACT.to_string(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        address: None,
        project_type: None,
        budget: None,
        timeline: None,
        message: input.message,
    };
    let inquiry = InquiryRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// GET /api/v1/admin/inquiries
///
/// All inquiries, newest first.
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<Vec<Inquiry>>> {
    let inquiries = InquiryRepo::list(&state.pool).await?;
    Ok(Json(inquiries))
}
