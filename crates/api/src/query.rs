//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Query parameters for the public project list (`?category=&limit=`).
///
/// `category` filters to one portfolio category; `limit` caps the number of
/// returned summaries (the homepage uses `limit=3` for the featured strip).
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
}
