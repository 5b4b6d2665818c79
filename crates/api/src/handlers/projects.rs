//! Handlers for the public `/projects` resource.
//!
//! These endpoints back the marketing site's portfolio pages and require no
//! authentication. List responses are trimmed to summary cards; the detail
//! endpoint returns the full project record.

use axum::extract::{Path, Query, State};
use axum::Json;
use rivera_core::error::CoreError;
use rivera_core::portfolio::thumbnail_or;
use rivera_db::models::project::Project;
use rivera_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::ProjectListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A portfolio card as shown on the projects grid and the homepage strip.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    /// First stored image, or the site placeholder when none exist.
    pub thumbnail: String,
}

/// GET /api/v1/projects
///
/// List portfolio cards, newest first. Supports `?category=` and `?limit=`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<Vec<ProjectSummary>>>> {
    let rows =
        ProjectRepo::list_summaries(&state.pool, params.category.as_deref(), params.limit).await?;

    let placeholder = &state.config.brand.placeholder_image_url;
    let data = rows
        .into_iter()
        .map(|row| {
            let thumbnail = thumbnail_or(&row.images.0, placeholder).to_string();
            ProjectSummary {
                id: row.id,
                title: row.title,
                category: row.category,
                thumbnail,
            }
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/categories
///
/// Distinct categories across the portfolio, used for the filter tabs.
pub async fn categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let data = ProjectRepo::distinct_categories(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}
