//! Handlers for the authenticated `/admin/projects` resource.
//!
//! Project saves arrive as multipart forms because they can carry image
//! attachments alongside the text fields. Every save runs the same image
//! lifecycle: queued removals first, then uploads, then the final ordered
//! image list is persisted with the record.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use rivera_core::error::CoreError;
use rivera_core::portfolio::{compose_images, parse_features, PendingUpload, ProjectForm};
use rivera_core::slug::validate_project_id;
use rivera_db::models::project::{NewProject, Project, ProjectChanges};
use rivera_db::repositories::ProjectRepo;
use rivera_storage::{remove_public_urls, upload_images};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for create and update: the persisted record plus any non-fatal
/// cleanup warnings from the image removal step.
#[derive(Debug, Serialize)]
pub struct ProjectSaveResponse {
    pub project: Project,
    pub warnings: Vec<String>,
}

/// Response for delete: the removed id plus any cleanup warnings.
#[derive(Debug, Serialize)]
pub struct ProjectDeleteResponse {
    pub id: String,
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects
///
/// Full project records, newest first. The admin table needs every field so
/// the edit form can be seeded without a second fetch.
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/v1/admin/projects
///
/// Create a project from a multipart form. The id must be a valid slug and
/// not already taken; validation runs before any image is uploaded.
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectSaveResponse>)> {
    let mut form = read_project_form(multipart).await?;

    // 1. Validate before touching storage so a bad submit uploads nothing.
    validate_project_id(&form.id)?;
    form.ensure_required()?;

    if ProjectRepo::find_by_id(&state.pool, &form.id)
        .await?
        .is_some()
    {
        return Err(duplicate_id(&form.id));
    }

    // 2. Run the image lifecycle (removals, uploads, final ordering).
    let (images, warnings) = process_images(&state, &mut form).await?;

    // 3. Persist.
    let input = NewProject {
        id: form.id.clone(),
        title: form.title,
        category: form.category,
        client: form.client,
        location: form.location,
        completion_date: form.completion_date,
        description: form.description,
        challenge: form.challenge,
        solution: form.solution,
        features: parse_features(&form.features_text),
        images,
    };

    let project = match ProjectRepo::create(&state.pool, &input).await {
        Ok(project) => project,
        // A concurrent create with the same id lands here.
        Err(e) if rivera_db::is_unique_violation(&e) => return Err(duplicate_id(&input.id)),
        Err(e) => return Err(e.into()),
    };

    Ok((
        StatusCode::CREATED,
        Json(ProjectSaveResponse { project, warnings }),
    ))
}

/// PUT /api/v1/admin/projects/{id}
///
/// Overwrite a project with the submitted form. The path names the project;
/// an id field inside the form is ignored.
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<ProjectSaveResponse>> {
    let mut form = read_project_form(multipart).await?;
    form.editing_id = Some(id.clone());

    // 1. Validate, and reject unknown ids before doing any storage work.
    form.ensure_required()?;

    if ProjectRepo::find_by_id(&state.pool, &id).await?.is_none() {
        return Err(not_found(id));
    }

    // 2. Run the image lifecycle (removals, uploads, final ordering).
    let (images, warnings) = process_images(&state, &mut form).await?;

    // 3. Persist the full record.
    let changes = ProjectChanges {
        title: form.title,
        category: form.category,
        client: form.client,
        location: form.location,
        completion_date: form.completion_date,
        description: form.description,
        challenge: form.challenge,
        solution: form.solution,
        features: parse_features(&form.features_text),
        images,
    };

    let project = ProjectRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ProjectSaveResponse { project, warnings }))
}

/// DELETE /api/v1/admin/projects/{id}
///
/// Remove a project and clean up its stored images. Image cleanup is
/// best-effort: failures are reported as warnings, never as an error.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectDeleteResponse>> {
    // 1. Load the row so its stored images can be cleaned up.
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(id.clone()))?;

    // 2. Best-effort image removal. A project with no images cleans up
    //    nothing and reports no warnings.
    let warnings = remove_public_urls(state.storage.as_ref(), &project.images.0).await;

    // 3. Drop the row. A concurrent delete may have won the race.
    if !ProjectRepo::delete(&state.pool, &id).await? {
        return Err(not_found(id));
    }

    Ok(Json(ProjectDeleteResponse {
        id: project.id,
        warnings,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the image lifecycle for a submitted form.
///
/// Queued removals go first and only ever produce warnings; an image that is
/// already gone must not block the save. Uploads run second and abort the
/// save on failure. The returned list is the exact order to persist:
/// retained images first, new uploads appended.
async fn process_images(
    state: &AppState,
    form: &mut ProjectForm,
) -> AppResult<(Vec<String>, Vec<String>)> {
    let warnings = remove_public_urls(state.storage.as_ref(), &form.images_to_delete).await;

    let files = std::mem::take(&mut form.image_files);
    let uploaded = upload_images(state.storage.as_ref(), files).await?;

    let images = compose_images(&form.editable_images, uploaded);

    Ok((images, warnings))
}

/// Parse a multipart project submission into a [`ProjectForm`].
///
/// Accepted fields: the scalar text fields (`id`, `title`, `category`,
/// `client`, `location`, `completion_date`, `description`, `challenge`,
/// `solution`), the newline-separated `features` text, repeated
/// `existing_images` and `delete_images` URL fields, and repeated `images`
/// file attachments. Unknown fields are ignored.
async fn read_project_form(mut multipart: Multipart) -> Result<ProjectForm, AppError> {
    let mut form = ProjectForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "id" => form.id = text(field).await?,
            "title" => form.title = text(field).await?,
            "category" => form.category = text(field).await?,
            "client" => form.client = text(field).await?,
            "location" => form.location = text(field).await?,
            "completion_date" => form.completion_date = text(field).await?,
            "description" => form.description = text(field).await?,
            "challenge" => form.challenge = text(field).await?,
            "solution" => form.solution = text(field).await?,
            "features" => form.features_text = text(field).await?,
            "existing_images" => form.editable_images.push(text(field).await?),
            "delete_images" => form.images_to_delete.push(text(field).await?),
            "images" => {
                // Capture metadata before consuming the field body.
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.image_files.push(PendingUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

/// Read a text field, mapping decode errors to a 400.
async fn text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn duplicate_id(id: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "A project with id '{id}' already exists"
    )))
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}
