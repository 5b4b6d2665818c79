//! HTTP-level integration tests for the admin project endpoints.
//!
//! These walk the full save path: multipart parsing, image uploads into the
//! tempdir-backed local store, composition of the final image list, and
//! persistence. Disk assertions use the storage root exposed by the test app.

mod common;

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, delete_auth, get, get_auth, login, post_multipart_auth, project_form,
    put_multipart_auth, seed_admin, MultipartForm, TestApp,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a public image URL produced by the test app onto its path on disk.
fn stored_path(app: &TestApp, url: &str) -> PathBuf {
    let tail = url
        .strip_prefix("http://localhost:8080/project-images/")
        .expect("url should be under the test bucket");
    app.storage_root().join(tail)
}

/// Extract the stored image URLs from a save response.
fn image_urls(json: &serde_json::Value) -> Vec<String> {
    json["project"]["images"]
        .as_array()
        .expect("project.images must be an array")
        .iter()
        .map(|v| v.as_str().expect("image must be a string").to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Creating a project with no attachments stores an empty image list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_without_images(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let response = post_multipart_auth(
        &app,
        "/api/v1/admin/projects",
        &token,
        project_form("modern-kitchen"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["project"]["id"], "modern-kitchen");
    assert_eq!(json["project"]["images"], serde_json::json!([]));
    assert_eq!(json["warnings"], serde_json::json!([]));

    // The features text was split into a list.
    assert_eq!(
        json["project"]["features"],
        serde_json::json!(["Custom cabinetry", "Quartz countertops", "Island seating"])
    );
}

/// Attached files are uploaded and recorded in attachment order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_uploads_files_in_order(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let form = project_form("kitchen-remodel")
        .file("images", "before.webp", "image/webp", b"before-bytes")
        .file("images", "after.webp", "image/webp", b"after-bytes");
    let response = post_multipart_auth(&app, "/api/v1/admin/projects", &token, form).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let urls = image_urls(&json);
    assert_eq!(urls.len(), 2);
    assert!(
        urls[0].ends_with("-before.webp"),
        "first image must be the first attachment, got {}",
        urls[0]
    );
    assert!(urls[1].ends_with("-after.webp"));

    // Both files landed on disk with the right bytes.
    let on_disk = std::fs::read(stored_path(&app, &urls[0])).expect("first image should exist");
    assert_eq!(on_disk, b"before-bytes");
    let on_disk = std::fs::read(stored_path(&app, &urls[1])).expect("second image should exist");
    assert_eq!(on_disk, b"after-bytes");
}

/// An id that is not a valid slug is rejected before anything is stored.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_invalid_id(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let response = post_multipart_auth(
        &app,
        "/api/v1/admin/projects",
        &token,
        project_form("Modern Kitchen!"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["error"].as_str().unwrap().contains("Modern Kitchen!"),
        "error should name the offending id"
    );

    // Nothing was created.
    let response = get(&app, "/api/v1/projects").await;
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

/// A missing required field is a 400 naming the field.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_missing_title(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let form = MultipartForm::new()
        .text("id", "no-title")
        .text("category", "Kitchen")
        .text("client", "The Harrisons")
        .text("location", "Atlanta, GA")
        .text("completion_date", "March 2024")
        .text("description", "Something.");
    let response = post_multipart_auth(&app, "/api/v1/admin/projects", &token, form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field: title");
}

/// Reusing an existing id is a 409 that names the id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_id_conflicts(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let response = post_multipart_auth(
        &app,
        "/api/v1/admin/projects",
        &token,
        project_form("modern-kitchen"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_multipart_auth(
        &app,
        "/api/v1/admin/projects",
        &token,
        project_form("modern-kitchen"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(
        json["error"].as_str().unwrap().contains("modern-kitchen"),
        "conflict error should name the id"
    );

    // The original record is untouched and still the only one.
    let response = get_auth(&app, "/api/v1/admin/projects", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Retained images keep their submitted order; new uploads append after.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_composes_retained_then_uploaded(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let form = project_form("deck-build").file("images", "deck.webp", "image/webp", b"deck");
    let response = post_multipart_auth(&app, "/api/v1/admin/projects", &token, form).await;
    let created = body_json(response).await;
    let existing = image_urls(&created);

    let form = project_form("deck-build")
        .text("existing_images", &existing[0])
        .file("images", "railing.webp", "image/webp", b"railing");
    let response =
        put_multipart_auth(&app, "/api/v1/admin/projects/deck-build", &token, form).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let urls = image_urls(&json);
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], existing[0], "retained image must come first");
    assert!(urls[1].ends_with("-railing.webp"));
}

/// Reordering existing images persists exactly the submitted order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_persists_reordered_images(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let form = project_form("bath-refresh")
        .file("images", "tile.webp", "image/webp", b"tile")
        .file("images", "vanity.webp", "image/webp", b"vanity");
    let response = post_multipart_auth(&app, "/api/v1/admin/projects", &token, form).await;
    let created = body_json(response).await;
    let existing = image_urls(&created);

    // Submit the two images swapped.
    let form = project_form("bath-refresh")
        .text("existing_images", &existing[1])
        .text("existing_images", &existing[0]);
    let response =
        put_multipart_auth(&app, "/api/v1/admin/projects/bath-refresh", &token, form).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        image_urls(&json),
        vec![existing[1].clone(), existing[0].clone()],
        "stored order must match the submitted order exactly"
    );

    // The public detail endpoint reflects the same order.
    let response = get(&app, "/api/v1/projects/bath-refresh").await;
    let json = body_json(response).await;
    assert_eq!(
        json["images"],
        serde_json::json!([existing[1], existing[0]])
    );
}

/// Images queued for deletion are removed from disk and from the record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_removes_queued_images(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let form = project_form("garage-conversion")
        .file("images", "keep.webp", "image/webp", b"keep")
        .file("images", "drop.webp", "image/webp", b"drop");
    let response = post_multipart_auth(&app, "/api/v1/admin/projects", &token, form).await;
    let created = body_json(response).await;
    let existing = image_urls(&created);
    assert!(stored_path(&app, &existing[1]).exists());

    let form = project_form("garage-conversion")
        .text("existing_images", &existing[0])
        .text("delete_images", &existing[1]);
    let response = put_multipart_auth(
        &app,
        "/api/v1/admin/projects/garage-conversion",
        &token,
        form,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(image_urls(&json), vec![existing[0].clone()]);
    assert_eq!(json["warnings"], serde_json::json!([]));
    assert!(
        !stored_path(&app, &existing[1]).exists(),
        "deleted image must be removed from disk"
    );
    assert!(stored_path(&app, &existing[0]).exists());
}

/// Updating an unknown id is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_unknown_id_is_404(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let response = put_multipart_auth(
        &app,
        "/api/v1/admin/projects/never-created",
        &token,
        project_form("never-created"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project with id never-created not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Deleting a project removes the row and its stored images; deleting a
/// project with no images succeeds with no warnings; a repeat is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_and_repeat(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    // No-image project: cleanup has nothing to do and reports nothing.
    let response = post_multipart_auth(
        &app,
        "/api/v1/admin/projects",
        &token,
        project_form("modern-kitchen"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete_auth(&app, "/api/v1/admin/projects/modern-kitchen", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], "modern-kitchen");
    assert_eq!(json["warnings"], serde_json::json!([]));

    // The row is gone.
    let response = get(&app, "/api/v1/projects/modern-kitchen").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again reports 404 naming the id.
    let response = delete_auth(&app, "/api/v1/admin/projects/modern-kitchen", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project with id modern-kitchen not found");
}

/// Delete cleans stored images off the disk.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_removes_stored_images(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let form = project_form("porch-rebuild")
        .file("images", "porch.webp", "image/webp", b"porch-bytes");
    let response = post_multipart_auth(&app, "/api/v1/admin/projects", &token, form).await;
    let created = body_json(response).await;
    let urls = image_urls(&created);
    assert!(stored_path(&app, &urls[0]).exists());

    let response = delete_auth(&app, "/api/v1/admin/projects/porch-rebuild", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(
        !stored_path(&app, &urls[0]).exists(),
        "stored image must be removed with the project"
    );
}

// ---------------------------------------------------------------------------
// Listing and auth
// ---------------------------------------------------------------------------

/// The admin list returns full records, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_list_full_records(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;
    let token = login(&app).await;

    let response = post_multipart_auth(
        &app,
        "/api/v1/admin/projects",
        &token,
        project_form("older-project"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = post_multipart_auth(
        &app,
        "/api/v1/admin/projects",
        &token,
        project_form("newer-project"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(&app, "/api/v1/admin/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().expect("admin list must be an array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "newer-project");
    // Full record fields are present (the edit form seeds from these).
    assert_eq!(rows[0]["client"], "The Harrisons");
    assert!(rows[0]["created_at"].is_string());
}

/// Admin endpoints reject unauthenticated requests.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_require_auth(pool: SqlitePool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool).await;

    let response = get(&app, "/api/v1/admin/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A create attempt without a token never reaches the multipart handler.
    let (content_type, body) = project_form("modern-kitchen").build();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/projects")
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
