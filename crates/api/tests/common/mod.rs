//! Shared helpers for HTTP-level integration tests.
//!
//! [`build_test_app`] constructs the real application router (same middleware
//! stack as `main.rs`) over a per-test SQLite pool and a tempdir-backed local
//! storage provider, so tests exercise exactly what production runs.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use rivera_api::auth::jwt::JwtConfig;
use rivera_api::auth::password::hash_password;
use rivera_api::config::ServerConfig;
use rivera_api::router::build_app_router;
use rivera_api::state::AppState;
use rivera_db::models::admin_user::CreateAdminUser;
use rivera_db::repositories::AdminUserRepo;
use rivera_storage::{build_provider, StorageBackend, StorageConfig};

/// Credentials used by [`seed_admin`] and [`login`].
pub const ADMIN_EMAIL: &str = "admin@riverapro.com";
pub const ADMIN_PASSWORD: &str = "hammer-level-transit-9";

/// A fully wired application plus the tempdir backing its image storage.
///
/// The tempdir must stay alive for the duration of the test; dropping it
/// deletes the storage root out from under the router.
pub struct TestApp {
    pub router: Router,
    pub storage_dir: tempfile::TempDir,
}

impl TestApp {
    /// Absolute path of the storage root, for file-presence assertions.
    pub fn storage_root(&self) -> &Path {
        self.storage_dir.path()
    }
}

/// Build a test `ServerConfig` with safe defaults and the given storage root.
///
/// Constructed directly rather than via `from_env` so parallel tests never
/// race on process environment.
pub fn test_config(storage_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        max_upload_mb: 25,
        database_url: "sqlite://unused-in-tests.db".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        brand: rivera_core::brand::preset("rivera-pro").expect("known brand preset"),
        storage: StorageConfig {
            backend: StorageBackend::Local,
            bucket: "project-images".to_string(),
            local_root: storage_root.to_string_lossy().to_string(),
            public_base_url: "http://localhost:8080".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_endpoint_url: None,
            s3_access_key_id: None,
            s3_secret_access_key: None,
        },
    }
}

/// Build the full application router over the given pool, with local image
/// storage rooted in a fresh tempdir.
pub async fn build_test_app(pool: SqlitePool) -> TestApp {
    let storage_dir = tempfile::tempdir().expect("storage tempdir should be creatable");
    let config = test_config(storage_dir.path());

    let storage = build_provider(&config.storage)
        .await
        .expect("local storage provider should build");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
    };
    let router = build_app_router(state, &config);

    TestApp {
        router,
        storage_dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// GET a path with no auth.
pub async fn get(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.router.clone().oneshot(request).await.expect("request should complete")
}

/// GET a path with a Bearer token.
pub async fn get_auth(app: &TestApp, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.router.clone().oneshot(request).await.expect("request should complete")
}

/// POST a JSON body with no auth.
pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.router.clone().oneshot(request).await.expect("request should complete")
}

/// POST a JSON body with a Bearer token.
pub async fn post_json_auth(
    app: &TestApp,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.router.clone().oneshot(request).await.expect("request should complete")
}

/// DELETE a path with a Bearer token.
pub async fn delete_auth(app: &TestApp, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.router.clone().oneshot(request).await.expect("request should complete")
}

/// Send a multipart form with a Bearer token via POST.
pub async fn post_multipart_auth(
    app: &TestApp,
    uri: &str,
    token: &str,
    form: MultipartForm,
) -> Response {
    send_multipart(app, Method::POST, uri, token, form).await
}

/// Send a multipart form with a Bearer token via PUT.
pub async fn put_multipart_auth(
    app: &TestApp,
    uri: &str,
    token: &str,
    form: MultipartForm,
) -> Response {
    send_multipart(app, Method::PUT, uri, token, form).await
}

async fn send_multipart(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: &str,
    form: MultipartForm,
) -> Response {
    let (content_type, body) = form.build();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", content_type)
        .body(Body::from(body))
        .expect("request should build");
    app.router.clone().oneshot(request).await.expect("request should complete")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Create the test admin account directly in the database.
pub async fn seed_admin(pool: &SqlitePool) {
    let hash = hash_password(ADMIN_PASSWORD).expect("hashing should succeed");
    let input = CreateAdminUser {
        email: ADMIN_EMAIL.to_string(),
        password_hash: hash,
    };
    AdminUserRepo::create(pool, &input)
        .await
        .expect("admin seeding should succeed");
}

/// Log in as the seeded admin and return the access token.
pub async fn login(app: &TestApp) -> String {
    let body = serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("response must contain access_token")
        .to_string()
}

// ---------------------------------------------------------------------------
// Multipart form builder
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "RiveraTestBoundary7MA4YWxkTrZu0gW";

/// Hand-rolled `multipart/form-data` body builder for project submissions.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Append a file field.
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Finish the body, returning the content-type header value and bytes.
    pub fn build(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={BOUNDARY}"),
            self.body,
        )
    }
}

/// A complete, valid project form for the given id (no attachments).
pub fn project_form(id: &str) -> MultipartForm {
    MultipartForm::new()
        .text("id", id)
        .text("title", "Modern Kitchen Remodel")
        .text("category", "Kitchen")
        .text("client", "The Harrisons")
        .text("location", "Atlanta, GA")
        .text("completion_date", "March 2024")
        .text("description", "Full gut renovation of a 1990s kitchen.")
        .text(
            "challenge",
            "A load-bearing wall separated the kitchen from the dining room.",
        )
        .text(
            "solution",
            "A flush beam carried the load and opened up the floor plan.",
        )
        .text(
            "features",
            "Custom cabinetry\nQuartz countertops\nIsland seating",
        )
}
