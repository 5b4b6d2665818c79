use rivera_core::brand::BrandConfig;
use rivera_storage::StorageConfig;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    #[allow(dead_code)]
    pub shutdown_timeout_secs: u64,
    /// Maximum multipart upload size in megabytes (default: `25`).
    pub max_upload_mb: usize,
    /// SQLite database URL (default: `sqlite://rivera.db`).
    pub database_url: String,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Site branding (company name, contact details, placeholder image).
    pub brand: BrandConfig,
    /// Image storage backend configuration.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `MAX_UPLOAD_MB`        | `25`                       |
    /// | `DATABASE_URL`         | `sqlite://rivera.db`       |
    /// | `BRAND`                | `rivera-pro`               |
    ///
    /// JWT and storage settings are documented on [`JwtConfig::from_env`] and
    /// [`StorageConfig::from_env`]. The selected brand preset can be adjusted
    /// field by field via `BRAND_COMPANY_NAME`, `BRAND_TAGLINE`, `BRAND_PHONE`,
    /// `BRAND_EMAIL`, and `BRAND_SERVICE_AREA`.
    ///
    /// # Panics
    ///
    /// Panics if `BRAND` names an unknown preset or a numeric variable fails
    /// to parse. Misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let max_upload_mb: usize = std::env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| "25".into())
            .parse()
            .expect("MAX_UPLOAD_MB must be a valid usize");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://rivera.db".into());

        let jwt = JwtConfig::from_env();
        let brand = brand_from_env();
        let storage = StorageConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            max_upload_mb,
            database_url,
            jwt,
            brand,
            storage,
        }
    }
}

/// Resolve the brand preset named by `BRAND` and apply per-field overrides.
fn brand_from_env() -> BrandConfig {
    let key = std::env::var("BRAND").unwrap_or_else(|_| "rivera-pro".into());
    let mut brand = rivera_core::brand::preset(&key)
        .unwrap_or_else(|| panic!("BRAND must name a known preset, got '{key}'"));

    if let Ok(value) = std::env::var("BRAND_COMPANY_NAME") {
        brand.company_name = value;
    }
    if let Ok(value) = std::env::var("BRAND_TAGLINE") {
        brand.tagline = value;
    }
    if let Ok(value) = std::env::var("BRAND_PHONE") {
        brand.phone = value;
    }
    if let Ok(value) = std::env::var("BRAND_EMAIL") {
        brand.email = value;
    }
    if let Ok(value) = std::env::var("BRAND_SERVICE_AREA") {
        brand.service_area = value;
    }

    brand
}
