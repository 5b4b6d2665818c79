//! Brand configuration for the site skins.
//!
//! The same service powers more than one contractor storefront. Everything
//! copy-level (company name, contact details, placeholder art) is collected
//! here so the frontend can fetch it instead of hardcoding it per skin.

use serde::Serialize;

/// Path served for projects that have no images yet.
pub const PLACEHOLDER_IMAGE_URL: &str = "/images/placeholder-project.webp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandConfig {
    pub key: String,
    pub company_name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub service_area: String,
    pub placeholder_image_url: String,
}

/// Built-in skins. Unknown keys return `None`; the caller decides whether
/// that is a configuration error.
pub fn preset(key: &str) -> Option<BrandConfig> {
    match key {
        "rivera-pro" => Some(BrandConfig {
            key: "rivera-pro".to_string(),
            company_name: "Rivera Pro".to_string(),
            tagline: "Premium Construction Services in Atlanta".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "info@riverapro.com".to_string(),
            service_area: "Atlanta, GA".to_string(),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }),
        "elite-contractor" => Some(BrandConfig {
            key: "elite-contractor".to_string(),
            company_name: "Elite Contractor".to_string(),
            tagline: "Premium Construction Services in Atlanta".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "info@elitecontractor.com".to_string(),
            service_area: "Atlanta, GA".to_string(),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }),
        _ => None,
    }
}
