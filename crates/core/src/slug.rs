//! Project identifier validation.
//!
//! Project ids double as URL path segments and storage key prefixes, so the
//! accepted alphabet is deliberately narrow: lowercase ASCII letters, digits,
//! and hyphens (`modern-kitchen`, `bathroom-remodel-2024`).

use crate::error::CoreError;

/// Validate a project id entered in the admin form.
pub fn validate_project_id(id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::Validation(
            "Project id must not be empty".to_string(),
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "Project id '{id}' may only contain lowercase letters, digits, and hyphens"
        )));
    }
    if id.starts_with('-') || id.ends_with('-') {
        return Err(CoreError::Validation(format!(
            "Project id '{id}' must not start or end with a hyphen"
        )));
    }
    Ok(())
}
