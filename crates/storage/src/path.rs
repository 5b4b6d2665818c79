//! Object path construction and its public-URL inverse.

use chrono::Utc;

/// Build the object path for a newly uploaded image:
/// `public/{unix millis}-{sanitized file name}`.
///
/// The millisecond prefix keeps repeated uploads of the same file name from
/// colliding; sanitization clamps the name to `[A-Za-z0-9._-]`.
pub fn object_path(file_name: &str) -> String {
    object_path_at(Utc::now().timestamp_millis(), file_name)
}

/// As [`object_path`], with the timestamp supplied by the caller.
pub fn object_path_at(timestamp_millis: i64, file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("public/{timestamp_millis}-{sanitized}")
}

/// Map a public image URL back to the bucket-relative object path, or `None`
/// when the URL does not point into `bucket`.
///
/// Splits on the first `/{bucket}/` occurrence and percent-decodes the
/// remainder, the inverse of how providers build public URLs.
pub fn resolve_storage_path(bucket: &str, public_url: &str) -> Option<String> {
    let marker = format!("/{bucket}/");
    let (_, tail) = public_url.split_once(&marker)?;
    if tail.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(tail).ok()?;
    // Reject path traversal after decoding.
    if decoded.split('/').any(|segment| segment == "..") {
        return None;
    }
    Some(decoded.into_owned())
}
