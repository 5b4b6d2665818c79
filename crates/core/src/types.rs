/// Integer primary keys are SQLite `INTEGER PRIMARY KEY` rowids. Projects
/// are the exception: they are keyed by a human-readable slug.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
