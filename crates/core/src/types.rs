/// Database row identifier.
pub type DbId = i64;

/// UTC timestamp as stored and served.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
