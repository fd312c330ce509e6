//! Stored-filename convention for uploaded files.
//!
//! Uploaded files keep their form field name and original extension but get
//! a fresh, collision-safe middle section, so concurrent uploads of files
//! with the same name never clobber each other on disk.

use std::path::Path;

use uuid::Uuid;

/// Generate a unique stored filename for an uploaded file.
///
/// Convention: `{field}-{millis}-{suffix}{ext}`
///
/// - `field` = the multipart field name the file arrived under
/// - `millis` = milliseconds since the Unix epoch at generation time
/// - `suffix` = 8 random hex characters
/// - `ext` = the original filename's extension including the dot, omitted
///   when the original has none
///
/// # Examples
///
/// ```
/// use curio_core::naming::stored_filename;
///
/// let name = stored_filename("coverImage", "lamp.png");
/// assert!(name.starts_with("coverImage-"));
/// assert!(name.ends_with(".png"));
/// ```
pub fn stored_filename(field_name: &str, original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();

    let uuid = Uuid::new_v4().simple().to_string();
    let suffix = &uuid[..8];

    let ext = Path::new(original_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    format!("{field_name}-{millis}-{suffix}{ext}")
}
