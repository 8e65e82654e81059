//! Validation and naming for uploaded image files.
//!
//! The HTTP layer owns the actual disk writes; this module holds the pure
//! parts so they can be unit-tested: the extension allow-list and the
//! generated destination filename.

use crate::error::CoreError;
use crate::types::Timestamp;

/// File extensions accepted for image uploads, lowercase, without the dot.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Validate an uploaded file's name against the image allow-list.
///
/// Matching is case-insensitive; returns the normalized (lower-cased)
/// extension without the leading dot. A missing or disallowed extension is a
/// [`CoreError::Validation`].
pub fn validate_image_extension(filename: &str) -> Result<String, CoreError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "File type '{filename}' is not allowed. Accepted: {}",
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        )))
    }
}

/// Destination filename for a stored upload: nanosecond-resolution timestamp
/// plus the normalized extension.
///
/// Collisions are not detected; single-process sequential writes make them
/// negligible. The timestamp is passed in rather than read here so callers
/// and tests control the clock.
pub fn storage_filename(ext: &str, now: Timestamp) -> String {
    // timestamp_nanos_opt only fails outside years 1677-2262.
    let nanos = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp());
    format!("{nanos}.{ext}")
}
