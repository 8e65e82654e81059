//! Disk storage for uploaded image files.

use std::path::Path;

use chrono::Utc;
use gazette_core::uploads;

use crate::error::{AppError, AppResult};

/// Validate `original_name` against the image allow-list and write `data`
/// under `storage_root`, creating the directory if needed.
///
/// Returns the generated bare filename (timestamp plus normalized
/// extension) for persistence on the owning row; the file is served under
/// `/uploads/{filename}`.
pub async fn store_image(
    storage_root: &Path,
    original_name: &str,
    data: &[u8],
) -> AppResult<String> {
    let ext = uploads::validate_image_extension(original_name).map_err(AppError::Core)?;
    let filename = uploads::storage_filename(&ext, Utc::now());

    tokio::fs::create_dir_all(storage_root)
        .await
        .map_err(|e| AppError::Internal(format!("create upload dir: {e}")))?;
    tokio::fs::write(storage_root.join(&filename), data)
        .await
        .map_err(|e| AppError::Internal(format!("write upload: {e}")))?;

    Ok(filename)
}
