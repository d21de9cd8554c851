// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Upload storage on the local filesystem.

use folio_api::{ApiError, StoredUpload, prepare_upload};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::HttpError;
use crate::forms::UploadedImage;

/// Why an upload was not stored.
#[derive(Debug)]
pub enum UploadFailure {
    /// The file was refused; the message is shown on the form.
    Rejected(ApiError),
    /// Writing the file failed.
    Io(HttpError),
}

/// Validates and writes an uploaded image, returning where it was stored.
///
/// # Errors
///
/// Returns `UploadFailure::Rejected` for a refused file type and
/// `UploadFailure::Io` if the file cannot be written.
pub async fn store_image(
    uploads_dir: &Path,
    image: &UploadedImage,
) -> Result<StoredUpload, UploadFailure> {
    let stored: StoredUpload = prepare_upload(&image.file_name, OffsetDateTime::now_utc())
        .map_err(UploadFailure::Rejected)?;

    tokio::fs::create_dir_all(uploads_dir).await.map_err(|e| {
        UploadFailure::Io(HttpError::internal(format!(
            "Failed to create uploads directory {}: {e}",
            uploads_dir.display()
        )))
    })?;

    let path: PathBuf = uploads_dir.join(&stored.file_name);
    tokio::fs::write(&path, &image.bytes).await.map_err(|e| {
        UploadFailure::Io(HttpError::internal(format!(
            "Failed to write upload {}: {e}",
            path.display()
        )))
    })?;

    info!(file = %stored.file_name, bytes = image.bytes.len(), "Stored upload");
    Ok(stored)
}

/// Removes a stored upload whose record was never created.
pub async fn discard_image(uploads_dir: &Path, stored: &StoredUpload) {
    let path: PathBuf = uploads_dir.join(&stored.file_name);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        warn!(file = %path.display(), error = %e, "Failed to remove orphaned upload");
    }
}

/// Content type for a stored upload, by extension.
pub fn content_type(file_name: &str) -> &'static str {
    let extension: String = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
