// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Image upload naming.
//!
//! The server writes the bytes; this module decides whether a file is
//! accepted and what it is stored as.

use folio_domain::validate_image_extension;
use time::OffsetDateTime;

use crate::error::{ApiError, translate_domain_error};

/// URL prefix under which stored uploads are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads/";

/// Where an accepted upload is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// File name inside the uploads directory.
    pub file_name: String,
    /// Public URL of the stored file.
    pub public_url: String,
}

/// Accepts or rejects an uploaded image by its original file name.
///
/// The stored name is `{unix_millis}-{base}{ext}`, where `base` keeps only
/// ASCII letters, digits, `_` and `-` from the original stem and `ext` is
/// the original extension as submitted.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for HEIC/HEIF files and for anything
/// other than jpg, jpeg or png.
pub fn prepare_upload(original_name: &str, now: OffsetDateTime) -> Result<StoredUpload, ApiError> {
    validate_image_extension(original_name).map_err(translate_domain_error)?;

    let file_name: &str = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    let (stem, extension): (&str, &str) = file_name
        .rfind('.')
        .map_or((file_name, ""), |idx| file_name.split_at(idx));

    let base: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    let millis: i128 = now.unix_timestamp_nanos() / 1_000_000;

    let stored: String = format!("{millis}-{base}{extension}");
    Ok(StoredUpload {
        public_url: format!("{UPLOADS_URL_PREFIX}{stored}"),
        file_name: stored,
    })
}

/// Returns whether a requested upload name is safe to serve from the
/// uploads directory.
#[must_use]
pub fn is_servable_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
