// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        /// The name of the offending field.
        field: &'static str,
    },
    /// A name that must be unique within its resource appears more than once.
    DuplicateName {
        /// The duplicated name, as submitted.
        name: String,
    },
    /// A date field could not be parsed as `YYYY-MM-DD`.
    InvalidDate {
        /// The rejected input.
        value: String,
    },
    /// An uploaded image uses a HEIC/HEIF container.
    HeicNotSupported,
    /// An uploaded image has an extension other than jpg, jpeg or png.
    UnsupportedImageFormat {
        /// The rejected extension, lowercased, including the leading dot.
        extension: String,
    },
    /// A resource slug does not name a known orderable resource.
    UnknownResource(String),
}

impl DomainError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "empty-field",
            Self::DuplicateName { .. } => "duplicate-name",
            Self::InvalidDate { .. } => "invalid-date",
            Self::HeicNotSupported => "heic-not-supported",
            Self::UnsupportedImageFormat { .. } => "unsupported-image-format",
            Self::UnknownResource(_) => "unknown-resource",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "Field '{field}' cannot be empty"),
            Self::DuplicateName { name } => write!(f, "Name '{name}' is used more than once"),
            Self::InvalidDate { value } => {
                write!(f, "Invalid date '{value}': expected YYYY-MM-DD")
            }
            Self::HeicNotSupported => write!(f, "HEIC/HEIF images are not supported"),
            Self::UnsupportedImageFormat { extension } => {
                write!(
                    f,
                    "Unsupported image format '{extension}': only JPG and PNG are accepted"
                )
            }
            Self::UnknownResource(slug) => write!(f, "Unknown resource: {slug}"),
        }
    }
}

impl std::error::Error for DomainError {}
