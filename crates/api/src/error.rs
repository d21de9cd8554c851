// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use folio::CoreError;
use folio_domain::DomainError;
use folio_persistence::PersistenceError;
use tracing::error;

use crate::forms::FormError;
use crate::messages::upload_message;

/// Authentication and session errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The submitted credentials did not match an admin.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The request carried no usable session.
    Unauthorized {
        /// Why the session was refused.
        reason: String,
    },
    /// The credential or session store could not be read or written.
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { reason } => write!(f, "Unauthorized: {reason}"),
            Self::Storage { message } => write!(f, "Session storage error: {message}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// No valid admin session accompanied the request.
    Unauthorized {
        /// Why the session was refused.
        reason: String,
    },
    /// A content rule was violated.
    DomainRuleViolation {
        /// The stable code of the rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The submission no longer matches stored state.
    Conflict {
        /// A description of the mismatch.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the message to show inline on a re-rendered form, if this
    /// error is one the administrator can correct.
    #[must_use]
    pub fn inline_message(&self) -> Option<&str> {
        match self {
            Self::DomainRuleViolation { message, .. } | Self::InvalidInput { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { reason } => write!(f, "Unauthorized: {reason}"),
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized { reason } => Self::Unauthorized { reason },
            AuthError::Storage { message } => Self::Internal { message },
        }
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::EmptyField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        },
        DomainError::DuplicateName { .. } => ApiError::DomainRuleViolation {
            rule: err.code().to_string(),
            message: err.to_string(),
        },
        DomainError::InvalidDate { .. } => ApiError::InvalidInput {
            field: String::from("interview_date"),
            message: err.to_string(),
        },
        DomainError::HeicNotSupported | DomainError::UnsupportedImageFormat { .. } => {
            ApiError::InvalidInput {
                field: String::from("image"),
                message: upload_message(&err).to_string(),
            }
        }
        DomainError::UnknownResource(slug) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: format!("No orderable resource is named '{slug}'"),
        },
    }
}

/// Translates a core error into an API error.
///
/// Stale batches become conflicts.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::StaleBatch { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
        CoreError::DuplicateRow(_) | CoreError::BatchTooLarge(_) => ApiError::InvalidInput {
            field: String::from("ids"),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage failures are logged here; the caller only sees a generic
/// internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::Conflict(message) => ApiError::Conflict { message },
        PersistenceError::UniqueViolation(message) => ApiError::DomainRuleViolation {
            rule: String::from("duplicate-name"),
            message,
        },
        other => {
            error!(error = %other, "Storage operation failed");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}
