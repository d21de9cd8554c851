// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP error pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_api::ApiError;
use std::future::{Ready, ready};
use tracing::error;

use crate::views;

/// HTTP error wrapper that implements `IntoResponse`.
///
/// `message` is always safe to show; `detail` is the full error text and is
/// only rendered when the server runs in development.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The message shown on the error page.
    pub message: String,
    /// The underlying error text.
    pub detail: String,
}

impl HttpError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: String::from("Bad Request"),
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        let detail: String = detail.into();
        error!(error = %detail, "Internal server error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Internal Server Error"),
            detail,
        }
    }
}

/// Response extension carrying the detail of a rendered error page.
#[derive(Debug, Clone)]
pub struct ErrorDetail {
    pub message: String,
    pub detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut response: Response =
            (self.status, views::error_page(self.status, &self.message, None)).into_response();
        response.extensions_mut().insert(ErrorDetail {
            message: self.message,
            detail: self.detail,
        });
        response
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } | ApiError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::DomainRuleViolation { .. } | ApiError::InvalidInput { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => return Self::internal(err.to_string()),
        };
        Self {
            status,
            message: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            detail: err.to_string(),
        }
    }
}

/// Re-renders error pages with their detail. Installed only in development.
pub fn reveal_error_detail(response: Response) -> Ready<Response> {
    let Some(detail) = response.extensions().get::<ErrorDetail>().cloned() else {
        return ready(response);
    };
    let status: StatusCode = response.status();
    ready(
        (
            status,
            views::error_page(status, &detail.message, Some(&detail.detail)),
        )
            .into_response(),
    )
}
