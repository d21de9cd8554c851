// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the admin console.
//!
//! The session token travels in the `folio_session` cookie. Admin routes
//! take an [`AdminSession`]; pages that merely behave differently for a
//! signed-in admin take a [`MaybeAdmin`].

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use folio_api::{AuthError, AuthenticatedAdmin, AuthenticationService};
use tracing::{debug, warn};

use crate::AppState;
use crate::error::HttpError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "folio_session";

/// Session cookie lifetime in seconds.
const SESSION_MAX_AGE: i64 = AuthenticationService::SESSION_LIFETIME.whole_seconds();

/// Returns the session token carried by the request's cookies, if any.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}

/// `Set-Cookie` value that stores a session token.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={SESSION_MAX_AGE}")
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Looks up the admin behind the request's session cookie.
async fn authenticate(
    parts: &Parts,
    state: &AppState,
) -> Result<Option<AuthenticatedAdmin>, HttpError> {
    let Some(token) = session_token(&parts.headers) else {
        return Ok(None);
    };

    let mut persistence = state.persistence.lock().await;
    match AuthenticationService::validate_session(&mut persistence, token) {
        Ok(admin) => {
            debug!(email = %admin.email, "Session validated successfully");
            Ok(Some(admin))
        }
        Err(AuthError::Storage { message }) => Err(HttpError::internal(message)),
        Err(e) => {
            warn!(error = %e, "Session validation failed");
            Ok(None)
        }
    }
}

/// Extractor for a signed-in admin.
///
/// Requests without a valid session are redirected to `/login`.
pub struct AdminSession(pub AuthenticatedAdmin);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authenticate(parts, state).await {
            Ok(Some(admin)) => Ok(Self(admin)),
            Ok(None) => Err(SessionRejection::SignInRequired),
            Err(err) => Err(SessionRejection::Storage(err)),
        }
    }
}

/// Extractor for pages that any visitor may see.
pub struct MaybeAdmin(pub Option<AuthenticatedAdmin>);

impl FromRequestParts<AppState> for MaybeAdmin {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(authenticate(parts, state).await?))
    }
}

/// Why an admin route refused the request.
#[derive(Debug)]
pub enum SessionRejection {
    /// No valid session; the visitor must sign in.
    SignInRequired,
    /// The session store failed.
    Storage(HttpError),
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            Self::SignInRequired => Redirect::to("/login").into_response(),
            Self::Storage(err) => err.into_response(),
        }
    }
}
