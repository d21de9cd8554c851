// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin authentication and session handling.
//!
//! There is one role: an authenticated admin may do everything in the
//! admin console. Sessions are opaque random tokens stored server-side
//! with a fixed lifetime.

use folio_persistence::{
    AdminData, Persistence, PersistenceError, SessionData, format_timestamp, parse_timestamp,
};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::messages::LOGIN_FAILED;

/// An admin with a valid session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: i64,
    pub email: String,
}

impl From<AdminData> for AuthenticatedAdmin {
    fn from(admin: AdminData) -> Self {
        Self {
            admin_id: admin.id,
            email: admin.email,
        }
    }
}

/// A freshly created session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub token: String,
    pub admin: AuthenticatedAdmin,
    /// Stored timestamp layout.
    pub expires_at: String,
}

/// Authentication service for login, session validation and logout.
pub struct AuthenticationService;

impl AuthenticationService {
    /// How long a session stays valid after login.
    pub const SESSION_LIFETIME: Duration = Duration::days(7);

    /// Verifies credentials and creates a session.
    ///
    /// Expired sessions are purged first.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The submitted email address
    /// * `password` - The submitted password
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` with the login failure
    /// message if the email is unknown or the password does not match.
    pub fn login(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
    ) -> Result<NewSession, AuthError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let purged: usize = persistence
            .delete_expired_sessions(&format_timestamp(now).map_err(Self::map_persistence_error)?)
            .map_err(Self::map_persistence_error)?;
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }

        let Some(admin) = persistence
            .get_admin_by_email(email)
            .map_err(Self::map_persistence_error)?
        else {
            warn!("Login rejected: unknown email");
            return Err(Self::login_failed());
        };

        let matches: bool = persistence
            .verify_password(password, &admin.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !matches {
            warn!(admin_id = admin.id, "Login rejected: wrong password");
            return Err(Self::login_failed());
        }

        let token: String = Self::generate_session_token();
        let expires_at: String = format_timestamp(now + Self::SESSION_LIFETIME)
            .map_err(Self::map_persistence_error)?;
        persistence
            .create_session(&token, admin.id, &expires_at)
            .map_err(Self::map_persistence_error)?;

        info!(admin_id = admin.id, "Admin signed in");
        Ok(NewSession {
            token,
            admin: AuthenticatedAdmin::from(admin),
            expires_at,
        })
    }

    /// Validates a session token and returns the signed-in admin.
    ///
    /// A valid session has its last activity time refreshed. An expired
    /// session is deleted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the token is unknown, the
    /// session has expired, or its admin no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedAdmin, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::Unauthorized {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            parse_timestamp(&session.expires_at).map_err(Self::map_persistence_error)?;
        if OffsetDateTime::now_utc() > expires_at {
            persistence
                .delete_session(session_token)
                .map_err(Self::map_persistence_error)?;
            return Err(AuthError::Unauthorized {
                reason: String::from("Session expired"),
            });
        }

        let admin: AdminData = persistence
            .get_admin_by_id(session.admin_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::Unauthorized {
                reason: String::from("Admin not found"),
            })?;

        persistence
            .update_session_activity(session.id)
            .map_err(Self::map_persistence_error)?;

        Ok(AuthenticatedAdmin::from(admin))
    }

    /// Logs out by deleting the session.
    ///
    /// Logging out with an unknown token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)?;
        info!("Admin signed out");
        Ok(())
    }

    /// Generates an opaque 128-bit session token.
    fn generate_session_token() -> String {
        format!("{:016x}{:016x}", rand::random::<u64>(), rand::random::<u64>())
    }

    fn login_failed() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from(LOGIN_FAILED),
        }
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::Storage {
            message: err.to_string(),
        }
    }
}
