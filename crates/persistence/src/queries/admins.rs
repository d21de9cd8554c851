// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrator and session queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{AdminData, SessionData};
use crate::diesel_schema::{admins, sessions};
use crate::error::PersistenceError;

/// Diesel Queryable struct for admin rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = admins)]
struct AdminRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at: String,
}

impl From<AdminRow> for AdminData {
    fn from(row: AdminRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    id: i64,
    token: String,
    admin_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

impl From<SessionRow> for SessionData {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            token: row.token,
            admin_id: row.admin_id,
            created_at: row.created_at,
            last_activity_at: row.last_activity_at,
            expires_at: row.expires_at,
        }
    }
}

backend_fn! {
/// Retrieves an admin by email.
///
/// Emails are matched exactly after trimming.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no admin has that email.
pub fn get_admin_by_email(
    conn: &mut _,
    email: &str,
) -> Result<Option<AdminData>, PersistenceError> {
    debug!("Looking up admin by email");

    let row: Option<AdminRow> = admins::table
        .filter(admins::email.eq(email.trim()))
        .select(AdminRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AdminData::from))
}
}

backend_fn! {
/// Retrieves an admin by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the admin is not found.
pub fn get_admin_by_id(
    conn: &mut _,
    admin_id: i64,
) -> Result<Option<AdminData>, PersistenceError> {
    debug!("Looking up admin by ID: {}", admin_id);

    let row: Option<AdminRow> = admins::table
        .filter(admins::id.eq(admin_id))
        .select(AdminRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AdminData::from))
}
}

backend_fn! {
/// Counts admin accounts.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_admins(conn: &mut _) -> Result<i64, PersistenceError> {
    let count: i64 = admins::table.count().get_result(conn)?;
    Ok(count)
}
}

backend_fn! {
/// Retrieves a session by its token.
///
/// Expiry is not checked here; see the authentication service.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no session has that token.
pub fn get_session_by_token(
    conn: &mut _,
    token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    let row: Option<SessionRow> = sessions::table
        .filter(sessions::token.eq(token))
        .select(SessionRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(SessionData::from))
}
}

/// Verifies a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
