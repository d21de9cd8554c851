// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin account and session mutations.

use bcrypt::{DEFAULT_COST, hash};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{admins, sessions};
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;

backend_fn! {
/// Creates an admin or replaces the password of an existing one.
///
/// The password is hashed with bcrypt before storage.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The login email (trimmed)
/// * `password` - The plain-text password
///
/// # Errors
///
/// Returns an error if hashing or the database write fails.
pub fn upsert_admin(conn: &mut _, email: &str, password: &str) -> Result<i64, PersistenceError> {
    let email: &str = email.trim();
    let password_hash: String = hash(password, DEFAULT_COST)?;

    let existing: Option<i64> = admins::table
        .filter(admins::email.eq(email))
        .select(admins::id)
        .first(conn)
        .optional()?;

    if let Some(admin_id) = existing {
        diesel::update(admins::table.filter(admins::id.eq(admin_id)))
            .set(admins::password_hash.eq(&password_hash))
            .execute(conn)?;
        info!("Updated password for admin ID: {}", admin_id);
        return Ok(admin_id);
    }

    diesel::insert_into(admins::table)
        .values((
            admins::email.eq(email),
            admins::password_hash.eq(&password_hash),
            admins::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let admin_id: i64 = conn.get_last_insert_rowid()?;
    info!("Created admin with ID: {}", admin_id);
    Ok(admin_id)
}
}

backend_fn! {
/// Creates a new session for an admin.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `token` - The unique session token
/// * `admin_id` - The admin ID
/// * `expires_at` - The expiration timestamp in stored layout
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut _,
    token: &str,
    admin_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp()?;

    diesel::insert_into(sessions::table)
        .values((
            sessions::token.eq(token),
            sessions::admin_id.eq(admin_id),
            sessions::created_at.eq(&now),
            sessions::last_activity_at.eq(&now),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = conn.get_last_insert_rowid()?;
    debug!(session_id, admin_id, "Session created");
    Ok(session_id)
}
}

backend_fn! {
/// Stamps `last_activity_at` on a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(conn: &mut _, session_id: i64) -> Result<(), PersistenceError> {
    diesel::update(sessions::table.filter(sessions::id.eq(session_id)))
        .set(sessions::last_activity_at.eq(now_timestamp()?))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Deletes a session by token. Deleting an unknown token is not an error.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(conn: &mut _, token: &str) -> Result<(), PersistenceError> {
    debug!("Deleting session by token");

    diesel::delete(sessions::table.filter(sessions::token.eq(token))).execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Deletes every session that expired before `now`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The current time in stored layout
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(conn: &mut _, now: &str) -> Result<usize, PersistenceError> {
    let rows_affected: usize =
        diesel::delete(sessions::table.filter(sessions::expires_at.lt(now))).execute(conn)?;

    info!("Deleted {} expired sessions", rows_affected);
    Ok(rows_affected)
}
}
