// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Connection setup, migrations and the few helpers Diesel has no DSL for
//! live here. Content queries and mutations stay in `queries/` and
//! `mutations/` and must work on every backend.
//!
//! ## Backends
//!
//! - `sqlite`: the default for development and tests.
//!   File databases run in WAL mode; tests use private in-memory databases.
//! - `mysql`: MySQL/MariaDB for deployments. It is exercised by the ignored
//!   tests that `cargo xtask test-mariadb` runs against a container.
//!
//! ## Schema parity
//!
//! `migrations/` and `migrations_mysql/` describe the same tables, keys and
//! unique constraints. `cargo xtask verify-migrations` applies both and
//! fails on any difference. Unique text columns must compare case-sensitively
//! on both backends, because the bulk editor treats `Rust` and `rust` as
//! different names.
//!
//! ## What belongs here
//!
//! Only code that has to know the backend: establishing a connection,
//! running migrations, PRAGMA and session settings, and reading the id of
//! the last insert.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Backend operations that cannot be written in backend-agnostic Diesel DSL.
///
/// Implemented for both connection types so bodies generated by
/// `backend_fn!` can call them without knowing the backend. Creates use
/// `get_last_insert_rowid` to return the new record's id, since `RETURNING`
/// is not available on MySQL.
pub trait PersistenceBackend: Connection {
    /// Retrieves the id assigned by the most recent insert on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// Run once at startup. Deleting a category or tag depends on the
    /// `ON DELETE` actions of the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        mysql::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }
}
