// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Project automation for the Folio workspace.
//!
//! - `cargo xtask ci` lints, builds and tests everything, then runs the
//!   `MariaDB` checks.
//! - `cargo xtask test-mariadb` runs the ignored persistence tests against a
//!   throwaway `MariaDB` container.
//! - `cargo xtask verify-migrations` applies `migrations/` to `SQLite` and
//!   `migrations_mysql/` to `MariaDB` and fails if the resulting schemas
//!   differ.
//!
//! Plain `cargo test` never needs Docker; everything that does lives here.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    process::Output,
    thread::sleep,
    time::Duration,
};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const SQLITE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");
const MYSQL_MIGRATIONS: EmbeddedMigrations =
    embed_migrations!("../crates/persistence/migrations_mysql");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, `MariaDB`)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run `MariaDB` backend validation tests
    #[command(visible_alias = "tm")]
    TestMariadb,

    /// Verify schema parity between `SQLite` and `MySQL` migrations
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::Test => test(),
            Self::TestMariadb => test_mariadb(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks (lint, build, test, `MariaDB`)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    test_mariadb()?;
    verify_migrations()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Lint clippy, docs and formatting
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without warnings for every default member
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            ["doc", "--no-deps", "--all-features", "--package", &package.name],
        )
        .env("RUSTDOCFLAGS", "-D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all", "--check"])
}

/// Run unit, integration and doc tests
fn test() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])?;
    run_cargo(vec!["test", "--doc", "--all-features"])
}

fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

// ============================================================================
// MariaDB
// ============================================================================

const DB_USER: &str = "folio";

/// A throwaway `MariaDB` 11 container, removed when dropped.
struct MariaDbContainer {
    name: &'static str,
    database: &'static str,
    password: &'static str,
    port: &'static str,
}

impl MariaDbContainer {
    /// Starts the container and waits up to 30 seconds for it to accept
    /// connections.
    fn start(
        name: &'static str,
        database: &'static str,
        password: &'static str,
        port: &'static str,
    ) -> Result<Self> {
        tracing::info!("Checking Docker availability");
        cmd!("docker", "--version")
            .run_with_trace()
            .wrap_err("Docker is not available. Please install Docker.")?;

        let container = Self {
            name,
            database,
            password,
            port,
        };
        container.remove();

        tracing::info!("Starting MariaDB container: {name}");
        cmd!(
            "docker",
            "run",
            "--name",
            name,
            "-e",
            format!("MARIADB_DATABASE={database}"),
            "-e",
            format!("MARIADB_USER={DB_USER}"),
            "-e",
            format!("MARIADB_PASSWORD={password}"),
            "-e",
            "MARIADB_ROOT_PASSWORD=root_password",
            "-p",
            format!("{port}:3306"),
            "-d",
            "mariadb:11"
        )
        .run_with_trace()
        .wrap_err("Failed to start MariaDB container")?;

        tracing::info!("Waiting for MariaDB to be ready...");
        for attempt in 1..=30 {
            sleep(Duration::from_secs(1));
            tracing::debug!("Connection attempt {attempt}/30");
            let ready = cmd!(
                "docker",
                "exec",
                name,
                "mariadb",
                "-u",
                DB_USER,
                format!("-p{password}"),
                "-e",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();
            if ready.is_ok() {
                tracing::info!("MariaDB is ready");
                return Ok(container);
            }
        }

        Err(eyre!("MariaDB did not become ready within timeout"))
    }

    fn url(&self) -> String {
        format!(
            "mysql://{DB_USER}:{}@127.0.0.1:{}/{}",
            self.password, self.port, self.database
        )
    }

    fn remove(&self) {
        let _ = cmd!("docker", "stop", self.name)
            .stdout_null()
            .stderr_null()
            .run();
        let _ = cmd!("docker", "rm", self.name)
            .stdout_null()
            .stderr_null()
            .run();
    }
}

impl Drop for MariaDbContainer {
    fn drop(&mut self) {
        tracing::info!("Removing MariaDB container {}", self.name);
        self.remove();
    }
}

/// Run the ignored `folio-persistence` backend tests against `MariaDB`.
///
/// Requires Docker and a free port 3307. The tests read `DATABASE_URL` and
/// refuse to run unless `FOLIO_TEST_BACKEND=mariadb`.
fn test_mariadb() -> Result<()> {
    tracing::info!("Starting MariaDB backend validation");
    let container = MariaDbContainer::start(
        "folio-test-mariadb",
        "folio_test",
        "test_password",
        "3307",
    )?;

    cmd!(
        "cargo",
        "test",
        "--package",
        "folio-persistence",
        "backend_validation_tests",
        "--",
        "--ignored",
        "--test-threads=1"
    )
    .env("DATABASE_URL", container.url())
    .env("FOLIO_TEST_BACKEND", "mariadb")
    .run_with_trace()
    .wrap_err("MariaDB backend validation tests failed")?;

    tracing::info!("MariaDB backend validation completed successfully");
    Ok(())
}

/// Verify that both migration sets produce the same schema.
///
/// Compares tables, column types after normalization, nullability,
/// primary keys, foreign keys and unique constraints. Plain indexes are
/// not compared because `InnoDB` adds its own for foreign keys.
fn verify_migrations() -> Result<()> {
    tracing::info!("Starting schema parity verification");
    let container = MariaDbContainer::start(
        "folio-verify-migrations",
        "folio_verify",
        "verify_password",
        "3308",
    )?;

    let mut sqlite_conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut sqlite_conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;
    sqlite_conn
        .run_pending_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply SQLite migrations: {e}"))?;

    let mut mysql_conn =
        MysqlConnection::establish(&container.url()).wrap_err("Failed to connect to MariaDB")?;
    mysql_conn
        .run_pending_migrations(MYSQL_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply MySQL migrations: {e}"))?;

    let sqlite_schema: Schema = introspect_sqlite_schema(&mut sqlite_conn)?;
    let mysql_schema: Schema = introspect_mysql_schema(&mut mysql_conn, container.database)?;
    compare_schemas(&sqlite_schema, &mysql_schema)?;

    tracing::info!("Schema parity verification passed");
    Ok(())
}

// ============================================================================
// Schema introspection
// ============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Table {
    /// Column name to (normalized type, nullable).
    columns: BTreeMap<String, (&'static str, bool)>,
    primary_keys: BTreeSet<String>,
    /// (column, referenced table, referenced column).
    foreign_keys: BTreeSet<(String, String, String)>,
    /// Column lists of unique constraints.
    unique_constraints: BTreeSet<Vec<String>>,
    /// Column name to collation. Only `MySQL` reports one.
    collations: BTreeMap<String, String>,
}

#[derive(QueryableByName)]
struct NameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    let mut schema: Schema = Schema::default();
    let tables: Vec<NameRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    for table in tables {
        let mut info: Table = Table::default();

        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err_with(|| format!("Failed to get columns for {}", table.name))?;
        for column in columns {
            if column.pk > 0 {
                info.primary_keys.insert(column.name.clone());
            }
            info.columns.insert(
                column.name,
                (
                    normalize_type(&column.r#type),
                    column.notnull == 0 && column.pk == 0,
                ),
            );
        }

        let foreign_keys: Vec<ForeignKeyInfo> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({})", table.name))
                .load(conn)
                .wrap_err_with(|| format!("Failed to get foreign keys for {}", table.name))?;
        for fk in foreign_keys {
            info.foreign_keys.insert((fk.from, fk.table, fk.to));
        }

        let indexes: Vec<IndexInfo> =
            diesel::sql_query(format!("PRAGMA index_list({})", table.name))
                .load(conn)
                .wrap_err_with(|| format!("Failed to get indexes for {}", table.name))?;
        for index in indexes.into_iter().filter(|index| index.origin == "u") {
            let columns: Vec<NameRow> =
                diesel::sql_query(format!("PRAGMA index_info({})", index.name))
                    .load(conn)
                    .wrap_err_with(|| format!("Failed to get columns of {}", index.name))?;
            info.unique_constraints
                .insert(columns.into_iter().map(|c| c.name).collect());
        }

        schema.tables.insert(table.name, info);
    }

    Ok(schema)
}

#[allow(clippy::too_many_lines)]
fn introspect_mysql_schema(conn: &mut MysqlConnection, database: &str) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        table_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        data_type: String,
        #[diesel(sql_type = Text)]
        is_nullable: String,
        #[diesel(sql_type = Text)]
        column_key: String,
        #[diesel(sql_type = diesel::sql_types::Nullable<Text>)]
        collation_name: Option<String>,
    }

    #[derive(QueryableByName)]
    struct KeyUsage {
        #[diesel(sql_type = Text)]
        table_name: String,
        #[diesel(sql_type = Text)]
        constraint_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = diesel::sql_types::Nullable<Text>)]
        referenced_table_name: Option<String>,
        #[diesel(sql_type = diesel::sql_types::Nullable<Text>)]
        referenced_column_name: Option<String>,
        #[diesel(sql_type = Text)]
        constraint_type: String,
    }

    let mut schema: Schema = Schema::default();

    let columns: Vec<ColumnInfo> = diesel::sql_query(
        "SELECT table_name AS table_name, column_name AS column_name, \
         data_type AS data_type, is_nullable AS is_nullable, column_key AS column_key, \
         collation_name AS collation_name \
         FROM information_schema.columns \
         WHERE table_schema = ? AND table_name != '__diesel_schema_migrations' \
         ORDER BY table_name, ordinal_position",
    )
    .bind::<Text, _>(database)
    .load(conn)
    .wrap_err("Failed to query MySQL columns")?;
    for column in columns {
        let table: &mut Table = schema.tables.entry(column.table_name).or_default();
        if column.column_key == "PRI" {
            table.primary_keys.insert(column.column_name.clone());
        }
        if let Some(collation) = column.collation_name {
            table.collations.insert(column.column_name.clone(), collation);
        }
        table.columns.insert(
            column.column_name,
            (normalize_type(&column.data_type), column.is_nullable == "YES"),
        );
    }

    let usages: Vec<KeyUsage> = diesel::sql_query(
        "SELECT k.table_name AS table_name, k.constraint_name AS constraint_name, \
         k.column_name AS column_name, k.referenced_table_name AS referenced_table_name, \
         k.referenced_column_name AS referenced_column_name, \
         c.constraint_type AS constraint_type \
         FROM information_schema.key_column_usage k \
         JOIN information_schema.table_constraints c \
           ON c.constraint_schema = k.constraint_schema \
          AND c.table_name = k.table_name \
          AND c.constraint_name = k.constraint_name \
         WHERE k.table_schema = ? AND k.table_name != '__diesel_schema_migrations' \
         ORDER BY k.table_name, k.constraint_name, k.ordinal_position",
    )
    .bind::<Text, _>(database)
    .load(conn)
    .wrap_err("Failed to query MySQL constraints")?;

    let mut unique: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
    for usage in usages {
        match usage.constraint_type.as_str() {
            "FOREIGN KEY" => {
                if let (Some(to_table), Some(to_column)) =
                    (usage.referenced_table_name, usage.referenced_column_name)
                {
                    schema
                        .tables
                        .entry(usage.table_name)
                        .or_default()
                        .foreign_keys
                        .insert((usage.column_name, to_table, to_column));
                }
            }
            "UNIQUE" => unique
                .entry((usage.table_name, usage.constraint_name))
                .or_default()
                .push(usage.column_name),
            _ => {}
        }
    }
    for ((table, _), columns) in unique {
        schema
            .tables
            .entry(table)
            .or_default()
            .unique_constraints
            .insert(columns);
    }

    Ok(schema)
}

/// Maps a backend column type onto `integer`, `real`, `blob` or `text`.
fn normalize_type(column_type: &str) -> &'static str {
    let upper: String = column_type.to_uppercase();
    if upper.contains("INT") || upper == "BOOLEAN" || upper == "BOOL" {
        "integer"
    } else if ["REAL", "FLOA", "DOUB", "DECIMAL", "NUMERIC"]
        .iter()
        .any(|t| upper.contains(t))
    {
        "real"
    } else if upper.contains("BLOB") || upper.contains("BINARY") {
        "blob"
    } else {
        "text"
    }
}

fn compare_schemas(sqlite: &Schema, mysql: &Schema) -> Result<()> {
    let sqlite_tables: BTreeSet<&String> = sqlite.tables.keys().collect();
    let mysql_tables: BTreeSet<&String> = mysql.tables.keys().collect();
    if sqlite_tables != mysql_tables {
        return Err(eyre!(
            "Schema parity check FAILED: tables only in SQLite {:?}, only in MySQL {:?}",
            sqlite_tables.difference(&mysql_tables).collect::<Vec<_>>(),
            mysql_tables.difference(&sqlite_tables).collect::<Vec<_>>()
        ));
    }

    let mut errors: Vec<String> = Vec::new();
    for (name, sqlite_table) in &sqlite.tables {
        let mysql_table: &Table = &mysql.tables[name];
        if sqlite_table.columns != mysql_table.columns {
            errors.push(format!(
                "  - {name}: columns differ\n    SQLite: {:?}\n    MySQL:  {:?}",
                sqlite_table.columns, mysql_table.columns
            ));
        }
        if sqlite_table.primary_keys != mysql_table.primary_keys {
            errors.push(format!(
                "  - {name}: primary keys differ ({:?} vs {:?})",
                sqlite_table.primary_keys, mysql_table.primary_keys
            ));
        }
        if sqlite_table.foreign_keys != mysql_table.foreign_keys {
            errors.push(format!(
                "  - {name}: foreign keys differ ({:?} vs {:?})",
                sqlite_table.foreign_keys, mysql_table.foreign_keys
            ));
        }
        if sqlite_table.unique_constraints != mysql_table.unique_constraints {
            errors.push(format!(
                "  - {name}: unique constraints differ ({:?} vs {:?})",
                sqlite_table.unique_constraints, mysql_table.unique_constraints
            ));
        }
        errors.extend(case_insensitive_unique_columns(name, mysql_table));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(eyre!("Schema parity check FAILED\n{}", errors.join("\n")))
    }
}

/// Reports `MySQL` unique text columns whose collation ignores case.
///
/// `SQLite` compares `TEXT` with `BINARY`, so a `_ci` collation would reject
/// `Rust` next to `rust` on one backend only.
fn case_insensitive_unique_columns(name: &str, table: &Table) -> Vec<String> {
    table
        .unique_constraints
        .iter()
        .flatten()
        .filter_map(|column| {
            table
                .collations
                .get(column)
                .filter(|collation| !collation.ends_with("_bin"))
                .map(|collation| {
                    format!(
                        "  - {name}.{column}: unique text column uses {collation}, \
                         expected a _bin collation"
                    )
                })
        })
        .collect()
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
