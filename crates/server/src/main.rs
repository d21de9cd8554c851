// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod forms;
mod handlers;
mod session;
mod uploads;
mod views;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Form, Path, State as AxumState},
    middleware,
    routing::{get, post},
};
use clap::{Parser, Subcommand, ValueEnum};
use folio_domain::ResourceKind;
use folio_persistence::Persistence;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::handlers::{
    handle_bulk_update, handle_contact_delete, handle_contact_list, handle_contact_show,
    handle_create_category, handle_create_hero_image, handle_create_hero_phrase,
    handle_create_news, handle_create_tag, handle_create_topic, handle_dashboard, handle_delete,
    handle_edit_topic, handle_home, handle_login, handle_login_page, handle_logout,
    handle_new_topic, handle_preview_topic, handle_public_topic, handle_resource_list,
    handle_serve_upload, handle_submit_contact, handle_topic_list, handle_update_topic,
};
use crate::session::AdminSession;

/// Largest request body accepted, sized for a single photo upload.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Folio Server - HTTP server for the Folio portfolio site
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "FOLIO_DATABASE")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[arg(long, env = "FOLIO_MYSQL_URL")]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "FOLIO_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "FOLIO_PORT", default_value_t = 3000)]
    port: u16,

    /// Directory uploaded images are written to and served from
    #[arg(long, env = "FOLIO_UPLOADS_DIR", default_value = "uploads")]
    uploads_dir: PathBuf,

    /// Deployment environment; development shows error details
    #[arg(long, env = "FOLIO_ENV", value_enum, default_value_t = Environment::Production)]
    environment: Environment,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create or reset the admin account and insert sample content
    Seed {
        /// Admin email address
        #[arg(long, env = "ADMIN_EMAIL")]
        admin_email: String,

        /// Admin password
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        admin_password: String,
    },
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

/// Settings handlers need at request time.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory uploaded images are written to.
    pub uploads_dir: PathBuf,
    pub environment: Environment,
}

/// Application state shared across handlers.
///
/// The persistence layer holds a single connection, so it sits behind a
/// mutex; every request takes the lock for the span of its database work.
#[derive(Clone)]
pub struct AppState {
    pub persistence: Arc<Mutex<Persistence>>,
    pub config: Arc<ServerConfig>,
}

/// Routes shared by every orderable resource under `/admin/{slug}`.
fn orderable_routes(kind: ResourceKind) -> Router<AppState> {
    Router::new()
        .route(
            "/bulk",
            post(
                move |state: AxumState<AppState>,
                      session: AdminSession,
                      form: Form<Vec<(String, String)>>| {
                    handle_bulk_update(kind, state, session, form)
                },
            ),
        )
        .route(
            "/{id}/delete",
            post(
                move |state: AxumState<AppState>, session: AdminSession, path: Path<i64>| {
                    handle_delete(kind, state, session, path)
                },
            ),
        )
}

/// The list page of an orderable resource other than topics.
fn listing_route(kind: ResourceKind) -> Router<AppState> {
    orderable_routes(kind).route(
        "/",
        get(move |state: AxumState<AppState>, session: AdminSession| {
            handle_resource_list(kind, state, session)
        }),
    )
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let topics: Router<AppState> = orderable_routes(ResourceKind::Topics)
        .route("/", get(handle_topic_list).post(handle_create_topic))
        .route("/new", get(handle_new_topic))
        .route("/{id}", post(handle_update_topic))
        .route("/{id}/edit", get(handle_edit_topic))
        .route("/{id}/preview", get(handle_preview_topic));

    let router: Router<AppState> = Router::new()
        .route("/", get(handle_home))
        .route("/topics/{id}", get(handle_public_topic))
        .route("/contact", post(handle_submit_contact))
        .route("/uploads/{file}", get(handle_serve_upload))
        .route("/login", get(handle_login_page).post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/admin", get(handle_dashboard))
        .route("/admin/contacts", get(handle_contact_list))
        .route("/admin/contacts/{id}", get(handle_contact_show))
        .route("/admin/contacts/{id}/delete", post(handle_contact_delete))
        .nest("/admin/topics", topics)
        .nest(
            "/admin/hero-images",
            listing_route(ResourceKind::HeroImages).route("/", post(handle_create_hero_image)),
        )
        .nest(
            "/admin/hero-phrases",
            listing_route(ResourceKind::HeroPhrases).route("/", post(handle_create_hero_phrase)),
        )
        .nest(
            "/admin/categories",
            listing_route(ResourceKind::Categories).route("/", post(handle_create_category)),
        )
        .nest(
            "/admin/tags",
            listing_route(ResourceKind::Tags).route("/", post(handle_create_tag)),
        )
        .nest(
            "/admin/news",
            listing_route(ResourceKind::News).route("/", post(handle_create_news)),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let router: Router<AppState> = if app_state.config.environment == Environment::Development {
        router.layer(middleware::map_response(error::reveal_error_detail))
    } else {
        router
    };

    router.with_state(app_state)
}

/// Opens the configured database backend.
fn open_persistence(args: &Args) -> Result<Persistence, folio_persistence::PersistenceError> {
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Folio Server");

    let mut persistence: Persistence = open_persistence(&args)?;

    if let Some(Command::Seed {
        admin_email,
        admin_password,
    }) = &args.command
    {
        let admin_id: i64 = persistence.upsert_admin(admin_email, admin_password)?;
        let inserted: usize = persistence.seed_defaults()?;
        info!(admin_id, inserted, "Seeded admin and sample content");
        return Ok(());
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config: Arc::new(ServerConfig {
            uploads_dir: args.uploads_dir.clone(),
            environment: args.environment,
        }),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
