// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    extract::{Form, Path, State as AxumState},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use folio_api::{
    ContactRequest, HomePage, home_page, is_servable_name, public_topic, submit_contact,
};
use folio_domain::TopicDetail;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::AppState;
use crate::error::HttpError;
use crate::forms::ContactForm;
use crate::session::MaybeAdmin;
use crate::uploads::content_type;
use crate::views;

/// Where visitors land after using the contact form.
const CONTACT_ANCHOR: &str = "/#contact";

fn not_found() -> HttpError {
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: String::from("Not Found"),
        detail: String::from("Not Found"),
    }
}

/// Handler for GET `/`.
pub async fn handle_home(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let page: HomePage = home_page(&mut persistence)?;
    Ok(views::home(&page))
}

/// Handler for GET `/topics/{id}`.
///
/// Unpublished topics answer 404 unless an admin is signed in.
pub async fn handle_public_topic(
    AxumState(app_state): AxumState<AppState>,
    MaybeAdmin(admin): MaybeAdmin,
    Path(topic_id): Path<i64>,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let detail: TopicDetail = public_topic(&mut persistence, topic_id, admin.is_some())?;
    Ok(views::topic(&detail))
}

/// Handler for POST `/contact`.
///
/// A submission missing a required field answers 400, still pointing the
/// browser back at the contact section.
pub async fn handle_submit_contact(
    AxumState(app_state): AxumState<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, HttpError> {
    let request: ContactRequest = ContactRequest::from(form);
    let mut persistence = app_state.persistence.lock().await;

    match submit_contact(&mut persistence, &request) {
        Ok(_) => Ok(Redirect::to(CONTACT_ANCHOR).into_response()),
        Err(err) => {
            let Some(message) = err.inline_message().map(str::to_string) else {
                return Err(err.into());
            };
            Ok((
                StatusCode::BAD_REQUEST,
                [(header::LOCATION, CONTACT_ANCHOR)],
                views::contact_missing(&message),
            )
                .into_response())
        }
    }
}

/// Handler for GET `/uploads/{file}`.
pub async fn handle_serve_upload(
    AxumState(app_state): AxumState<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, HttpError> {
    if !is_servable_name(&file_name) {
        info!(file = %file_name, "Refused upload path");
        return Err(not_found());
    }

    let path: PathBuf = app_state.config.uploads_dir.join(&file_name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, content_type(&file_name))], bytes).into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(file = %file_name, "Upload not found");
            Err(not_found())
        }
        Err(e) => Err(HttpError::internal(format!(
            "Failed to read upload {}: {e}",
            path.display()
        ))),
    }
}
