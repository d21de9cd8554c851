// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    extract::{Path, Query, State as AxumState},
    response::{Html, IntoResponse, Redirect, Response},
};
use folio_api::{
    ApiError, ContactListResponse, DashboardResponse, dashboard, delete_contact, get_contact,
    list_contacts,
};
use tracing::info;

use crate::AppState;
use crate::error::HttpError;
use crate::forms::SearchQuery;
use crate::session::AdminSession;
use crate::views;

/// Handler for GET `/admin`.
pub async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let counts: DashboardResponse = dashboard(&mut persistence)?;
    Ok(views::dashboard(&admin.email, &counts))
}

/// Handler for GET `/admin/contacts`.
pub async fn handle_contact_list(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ContactListResponse = list_contacts(&mut persistence, &query.q)?;
    Ok(views::contact_list(&response))
}

/// Handler for GET `/admin/contacts/{id}`.
///
/// An unknown inquiry sends the admin back to the list.
pub async fn handle_contact_show(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Path(contact_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    match get_contact(&mut persistence, contact_id) {
        Ok(contact) => Ok(views::contact_show(&contact).into_response()),
        Err(ApiError::ResourceNotFound { .. }) => {
            Ok(Redirect::to("/admin/contacts").into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handler for POST `/admin/contacts/{id}/delete`.
pub async fn handle_contact_delete(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Path(contact_id): Path<i64>,
) -> Result<Redirect, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    delete_contact(&mut persistence, contact_id)?;
    info!(contact_id, admin = %admin.email, "Deleted contact inquiry");
    Ok(Redirect::to("/admin/contacts"))
}
