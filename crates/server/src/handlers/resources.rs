// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List, create, delete and bulk handlers shared by the orderable
//! resources.

use axum::{
    extract::{Form, Multipart, Path, State as AxumState},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use folio_api::{
    ApiError, BulkOutcome, HeroImageRequest, HeroPhraseRequest, NamedRequest, NewsRequest,
    ResourceListing, StoredUpload, bulk_update, create_category, create_hero_image,
    create_hero_phrase, create_news, create_tag, delete_category, delete_hero_image,
    delete_hero_phrase, delete_news, delete_tag, delete_topic, resource_listing,
};
use folio_domain::ResourceKind;
use folio_persistence::Persistence;
use tracing::info;

use super::list_path;
use crate::AppState;
use crate::error::HttpError;
use crate::forms::{HeroPhraseForm, MultipartForm, NamedForm, NewsForm, read_multipart};
use crate::session::AdminSession;
use crate::uploads::{UploadFailure, discard_image, store_image};
use crate::views;

/// Re-renders a resource's list page with an inline error and status 400.
fn rejected_listing(listing: &ResourceListing, message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        views::listing_page(listing, "", Some(message)),
    )
        .into_response()
}

/// Redirects to the list after a create, or re-renders it with the error
/// when the administrator can correct the input.
fn created_or_rejected(
    persistence: &mut Persistence,
    kind: ResourceKind,
    result: Result<i64, ApiError>,
) -> Result<Response, HttpError> {
    let err: ApiError = match result {
        Ok(id) => {
            info!(resource = %kind, id, "Created record");
            return Ok(Redirect::to(&list_path(kind)).into_response());
        }
        Err(err) => err,
    };

    let Some(message) = err.inline_message().map(str::to_string) else {
        return Err(err.into());
    };
    let listing: ResourceListing = resource_listing(persistence, kind)?;
    Ok(rejected_listing(&listing, &message))
}

/// Handler for GET `/admin/{resource}` for every resource but topics.
pub async fn handle_resource_list(
    kind: ResourceKind,
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listing: ResourceListing = resource_listing(&mut persistence, kind)?;
    Ok(views::listing_page(&listing, "", None))
}

/// Handler for POST `/admin/{resource}/bulk`.
///
/// A batch that breaks a content rule re-renders the list from the
/// submitted values with status 400; nothing is written.
pub async fn handle_bulk_update(
    kind: ResourceKind,
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;

    match bulk_update(&mut persistence, kind, &pairs)? {
        BulkOutcome::Applied { count, .. } => {
            info!(resource = %kind, count, admin = %admin.email, "Bulk update saved");
            Ok(Redirect::to(&list_path(kind)).into_response())
        }
        BulkOutcome::Rejected {
            message, listing, ..
        } => Ok(rejected_listing(&listing, &message)),
    }
}

/// Handler for POST `/admin/{resource}/{id}/delete`.
pub async fn handle_delete(
    kind: ResourceKind,
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Path(id): Path<i64>,
) -> Result<Redirect, HttpError> {
    let mut persistence = app_state.persistence.lock().await;

    match kind {
        ResourceKind::Topics => delete_topic(&mut persistence, id),
        ResourceKind::HeroImages => delete_hero_image(&mut persistence, id),
        ResourceKind::HeroPhrases => delete_hero_phrase(&mut persistence, id),
        ResourceKind::Categories => delete_category(&mut persistence, id),
        ResourceKind::Tags => delete_tag(&mut persistence, id),
        ResourceKind::News => delete_news(&mut persistence, id),
    }?;

    info!(resource = %kind, id, admin = %admin.email, "Deleted record");
    Ok(Redirect::to(&list_path(kind)))
}

/// Handler for POST `/admin/hero-images`.
///
/// Submitting without a file returns to the list unchanged.
pub async fn handle_create_hero_image(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    multipart: Multipart,
) -> Result<Response, HttpError> {
    let kind: ResourceKind = ResourceKind::HeroImages;
    let form: MultipartForm = read_multipart(multipart).await?;

    let request: HeroImageRequest = match form.hero_image_request() {
        Ok(request) => request,
        Err(err) => {
            let mut persistence = app_state.persistence.lock().await;
            return created_or_rejected(&mut persistence, kind, Err(err));
        }
    };
    let Some(image) = &form.image else {
        return Ok(Redirect::to(&list_path(kind)).into_response());
    };

    let stored: StoredUpload = match store_image(&app_state.config.uploads_dir, image).await {
        Ok(stored) => stored,
        Err(UploadFailure::Rejected(err)) => {
            let mut persistence = app_state.persistence.lock().await;
            return created_or_rejected(&mut persistence, kind, Err(err));
        }
        Err(UploadFailure::Io(err)) => return Err(err),
    };

    let result: Result<i64, ApiError> = {
        let mut persistence = app_state.persistence.lock().await;
        create_hero_image(&mut persistence, &request, stored.public_url.clone())
    };
    if result.is_err() {
        discard_image(&app_state.config.uploads_dir, &stored).await;
    }

    let mut persistence = app_state.persistence.lock().await;
    created_or_rejected(&mut persistence, kind, result)
}

/// Handler for POST `/admin/hero-phrases`.
pub async fn handle_create_hero_phrase(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Form(form): Form<HeroPhraseForm>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let result: Result<i64, ApiError> = HeroPhraseRequest::try_from(form)
        .and_then(|request| create_hero_phrase(&mut persistence, &request));
    created_or_rejected(&mut persistence, ResourceKind::HeroPhrases, result)
}

/// Handler for POST `/admin/categories`.
pub async fn handle_create_category(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Form(form): Form<NamedForm>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let result: Result<i64, ApiError> = NamedRequest::try_from(form)
        .and_then(|request| create_category(&mut persistence, &request));
    created_or_rejected(&mut persistence, ResourceKind::Categories, result)
}

/// Handler for POST `/admin/tags`.
pub async fn handle_create_tag(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Form(form): Form<NamedForm>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let result: Result<i64, ApiError> =
        NamedRequest::try_from(form).and_then(|request| create_tag(&mut persistence, &request));
    created_or_rejected(&mut persistence, ResourceKind::Tags, result)
}

/// Handler for POST `/admin/news`.
pub async fn handle_create_news(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Form(form): Form<NewsForm>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let result: Result<i64, ApiError> = create_news(&mut persistence, &NewsRequest::from(form));
    created_or_rejected(&mut persistence, ResourceKind::News, result)
}
