// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    extract::{Multipart, Path, Query, State as AxumState},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use folio_api::{
    ApiError, ResourceListing, StoredUpload, TopicFormOptions, TopicListResponse, TopicRequest,
    create_topic, get_topic, list_topics, parse_topic_form, topic_form_options, update_topic,
};
use folio_domain::{Topic, TopicDetail};
use folio_persistence::Persistence;
use tracing::info;

use crate::AppState;
use crate::error::HttpError;
use crate::forms::{MultipartForm, SearchQuery, read_multipart};
use crate::session::AdminSession;
use crate::uploads::{UploadFailure, discard_image, store_image};
use crate::views;

const TOPICS_PATH: &str = "/admin/topics";

/// The form values of a stored topic.
fn topic_values(detail: &TopicDetail) -> TopicRequest {
    let topic: &Topic = &detail.topic;
    TopicRequest {
        title: topic.title.clone(),
        excerpt: topic.excerpt.clone(),
        body: topic.body.clone(),
        link1_title: topic.link1_title.clone(),
        link1_url: topic.link1_url.clone(),
        link2_title: topic.link2_title.clone(),
        link2_url: topic.link2_url.clone(),
        is_published: topic.is_published,
        sort_order: Some(topic.sort_order),
        category_id: topic.category_id,
        tag_ids: detail.tags.iter().map(|tag| tag.id).collect(),
    }
}

/// Re-renders the topic form with the submitted values and an error.
async fn rejected_form(
    app_state: &AppState,
    topic_id: Option<i64>,
    values: &TopicRequest,
    message: &str,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let options: TopicFormOptions = topic_form_options(&mut persistence)?;
    let image_url: Option<String> = match topic_id {
        Some(id) => get_topic(&mut persistence, id)?.topic.image_url,
        None => None,
    };
    Ok((
        StatusCode::BAD_REQUEST,
        views::topic_form(topic_id, values, image_url.as_deref(), &options, Some(message)),
    )
        .into_response())
}

/// Stores the image of a topic form, if one was chosen.
///
/// `Ok(Err(message))` means the file was refused and the form should be
/// shown again.
async fn store_topic_image(
    app_state: &AppState,
    form: &MultipartForm,
) -> Result<Result<Option<StoredUpload>, String>, HttpError> {
    let Some(image) = &form.image else {
        return Ok(Ok(None));
    };
    match store_image(&app_state.config.uploads_dir, image).await {
        Ok(stored) => Ok(Ok(Some(stored))),
        Err(UploadFailure::Rejected(err)) => Ok(Err(err
            .inline_message()
            .map_or_else(|| err.to_string(), str::to_string))),
        Err(UploadFailure::Io(err)) => Err(err),
    }
}

/// Shared tail of create and update: reads the form, stores the image and
/// runs `save`, re-rendering the form on any correctable error.
async fn save_topic<F>(
    app_state: &AppState,
    topic_id: Option<i64>,
    multipart: Multipart,
    save: F,
) -> Result<Response, HttpError>
where
    F: FnOnce(&mut Persistence, &TopicRequest, Option<String>) -> Result<i64, ApiError>,
{
    let form: MultipartForm = read_multipart(multipart).await?;
    let values: TopicRequest = match parse_topic_form(&form.fields) {
        Ok(values) => values,
        Err(err) => {
            let message: String = err.to_string();
            return rejected_form(app_state, topic_id, &TopicRequest::default(), &message).await;
        }
    };

    let stored: Option<StoredUpload> = match store_topic_image(app_state, &form).await? {
        Ok(stored) => stored,
        Err(message) => return rejected_form(app_state, topic_id, &values, &message).await,
    };

    let result: Result<i64, ApiError> = {
        let mut persistence = app_state.persistence.lock().await;
        save(
            &mut *persistence,
            &values,
            stored.as_ref().map(|stored| stored.public_url.clone()),
        )
    };

    match result {
        Ok(id) => {
            info!(topic_id = id, "Saved topic");
            Ok(Redirect::to(TOPICS_PATH).into_response())
        }
        Err(err) => {
            if let Some(stored) = &stored {
                discard_image(&app_state.config.uploads_dir, stored).await;
            }
            match err.inline_message().map(str::to_string) {
                Some(message) => rejected_form(app_state, topic_id, &values, &message).await,
                None => Err(err.into()),
            }
        }
    }
}

/// Handler for GET `/admin/topics`.
///
/// With a search query `q` the list shows only matching topics.
pub async fn handle_topic_list(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: TopicListResponse = list_topics(&mut persistence, &query.q)?;
    Ok(views::listing_page(
        &ResourceListing::Topics(response.topics),
        &response.query,
        None,
    ))
}

/// Handler for GET `/admin/topics/new`.
pub async fn handle_new_topic(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let options: TopicFormOptions = topic_form_options(&mut persistence)?;
    Ok(views::topic_form(
        None,
        &TopicRequest::default(),
        None,
        &options,
        None,
    ))
}

/// Handler for POST `/admin/topics`.
pub async fn handle_create_topic(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    multipart: Multipart,
) -> Result<Response, HttpError> {
    save_topic(&app_state, None, multipart, create_topic).await
}

/// Handler for POST `/admin/topics/{id}`.
///
/// Leaving the image input empty keeps the current image.
pub async fn handle_update_topic(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Path(topic_id): Path<i64>,
    multipart: Multipart,
) -> Result<Response, HttpError> {
    save_topic(
        &app_state,
        Some(topic_id),
        multipart,
        |persistence, values, image_url| {
            update_topic(persistence, topic_id, values, image_url).map(|()| topic_id)
        },
    )
    .await
}

/// Handler for GET `/admin/topics/{id}/edit`.
///
/// An unknown topic sends the admin back to the list.
pub async fn handle_edit_topic(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Path(topic_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let detail: TopicDetail = match get_topic(&mut persistence, topic_id) {
        Ok(detail) => detail,
        Err(ApiError::ResourceNotFound { .. }) => {
            return Ok(Redirect::to(TOPICS_PATH).into_response());
        }
        Err(err) => return Err(err.into()),
    };
    let options: TopicFormOptions = topic_form_options(&mut persistence)?;

    Ok(views::topic_form(
        Some(topic_id),
        &topic_values(&detail),
        detail.topic.image_url.as_deref(),
        &options,
        None,
    )
    .into_response())
}

/// Handler for GET `/admin/topics/{id}/preview`.
pub async fn handle_preview_topic(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(_admin): AdminSession,
    Path(topic_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    match get_topic(&mut persistence, topic_id) {
        Ok(detail) => Ok(views::topic_preview(&detail).into_response()),
        Err(ApiError::ResourceNotFound { .. }) => Ok(Redirect::to(TOPICS_PATH).into_response()),
        Err(err) => Err(err.into()),
    }
}
