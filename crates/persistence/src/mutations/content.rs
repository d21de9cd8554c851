// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-record create and delete for the simple content tables.
//!
//! Drafts are expected to be validated already; these functions only
//! store them. Deleting a missing id reports `NotFound`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use folio_domain::{ContactDraft, HeroImageDraft, HeroPhraseDraft, NamedDraft, NewsDraft};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{contacts, hero_images, hero_phrases, news, topic_categories, topic_tags};
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;

pub(crate) fn ensure_deleted(
    rows_affected: usize,
    what: &str,
    id: i64,
) -> Result<(), PersistenceError> {
    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("{what} {id}")));
    }
    info!("Deleted {} {}", what, id);
    Ok(())
}

backend_fn! {
/// Stores a new hero image.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_hero_image(conn: &mut _, draft: &HeroImageDraft) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp()?;
    diesel::insert_into(hero_images::table)
        .values((
            hero_images::image_url.eq(&draft.image_url),
            hero_images::alt_text.eq(draft.alt_text.as_deref()),
            hero_images::is_published.eq(i32::from(draft.is_published)),
            hero_images::sort_order.eq(draft.sort_order),
            hero_images::created_at.eq(&now),
            hero_images::updated_at.eq(&now),
        ))
        .execute(conn)?;
    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a hero image.
///
/// # Errors
///
/// Returns `NotFound` if no image has that id.
pub fn delete_hero_image(conn: &mut _, image_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(hero_images::table.filter(hero_images::id.eq(image_id))).execute(conn)?;
    ensure_deleted(rows_affected, "hero image", image_id)
}
}

backend_fn! {
/// Stores a new hero phrase.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_hero_phrase(
    conn: &mut _,
    draft: &HeroPhraseDraft,
) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp()?;
    diesel::insert_into(hero_phrases::table)
        .values((
            hero_phrases::text.eq(&draft.text),
            hero_phrases::is_published.eq(i32::from(draft.is_published)),
            hero_phrases::sort_order.eq(draft.sort_order),
            hero_phrases::created_at.eq(&now),
            hero_phrases::updated_at.eq(&now),
        ))
        .execute(conn)?;
    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a hero phrase.
///
/// # Errors
///
/// Returns `NotFound` if no phrase has that id.
pub fn delete_hero_phrase(conn: &mut _, phrase_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(hero_phrases::table.filter(hero_phrases::id.eq(phrase_id)))
            .execute(conn)?;
    ensure_deleted(rows_affected, "hero phrase", phrase_id)
}
}

backend_fn! {
/// Stores a new topic category.
///
/// # Errors
///
/// Returns `UniqueViolation` if the name is taken.
pub fn create_category(conn: &mut _, draft: &NamedDraft) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp()?;
    diesel::insert_into(topic_categories::table)
        .values((
            topic_categories::name.eq(&draft.name),
            topic_categories::sort_order.eq(draft.sort_order),
            topic_categories::created_at.eq(&now),
            topic_categories::updated_at.eq(&now),
        ))
        .execute(conn)?;
    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a topic category. Topics in it become uncategorized.
///
/// # Errors
///
/// Returns `NotFound` if no category has that id.
pub fn delete_category(conn: &mut _, category_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(topic_categories::table.filter(topic_categories::id.eq(category_id)))
            .execute(conn)?;
    ensure_deleted(rows_affected, "category", category_id)
}
}

backend_fn! {
/// Stores a new topic tag.
///
/// # Errors
///
/// Returns `UniqueViolation` if the name is taken.
pub fn create_tag(conn: &mut _, draft: &NamedDraft) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp()?;
    diesel::insert_into(topic_tags::table)
        .values((
            topic_tags::name.eq(&draft.name),
            topic_tags::sort_order.eq(draft.sort_order),
            topic_tags::created_at.eq(&now),
            topic_tags::updated_at.eq(&now),
        ))
        .execute(conn)?;
    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a topic tag and its topic links.
///
/// # Errors
///
/// Returns `NotFound` if no tag has that id.
pub fn delete_tag(conn: &mut _, tag_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(topic_tags::table.filter(topic_tags::id.eq(tag_id))).execute(conn)?;
    ensure_deleted(rows_affected, "tag", tag_id)
}
}

backend_fn! {
/// Stores a new news item at the top of the list.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_news(conn: &mut _, draft: &NewsDraft) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp()?;
    diesel::insert_into(news::table)
        .values((
            news::title.eq(&draft.title),
            news::subtitle.eq(draft.subtitle.as_deref()),
            news::url.eq(&draft.url),
            news::interview_date.eq(&draft.interview_date),
            news::sort_order.eq(0),
            news::created_at.eq(&now),
            news::updated_at.eq(&now),
        ))
        .execute(conn)?;
    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a news item.
///
/// # Errors
///
/// Returns `NotFound` if no news item has that id.
pub fn delete_news(conn: &mut _, news_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(news::table.filter(news::id.eq(news_id))).execute(conn)?;
    ensure_deleted(rows_affected, "news", news_id)
}
}

backend_fn! {
/// Stores a contact inquiry.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_contact(conn: &mut _, draft: &ContactDraft) -> Result<i64, PersistenceError> {
    diesel::insert_into(contacts::table)
        .values((
            contacts::name.eq(&draft.name),
            contacts::email.eq(&draft.email),
            contacts::phone_number.eq(draft.phone_number.as_deref()),
            contacts::message.eq(&draft.message),
            contacts::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;
    let contact_id: i64 = conn.get_last_insert_rowid()?;
    info!("Stored contact inquiry ID: {}", contact_id);
    Ok(contact_id)
}
}

backend_fn! {
/// Deletes a contact inquiry.
///
/// # Errors
///
/// Returns `NotFound` if no inquiry has that id.
pub fn delete_contact(conn: &mut _, contact_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(contacts::table.filter(contacts::id.eq(contact_id))).execute(conn)?;
    ensure_deleted(rows_affected, "contact", contact_id)
}
}
