// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Queries for hero images, hero phrases, categories, tags, news and contacts.
//!
//! Orderable lists come back in display order: `sort_order` ascending, then
//! most recently updated first. News breaks ties by interview date instead,
//! and contacts are listed newest first.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use folio_domain::{Contact, HeroImage, HeroPhrase, News, TopicCategory, TopicTag};

use crate::diesel_schema::{contacts, hero_images, hero_phrases, news, topic_categories, topic_tags};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = hero_images)]
struct HeroImageRow {
    id: i64,
    image_url: String,
    alt_text: Option<String>,
    is_published: i32,
    sort_order: i32,
    created_at: String,
    updated_at: String,
}

impl From<HeroImageRow> for HeroImage {
    fn from(row: HeroImageRow) -> Self {
        Self {
            id: row.id,
            image_url: row.image_url,
            alt_text: row.alt_text,
            is_published: row.is_published != 0,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = hero_phrases)]
struct HeroPhraseRow {
    id: i64,
    text: String,
    is_published: i32,
    sort_order: i32,
    created_at: String,
    updated_at: String,
}

impl From<HeroPhraseRow> for HeroPhrase {
    fn from(row: HeroPhraseRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            is_published: row.is_published != 0,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Diesel Queryable struct for category rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = topic_categories)]
pub(crate) struct CategoryRow {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) sort_order: i32,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl From<CategoryRow> for TopicCategory {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Diesel Queryable struct for tag rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = topic_tags)]
pub(crate) struct TagRow {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) sort_order: i32,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl From<TagRow> for TopicTag {
    fn from(row: TagRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = news)]
struct NewsRow {
    id: i64,
    title: String,
    subtitle: Option<String>,
    url: String,
    interview_date: String,
    sort_order: i32,
    created_at: String,
    updated_at: String,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            url: row.url,
            interview_date: row.interview_date,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = contacts)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone_number: Option<String>,
    message: String,
    created_at: String,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists hero images in display order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `published_only` - Restrict to images shown on the public carousel
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_hero_images(
    conn: &mut _,
    published_only: bool,
) -> Result<Vec<HeroImage>, PersistenceError> {
    let mut query = hero_images::table
        .select(HeroImageRow::as_select())
        .order((hero_images::sort_order.asc(), hero_images::updated_at.desc()))
        .into_boxed();
    if published_only {
        query = query.filter(hero_images::is_published.eq(1));
    }

    let rows: Vec<HeroImageRow> = query.load(conn)?;
    Ok(rows.into_iter().map(HeroImage::from).collect())
}
}

backend_fn! {
/// Lists hero phrases in display order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_hero_phrases(
    conn: &mut _,
    published_only: bool,
) -> Result<Vec<HeroPhrase>, PersistenceError> {
    let mut query = hero_phrases::table
        .select(HeroPhraseRow::as_select())
        .order((hero_phrases::sort_order.asc(), hero_phrases::updated_at.desc()))
        .into_boxed();
    if published_only {
        query = query.filter(hero_phrases::is_published.eq(1));
    }

    let rows: Vec<HeroPhraseRow> = query.load(conn)?;
    Ok(rows.into_iter().map(HeroPhrase::from).collect())
}
}

backend_fn! {
/// Lists topic categories in display order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_categories(conn: &mut _) -> Result<Vec<TopicCategory>, PersistenceError> {
    let rows: Vec<CategoryRow> = topic_categories::table
        .select(CategoryRow::as_select())
        .order((
            topic_categories::sort_order.asc(),
            topic_categories::updated_at.desc(),
        ))
        .load(conn)?;
    Ok(rows.into_iter().map(TopicCategory::from).collect())
}
}

backend_fn! {
/// Lists topic tags in display order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tags(conn: &mut _) -> Result<Vec<TopicTag>, PersistenceError> {
    let rows: Vec<TagRow> = topic_tags::table
        .select(TagRow::as_select())
        .order((topic_tags::sort_order.asc(), topic_tags::updated_at.desc()))
        .load(conn)?;
    Ok(rows.into_iter().map(TopicTag::from).collect())
}
}

backend_fn! {
/// Lists news items by `sort_order`, then newest interview first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_news(conn: &mut _) -> Result<Vec<News>, PersistenceError> {
    let rows: Vec<NewsRow> = news::table
        .select(NewsRow::as_select())
        .order((news::sort_order.asc(), news::interview_date.desc()))
        .load(conn)?;
    Ok(rows.into_iter().map(News::from).collect())
}
}

backend_fn! {
/// Lists contact inquiries, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_contacts(conn: &mut _) -> Result<Vec<Contact>, PersistenceError> {
    let rows: Vec<ContactRow> = contacts::table
        .select(ContactRow::as_select())
        .order((contacts::created_at.desc(), contacts::id.desc()))
        .load(conn)?;
    Ok(rows.into_iter().map(Contact::from).collect())
}
}

backend_fn! {
/// Retrieves a contact inquiry by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the inquiry is not found.
pub fn get_contact(conn: &mut _, contact_id: i64) -> Result<Option<Contact>, PersistenceError> {
    let row: Option<ContactRow> = contacts::table
        .filter(contacts::id.eq(contact_id))
        .select(ContactRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row.map(Contact::from))
}
}
