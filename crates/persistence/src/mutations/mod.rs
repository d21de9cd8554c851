// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! - `admins` - Admin accounts and sessions
//! - `content` - Create/delete for hero images, phrases, categories, tags,
//!   news and contacts
//! - `topics` - Topic create/update/delete with tag links
//! - `bulk` - Transactional apply of bulk reorder/publish/edit plans
//! - `seed` - Idempotent sample content
//!
//! Every mutation stamps `updated_at` (and `created_at` on insert) with
//! [`now_timestamp`], so timestamps share one lexically sortable format.

pub mod admins;
pub mod bulk;
pub mod content;
pub mod seed;
pub mod topics;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::PersistenceError;

/// Stored timestamp layout: ISO-8601 UTC with microseconds.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z");

/// Renders a UTC instant in the stored timestamp layout.
///
/// # Errors
///
/// Returns an error if the instant cannot be formatted.
pub fn format_timestamp(instant: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(instant
        .to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)?)
}

/// Parses a stored timestamp back into a UTC instant.
///
/// # Errors
///
/// Returns `PersistenceError::TimestampError` if the text is not in the
/// stored layout.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| PersistenceError::TimestampError(format!("'{value}': {e}")))
}

/// Returns the current time in the stored timestamp layout.
///
/// # Errors
///
/// Returns an error if the clock value cannot be formatted.
pub fn now_timestamp() -> Result<String, PersistenceError> {
    format_timestamp(OffsetDateTime::now_utc())
}

pub use admins::{
    create_session_mysql, create_session_sqlite, delete_expired_sessions_mysql,
    delete_expired_sessions_sqlite, delete_session_mysql, delete_session_sqlite,
    update_session_activity_mysql, update_session_activity_sqlite, upsert_admin_mysql,
    upsert_admin_sqlite,
};
pub use bulk::{
    apply_categories_plan_mysql, apply_categories_plan_sqlite, apply_hero_images_plan_mysql,
    apply_hero_images_plan_sqlite, apply_hero_phrases_plan_mysql, apply_hero_phrases_plan_sqlite,
    apply_news_plan_mysql, apply_news_plan_sqlite, apply_tags_plan_mysql, apply_tags_plan_sqlite,
    apply_topics_plan_mysql, apply_topics_plan_sqlite,
};
pub use content::{
    create_category_mysql, create_category_sqlite, create_contact_mysql, create_contact_sqlite,
    create_hero_image_mysql, create_hero_image_sqlite, create_hero_phrase_mysql,
    create_hero_phrase_sqlite, create_news_mysql, create_news_sqlite, create_tag_mysql,
    create_tag_sqlite, delete_category_mysql, delete_category_sqlite, delete_contact_mysql,
    delete_contact_sqlite, delete_hero_image_mysql, delete_hero_image_sqlite,
    delete_hero_phrase_mysql, delete_hero_phrase_sqlite, delete_news_mysql, delete_news_sqlite,
    delete_tag_mysql, delete_tag_sqlite,
};
pub use seed::{seed_defaults_mysql, seed_defaults_sqlite};
pub use topics::{
    create_topic_mysql, create_topic_sqlite, delete_topic_mysql, delete_topic_sqlite,
    update_topic_mysql, update_topic_sqlite,
};
