// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Topic mutations.
//!
//! A topic and its tag links are always written together in one
//! transaction; updating a topic replaces its whole tag set.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use folio_domain::TopicDraft;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{topic_tag_links, topics};
use crate::error::PersistenceError;
use crate::mutations::content::ensure_deleted;
use crate::mutations::now_timestamp;

backend_fn! {
/// Stores a new topic with its tag links.
///
/// # Errors
///
/// Returns `NotFound` if the category or a tag does not exist, or another
/// error if the insert fails. Nothing is written on error.
pub fn create_topic(conn: &mut _, draft: &TopicDraft) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp()?;

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(topics::table)
            .values((
                topics::title.eq(&draft.title),
                topics::excerpt.eq(draft.excerpt.as_deref()),
                topics::body.eq(&draft.body),
                topics::image_url.eq(draft.image_url.as_deref()),
                topics::link1_title.eq(draft.link1_title.as_deref()),
                topics::link1_url.eq(draft.link1_url.as_deref()),
                topics::link2_title.eq(draft.link2_title.as_deref()),
                topics::link2_url.eq(draft.link2_url.as_deref()),
                topics::is_published.eq(i32::from(draft.is_published)),
                topics::sort_order.eq(draft.sort_order),
                topics::category_id.eq(draft.category_id),
                topics::created_at.eq(&now),
                topics::updated_at.eq(&now),
            ))
            .execute(conn)?;
        let topic_id: i64 = conn.get_last_insert_rowid()?;

        for tag_id in &draft.tag_ids {
            diesel::insert_into(topic_tag_links::table)
                .values((
                    topic_tag_links::topic_id.eq(topic_id),
                    topic_tag_links::tag_id.eq(*tag_id),
                ))
                .execute(conn)?;
        }

        info!("Created topic ID: {} with {} tags", topic_id, draft.tag_ids.len());
        Ok(topic_id)
    })
}
}

backend_fn! {
/// Replaces a topic's fields and tag set.
///
/// The stored image is kept when `draft.image_url` is `None`.
///
/// # Errors
///
/// Returns `NotFound` if the topic, its category or a tag does not exist.
/// Nothing is written on error.
pub fn update_topic(
    conn: &mut _,
    topic_id: i64,
    draft: &TopicDraft,
) -> Result<(), PersistenceError> {
    let now: String = now_timestamp()?;

    conn.transaction::<(), PersistenceError, _>(|conn| {
        let rows_affected: usize = diesel::update(topics::table.filter(topics::id.eq(topic_id)))
            .set((
                topics::title.eq(&draft.title),
                topics::excerpt.eq(draft.excerpt.as_deref()),
                topics::body.eq(&draft.body),
                topics::link1_title.eq(draft.link1_title.as_deref()),
                topics::link1_url.eq(draft.link1_url.as_deref()),
                topics::link2_title.eq(draft.link2_title.as_deref()),
                topics::link2_url.eq(draft.link2_url.as_deref()),
                topics::is_published.eq(i32::from(draft.is_published)),
                topics::sort_order.eq(draft.sort_order),
                topics::category_id.eq(draft.category_id),
                topics::updated_at.eq(&now),
            ))
            .execute(conn)?;
        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!("topic {topic_id}")));
        }

        if let Some(image_url) = &draft.image_url {
            diesel::update(topics::table.filter(topics::id.eq(topic_id)))
                .set(topics::image_url.eq(image_url))
                .execute(conn)?;
        }

        diesel::delete(topic_tag_links::table.filter(topic_tag_links::topic_id.eq(topic_id)))
            .execute(conn)?;
        for tag_id in &draft.tag_ids {
            diesel::insert_into(topic_tag_links::table)
                .values((
                    topic_tag_links::topic_id.eq(topic_id),
                    topic_tag_links::tag_id.eq(*tag_id),
                ))
                .execute(conn)?;
        }

        info!("Updated topic ID: {}", topic_id);
        Ok(())
    })
}
}

backend_fn! {
/// Deletes a topic and its tag links.
///
/// # Errors
///
/// Returns `NotFound` if no topic has that id.
pub fn delete_topic(conn: &mut _, topic_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(topics::table.filter(topics::id.eq(topic_id))).execute(conn)?;
    ensure_deleted(rows_affected, "topic", topic_id)
}
}
