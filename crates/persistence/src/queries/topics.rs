// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Topic queries.
//!
//! Topics are loaded with their category and tags attached. Tags are
//! resolved from `topic_tag_links` and listed in tag display order.

use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use folio_domain::{Topic, TopicCategory, TopicDetail, TopicTag};

use crate::diesel_schema::{topic_categories, topic_tag_links, topic_tags, topics};
use crate::error::PersistenceError;
use crate::queries::content::{CategoryRow, TagRow};

/// Diesel Queryable struct for topic rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = topics)]
struct TopicRow {
    id: i64,
    title: String,
    excerpt: Option<String>,
    body: String,
    image_url: Option<String>,
    link1_title: Option<String>,
    link1_url: Option<String>,
    link2_title: Option<String>,
    link2_url: Option<String>,
    is_published: i32,
    sort_order: i32,
    category_id: Option<i64>,
    created_at: String,
    updated_at: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            excerpt: row.excerpt,
            body: row.body,
            image_url: row.image_url,
            link1_title: row.link1_title,
            link1_url: row.link1_url,
            link2_title: row.link2_title,
            link2_url: row.link2_url,
            is_published: row.is_published != 0,
            sort_order: row.sort_order,
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn assemble_details(
    rows: Vec<TopicRow>,
    categories: Vec<CategoryRow>,
    tags: Vec<TagRow>,
    links: &[(i64, i64)],
) -> Vec<TopicDetail> {
    let categories: HashMap<i64, TopicCategory> = categories
        .into_iter()
        .map(TopicCategory::from)
        .map(|category| (category.id, category))
        .collect();
    let tags: Vec<TopicTag> = tags.into_iter().map(TopicTag::from).collect();
    let linked: HashSet<(i64, i64)> = links.iter().copied().collect();

    rows.into_iter()
        .map(Topic::from)
        .map(|topic| {
            let category: Option<TopicCategory> = topic
                .category_id
                .and_then(|id| categories.get(&id).cloned());
            let topic_tags: Vec<TopicTag> = tags
                .iter()
                .filter(|tag| linked.contains(&(topic.id, tag.id)))
                .cloned()
                .collect();
            TopicDetail {
                topic,
                category,
                tags: topic_tags,
            }
        })
        .collect()
}

backend_fn! {
/// Lists topics with category and tags, in display order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `published_only` - Restrict to topics visible on the public site
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_topics(
    conn: &mut _,
    published_only: bool,
) -> Result<Vec<TopicDetail>, PersistenceError> {
    let mut query = topics::table
        .select(TopicRow::as_select())
        .order((topics::sort_order.asc(), topics::updated_at.desc()))
        .into_boxed();
    if published_only {
        query = query.filter(topics::is_published.eq(1));
    }
    let rows: Vec<TopicRow> = query.load(conn)?;
    let topic_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

    let categories: Vec<CategoryRow> = topic_categories::table
        .select(CategoryRow::as_select())
        .load(conn)?;
    let tags: Vec<TagRow> = topic_tags::table
        .select(TagRow::as_select())
        .order((topic_tags::sort_order.asc(), topic_tags::updated_at.desc()))
        .load(conn)?;
    let links: Vec<(i64, i64)> = topic_tag_links::table
        .filter(topic_tag_links::topic_id.eq_any(topic_ids))
        .select((topic_tag_links::topic_id, topic_tag_links::tag_id))
        .load(conn)?;

    Ok(assemble_details(rows, categories, tags, &links))
}
}

backend_fn! {
/// Retrieves one topic with category and tags.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the topic is not found.
pub fn get_topic(conn: &mut _, topic_id: i64) -> Result<Option<TopicDetail>, PersistenceError> {
    let row: Option<TopicRow> = topics::table
        .filter(topics::id.eq(topic_id))
        .select(TopicRow::as_select())
        .first(conn)
        .optional()?;
    let Some(row) = row else {
        return Ok(None);
    };

    let categories: Vec<CategoryRow> = match row.category_id {
        Some(category_id) => topic_categories::table
            .filter(topic_categories::id.eq(category_id))
            .select(CategoryRow::as_select())
            .load(conn)?,
        None => Vec::new(),
    };
    let tags: Vec<TagRow> = topic_tags::table
        .inner_join(topic_tag_links::table)
        .filter(topic_tag_links::topic_id.eq(topic_id))
        .select(TagRow::as_select())
        .order((topic_tags::sort_order.asc(), topic_tags::updated_at.desc()))
        .load(conn)?;
    let links: Vec<(i64, i64)> = tags.iter().map(|tag| (topic_id, tag.id)).collect();

    Ok(assemble_details(vec![row], categories, tags, &links)
        .into_iter()
        .next())
}
}
