// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::diesel_schema::{hero_phrases, topic_categories, topic_tags};
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;

/// Category and tag names created by [`seed_defaults_sqlite`].
pub const SAMPLE_NAMES: [&str; 2] = ["sample1", "sample2"];

/// Hero phrases created by [`seed_defaults_sqlite`].
pub const SAMPLE_PHRASES: [&str; 2] = ["web開発", "アプリ開発"];

backend_fn! {
/// Inserts the sample categories, tags and hero phrases that are missing.
///
/// Running it again inserts nothing. Returns the number of rows created.
///
/// # Errors
///
/// Returns an error if a query or insert fails. Nothing is written on error.
pub fn seed_defaults(conn: &mut _) -> Result<usize, PersistenceError> {
    let now: String = now_timestamp()?;

    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let mut created: usize = 0;

        for (index, name) in (0_i32..).zip(SAMPLE_NAMES) {
            let category_count: i64 = topic_categories::table
                .filter(topic_categories::name.eq(name))
                .count()
                .get_result(conn)?;
            if category_count == 0 {
                diesel::insert_into(topic_categories::table)
                    .values((
                        topic_categories::name.eq(name),
                        topic_categories::sort_order.eq(index),
                        topic_categories::created_at.eq(&now),
                        topic_categories::updated_at.eq(&now),
                    ))
                    .execute(conn)?;
                created += 1;
            }

            let tag_count: i64 = topic_tags::table
                .filter(topic_tags::name.eq(name))
                .count()
                .get_result(conn)?;
            if tag_count == 0 {
                diesel::insert_into(topic_tags::table)
                    .values((
                        topic_tags::name.eq(name),
                        topic_tags::sort_order.eq(index),
                        topic_tags::created_at.eq(&now),
                        topic_tags::updated_at.eq(&now),
                    ))
                    .execute(conn)?;
                created += 1;
            }
        }

        for (index, text) in (0_i32..).zip(SAMPLE_PHRASES) {
            let phrase_count: i64 = hero_phrases::table
                .filter(hero_phrases::text.eq(text))
                .count()
                .get_result(conn)?;
            if phrase_count == 0 {
                diesel::insert_into(hero_phrases::table)
                    .values((
                        hero_phrases::text.eq(text),
                        hero_phrases::is_published.eq(1),
                        hero_phrases::sort_order.eq(index),
                        hero_phrases::created_at.eq(&now),
                        hero_phrases::updated_at.eq(&now),
                    ))
                    .execute(conn)?;
                created += 1;
            }
        }

        info!("Seeded {} default records", created);
        Ok(created)
    })
}
}
