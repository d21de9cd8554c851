// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional apply of bulk reorder/publish/edit plans.
//!
//! Each apply runs in one transaction:
//!
//! 1. Re-read the table's ids and compare them with the plan. A record
//!    added or deleted since the batch was loaded aborts with `Conflict`.
//! 2. For unique-name tables, move every row to a placeholder name.
//! 3. Write the final `sort_order`, text, publish flag and news columns.
//!
//! Any error rolls the whole transaction back, so a table is either left
//! exactly as it was or fully rewritten in submitted order.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use folio::{BulkPlan, PlannedNews, PlannedRow, placeholder_name};
use tracing::{debug, info};

use crate::diesel_schema::{hero_images, hero_phrases, news, topic_categories, topic_tags, topics};
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;

fn check_stored_ids(plan: &BulkPlan, mut stored: Vec<i64>) -> Result<(), PersistenceError> {
    let mut planned: Vec<i64> = plan.ids();
    stored.sort_unstable();
    planned.sort_unstable();

    if stored != planned {
        return Err(PersistenceError::Conflict(format!(
            "{} changed since the batch was loaded",
            plan.kind()
        )));
    }
    Ok(())
}

fn ensure_updated(plan: &BulkPlan, id: i64, rows_affected: usize) -> Result<(), PersistenceError> {
    if rows_affected != 1 {
        return Err(PersistenceError::Conflict(format!(
            "{} record {id} disappeared during bulk update",
            plan.kind()
        )));
    }
    Ok(())
}

fn planned_text(row: &PlannedRow) -> Result<&str, PersistenceError> {
    row.text
        .as_deref()
        .ok_or_else(|| PersistenceError::Other(format!("Planned row {} carries no text", row.id)))
}

fn planned_flag(row: &PlannedRow) -> Result<i32, PersistenceError> {
    row.published.map(i32::from).ok_or_else(|| {
        PersistenceError::Other(format!("Planned row {} carries no publish flag", row.id))
    })
}

fn planned_news(row: &PlannedRow) -> Result<&PlannedNews, PersistenceError> {
    row.news.as_ref().ok_or_else(|| {
        PersistenceError::Other(format!("Planned row {} carries no news columns", row.id))
    })
}

backend_fn! {
/// Applies a topics plan: new order and publish flags.
///
/// # Errors
///
/// Returns `Conflict` if the stored topics no longer match the plan.
/// Nothing is written on error.
pub fn apply_topics_plan(conn: &mut _, plan: &BulkPlan) -> Result<usize, PersistenceError> {
    let now: String = now_timestamp()?;

    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let stored: Vec<i64> = topics::table.select(topics::id).load(conn)?;
        check_stored_ids(plan, stored)?;

        for row in plan.rows() {
            let rows_affected: usize = diesel::update(topics::table.filter(topics::id.eq(row.id)))
                .set((
                    topics::sort_order.eq(row.sort_order),
                    topics::is_published.eq(planned_flag(row)?),
                    topics::updated_at.eq(&now),
                ))
                .execute(conn)?;
            ensure_updated(plan, row.id, rows_affected)?;
        }

        info!("Applied bulk update to {} topics", plan.rows().len());
        Ok(plan.rows().len())
    })
}
}

backend_fn! {
/// Applies a hero images plan: new order and publish flags.
///
/// # Errors
///
/// Returns `Conflict` if the stored images no longer match the plan.
/// Nothing is written on error.
pub fn apply_hero_images_plan(conn: &mut _, plan: &BulkPlan) -> Result<usize, PersistenceError> {
    let now: String = now_timestamp()?;

    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let stored: Vec<i64> = hero_images::table.select(hero_images::id).load(conn)?;
        check_stored_ids(plan, stored)?;

        for row in plan.rows() {
            let rows_affected: usize =
                diesel::update(hero_images::table.filter(hero_images::id.eq(row.id)))
                    .set((
                        hero_images::sort_order.eq(row.sort_order),
                        hero_images::is_published.eq(planned_flag(row)?),
                        hero_images::updated_at.eq(&now),
                    ))
                    .execute(conn)?;
            ensure_updated(plan, row.id, rows_affected)?;
        }

        info!("Applied bulk update to {} hero images", plan.rows().len());
        Ok(plan.rows().len())
    })
}
}

backend_fn! {
/// Applies a hero phrases plan: new order, text and publish flags.
///
/// Phrase text is not unique, so no placeholder phase is needed.
///
/// # Errors
///
/// Returns `Conflict` if the stored phrases no longer match the plan.
/// Nothing is written on error.
pub fn apply_hero_phrases_plan(conn: &mut _, plan: &BulkPlan) -> Result<usize, PersistenceError> {
    let now: String = now_timestamp()?;

    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let stored: Vec<i64> = hero_phrases::table.select(hero_phrases::id).load(conn)?;
        check_stored_ids(plan, stored)?;

        for row in plan.rows() {
            let rows_affected: usize =
                diesel::update(hero_phrases::table.filter(hero_phrases::id.eq(row.id)))
                    .set((
                        hero_phrases::text.eq(planned_text(row)?),
                        hero_phrases::sort_order.eq(row.sort_order),
                        hero_phrases::is_published.eq(planned_flag(row)?),
                        hero_phrases::updated_at.eq(&now),
                    ))
                    .execute(conn)?;
            ensure_updated(plan, row.id, rows_affected)?;
        }

        info!("Applied bulk update to {} hero phrases", plan.rows().len());
        Ok(plan.rows().len())
    })
}
}

backend_fn! {
/// Applies a categories plan: new order and names, via placeholder names.
///
/// # Errors
///
/// Returns `Conflict` if the stored categories no longer match the plan,
/// or `UniqueViolation` if a final name collides. Nothing is written on
/// error.
pub fn apply_categories_plan(conn: &mut _, plan: &BulkPlan) -> Result<usize, PersistenceError> {
    let now: String = now_timestamp()?;
    let nonce: u64 = rand::random::<u64>();

    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let stored: Vec<i64> = topic_categories::table
            .select(topic_categories::id)
            .load(conn)?;
        check_stored_ids(plan, stored)?;

        for row in plan.rows() {
            let rows_affected: usize = diesel::update(
                topic_categories::table.filter(topic_categories::id.eq(row.id)),
            )
            .set(topic_categories::name.eq(placeholder_name(row.id, nonce)))
            .execute(conn)?;
            ensure_updated(plan, row.id, rows_affected)?;
        }
        debug!("Moved {} categories to placeholder names", plan.rows().len());

        for row in plan.rows() {
            diesel::update(topic_categories::table.filter(topic_categories::id.eq(row.id)))
                .set((
                    topic_categories::name.eq(planned_text(row)?),
                    topic_categories::sort_order.eq(row.sort_order),
                    topic_categories::updated_at.eq(&now),
                ))
                .execute(conn)?;
        }

        info!("Applied bulk update to {} categories", plan.rows().len());
        Ok(plan.rows().len())
    })
}
}

backend_fn! {
/// Applies a tags plan: new order and names, via placeholder names.
///
/// # Errors
///
/// Returns `Conflict` if the stored tags no longer match the plan, or
/// `UniqueViolation` if a final name collides. Nothing is written on error.
pub fn apply_tags_plan(conn: &mut _, plan: &BulkPlan) -> Result<usize, PersistenceError> {
    let now: String = now_timestamp()?;
    let nonce: u64 = rand::random::<u64>();

    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let stored: Vec<i64> = topic_tags::table.select(topic_tags::id).load(conn)?;
        check_stored_ids(plan, stored)?;

        for row in plan.rows() {
            let rows_affected: usize =
                diesel::update(topic_tags::table.filter(topic_tags::id.eq(row.id)))
                    .set(topic_tags::name.eq(placeholder_name(row.id, nonce)))
                    .execute(conn)?;
            ensure_updated(plan, row.id, rows_affected)?;
        }
        debug!("Moved {} tags to placeholder names", plan.rows().len());

        for row in plan.rows() {
            diesel::update(topic_tags::table.filter(topic_tags::id.eq(row.id)))
                .set((
                    topic_tags::name.eq(planned_text(row)?),
                    topic_tags::sort_order.eq(row.sort_order),
                    topic_tags::updated_at.eq(&now),
                ))
                .execute(conn)?;
        }

        info!("Applied bulk update to {} tags", plan.rows().len());
        Ok(plan.rows().len())
    })
}
}

backend_fn! {
/// Applies a news plan: new order, title, subtitle, link and interview date.
///
/// # Errors
///
/// Returns `Conflict` if the stored news items no longer match the plan.
/// Nothing is written on error.
pub fn apply_news_plan(conn: &mut _, plan: &BulkPlan) -> Result<usize, PersistenceError> {
    let now: String = now_timestamp()?;

    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let stored: Vec<i64> = news::table.select(news::id).load(conn)?;
        check_stored_ids(plan, stored)?;

        for row in plan.rows() {
            let columns: &PlannedNews = planned_news(row)?;
            let rows_affected: usize = diesel::update(news::table.filter(news::id.eq(row.id)))
                .set((
                    news::title.eq(planned_text(row)?),
                    news::subtitle.eq(columns.subtitle.as_deref()),
                    news::url.eq(&columns.url),
                    news::interview_date.eq(&columns.interview_date),
                    news::sort_order.eq(row.sort_order),
                    news::updated_at.eq(&now),
                ))
                .execute(conn)?;
            ensure_updated(plan, row.id, rows_affected)?;
        }

        info!("Applied bulk update to {} news items", plan.rows().len());
        Ok(plan.rows().len())
    })
}
}
