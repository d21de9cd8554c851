// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk reorder/publish planning.
//!
//! A bulk submission redraws every record of one resource in a new order,
//! optionally editing a text field, the publish flag, or the news columns
//! of each row. Planning is pure: it checks the batch against the current
//! records, validates the proposed post-update state as a whole, and
//! produces the full list of row updates. The persistence layer applies a
//! plan inside a single transaction.
//!
//! ## Rules
//!
//! - The submitted ids must be exactly the current ids, each once.
//! - Row `i` receives `sort_order = i`, so a successful apply leaves the
//!   table densely indexed `0..n-1` in submitted order.
//! - Required text is trimmed and must be non-empty on every row.
//! - For resources with unique names, the proposed names must be distinct.
//! - Unique-name resources are renamed in two phases within the apply
//!   transaction: every row first moves to a placeholder from
//!   [`placeholder_name`], then to its final name. Swapping two names
//!   therefore never collides with the storage uniqueness constraint.

use std::collections::{HashMap, HashSet};

use folio_domain::{
    DomainError, ResourceKind, ResourcePolicy, TextRule, canonical_interview_date,
    normalize_optional_text, normalize_required_text, validate_unique_names,
};

use crate::batch::{BulkBatch, BulkRow};
use crate::error::CoreError;
use crate::orderable::Orderable;

/// Prefix reserved for names held during the first rename phase.
pub const PLACEHOLDER_PREFIX: &str = "__reorder__";

/// Returns the placeholder name for a record during a two-phase rename.
///
/// The nonce is chosen once per apply so placeholders cannot collide with
/// names left behind by an earlier apply.
#[must_use]
pub fn placeholder_name(id: i64, nonce: u64) -> String {
    format!("{PLACEHOLDER_PREFIX}{id}_{nonce}")
}

/// Validated news columns for one planned row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedNews {
    pub subtitle: Option<String>,
    pub url: String,
    /// Canonical `YYYY-MM-DD`.
    pub interview_date: String,
}

/// The complete update for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRow {
    pub id: i64,
    pub sort_order: i32,
    /// Trimmed text, for resources with a bulk text field.
    pub text: Option<String>,
    /// The new flag, for resources with a publish flag.
    pub published: Option<bool>,
    pub news: Option<PlannedNews>,
}

/// A validated bulk update, ready to apply atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkPlan {
    kind: ResourceKind,
    rows: Vec<PlannedRow>,
}

impl BulkPlan {
    /// The resource this plan updates.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The row updates in new display order.
    #[must_use]
    pub fn rows(&self) -> &[PlannedRow] {
        &self.rows
    }

    /// The ids covered by this plan, in new display order.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.id).collect()
    }

    /// Whether the apply must rename through placeholders first.
    #[must_use]
    pub const fn needs_placeholder_rename(&self) -> bool {
        matches!(self.kind.policy().text_rule, TextRule::RequiredUnique)
    }
}

/// A batch rejected by validation, with the attempted state for redisplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRejection<R> {
    /// The rule the proposed state broke.
    pub error: DomainError,
    /// Every record with its submitted values, in submitted order.
    pub attempted: Vec<R>,
}

/// Why a batch could not be planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkError<R> {
    /// The proposed values break a content rule; nothing may be written.
    Rejected(BulkRejection<R>),
    /// The batch does not describe the current record set.
    Conflict(CoreError),
}

impl<R> From<CoreError> for BulkError<R> {
    fn from(err: CoreError) -> Self {
        Self::Conflict(err)
    }
}

/// Plans a bulk reorder/publish/edit batch against the current records.
///
/// # Arguments
///
/// * `kind` - The resource being updated
/// * `current` - Every current record of that resource
/// * `batch` - The submitted rows in new display order
///
/// # Errors
///
/// Returns `BulkError::Conflict` if the batch ids are not exactly the
/// current ids, and `BulkError::Rejected` if the proposed values break an
/// empty-field, duplicate-name or date rule.
pub fn plan_bulk_update<R: Orderable>(
    kind: ResourceKind,
    current: &[R],
    batch: &BulkBatch,
) -> Result<BulkPlan, BulkError<R>> {
    check_id_set(current, batch)?;
    let sort_orders: Vec<i32> = sort_orders_for(batch.len())?;

    match plan_rows(kind, batch, &sort_orders) {
        Ok(rows) => Ok(BulkPlan { kind, rows }),
        Err(error) => Err(BulkError::Rejected(BulkRejection {
            error,
            attempted: attempted_records(current, batch, &sort_orders),
        })),
    }
}

/// Checks that the batch names every current record exactly once.
///
/// # Errors
///
/// Returns `CoreError::DuplicateRow` or `CoreError::StaleBatch`.
pub fn check_id_set<R: Orderable>(current: &[R], batch: &BulkBatch) -> Result<(), CoreError> {
    let mut submitted: HashSet<i64> = HashSet::with_capacity(batch.len());
    for row in batch.rows() {
        if !submitted.insert(row.id) {
            return Err(CoreError::DuplicateRow(row.id));
        }
    }

    let existing: HashSet<i64> = current.iter().map(Orderable::id).collect();
    let mut missing: Vec<i64> = existing.difference(&submitted).copied().collect();
    let mut unknown: Vec<i64> = submitted.difference(&existing).copied().collect();

    if missing.is_empty() && unknown.is_empty() {
        return Ok(());
    }

    missing.sort_unstable();
    unknown.sort_unstable();
    Err(CoreError::StaleBatch { missing, unknown })
}

fn sort_orders_for(len: usize) -> Result<Vec<i32>, CoreError> {
    (0..len)
        .map(|index| i32::try_from(index).map_err(|_| CoreError::BatchTooLarge(len)))
        .collect()
}

fn plan_rows(
    kind: ResourceKind,
    batch: &BulkBatch,
    sort_orders: &[i32],
) -> Result<Vec<PlannedRow>, DomainError> {
    let policy: ResourcePolicy = kind.policy();
    let texts: Vec<Option<String>> =
        proposed_texts(policy.text_rule, kind.text_field().unwrap_or("text"), batch)?;

    if policy.text_rule == TextRule::RequiredUnique {
        validate_unique_names(texts.iter().flatten().map(String::as_str))?;
    }

    let mut rows: Vec<PlannedRow> = Vec::with_capacity(batch.len());
    for ((row, text), sort_order) in batch.rows().iter().zip(texts).zip(sort_orders) {
        let news: Option<PlannedNews> = if policy.has_news_fields {
            Some(plan_news(row)?)
        } else {
            None
        };

        rows.push(PlannedRow {
            id: row.id,
            sort_order: *sort_order,
            text,
            published: policy
                .has_publish_flag
                .then(|| row.published.unwrap_or(false)),
            news,
        });
    }
    Ok(rows)
}

fn proposed_texts(
    rule: TextRule,
    field: &'static str,
    batch: &BulkBatch,
) -> Result<Vec<Option<String>>, DomainError> {
    batch
        .rows()
        .iter()
        .map(|row| match rule {
            TextRule::None => Ok(None),
            TextRule::Required | TextRule::RequiredUnique => {
                normalize_required_text(field, row.text.as_deref().unwrap_or_default()).map(Some)
            }
        })
        .collect()
}

fn plan_news(row: &BulkRow) -> Result<PlannedNews, DomainError> {
    let edit = row
        .news
        .as_ref()
        .ok_or(DomainError::EmptyField { field: "url" })?;

    let url: String = normalize_required_text("url", &edit.url)?;
    let date: String = normalize_required_text("interview_date", &edit.interview_date)?;

    Ok(PlannedNews {
        subtitle: normalize_optional_text(edit.subtitle.as_deref()),
        url,
        interview_date: canonical_interview_date(&date)?,
    })
}

fn attempted_records<R: Orderable>(
    current: &[R],
    batch: &BulkBatch,
    sort_orders: &[i32],
) -> Vec<R> {
    let by_id: HashMap<i64, &R> = current.iter().map(|record| (record.id(), record)).collect();

    batch
        .rows()
        .iter()
        .zip(sort_orders)
        .filter_map(|(row, sort_order)| {
            by_id
                .get(&row.id)
                .map(|record| record.with_submitted(row, *sort_order))
        })
        .collect()
}
