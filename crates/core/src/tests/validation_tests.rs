// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_tags;
use crate::{BulkBatch, BulkError, BulkPlan, BulkRow, CoreError, check_id_set, plan_bulk_update};
use folio_domain::{ResourceKind, TopicTag};

#[test]
fn test_partial_batch_is_stale() {
    let tags: Vec<TopicTag> = create_test_tags();
    let batch: BulkBatch = BulkBatch::new(vec![
        BulkRow::reorder(3).with_text("x"),
        BulkRow::reorder(1).with_text("sample1"),
    ]);

    let result: Result<BulkPlan, BulkError<TopicTag>> =
        plan_bulk_update(ResourceKind::Tags, &tags, &batch);
    assert_eq!(
        result,
        Err(BulkError::Conflict(CoreError::StaleBatch {
            missing: vec![2],
            unknown: vec![],
        }))
    );
}

#[test]
fn test_batch_naming_deleted_record_is_stale() {
    let tags: Vec<TopicTag> = create_test_tags();
    let batch: BulkBatch = BulkBatch::new(vec![
        BulkRow::reorder(1),
        BulkRow::reorder(2),
        BulkRow::reorder(3),
        BulkRow::reorder(99),
    ]);

    assert_eq!(
        check_id_set(&tags, &batch),
        Err(CoreError::StaleBatch {
            missing: vec![],
            unknown: vec![99],
        })
    );
}

#[test]
fn test_repeated_id_is_rejected() {
    let tags: Vec<TopicTag> = create_test_tags();
    let batch: BulkBatch = BulkBatch::new(vec![
        BulkRow::reorder(1),
        BulkRow::reorder(1),
        BulkRow::reorder(2),
        BulkRow::reorder(3),
    ]);

    assert_eq!(check_id_set(&tags, &batch), Err(CoreError::DuplicateRow(1)));
}

#[test]
fn test_stale_check_runs_before_content_rules() {
    let tags: Vec<TopicTag> = create_test_tags();
    let batch: BulkBatch = BulkBatch::new(vec![BulkRow::reorder(1).with_text("")]);

    let result: Result<BulkPlan, BulkError<TopicTag>> =
        plan_bulk_update(ResourceKind::Tags, &tags, &batch);
    assert!(matches!(
        result,
        Err(BulkError::Conflict(CoreError::StaleBatch { .. }))
    ));
}

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::DuplicateRow(4);
    assert_eq!(
        format!("{err}"),
        "Record 4 appears more than once in the batch"
    );

    let err: CoreError = CoreError::StaleBatch {
        missing: vec![2],
        unknown: vec![9],
    };
    assert_eq!(
        format!("{err}"),
        "Batch does not match current records (missing: [2], unknown: [9])"
    );
}
