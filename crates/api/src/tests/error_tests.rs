// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use folio::CoreError;
use folio_domain::{DomainError, ResourceKind};
use folio_persistence::PersistenceError;

use crate::{
    ApiError, AuthError, FormError, rejection_message, translate_core_error,
    translate_domain_error, translate_persistence_error,
};

#[test]
fn test_stale_batch_translates_to_conflict() {
    let err: ApiError = translate_core_error(CoreError::StaleBatch {
        missing: vec![1],
        unknown: vec![],
    });
    assert!(matches!(err, ApiError::Conflict { .. }));
}

#[test]
fn test_duplicate_row_translates_to_invalid_ids() {
    let err: ApiError = translate_core_error(CoreError::DuplicateRow(3));
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "ids"));
}

#[test]
fn test_empty_field_translates_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::EmptyField { field: "name" });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "name"));
}

#[test]
fn test_heic_translates_to_upload_message() {
    let err: ApiError = translate_domain_error(DomainError::HeicNotSupported);
    assert_eq!(
        err.inline_message(),
        Some("HEIC形式の画像はアップロードできません。")
    );
}

#[test]
fn test_persistence_errors_translate_by_kind() {
    assert!(matches!(
        translate_persistence_error(PersistenceError::NotFound(String::from("tag 1"))),
        ApiError::ResourceNotFound { .. }
    ));
    assert!(matches!(
        translate_persistence_error(PersistenceError::Conflict(String::from("stale"))),
        ApiError::Conflict { .. }
    ));
    assert!(matches!(
        translate_persistence_error(PersistenceError::UniqueViolation(String::from("name"))),
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "duplicate-name"
    ));
    assert!(matches!(
        translate_persistence_error(PersistenceError::QueryFailed(String::from("boom"))),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_auth_storage_error_is_internal() {
    let err: ApiError = ApiError::from(AuthError::Storage {
        message: String::from("locked"),
    });
    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_form_error_becomes_invalid_input_on_its_field() {
    let err: ApiError = ApiError::from(FormError::TooManyFlags {
        expected: 1,
        actual: 2,
    });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "published"));
    assert!(err.inline_message().is_some());
}

#[test]
fn test_conflict_has_no_inline_message() {
    let err: ApiError = ApiError::Conflict {
        message: String::from("stale"),
    };
    assert_eq!(err.inline_message(), None);
}

#[test]
fn test_rejection_messages_per_resource() {
    let empty: DomainError = DomainError::EmptyField { field: "name" };
    let duplicate: DomainError = DomainError::DuplicateName {
        name: String::from("a"),
    };

    assert_eq!(
        rejection_message(ResourceKind::Categories, &empty),
        "カテゴリ名は空欄にできません。"
    );
    assert_eq!(
        rejection_message(ResourceKind::Categories, &duplicate),
        "カテゴリ名が重複しています。"
    );
    assert_eq!(
        rejection_message(ResourceKind::Tags, &empty),
        "タグ名は空欄にできません。"
    );
    assert_eq!(
        rejection_message(ResourceKind::Tags, &duplicate),
        "タグ名が重複しています。"
    );
    assert_eq!(
        rejection_message(ResourceKind::HeroPhrases, &empty),
        "フレーズは空欄にできません。"
    );
    assert_eq!(
        rejection_message(ResourceKind::News, &empty),
        "タイトル・リンク・取材日は必須です。"
    );
}
