// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk reorder/publish/edit through the controller.

use folio_domain::{ResourceKind, TopicCategory, TopicTag};
use folio_persistence::Persistence;

use crate::tests::helpers::{
    create_test_persistence, create_test_tags, create_test_topic, named, pairs,
};
use crate::{
    ApiError, BulkOutcome, HeroPhraseRequest, NewsRequest, ResourceListing, bulk_update,
    create_category, create_hero_phrase, create_news, list_categories, list_hero_phrases,
    list_news, list_tags, list_topics,
};

fn tag_rows(persistence: &mut Persistence) -> Vec<(i64, String, i32)> {
    list_tags(persistence)
        .unwrap()
        .into_iter()
        .map(|tag| (tag.id, tag.name, tag.sort_order))
        .collect()
}

#[test]
fn test_tag_swap_applies_and_reindexes() {
    let mut persistence = create_test_persistence();
    let ids: Vec<i64> = create_test_tags(&mut persistence);
    let (a, b, c): (String, String, String) =
        (ids[0].to_string(), ids[1].to_string(), ids[2].to_string());

    let outcome: BulkOutcome = bulk_update(
        &mut persistence,
        ResourceKind::Tags,
        &pairs(&[
            ("ids", &c),
            ("names", "x"),
            ("ids", &a),
            ("names", "sample2"),
            ("ids", &b),
            ("names", "sample1"),
        ]),
    )
    .unwrap();

    assert_eq!(
        outcome,
        BulkOutcome::Applied {
            kind: ResourceKind::Tags,
            count: 3,
        }
    );
    assert_eq!(
        tag_rows(&mut persistence),
        vec![
            (ids[2], String::from("x"), 0),
            (ids[0], String::from("sample2"), 1),
            (ids[1], String::from("sample1"), 2),
        ]
    );
}

#[test]
fn test_duplicate_tag_names_are_rejected_with_attempted_values() {
    let mut persistence = create_test_persistence();
    let ids: Vec<i64> = create_test_tags(&mut persistence);
    let before: Vec<(i64, String, i32)> = tag_rows(&mut persistence);
    let (a, b, c): (String, String, String) =
        (ids[0].to_string(), ids[1].to_string(), ids[2].to_string());

    let outcome: BulkOutcome = bulk_update(
        &mut persistence,
        ResourceKind::Tags,
        &pairs(&[
            ("ids", &b),
            ("names", "same"),
            ("ids", &a),
            ("names", "same"),
            ("ids", &c),
            ("names", "x"),
        ]),
    )
    .unwrap();

    let BulkOutcome::Rejected {
        kind,
        message,
        listing,
    } = outcome
    else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(kind, ResourceKind::Tags);
    assert_eq!(message, "タグ名が重複しています。");
    let ResourceListing::Tags(attempted) = listing else {
        panic!("expected tag listing");
    };
    let attempted: Vec<(i64, &str)> = attempted
        .iter()
        .map(|tag: &TopicTag| (tag.id, tag.name.as_str()))
        .collect();
    assert_eq!(
        attempted,
        vec![(ids[1], "same"), (ids[0], "same"), (ids[2], "x")]
    );

    assert_eq!(tag_rows(&mut persistence), before);
}

#[test]
fn test_blank_category_name_is_rejected_and_shown_blank() {
    let mut persistence = create_test_persistence();
    let first: i64 = create_category(&mut persistence, &named("sample1")).unwrap();
    let second: i64 = create_category(&mut persistence, &named("sample2")).unwrap();

    let outcome: BulkOutcome = bulk_update(
        &mut persistence,
        ResourceKind::Categories,
        &pairs(&[
            ("ids", &second.to_string()),
            ("names", "   "),
            ("ids", &first.to_string()),
            ("names", "renamed"),
        ]),
    )
    .unwrap();

    let BulkOutcome::Rejected {
        message, listing, ..
    } = outcome
    else {
        panic!("expected rejection");
    };
    assert_eq!(message, "カテゴリ名は空欄にできません。");
    let ResourceListing::Categories(attempted) = listing else {
        panic!("expected category listing");
    };
    let names: Vec<&str> = attempted
        .iter()
        .map(|category: &TopicCategory| category.name.as_str())
        .collect();
    assert_eq!(names, vec!["", "renamed"]);

    let stored: Vec<String> = list_categories(&mut persistence)
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(stored, vec!["sample1", "sample2"]);
}

#[test]
fn test_blank_phrase_is_rejected() {
    let mut persistence = create_test_persistence();
    let phrase_id: i64 = create_hero_phrase(
        &mut persistence,
        &HeroPhraseRequest {
            text: String::from("web開発"),
            is_published: true,
            sort_order: None,
        },
    )
    .unwrap();

    let outcome: BulkOutcome = bulk_update(
        &mut persistence,
        ResourceKind::HeroPhrases,
        &pairs(&[
            ("ids", &phrase_id.to_string()),
            ("texts", ""),
            ("published", "0"),
        ]),
    )
    .unwrap();

    assert!(matches!(
        outcome,
        BulkOutcome::Rejected { ref message, .. } if message == "フレーズは空欄にできません。"
    ));
    let stored = list_hero_phrases(&mut persistence).unwrap();
    assert_eq!(stored[0].text, "web開発");
    assert!(stored[0].is_published);
}

#[test]
fn test_topics_reorder_and_publish() {
    let mut persistence = create_test_persistence();
    let first: i64 = create_test_topic(&mut persistence, "First", true);
    let second: i64 = create_test_topic(&mut persistence, "Second", false);

    bulk_update(
        &mut persistence,
        ResourceKind::Topics,
        &pairs(&[
            ("ids", &second.to_string()),
            ("published", "1"),
            ("ids", &first.to_string()),
            ("published", "0"),
        ]),
    )
    .unwrap();

    let listed: Vec<(i64, bool, i32)> = list_topics(&mut persistence, "")
        .unwrap()
        .topics
        .into_iter()
        .map(|detail| {
            (
                detail.topic.id,
                detail.topic.is_published,
                detail.topic.sort_order,
            )
        })
        .collect();
    assert_eq!(listed, vec![(second, true, 0), (first, false, 1)]);
}

#[test]
fn test_news_edit_with_invalid_date_is_rejected() {
    let mut persistence = create_test_persistence();
    let news_id: i64 = create_news(
        &mut persistence,
        &NewsRequest {
            title: String::from("Interview"),
            subtitle: None,
            url: String::from("https://example.com/a"),
            interview_date: String::from("2024-05-01"),
        },
    )
    .unwrap();

    let outcome: BulkOutcome = bulk_update(
        &mut persistence,
        ResourceKind::News,
        &pairs(&[
            ("ids", &news_id.to_string()),
            ("titles", "Interview"),
            ("subtitles", ""),
            ("urls", "https://example.com/a"),
            ("interview_dates", "2024-13-40"),
        ]),
    )
    .unwrap();

    let BulkOutcome::Rejected {
        message, listing, ..
    } = outcome
    else {
        panic!("expected rejection");
    };
    assert_eq!(message, "取材日の形式が正しくありません。");
    let ResourceListing::News(attempted) = listing else {
        panic!("expected news listing");
    };
    assert_eq!(attempted[0].interview_date, "2024-13-40");
    assert_eq!(
        list_news(&mut persistence).unwrap()[0].interview_date,
        "2024-05-01"
    );
}

#[test]
fn test_news_edit_applies() {
    let mut persistence = create_test_persistence();
    let news_id: i64 = create_news(
        &mut persistence,
        &NewsRequest {
            title: String::from("Old"),
            subtitle: Some(String::from("sub")),
            url: String::from("https://example.com/old"),
            interview_date: String::from("2024-05-01"),
        },
    )
    .unwrap();

    bulk_update(
        &mut persistence,
        ResourceKind::News,
        &pairs(&[
            ("ids", &news_id.to_string()),
            ("titles", " New "),
            ("subtitles", " "),
            ("urls", "https://example.com/new"),
            ("interview_dates", "2025-01-02"),
        ]),
    )
    .unwrap();

    let stored = list_news(&mut persistence).unwrap();
    assert_eq!(stored[0].title, "New");
    assert_eq!(stored[0].subtitle, None);
    assert_eq!(stored[0].url, "https://example.com/new");
    assert_eq!(stored[0].interview_date, "2025-01-02");
}

#[test]
fn test_partial_batch_is_a_conflict() {
    let mut persistence = create_test_persistence();
    let ids: Vec<i64> = create_test_tags(&mut persistence);
    let before: Vec<(i64, String, i32)> = tag_rows(&mut persistence);

    let result = bulk_update(
        &mut persistence,
        ResourceKind::Tags,
        &pairs(&[
            ("ids", &ids[1].to_string()),
            ("names", "sample2"),
            ("ids", &ids[0].to_string()),
            ("names", "sample1"),
        ]),
    );

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
    assert_eq!(tag_rows(&mut persistence), before);
}

#[test]
fn test_unknown_id_is_a_conflict() {
    let mut persistence = create_test_persistence();
    let first: i64 = create_test_topic(&mut persistence, "Only", true);

    let result = bulk_update(
        &mut persistence,
        ResourceKind::Topics,
        &pairs(&[
            ("ids", &first.to_string()),
            ("ids", "9999"),
        ]),
    );

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_empty_form_for_populated_resource_is_a_conflict() {
    let mut persistence = create_test_persistence();
    create_test_tags(&mut persistence);

    let result = bulk_update(&mut persistence, ResourceKind::Tags, &[]);

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_empty_form_for_empty_resource_applies_nothing() {
    let mut persistence = create_test_persistence();

    let outcome: BulkOutcome = bulk_update(&mut persistence, ResourceKind::News, &[]).unwrap();

    assert_eq!(
        outcome,
        BulkOutcome::Applied {
            kind: ResourceKind::News,
            count: 0,
        }
    );
}

#[test]
fn test_malformed_form_is_invalid_input() {
    let mut persistence = create_test_persistence();
    create_test_tags(&mut persistence);
    let before: Vec<(i64, String, i32)> = tag_rows(&mut persistence);

    let result = bulk_update(
        &mut persistence,
        ResourceKind::Tags,
        &pairs(&[("ids", "one"), ("names", "x")]),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "ids"
    ));
    assert_eq!(tag_rows(&mut persistence), before);
}
