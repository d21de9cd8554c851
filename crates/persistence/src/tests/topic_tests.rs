// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use folio_domain::TopicDraft;

use crate::PersistenceError;
use crate::tests::{create_test_persistence, create_test_tags, create_test_topic_draft, named};

#[test]
fn test_create_topic_with_category_and_tags() {
    let mut persistence = create_test_persistence();
    let tag_ids: Vec<i64> = create_test_tags(&mut persistence);
    let category_id: i64 = persistence.create_category(&named("web", 0)).unwrap();

    let draft: TopicDraft = TopicDraft {
        category_id: Some(category_id),
        tag_ids: vec![tag_ids[2], tag_ids[0]],
        ..create_test_topic_draft("Portfolio")
    };
    let topic_id: i64 = persistence.create_topic(&draft).unwrap();

    let detail = persistence.get_topic(topic_id).unwrap().unwrap();
    assert_eq!(detail.topic.title, "Portfolio");
    assert_eq!(detail.category.unwrap().name, "web");
    let tag_names: Vec<&str> = detail.tags.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(tag_names, vec!["sample1", "x"]);
}

#[test]
fn test_create_topic_with_unknown_tag_writes_nothing() {
    let mut persistence = create_test_persistence();
    let draft: TopicDraft = TopicDraft {
        tag_ids: vec![999],
        ..create_test_topic_draft("Broken")
    };

    let result = persistence.create_topic(&draft);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    assert!(persistence.list_topics(false).unwrap().is_empty());
}

#[test]
fn test_update_topic_replaces_tags_and_keeps_image() {
    let mut persistence = create_test_persistence();
    let tag_ids: Vec<i64> = create_test_tags(&mut persistence);
    let topic_id: i64 = persistence
        .create_topic(&TopicDraft {
            image_url: Some(String::from("/uploads/1-cover.png")),
            tag_ids: vec![tag_ids[0], tag_ids[1]],
            ..create_test_topic_draft("Before")
        })
        .unwrap();

    persistence
        .update_topic(
            topic_id,
            &TopicDraft {
                image_url: None,
                tag_ids: vec![tag_ids[2]],
                ..create_test_topic_draft("After")
            },
        )
        .unwrap();

    let detail = persistence.get_topic(topic_id).unwrap().unwrap();
    assert_eq!(detail.topic.title, "After");
    assert_eq!(detail.topic.image_url.as_deref(), Some("/uploads/1-cover.png"));
    assert_eq!(detail.tags.len(), 1);
    assert!(detail.has_tag(tag_ids[2]));
}

#[test]
fn test_update_missing_topic_is_not_found() {
    let mut persistence = create_test_persistence();
    let result = persistence.update_topic(7, &create_test_topic_draft("Ghost"));
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_list_topics_published_only() {
    let mut persistence = create_test_persistence();
    persistence
        .create_topic(&create_test_topic_draft("Visible"))
        .unwrap();
    persistence
        .create_topic(&TopicDraft {
            is_published: false,
            ..create_test_topic_draft("Draft")
        })
        .unwrap();

    let public = persistence.list_topics(true).unwrap();
    let admin = persistence.list_topics(false).unwrap();

    assert_eq!(public.len(), 1);
    assert_eq!(public[0].topic.title, "Visible");
    assert_eq!(admin.len(), 2);
}

#[test]
fn test_deleting_category_uncategorizes_topics() {
    let mut persistence = create_test_persistence();
    let category_id: i64 = persistence.create_category(&named("web", 0)).unwrap();
    let topic_id: i64 = persistence
        .create_topic(&TopicDraft {
            category_id: Some(category_id),
            ..create_test_topic_draft("Orphan")
        })
        .unwrap();

    persistence.delete_category(category_id).unwrap();

    let detail = persistence.get_topic(topic_id).unwrap().unwrap();
    assert!(detail.category.is_none());
    assert!(detail.topic.category_id.is_none());
}

#[test]
fn test_deleting_tag_unlinks_topics() {
    let mut persistence = create_test_persistence();
    let tag_ids: Vec<i64> = create_test_tags(&mut persistence);
    let topic_id: i64 = persistence
        .create_topic(&TopicDraft {
            tag_ids: tag_ids.clone(),
            ..create_test_topic_draft("Tagged")
        })
        .unwrap();

    persistence.delete_tag(tag_ids[0]).unwrap();

    let detail = persistence.get_topic(topic_id).unwrap().unwrap();
    assert_eq!(detail.tags.len(), 2);
    assert!(!detail.has_tag(tag_ids[0]));
}

#[test]
fn test_delete_topic() {
    let mut persistence = create_test_persistence();
    let topic_id: i64 = persistence
        .create_topic(&create_test_topic_draft("Gone"))
        .unwrap();

    persistence.delete_topic(topic_id).unwrap();

    assert!(persistence.get_topic(topic_id).unwrap().is_none());
    assert!(matches!(
        persistence.delete_topic(topic_id),
        Err(PersistenceError::NotFound(_))
    ));
}
