// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    STAMP, create_test_image, create_test_news, create_test_phrase, create_test_tag,
};
use crate::{BulkRow, NewsEdit, Orderable};
use folio_domain::{HeroImage, HeroPhrase, News, Topic, TopicDetail, TopicTag};

#[test]
fn test_tag_with_submitted_trims_and_repositions() {
    let tag: TopicTag = create_test_tag(5, "old", 4);
    let row: BulkRow = BulkRow::reorder(5).with_text("  new ");

    let shown: TopicTag = tag.with_submitted(&row, 0);
    assert_eq!(shown.name, "new");
    assert_eq!(shown.sort_order, 0);
    assert_eq!(shown.id, 5);
    assert_eq!(tag.name, "old");
}

#[test]
fn test_phrase_with_submitted_applies_publish_marker() {
    let phrase: HeroPhrase = create_test_phrase(1, "web開発", 0, true);
    let shown: HeroPhrase = phrase.with_submitted(&BulkRow::reorder(1).with_text(""), 2);
    assert_eq!(shown.text, "");
    assert!(!shown.is_published);
    assert_eq!(shown.sort_order, 2);
}

#[test]
fn test_image_with_submitted_keeps_stored_fields() {
    let image: HeroImage = create_test_image(3, 1, false);
    let shown: HeroImage = image.with_submitted(&BulkRow::reorder(3).with_published(true), 0);
    assert!(shown.is_published);
    assert_eq!(shown.image_url, image.image_url);
}

#[test]
fn test_news_with_submitted_shows_edit_columns() {
    let news: News = create_test_news(8, "Old title", "2024-01-01");
    let row: BulkRow = BulkRow::reorder(8).with_text("New title").with_news(NewsEdit {
        subtitle: Some(String::from("Sub")),
        url: String::from("https://example.com/new"),
        interview_date: String::from("not a date"),
    });

    let shown: News = news.with_submitted(&row, 1);
    assert_eq!(shown.title, "New title");
    assert_eq!(shown.subtitle.as_deref(), Some("Sub"));
    assert_eq!(shown.url, "https://example.com/new");
    assert_eq!(shown.interview_date, "not a date");
}

#[test]
fn test_topic_detail_orderable_delegates_to_topic() {
    let detail: TopicDetail = TopicDetail {
        topic: Topic {
            id: 12,
            title: String::from("Signal Core"),
            excerpt: None,
            body: String::from("Body"),
            image_url: None,
            link1_title: None,
            link1_url: None,
            link2_title: None,
            link2_url: None,
            is_published: true,
            sort_order: 6,
            category_id: None,
            created_at: String::from(STAMP),
            updated_at: String::from(STAMP),
        },
        category: None,
        tags: Vec::new(),
    };

    assert_eq!(detail.id(), 12);
    assert_eq!(detail.sort_order(), 6);
    let shown: TopicDetail = detail.with_submitted(&BulkRow::reorder(12), 0);
    assert!(!shown.topic.is_published);
    assert_eq!(shown.topic.sort_order, 0);
}
