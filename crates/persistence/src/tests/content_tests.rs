// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use folio_domain::{ContactDraft, HeroImageDraft};

use crate::PersistenceError;
use crate::tests::{
    create_test_news, create_test_persistence, create_test_phrase, create_test_tags, named,
};

#[test]
fn test_tags_list_in_sort_order() {
    let mut persistence = create_test_persistence();
    persistence.create_tag(&named("third", 2)).unwrap();
    persistence.create_tag(&named("first", 0)).unwrap();
    persistence.create_tag(&named("second", 1)).unwrap();

    let names: Vec<String> = persistence
        .list_tags()
        .unwrap()
        .into_iter()
        .map(|tag| tag.name)
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_duplicate_category_name_is_unique_violation() {
    let mut persistence = create_test_persistence();
    persistence.create_category(&named("web", 0)).unwrap();

    let result = persistence.create_category(&named("web", 1));

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
    assert_eq!(persistence.list_categories().unwrap().len(), 1);
}

#[test]
fn test_same_name_allowed_across_categories_and_tags() {
    let mut persistence = create_test_persistence();
    persistence.create_category(&named("sample1", 0)).unwrap();
    persistence.create_tag(&named("sample1", 0)).unwrap();

    assert_eq!(persistence.list_categories().unwrap().len(), 1);
    assert_eq!(persistence.list_tags().unwrap().len(), 1);
}

#[test]
fn test_delete_missing_tag_is_not_found() {
    let mut persistence = create_test_persistence();
    let result = persistence.delete_tag(42);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_tag_removes_it() {
    let mut persistence = create_test_persistence();
    let ids: Vec<i64> = create_test_tags(&mut persistence);

    persistence.delete_tag(ids[1]).unwrap();

    let remaining: Vec<i64> = persistence
        .list_tags()
        .unwrap()
        .into_iter()
        .map(|tag| tag.id)
        .collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);
}

#[test]
fn test_hero_images_filter_published() {
    let mut persistence = create_test_persistence();
    for (url, is_published, sort_order) in [("/uploads/a.png", true, 1), ("/uploads/b.png", false, 0)] {
        persistence
            .create_hero_image(&HeroImageDraft {
                image_url: String::from(url),
                alt_text: None,
                is_published,
                sort_order,
            })
            .unwrap();
    }

    let all = persistence.list_hero_images(false).unwrap();
    let published = persistence.list_hero_images(true).unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].image_url, "/uploads/b.png");
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].image_url, "/uploads/a.png");
}

#[test]
fn test_hero_phrases_round_trip_japanese_text() {
    let mut persistence = create_test_persistence();
    let phrase_id: i64 = create_test_phrase(&mut persistence, "アプリ開発", 0);

    let phrases = persistence.list_hero_phrases(false).unwrap();
    assert_eq!(phrases[0].id, phrase_id);
    assert_eq!(phrases[0].text, "アプリ開発");
    assert!(phrases[0].is_published);

    persistence.delete_hero_phrase(phrase_id).unwrap();
    assert!(persistence.list_hero_phrases(false).unwrap().is_empty());
}

#[test]
fn test_news_ties_break_by_newest_interview() {
    let mut persistence = create_test_persistence();
    create_test_news(&mut persistence, "older", "2024-01-10");
    create_test_news(&mut persistence, "newer", "2025-03-01");

    let titles: Vec<String> = persistence
        .list_news()
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect();

    assert_eq!(titles, vec!["newer", "older"]);
}

#[test]
fn test_contacts_list_newest_first_and_delete() {
    let mut persistence = create_test_persistence();
    let mut ids: Vec<i64> = Vec::new();
    for name in ["Sato", "Suzuki"] {
        ids.push(
            persistence
                .create_contact(&ContactDraft {
                    name: String::from(name),
                    email: format!("{}@example.com", name.to_lowercase()),
                    phone_number: None,
                    message: String::from("Hello"),
                })
                .unwrap(),
        );
    }

    let listed: Vec<i64> = persistence
        .list_contacts()
        .unwrap()
        .into_iter()
        .map(|contact| contact.id)
        .collect();
    assert_eq!(listed, vec![ids[1], ids[0]]);

    let contact = persistence.get_contact(ids[0]).unwrap().unwrap();
    assert_eq!(contact.name, "Sato");

    persistence.delete_contact(ids[0]).unwrap();
    assert!(persistence.get_contact(ids[0]).unwrap().is_none());
    assert!(matches!(
        persistence.delete_contact(ids[0]),
        Err(PersistenceError::NotFound(_))
    ));
}
