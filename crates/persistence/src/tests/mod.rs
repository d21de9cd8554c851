// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod content_tests;
mod topic_tests;

use folio_domain::{HeroPhraseDraft, NamedDraft, NewsDraft, TopicDraft};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn named(name: &str, sort_order: i32) -> NamedDraft {
    NamedDraft {
        name: String::from(name),
        sort_order,
    }
}

/// Creates tags `sample1`, `sample2` and `x` at positions 0, 1 and 2.
///
/// Returns their ids in that order.
pub fn create_test_tags(persistence: &mut Persistence) -> Vec<i64> {
    ["sample1", "sample2", "x"]
        .into_iter()
        .zip(0..)
        .map(|(name, sort_order)| persistence.create_tag(&named(name, sort_order)).unwrap())
        .collect()
}

pub fn create_test_phrase(persistence: &mut Persistence, text: &str, sort_order: i32) -> i64 {
    persistence
        .create_hero_phrase(&HeroPhraseDraft {
            text: String::from(text),
            is_published: true,
            sort_order,
        })
        .unwrap()
}

pub fn create_test_news(persistence: &mut Persistence, title: &str, date: &str) -> i64 {
    persistence
        .create_news(&NewsDraft {
            title: String::from(title),
            subtitle: None,
            url: format!("https://example.com/{title}"),
            interview_date: String::from(date),
        })
        .unwrap()
}

pub fn create_test_topic_draft(title: &str) -> TopicDraft {
    TopicDraft {
        title: String::from(title),
        body: format!("{title} body"),
        is_published: true,
        ..TopicDraft::default()
    }
}
