// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use folio_persistence::Persistence;

use crate::{NamedRequest, TopicRequest, create_tag, create_topic};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn create_test_admin(persistence: &mut Persistence) -> i64 {
    persistence
        .upsert_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
        .expect("admin upsert")
}

/// Builds submitted form pairs from string slices.
pub fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(name, value)| (String::from(*name), String::from(*value)))
        .collect()
}

pub fn named(name: &str) -> NamedRequest {
    NamedRequest {
        name: String::from(name),
        sort_order: None,
    }
}

/// Creates tags `sample1`, `sample2` and `x`, returning their ids in order.
pub fn create_test_tags(persistence: &mut Persistence) -> Vec<i64> {
    ["sample1", "sample2", "x"]
        .into_iter()
        .map(|name| create_tag(persistence, &named(name)).unwrap())
        .collect()
}

pub fn topic_request(title: &str, is_published: bool) -> TopicRequest {
    TopicRequest {
        title: String::from(title),
        body: format!("{title} body"),
        is_published,
        ..TopicRequest::default()
    }
}

pub fn create_test_topic(persistence: &mut Persistence, title: &str, is_published: bool) -> i64 {
    create_topic(persistence, &topic_request(title, is_published), None).unwrap()
}
