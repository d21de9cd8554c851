// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin list search.
//!
//! Matching is a case-insensitive substring test. A blank query matches
//! every record.

use crate::content::{Contact, TopicDetail};

fn contains_insensitive(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Returns whether a topic matches the admin search query.
///
/// Searches title, excerpt, body, category name and tag names.
#[must_use]
pub fn topic_matches_query(detail: &TopicDetail, query: &str) -> bool {
    let needle: String = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let topic = &detail.topic;
    contains_insensitive(&topic.title, &needle)
        || topic
            .excerpt
            .as_deref()
            .is_some_and(|excerpt| contains_insensitive(excerpt, &needle))
        || contains_insensitive(&topic.body, &needle)
        || detail
            .category
            .as_ref()
            .is_some_and(|category| contains_insensitive(&category.name, &needle))
        || detail
            .tags
            .iter()
            .any(|tag| contains_insensitive(&tag.name, &needle))
}

/// Returns whether a contact inquiry matches the admin search query.
///
/// Searches name, email, phone number and message.
#[must_use]
pub fn contact_matches_query(contact: &Contact, query: &str) -> bool {
    let needle: String = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    contains_insensitive(&contact.name, &needle)
        || contains_insensitive(&contact.email, &needle)
        || contact
            .phone_number
            .as_deref()
            .is_some_and(|phone| contains_insensitive(phone, &needle))
        || contains_insensitive(&contact.message, &needle)
}
