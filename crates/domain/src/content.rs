// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Content records managed through the admin console.
//!
//! Timestamps are carried as ISO-8601 UTC strings exactly as stored, and
//! interview dates as canonical `YYYY-MM-DD` strings. Keeping them as text
//! lets a rejected bulk edit carry the administrator's attempted value back
//! to the form even when it does not parse.

use serde::{Deserialize, Serialize};

/// A portfolio topic shown in the public feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
    pub link1_title: Option<String>,
    pub link1_url: Option<String>,
    pub link2_title: Option<String>,
    pub link2_url: Option<String>,
    pub is_published: bool,
    pub sort_order: i32,
    pub category_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// A topic together with its category and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDetail {
    pub topic: Topic,
    pub category: Option<TopicCategory>,
    /// Tags in tag `sort_order`.
    pub tags: Vec<TopicTag>,
}

impl TopicDetail {
    /// Returns whether the topic carries the tag with the given id.
    #[must_use]
    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tags.iter().any(|tag| tag.id == tag_id)
    }
}

/// An image in the public hero carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroImage {
    pub id: i64,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// A phrase shown on the rotating hero cube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPhrase {
    pub id: i64,
    pub text: String,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// A topic category. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCategory {
    pub id: i64,
    pub name: String,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// A topic tag. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTag {
    pub id: i64,
    pub name: String,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// A press or interview link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub url: String,
    /// Canonical `YYYY-MM-DD`.
    pub interview_date: String,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// An inquiry submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub message: String,
    pub created_at: String,
}

/// Field values for creating or replacing a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDraft {
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    /// `None` on update keeps the stored image.
    pub image_url: Option<String>,
    pub link1_title: Option<String>,
    pub link1_url: Option<String>,
    pub link2_title: Option<String>,
    pub link2_url: Option<String>,
    pub is_published: bool,
    pub sort_order: i32,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

/// Field values for a new hero image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImageDraft {
    pub image_url: String,
    pub alt_text: Option<String>,
    pub is_published: bool,
    pub sort_order: i32,
}

/// Field values for a new hero phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPhraseDraft {
    pub text: String,
    pub is_published: bool,
    pub sort_order: i32,
}

/// Field values for a new category or tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDraft {
    pub name: String,
    pub sort_order: i32,
}

/// Field values for a new news item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    pub title: String,
    pub subtitle: Option<String>,
    pub url: String,
    pub interview_date: String,
}

/// Field values from the public contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub message: String,
}
