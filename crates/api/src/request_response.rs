// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use folio_domain::{
    Contact, HeroImage, HeroPhrase, News, ResourceKind, TopicCategory, TopicDetail, TopicTag,
};

/// API request to sign in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// API response for a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// The opaque session token to hand back as a cookie.
    pub session_token: String,
    /// The admin's email address.
    pub email: String,
    /// When the session expires, in the stored timestamp layout.
    pub expires_at: String,
}

/// API request to create or replace a topic.
///
/// The uploaded image, if any, travels separately as a public URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicRequest {
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub link1_title: Option<String>,
    pub link1_url: Option<String>,
    pub link2_title: Option<String>,
    pub link2_url: Option<String>,
    pub is_published: bool,
    /// `None` appends the topic after the current last one.
    pub sort_order: Option<i32>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

/// API request to add a hero image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroImageRequest {
    pub alt_text: Option<String>,
    pub is_published: bool,
    pub sort_order: Option<i32>,
}

/// API request to add a hero phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroPhraseRequest {
    pub text: String,
    pub is_published: bool,
    pub sort_order: Option<i32>,
}

/// API request to add a category or tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedRequest {
    pub name: String,
    pub sort_order: Option<i32>,
}

/// API request to add a news item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub url: String,
    /// `YYYY-MM-DD`.
    pub interview_date: String,
}

/// API request carrying a public contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub message: String,
}

/// Everything the public home page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    /// Published hero images in display order.
    pub hero_images: Vec<HeroImage>,
    /// Published hero phrases in display order.
    pub hero_phrases: Vec<HeroPhrase>,
    /// Published topics in display order, with category and tags.
    pub topics: Vec<TopicDetail>,
    /// All categories, for the topic filter.
    pub categories: Vec<TopicCategory>,
    /// All tags, for the topic filter.
    pub tags: Vec<TopicTag>,
    pub news: Vec<News>,
}

/// Record counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardResponse {
    pub topic_count: usize,
    pub hero_image_count: usize,
    pub hero_phrase_count: usize,
    pub category_count: usize,
    pub tag_count: usize,
    pub news_count: usize,
    pub contact_count: usize,
}

/// API response for the admin topic list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicListResponse {
    pub topics: Vec<TopicDetail>,
    /// The trimmed search query; empty when not searching.
    pub query: String,
}

/// API response for the admin contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    /// Newest first.
    pub contacts: Vec<Contact>,
    /// The trimmed search query; empty when not searching.
    pub query: String,
}

/// Choices offered by the topic create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFormOptions {
    pub categories: Vec<TopicCategory>,
    pub tags: Vec<TopicTag>,
}

/// The records of one orderable resource, as shown on its list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceListing {
    Topics(Vec<TopicDetail>),
    HeroImages(Vec<HeroImage>),
    HeroPhrases(Vec<HeroPhrase>),
    Categories(Vec<TopicCategory>),
    Tags(Vec<TopicTag>),
    News(Vec<News>),
}

impl ResourceListing {
    /// The resource these records belong to.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Topics(_) => ResourceKind::Topics,
            Self::HeroImages(_) => ResourceKind::HeroImages,
            Self::HeroPhrases(_) => ResourceKind::HeroPhrases,
            Self::Categories(_) => ResourceKind::Categories,
            Self::Tags(_) => ResourceKind::Tags,
            Self::News(_) => ResourceKind::News,
        }
    }

    /// The number of records listed.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Topics(records) => records.len(),
            Self::HeroImages(records) => records.len(),
            Self::HeroPhrases(records) => records.len(),
            Self::Categories(records) => records.len(),
            Self::Tags(records) => records.len(),
            Self::News(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The result of a bulk reorder/publish/edit submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The batch was written; the list page shows the new order.
    Applied {
        kind: ResourceKind,
        /// Rows written.
        count: usize,
    },
    /// The batch broke a content rule and nothing was written.
    Rejected {
        kind: ResourceKind,
        /// The message to show above the list.
        message: String,
        /// Every record with the values the administrator submitted.
        listing: ResourceListing,
    },
}
