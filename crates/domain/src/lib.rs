// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod content;
mod error;
mod search;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use content::{
    Contact, ContactDraft, HeroImage, HeroImageDraft, HeroPhrase, HeroPhraseDraft, NamedDraft,
    News, NewsDraft, Topic, TopicCategory, TopicDetail, TopicDraft, TopicTag,
};
pub use error::DomainError;
pub use search::{contact_matches_query, topic_matches_query};
pub use types::{ResourceKind, ResourcePolicy, TextRule};
pub use validation::{
    ALLOWED_IMAGE_EXTENSIONS, canonical_interview_date, normalize_optional_text,
    normalize_required_text, parse_interview_date, validate_contact_draft,
    validate_hero_phrase_draft, validate_image_extension, validate_named_draft,
    validate_news_draft, validate_topic_draft, validate_unique_names,
};
