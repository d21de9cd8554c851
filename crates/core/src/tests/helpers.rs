// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use folio_domain::{HeroImage, HeroPhrase, News, TopicTag};

pub const STAMP: &str = "2026-01-01T00:00:00.000000Z";

pub fn create_test_tag(id: i64, name: &str, sort_order: i32) -> TopicTag {
    TopicTag {
        id,
        name: String::from(name),
        sort_order,
        created_at: String::from(STAMP),
        updated_at: String::from(STAMP),
    }
}

/// The three tags from the reorder-with-swap scenario.
pub fn create_test_tags() -> Vec<TopicTag> {
    vec![
        create_test_tag(1, "sample1", 0),
        create_test_tag(2, "sample2", 1),
        create_test_tag(3, "x", 2),
    ]
}

pub fn create_test_phrase(id: i64, text: &str, sort_order: i32, is_published: bool) -> HeroPhrase {
    HeroPhrase {
        id,
        text: String::from(text),
        is_published,
        sort_order,
        created_at: String::from(STAMP),
        updated_at: String::from(STAMP),
    }
}

pub fn create_test_image(id: i64, sort_order: i32, is_published: bool) -> HeroImage {
    HeroImage {
        id,
        image_url: format!("/uploads/{id}-hero.jpg"),
        alt_text: None,
        is_published,
        sort_order,
        created_at: String::from(STAMP),
        updated_at: String::from(STAMP),
    }
}

pub fn create_test_news(id: i64, title: &str, interview_date: &str) -> News {
    News {
        id,
        title: String::from(title),
        subtitle: None,
        url: format!("https://example.com/news/{id}"),
        interview_date: String::from(interview_date),
        sort_order: 0,
        created_at: String::from(STAMP),
        updated_at: String::from(STAMP),
    }
}
