// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::batch::BulkRow;
use folio_domain::{HeroImage, HeroPhrase, News, TopicCategory, TopicDetail, TopicTag};

/// A record whose display position is controlled by bulk reorder.
pub trait Orderable: Clone {
    /// The immutable record id.
    fn id(&self) -> i64;

    /// The stored display position.
    fn sort_order(&self) -> i32;

    /// Returns a copy carrying the values submitted for it in a bulk row.
    ///
    /// Used to redisplay a rejected batch: the copy shows what the
    /// administrator attempted, not what is stored.
    #[must_use]
    fn with_submitted(&self, row: &BulkRow, sort_order: i32) -> Self;
}

fn submitted_text(row: &BulkRow) -> Option<String> {
    row.text.as_deref().map(|text| text.trim().to_string())
}

impl Orderable for TopicDetail {
    fn id(&self) -> i64 {
        self.topic.id
    }

    fn sort_order(&self) -> i32 {
        self.topic.sort_order
    }

    fn with_submitted(&self, row: &BulkRow, sort_order: i32) -> Self {
        let mut copy: Self = self.clone();
        copy.topic.sort_order = sort_order;
        copy.topic.is_published = row.published.unwrap_or(false);
        copy
    }
}

impl Orderable for HeroImage {
    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn with_submitted(&self, row: &BulkRow, sort_order: i32) -> Self {
        Self {
            sort_order,
            is_published: row.published.unwrap_or(false),
            ..self.clone()
        }
    }
}

impl Orderable for HeroPhrase {
    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn with_submitted(&self, row: &BulkRow, sort_order: i32) -> Self {
        Self {
            text: submitted_text(row).unwrap_or_else(|| self.text.clone()),
            sort_order,
            is_published: row.published.unwrap_or(false),
            ..self.clone()
        }
    }
}

impl Orderable for TopicCategory {
    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn with_submitted(&self, row: &BulkRow, sort_order: i32) -> Self {
        Self {
            name: submitted_text(row).unwrap_or_else(|| self.name.clone()),
            sort_order,
            ..self.clone()
        }
    }
}

impl Orderable for TopicTag {
    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn with_submitted(&self, row: &BulkRow, sort_order: i32) -> Self {
        Self {
            name: submitted_text(row).unwrap_or_else(|| self.name.clone()),
            sort_order,
            ..self.clone()
        }
    }
}

impl Orderable for News {
    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn with_submitted(&self, row: &BulkRow, sort_order: i32) -> Self {
        let mut copy: Self = Self {
            title: submitted_text(row).unwrap_or_else(|| self.title.clone()),
            sort_order,
            ..self.clone()
        };
        if let Some(news) = &row.news {
            copy.subtitle = news.subtitle.clone();
            copy.url = news.url.trim().to_string();
            copy.interview_date = news.interview_date.trim().to_string();
        }
        copy
    }
}
