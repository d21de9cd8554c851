// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// News columns editable in bulk, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsEdit {
    pub subtitle: Option<String>,
    pub url: String,
    pub interview_date: String,
}

/// One row of a bulk submission.
///
/// Values are carried exactly as submitted; trimming and validation happen
/// when the batch is planned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkRow {
    pub id: i64,
    /// Name, phrase text or news title.
    pub text: Option<String>,
    /// `None` when the resource has no publish flag.
    pub published: Option<bool>,
    pub news: Option<NewsEdit>,
}

impl BulkRow {
    /// Creates a row that only moves a record.
    #[must_use]
    pub const fn reorder(id: i64) -> Self {
        Self {
            id,
            text: None,
            published: None,
            news: None,
        }
    }

    /// Sets the submitted text.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Sets the submitted publish flag.
    #[must_use]
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Sets the submitted news columns.
    #[must_use]
    pub fn with_news(mut self, news: NewsEdit) -> Self {
        self.news = Some(news);
        self
    }
}

/// A bulk submission: every record of one resource, in the new display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkBatch {
    rows: Vec<BulkRow>,
}

impl BulkBatch {
    /// Creates a batch from rows in submitted order.
    #[must_use]
    pub const fn new(rows: Vec<BulkRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows in submitted order.
    #[must_use]
    pub fn rows(&self) -> &[BulkRow] {
        &self.rows
    }

    /// Returns the submitted ids in order.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
