// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form parsing at the HTTP boundary.
//!
//! Browsers submit bulk edits as repeated form fields: one `ids` entry per
//! row in the new display order, plus parallel arrays aligned by index.
//! [`parse_bulk_form`] turns those pairs into a fixed-shape [`BulkBatch`]
//! and rejects any shape that cannot be aligned unambiguously.
//!
//! | Field | Resources | Meaning |
//! |---|---|---|
//! | `ids` | all | record ids in new order |
//! | `published` | topics, hero images, hero phrases | `"1"` publishes the row at that index |
//! | `names` | categories, tags | new names |
//! | `texts` | hero phrases | new phrase text |
//! | `titles`, `subtitles`, `urls`, `interview_dates` | news | new news columns |

use folio::{BulkBatch, BulkRow, NewsEdit};
use folio_domain::{ResourceKind, ResourcePolicy, TextRule};
use std::collections::HashSet;
use thiserror::Error;

use crate::request_response::TopicRequest;

/// A submitted form whose shape cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// An id field holds something other than an integer.
    #[error("'{value}' is not a valid id in field '{field}'")]
    InvalidId { field: &'static str, value: String },

    /// The same id was submitted for two rows.
    #[error("Id {0} appears more than once")]
    DuplicateId(i64),

    /// A parallel array does not line up with `ids`.
    #[error("Field '{field}' has {actual} entries but {expected} ids were submitted")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// More publish flags than rows.
    #[error("Field 'published' has {actual} entries but only {expected} ids were submitted")]
    TooManyFlags { expected: usize, actual: usize },

    /// A field the resource does not accept.
    #[error("Field '{field}' is not accepted for {kind}")]
    UnexpectedField { field: String, kind: ResourceKind },

    /// A numeric field holds something other than an integer.
    #[error("'{value}' is not a valid number for field '{field}'")]
    InvalidNumber { field: &'static str, value: String },
}

impl FormError {
    /// The form field the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidId { field, .. }
            | Self::LengthMismatch { field, .. }
            | Self::InvalidNumber { field, .. } => field,
            Self::DuplicateId(_) => "ids",
            Self::TooManyFlags { .. } => "published",
            Self::UnexpectedField { field, .. } => field.as_str(),
        }
    }
}

/// Values of a bulk form grouped by field, each in submitted order.
#[derive(Debug, Default)]
struct BulkFields<'a> {
    ids: Vec<&'a str>,
    published: Vec<&'a str>,
    texts: Vec<&'a str>,
    titles: Vec<&'a str>,
    subtitles: Vec<&'a str>,
    urls: Vec<&'a str>,
    interview_dates: Vec<&'a str>,
}

/// Parses a bulk reorder/publish/edit submission.
///
/// # Arguments
///
/// * `kind` - The resource the form was submitted for
/// * `pairs` - The form fields exactly as submitted, in order
///
/// # Errors
///
/// Returns a `FormError` for non-integer or duplicate ids, parallel arrays
/// whose length differs from `ids`, a `published` array longer than `ids`,
/// and fields the resource does not accept.
pub fn parse_bulk_form(
    kind: ResourceKind,
    pairs: &[(String, String)],
) -> Result<BulkBatch, FormError> {
    let fields: BulkFields<'_> = group_fields(kind, pairs)?;
    let ids: Vec<i64> = parse_ids(&fields.ids)?;
    let expected: usize = ids.len();

    if fields.published.len() > expected {
        return Err(FormError::TooManyFlags {
            expected,
            actual: fields.published.len(),
        });
    }

    let policy: ResourcePolicy = kind.policy();
    let text_values: Option<&[&str]> = match (kind, policy.text_rule) {
        (_, TextRule::None) => None,
        (ResourceKind::News, _) => Some(fields.titles.as_slice()),
        _ => Some(fields.texts.as_slice()),
    };
    if let Some(values) = text_values {
        check_length(text_field_name(kind), values, expected)?;
    }
    if policy.has_news_fields {
        check_length("subtitles", &fields.subtitles, expected)?;
        check_length("urls", &fields.urls, expected)?;
        check_length("interview_dates", &fields.interview_dates, expected)?;
    }

    let rows: Vec<BulkRow> = ids
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let mut row: BulkRow = BulkRow::reorder(*id);
            if policy.has_publish_flag {
                row = row.with_published(fields.published.get(index).is_some_and(|v| *v == "1"));
            }
            if let Some(text) = text_values.and_then(|values| values.get(index)) {
                row = row.with_text(text);
            }
            if policy.has_news_fields {
                row = row.with_news(NewsEdit {
                    subtitle: fields.subtitles.get(index).map(ToString::to_string),
                    url: fields.urls.get(index).map(ToString::to_string).unwrap_or_default(),
                    interview_date: fields
                        .interview_dates
                        .get(index)
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                });
            }
            row
        })
        .collect();

    Ok(BulkBatch::new(rows))
}

/// The form field holding bulk text for a resource.
const fn text_field_name(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Categories | ResourceKind::Tags => "names",
        ResourceKind::News => "titles",
        ResourceKind::Topics | ResourceKind::HeroImages | ResourceKind::HeroPhrases => "texts",
    }
}

fn group_fields(
    kind: ResourceKind,
    pairs: &[(String, String)],
) -> Result<BulkFields<'_>, FormError> {
    let policy: ResourcePolicy = kind.policy();
    let text_field: Option<&str> =
        (policy.text_rule != TextRule::None).then(|| text_field_name(kind));
    let mut fields: BulkFields<'_> = BulkFields::default();

    for (name, value) in pairs {
        let value: &str = value.as_str();
        match name.as_str() {
            "ids" => fields.ids.push(value),
            "published" if policy.has_publish_flag => fields.published.push(value),
            "names" | "texts" if text_field == Some(name.as_str()) => fields.texts.push(value),
            "titles" if policy.has_news_fields => fields.titles.push(value),
            "subtitles" if policy.has_news_fields => fields.subtitles.push(value),
            "urls" if policy.has_news_fields => fields.urls.push(value),
            "interview_dates" if policy.has_news_fields => fields.interview_dates.push(value),
            other => {
                return Err(FormError::UnexpectedField {
                    field: other.to_string(),
                    kind,
                });
            }
        }
    }
    Ok(fields)
}

fn parse_ids(values: &[&str]) -> Result<Vec<i64>, FormError> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(values.len());
    let mut ids: Vec<i64> = Vec::with_capacity(values.len());
    for value in values {
        let id: i64 = parse_id("ids", value)?;
        if !seen.insert(id) {
            return Err(FormError::DuplicateId(id));
        }
        ids.push(id);
    }
    Ok(ids)
}

fn parse_id(field: &'static str, value: &str) -> Result<i64, FormError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidId {
            field,
            value: value.to_string(),
        })
}

const fn check_length(
    field: &'static str,
    values: &[&str],
    expected: usize,
) -> Result<(), FormError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(FormError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        })
    }
}

/// Parses an optional sort order field; blank means "not given".
///
/// # Errors
///
/// Returns `FormError::InvalidNumber` if the value is not an integer.
pub fn parse_sort_order(value: Option<&str>) -> Result<Option<i32>, FormError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse::<i32>()
            .map(Some)
            .map_err(|_| FormError::InvalidNumber {
                field: "sort_order",
                value: v.to_string(),
            }),
    }
}

/// Reads an HTML checkbox: checked boxes submit `on`.
#[must_use]
pub fn parse_checkbox(value: Option<&str>) -> bool {
    value == Some("on")
}

/// Parses the topic create/edit form.
///
/// `tags` may repeat; other fields are single-valued and the last value
/// wins. Fields the form does not define are ignored.
///
/// # Errors
///
/// Returns a `FormError` if `sort_order`, `category_id` or a tag id is not
/// an integer.
pub fn parse_topic_form(pairs: &[(String, String)]) -> Result<TopicRequest, FormError> {
    let mut request: TopicRequest = TopicRequest::default();
    let mut sort_order: Option<&str> = None;

    for (name, value) in pairs {
        let optional: Option<String> = Some(value.clone());
        match name.as_str() {
            "title" => request.title.clone_from(value),
            "excerpt" => request.excerpt = optional,
            "body" => request.body.clone_from(value),
            "link1_title" => request.link1_title = optional,
            "link1_url" => request.link1_url = optional,
            "link2_title" => request.link2_title = optional,
            "link2_url" => request.link2_url = optional,
            "is_published" => request.is_published = parse_checkbox(Some(value)),
            "sort_order" => sort_order = Some(value),
            "category_id" => {
                request.category_id = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_id("category_id", value)?)
                };
            }
            "tags" => request.tag_ids.push(parse_id("tags", value)?),
            _ => {}
        }
    }

    request.sort_order = parse_sort_order(sort_order)?;
    Ok(request)
}
