// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::content::{ContactDraft, HeroPhraseDraft, NamedDraft, NewsDraft, TopicDraft};
use crate::error::DomainError;
use std::collections::HashSet;
use time::Date;
use time::macros::format_description;

/// Extensions accepted for uploaded images, lowercased.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Trims a required text value.
///
/// # Arguments
///
/// * `field` - The field name reported on failure
/// * `value` - The submitted value
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the value is empty after trimming.
pub fn normalize_required_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text value, mapping blank input to `None`.
#[must_use]
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Validates that no name appears twice.
///
/// Comparison is exact: names are case-sensitive as submitted.
///
/// # Errors
///
/// Returns `DomainError::DuplicateName` naming the first repeated value.
pub fn validate_unique_names<'a, I>(names: I) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(DomainError::DuplicateName {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Parses an interview date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value is not a calendar date.
pub fn parse_interview_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|_| {
        DomainError::InvalidDate {
            value: trimmed.to_string(),
        }
    })
}

/// Parses and re-renders an interview date in canonical `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value is not a calendar date.
pub fn canonical_interview_date(value: &str) -> Result<String, DomainError> {
    let date: Date = parse_interview_date(value)?;
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|_| DomainError::InvalidDate {
            value: value.trim().to_string(),
        })
}

/// Validates and normalizes a topic draft.
///
/// Title and body are required. Optional fields are trimmed and blanked to
/// `None`. Duplicate tag ids are collapsed.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if title or body is blank.
pub fn validate_topic_draft(draft: TopicDraft) -> Result<TopicDraft, DomainError> {
    let title: String = normalize_required_text("title", &draft.title)?;
    let body: String = normalize_required_text("body", &draft.body)?;

    let mut tag_ids: Vec<i64> = Vec::with_capacity(draft.tag_ids.len());
    for id in draft.tag_ids {
        if !tag_ids.contains(&id) {
            tag_ids.push(id);
        }
    }

    Ok(TopicDraft {
        title,
        excerpt: normalize_optional_text(draft.excerpt.as_deref()),
        body,
        image_url: draft.image_url,
        link1_title: normalize_optional_text(draft.link1_title.as_deref()),
        link1_url: normalize_optional_text(draft.link1_url.as_deref()),
        link2_title: normalize_optional_text(draft.link2_title.as_deref()),
        link2_url: normalize_optional_text(draft.link2_url.as_deref()),
        is_published: draft.is_published,
        sort_order: draft.sort_order,
        category_id: draft.category_id,
        tag_ids,
    })
}

/// Validates and normalizes a hero phrase draft.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the text is blank.
pub fn validate_hero_phrase_draft(draft: HeroPhraseDraft) -> Result<HeroPhraseDraft, DomainError> {
    Ok(HeroPhraseDraft {
        text: normalize_required_text("text", &draft.text)?,
        ..draft
    })
}

/// Validates and normalizes a category or tag draft against existing names.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the name is blank, or
/// `DomainError::DuplicateName` if it is already taken.
pub fn validate_named_draft<'a, I>(
    draft: NamedDraft,
    existing: I,
) -> Result<NamedDraft, DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let name: String = normalize_required_text("name", &draft.name)?;
    if existing.into_iter().any(|taken| taken == name) {
        return Err(DomainError::DuplicateName { name });
    }
    Ok(NamedDraft {
        name,
        sort_order: draft.sort_order,
    })
}

/// Validates and normalizes a news draft.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if title, url or interview date is
/// blank, or `DomainError::InvalidDate` if the date does not parse.
pub fn validate_news_draft(draft: NewsDraft) -> Result<NewsDraft, DomainError> {
    let title: String = normalize_required_text("title", &draft.title)?;
    let url: String = normalize_required_text("url", &draft.url)?;
    let date: String = normalize_required_text("interview_date", &draft.interview_date)?;

    Ok(NewsDraft {
        title,
        subtitle: normalize_optional_text(draft.subtitle.as_deref()),
        url,
        interview_date: canonical_interview_date(&date)?,
    })
}

/// Validates and normalizes a contact form submission.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if name, email or message is blank.
pub fn validate_contact_draft(draft: ContactDraft) -> Result<ContactDraft, DomainError> {
    Ok(ContactDraft {
        name: normalize_required_text("name", &draft.name)?,
        email: normalize_required_text("email", &draft.email)?,
        phone_number: normalize_optional_text(draft.phone_number.as_deref()),
        message: normalize_required_text("message", &draft.message)?,
    })
}

/// Checks an uploaded file name against the accepted image formats.
///
/// Returns the lowercased extension including the leading dot.
///
/// # Errors
///
/// Returns `DomainError::HeicNotSupported` for `.heic`/`.heif`, and
/// `DomainError::UnsupportedImageFormat` for anything else outside
/// jpg, jpeg and png.
pub fn validate_image_extension(file_name: &str) -> Result<String, DomainError> {
    let extension: String = file_name
        .rfind('.')
        .map(|idx| file_name[idx..].to_lowercase())
        .unwrap_or_default();

    if extension == ".heic" || extension == ".heif" {
        return Err(DomainError::HeicNotSupported);
    }
    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DomainError::UnsupportedImageFormat { extension });
    }
    Ok(extension)
}
