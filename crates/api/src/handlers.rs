// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resource controllers.
//!
//! Each function takes the injected persistence layer and a typed request
//! and returns a typed response or an `ApiError`. Nothing here knows about
//! HTTP; the server maps results onto pages, redirects and status codes.

use folio::{BulkBatch, BulkError, BulkPlan, Orderable, plan_bulk_update};
use folio_domain::{
    Contact, ContactDraft, DomainError, HeroImage, HeroImageDraft, HeroPhrase, HeroPhraseDraft,
    NamedDraft, News, NewsDraft, ResourceKind, TopicCategory, TopicDetail, TopicDraft, TopicTag,
    contact_matches_query, normalize_optional_text, topic_matches_query, validate_contact_draft,
    validate_hero_phrase_draft, validate_named_draft, validate_news_draft, validate_topic_draft,
};
use folio_persistence::Persistence;
use tracing::{debug, info, warn};

use crate::auth::{AuthenticationService, NewSession};
use crate::error::{ApiError, translate_core_error, translate_persistence_error};
use crate::forms::parse_bulk_form;
use crate::messages::{CONTACT_REQUIRED, rejection_message};
use crate::request_response::{
    BulkOutcome, ContactListResponse, ContactRequest, DashboardResponse, HeroImageRequest,
    HeroPhraseRequest, HomePage, LoginRequest, LoginResponse, NamedRequest, NewsRequest,
    ResourceListing, TopicFormOptions, TopicListResponse, TopicRequest,
};

/// Builds the error for a content rule broken on a resource's page.
fn rejection(kind: ResourceKind, err: &DomainError) -> ApiError {
    warn!(resource = %kind, rule = err.code(), "Rejected submission");
    ApiError::DomainRuleViolation {
        rule: err.code().to_string(),
        message: rejection_message(kind, err),
    }
}

/// The sort order that places a new record after `existing` records.
fn next_sort_order(existing: usize) -> Result<i32, ApiError> {
    i32::try_from(existing).map_err(|_| ApiError::Internal {
        message: format!("Cannot place a record after {existing} existing records"),
    })
}

// ============================================================================
// Authentication
// ============================================================================

/// Signs an admin in.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the credentials do not match.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let session: NewSession =
        AuthenticationService::login(persistence, &request.email, &request.password)?;

    Ok(LoginResponse {
        session_token: session.token,
        email: session.admin.email,
        expires_at: session.expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

// ============================================================================
// Public site
// ============================================================================

/// Loads everything the public home page shows.
///
/// # Errors
///
/// Returns an error if the content cannot be read.
pub fn home_page(persistence: &mut Persistence) -> Result<HomePage, ApiError> {
    Ok(HomePage {
        hero_images: persistence
            .list_hero_images(true)
            .map_err(translate_persistence_error)?,
        hero_phrases: persistence
            .list_hero_phrases(true)
            .map_err(translate_persistence_error)?,
        topics: persistence
            .list_topics(true)
            .map_err(translate_persistence_error)?,
        categories: persistence
            .list_categories()
            .map_err(translate_persistence_error)?,
        tags: persistence.list_tags().map_err(translate_persistence_error)?,
        news: persistence.list_news().map_err(translate_persistence_error)?,
    })
}

/// Loads a topic for its public detail page.
///
/// Unpublished topics are visible only to a signed-in admin.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the topic does not exist or is
/// hidden from this viewer.
pub fn public_topic(
    persistence: &mut Persistence,
    topic_id: i64,
    viewer_is_admin: bool,
) -> Result<TopicDetail, ApiError> {
    match persistence
        .get_topic(topic_id)
        .map_err(translate_persistence_error)?
    {
        Some(detail) if detail.topic.is_published || viewer_is_admin => Ok(detail),
        _ => Err(ApiError::ResourceNotFound {
            resource_type: String::from("Topic"),
            message: format!("Topic {topic_id} is not available"),
        }),
    }
}

/// Stores a public contact form submission.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if name, email or message is
/// blank.
pub fn submit_contact(
    persistence: &mut Persistence,
    request: &ContactRequest,
) -> Result<i64, ApiError> {
    let draft: ContactDraft = validate_contact_draft(ContactDraft {
        name: request.name.clone(),
        email: request.email.clone(),
        phone_number: request.phone_number.clone(),
        message: request.message.clone(),
    })
    .map_err(|err| {
        warn!(rule = err.code(), "Rejected contact submission");
        ApiError::DomainRuleViolation {
            rule: err.code().to_string(),
            message: String::from(CONTACT_REQUIRED),
        }
    })?;

    let contact_id: i64 = persistence
        .create_contact(&draft)
        .map_err(translate_persistence_error)?;
    info!(contact_id, "Contact inquiry received");
    Ok(contact_id)
}

// ============================================================================
// Admin dashboard
// ============================================================================

/// Counts the records behind each admin section.
///
/// # Errors
///
/// Returns an error if the content cannot be read.
pub fn dashboard(persistence: &mut Persistence) -> Result<DashboardResponse, ApiError> {
    Ok(DashboardResponse {
        topic_count: persistence
            .list_topics(false)
            .map_err(translate_persistence_error)?
            .len(),
        hero_image_count: persistence
            .list_hero_images(false)
            .map_err(translate_persistence_error)?
            .len(),
        hero_phrase_count: persistence
            .list_hero_phrases(false)
            .map_err(translate_persistence_error)?
            .len(),
        category_count: persistence
            .list_categories()
            .map_err(translate_persistence_error)?
            .len(),
        tag_count: persistence
            .list_tags()
            .map_err(translate_persistence_error)?
            .len(),
        news_count: persistence
            .list_news()
            .map_err(translate_persistence_error)?
            .len(),
        contact_count: persistence
            .list_contacts()
            .map_err(translate_persistence_error)?
            .len(),
    })
}

// ============================================================================
// Topics
// ============================================================================

/// Lists topics for the admin console, optionally filtered by a search query.
///
/// # Errors
///
/// Returns an error if the topics cannot be read.
pub fn list_topics(
    persistence: &mut Persistence,
    query: &str,
) -> Result<TopicListResponse, ApiError> {
    let query: String = query.trim().to_string();
    let topics: Vec<TopicDetail> = persistence
        .list_topics(false)
        .map_err(translate_persistence_error)?
        .into_iter()
        .filter(|detail| topic_matches_query(detail, &query))
        .collect();

    debug!(count = topics.len(), query = %query, "Listed topics");
    Ok(TopicListResponse { topics, query })
}

/// Loads the category and tag choices for the topic form.
///
/// # Errors
///
/// Returns an error if the choices cannot be read.
pub fn topic_form_options(persistence: &mut Persistence) -> Result<TopicFormOptions, ApiError> {
    Ok(TopicFormOptions {
        categories: persistence
            .list_categories()
            .map_err(translate_persistence_error)?,
        tags: persistence.list_tags().map_err(translate_persistence_error)?,
    })
}

/// Loads a topic for editing or preview.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the topic does not exist.
pub fn get_topic(persistence: &mut Persistence, topic_id: i64) -> Result<TopicDetail, ApiError> {
    persistence
        .get_topic(topic_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Topic"),
            message: format!("Topic {topic_id} does not exist"),
        })
}

fn topic_draft(request: &TopicRequest, image_url: Option<String>, sort_order: i32) -> TopicDraft {
    TopicDraft {
        title: request.title.clone(),
        excerpt: request.excerpt.clone(),
        body: request.body.clone(),
        image_url,
        link1_title: request.link1_title.clone(),
        link1_url: request.link1_url.clone(),
        link2_title: request.link2_title.clone(),
        link2_url: request.link2_url.clone(),
        is_published: request.is_published,
        sort_order,
        category_id: request.category_id,
        tag_ids: request.tag_ids.clone(),
    }
}

/// Creates a topic.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The submitted topic fields
/// * `image_url` - Public URL of an image stored for this topic, if any
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if title or body is blank, and
/// `ApiError::ResourceNotFound` if the category or a tag does not exist.
pub fn create_topic(
    persistence: &mut Persistence,
    request: &TopicRequest,
    image_url: Option<String>,
) -> Result<i64, ApiError> {
    let sort_order: i32 = match request.sort_order {
        Some(sort_order) => sort_order,
        None => next_sort_order(
            persistence
                .list_topics(false)
                .map_err(translate_persistence_error)?
                .len(),
        )?,
    };

    let draft: TopicDraft = validate_topic_draft(topic_draft(request, image_url, sort_order))
        .map_err(|err| rejection(ResourceKind::Topics, &err))?;
    let topic_id: i64 = persistence
        .create_topic(&draft)
        .map_err(translate_persistence_error)?;

    info!(topic_id, "Created topic");
    Ok(topic_id)
}

/// Replaces a topic's fields and tag set.
///
/// The stored image is kept unless `image_url` carries a new upload. A
/// request without a sort order keeps the stored position.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the topic, its category or a tag
/// does not exist, and `ApiError::DomainRuleViolation` if title or body is
/// blank.
pub fn update_topic(
    persistence: &mut Persistence,
    topic_id: i64,
    request: &TopicRequest,
    image_url: Option<String>,
) -> Result<(), ApiError> {
    let sort_order: i32 = match request.sort_order {
        Some(sort_order) => sort_order,
        None => get_topic(persistence, topic_id)?.topic.sort_order,
    };

    let draft: TopicDraft = validate_topic_draft(topic_draft(request, image_url, sort_order))
        .map_err(|err| rejection(ResourceKind::Topics, &err))?;
    persistence
        .update_topic(topic_id, &draft)
        .map_err(translate_persistence_error)?;

    info!(topic_id, "Updated topic");
    Ok(())
}

/// Deletes a topic and its tag links.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the topic does not exist.
pub fn delete_topic(persistence: &mut Persistence, topic_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_topic(topic_id)
        .map_err(translate_persistence_error)
}

// ============================================================================
// Hero images and phrases
// ============================================================================

/// Lists every hero image in display order.
///
/// # Errors
///
/// Returns an error if the images cannot be read.
pub fn list_hero_images(persistence: &mut Persistence) -> Result<Vec<HeroImage>, ApiError> {
    persistence
        .list_hero_images(false)
        .map_err(translate_persistence_error)
}

/// Adds a hero image whose file has already been stored.
///
/// # Errors
///
/// Returns an error if the image cannot be stored.
pub fn create_hero_image(
    persistence: &mut Persistence,
    request: &HeroImageRequest,
    image_url: String,
) -> Result<i64, ApiError> {
    let sort_order: i32 = match request.sort_order {
        Some(sort_order) => sort_order,
        None => next_sort_order(list_hero_images(persistence)?.len())?,
    };

    let image_id: i64 = persistence
        .create_hero_image(&HeroImageDraft {
            image_url,
            alt_text: normalize_optional_text(request.alt_text.as_deref()),
            is_published: request.is_published,
            sort_order,
        })
        .map_err(translate_persistence_error)?;

    info!(image_id, "Created hero image");
    Ok(image_id)
}

/// Deletes a hero image record.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the image does not exist.
pub fn delete_hero_image(persistence: &mut Persistence, image_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_hero_image(image_id)
        .map_err(translate_persistence_error)
}

/// Lists every hero phrase in display order.
///
/// # Errors
///
/// Returns an error if the phrases cannot be read.
pub fn list_hero_phrases(persistence: &mut Persistence) -> Result<Vec<HeroPhrase>, ApiError> {
    persistence
        .list_hero_phrases(false)
        .map_err(translate_persistence_error)
}

/// Adds a hero phrase.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if the text is blank.
pub fn create_hero_phrase(
    persistence: &mut Persistence,
    request: &HeroPhraseRequest,
) -> Result<i64, ApiError> {
    let sort_order: i32 = match request.sort_order {
        Some(sort_order) => sort_order,
        None => next_sort_order(list_hero_phrases(persistence)?.len())?,
    };

    let draft: HeroPhraseDraft = validate_hero_phrase_draft(HeroPhraseDraft {
        text: request.text.clone(),
        is_published: request.is_published,
        sort_order,
    })
    .map_err(|err| rejection(ResourceKind::HeroPhrases, &err))?;

    let phrase_id: i64 = persistence
        .create_hero_phrase(&draft)
        .map_err(translate_persistence_error)?;
    info!(phrase_id, "Created hero phrase");
    Ok(phrase_id)
}

/// Deletes a hero phrase.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the phrase does not exist.
pub fn delete_hero_phrase(persistence: &mut Persistence, phrase_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_hero_phrase(phrase_id)
        .map_err(translate_persistence_error)
}

// ============================================================================
// Categories and tags
// ============================================================================

/// Lists every category in display order.
///
/// # Errors
///
/// Returns an error if the categories cannot be read.
pub fn list_categories(persistence: &mut Persistence) -> Result<Vec<TopicCategory>, ApiError> {
    persistence
        .list_categories()
        .map_err(translate_persistence_error)
}

/// Adds a category.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if the name is blank or taken.
pub fn create_category(
    persistence: &mut Persistence,
    request: &NamedRequest,
) -> Result<i64, ApiError> {
    let existing: Vec<TopicCategory> = list_categories(persistence)?;
    let draft: NamedDraft = named_draft(
        ResourceKind::Categories,
        request,
        existing.iter().map(|category| category.name.as_str()),
        existing.len(),
    )?;

    let category_id: i64 = persistence
        .create_category(&draft)
        .map_err(translate_persistence_error)?;
    info!(category_id, "Created category");
    Ok(category_id)
}

/// Deletes a category. Topics in it become uncategorized.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the category does not exist.
pub fn delete_category(persistence: &mut Persistence, category_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_category(category_id)
        .map_err(translate_persistence_error)
}

/// Lists every tag in display order.
///
/// # Errors
///
/// Returns an error if the tags cannot be read.
pub fn list_tags(persistence: &mut Persistence) -> Result<Vec<TopicTag>, ApiError> {
    persistence.list_tags().map_err(translate_persistence_error)
}

/// Adds a tag.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if the name is blank or taken.
pub fn create_tag(persistence: &mut Persistence, request: &NamedRequest) -> Result<i64, ApiError> {
    let existing: Vec<TopicTag> = list_tags(persistence)?;
    let draft: NamedDraft = named_draft(
        ResourceKind::Tags,
        request,
        existing.iter().map(|tag| tag.name.as_str()),
        existing.len(),
    )?;

    let tag_id: i64 = persistence
        .create_tag(&draft)
        .map_err(translate_persistence_error)?;
    info!(tag_id, "Created tag");
    Ok(tag_id)
}

/// Deletes a tag and its topic links.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the tag does not exist.
pub fn delete_tag(persistence: &mut Persistence, tag_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_tag(tag_id)
        .map_err(translate_persistence_error)
}

fn named_draft<'a, I>(
    kind: ResourceKind,
    request: &NamedRequest,
    existing_names: I,
    existing_count: usize,
) -> Result<NamedDraft, ApiError>
where
    I: IntoIterator<Item = &'a str>,
{
    let sort_order: i32 = match request.sort_order {
        Some(sort_order) => sort_order,
        None => next_sort_order(existing_count)?,
    };

    validate_named_draft(
        NamedDraft {
            name: request.name.clone(),
            sort_order,
        },
        existing_names,
    )
    .map_err(|err| rejection(kind, &err))
}

// ============================================================================
// News
// ============================================================================

/// Lists every news item in display order.
///
/// # Errors
///
/// Returns an error if the news cannot be read.
pub fn list_news(persistence: &mut Persistence) -> Result<Vec<News>, ApiError> {
    persistence.list_news().map_err(translate_persistence_error)
}

/// Adds a news item at the top of the list.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if title, url or interview date
/// is blank or the date does not parse.
pub fn create_news(persistence: &mut Persistence, request: &NewsRequest) -> Result<i64, ApiError> {
    let draft: NewsDraft = validate_news_draft(NewsDraft {
        title: request.title.clone(),
        subtitle: request.subtitle.clone(),
        url: request.url.clone(),
        interview_date: request.interview_date.clone(),
    })
    .map_err(|err| rejection(ResourceKind::News, &err))?;

    let news_id: i64 = persistence
        .create_news(&draft)
        .map_err(translate_persistence_error)?;
    info!(news_id, "Created news item");
    Ok(news_id)
}

/// Deletes a news item.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the item does not exist.
pub fn delete_news(persistence: &mut Persistence, news_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_news(news_id)
        .map_err(translate_persistence_error)
}

// ============================================================================
// Contacts
// ============================================================================

/// Lists contact inquiries, newest first, optionally filtered by a search
/// query.
///
/// # Errors
///
/// Returns an error if the inquiries cannot be read.
pub fn list_contacts(
    persistence: &mut Persistence,
    query: &str,
) -> Result<ContactListResponse, ApiError> {
    let query: String = query.trim().to_string();
    let contacts: Vec<Contact> = persistence
        .list_contacts()
        .map_err(translate_persistence_error)?
        .into_iter()
        .filter(|contact| contact_matches_query(contact, &query))
        .collect();

    Ok(ContactListResponse { contacts, query })
}

/// Loads one contact inquiry.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the inquiry does not exist.
pub fn get_contact(persistence: &mut Persistence, contact_id: i64) -> Result<Contact, ApiError> {
    persistence
        .get_contact(contact_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Contact"),
            message: format!("Contact {contact_id} does not exist"),
        })
}

/// Deletes a contact inquiry.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the inquiry does not exist.
pub fn delete_contact(persistence: &mut Persistence, contact_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_contact(contact_id)
        .map_err(translate_persistence_error)
}

// ============================================================================
// Bulk reorder/publish/edit
// ============================================================================

/// Loads every record of an orderable resource in display order.
///
/// # Errors
///
/// Returns an error if the records cannot be read.
pub fn resource_listing(
    persistence: &mut Persistence,
    kind: ResourceKind,
) -> Result<ResourceListing, ApiError> {
    let listing: ResourceListing = match kind {
        ResourceKind::Topics => ResourceListing::Topics(
            persistence
                .list_topics(false)
                .map_err(translate_persistence_error)?,
        ),
        ResourceKind::HeroImages => ResourceListing::HeroImages(list_hero_images(persistence)?),
        ResourceKind::HeroPhrases => ResourceListing::HeroPhrases(list_hero_phrases(persistence)?),
        ResourceKind::Categories => ResourceListing::Categories(list_categories(persistence)?),
        ResourceKind::Tags => ResourceListing::Tags(list_tags(persistence)?),
        ResourceKind::News => ResourceListing::News(list_news(persistence)?),
    };
    Ok(listing)
}

/// Applies a bulk reorder/publish/edit submission atomically.
///
/// The form is parsed into a batch, planned against every current record
/// of the resource, and written in one transaction. A batch that breaks a
/// content rule is not an error: it comes back as
/// [`BulkOutcome::Rejected`] carrying the attempted values for redisplay,
/// and nothing is written.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `kind` - The resource the form belongs to
/// * `pairs` - The submitted form fields, in order
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a malformed form,
/// `ApiError::Conflict` if the submitted ids are not exactly the current
/// records, and `ApiError::Internal` if storage fails. No rows change in
/// any error case.
pub fn bulk_update(
    persistence: &mut Persistence,
    kind: ResourceKind,
    pairs: &[(String, String)],
) -> Result<BulkOutcome, ApiError> {
    let batch: BulkBatch = parse_bulk_form(kind, pairs).inspect_err(|err| {
        warn!(resource = %kind, error = %err, "Malformed bulk form");
    })?;

    match resource_listing(persistence, kind)? {
        ResourceListing::Topics(current) => {
            run_bulk(persistence, kind, &current, &batch, ResourceListing::Topics)
        }
        ResourceListing::HeroImages(current) => {
            run_bulk(persistence, kind, &current, &batch, ResourceListing::HeroImages)
        }
        ResourceListing::HeroPhrases(current) => {
            run_bulk(persistence, kind, &current, &batch, ResourceListing::HeroPhrases)
        }
        ResourceListing::Categories(current) => {
            run_bulk(persistence, kind, &current, &batch, ResourceListing::Categories)
        }
        ResourceListing::Tags(current) => {
            run_bulk(persistence, kind, &current, &batch, ResourceListing::Tags)
        }
        ResourceListing::News(current) => {
            run_bulk(persistence, kind, &current, &batch, ResourceListing::News)
        }
    }
}

fn run_bulk<R: Orderable>(
    persistence: &mut Persistence,
    kind: ResourceKind,
    current: &[R],
    batch: &BulkBatch,
    wrap: fn(Vec<R>) -> ResourceListing,
) -> Result<BulkOutcome, ApiError> {
    let plan: BulkPlan = match plan_bulk_update(kind, current, batch) {
        Ok(plan) => plan,
        Err(BulkError::Rejected(rejected)) => {
            warn!(
                resource = %kind,
                rule = rejected.error.code(),
                "Bulk update rejected"
            );
            return Ok(BulkOutcome::Rejected {
                kind,
                message: rejection_message(kind, &rejected.error),
                listing: wrap(rejected.attempted),
            });
        }
        Err(BulkError::Conflict(err)) => {
            warn!(resource = %kind, error = %err, "Bulk update does not match current records");
            return Err(translate_core_error(err));
        }
    };

    let count: usize = persistence
        .apply_bulk_plan(&plan)
        .map_err(translate_persistence_error)?;
    info!(resource = %kind, count, "Applied bulk update");
    Ok(BulkOutcome::Applied { kind, count })
}
