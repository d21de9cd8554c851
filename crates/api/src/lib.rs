// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Folio portfolio site.
//!
//! Sits between the HTTP server and the core/persistence crates: parses
//! submitted forms into typed requests, authenticates admin sessions,
//! validates content, and translates every lower-layer error into an
//! [`ApiError`].

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod forms;
mod handlers;
mod messages;
mod request_response;
mod uploads;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedAdmin, AuthenticationService, NewSession};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use forms::{FormError, parse_bulk_form, parse_checkbox, parse_sort_order, parse_topic_form};
pub use handlers::{
    bulk_update, create_category, create_hero_image, create_hero_phrase, create_news,
    create_tag, create_topic, dashboard, delete_category, delete_contact, delete_hero_image,
    delete_hero_phrase, delete_news, delete_tag, delete_topic, get_contact, get_topic, home_page,
    list_categories, list_contacts, list_hero_images, list_hero_phrases, list_news, list_tags,
    list_topics, login, logout, public_topic, resource_listing, submit_contact,
    topic_form_options, update_topic,
};
pub use messages::{CONTACT_REQUIRED, LOGIN_FAILED, rejection_message, upload_message};
pub use request_response::{
    BulkOutcome, ContactListResponse, ContactRequest, DashboardResponse, HeroImageRequest,
    HeroPhraseRequest, HomePage, LoginRequest, LoginResponse, NamedRequest, NewsRequest,
    ResourceListing, TopicFormOptions, TopicListResponse, TopicRequest,
};
pub use uploads::{StoredUpload, UPLOADS_URL_PREFIX, is_servable_name, prepare_upload};
