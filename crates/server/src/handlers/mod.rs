// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Handlers take the persistence lock for their database work only; file
//! reads and writes happen outside it.

mod admin;
mod auth;
mod public;
mod resources;
mod topics;

pub use admin::{handle_contact_delete, handle_contact_list, handle_contact_show, handle_dashboard};
pub use auth::{handle_login, handle_login_page, handle_logout};
pub use public::{handle_home, handle_public_topic, handle_serve_upload, handle_submit_contact};
pub use resources::{
    handle_bulk_update, handle_create_category, handle_create_hero_image,
    handle_create_hero_phrase, handle_create_news, handle_create_tag, handle_delete,
    handle_resource_list,
};
pub use topics::{
    handle_create_topic, handle_edit_topic, handle_new_topic, handle_preview_topic,
    handle_topic_list, handle_update_topic,
};

use folio_domain::ResourceKind;

/// Path of a resource's admin list page.
fn list_path(kind: ResourceKind) -> String {
    format!("/admin/{}", kind.as_str())
}
