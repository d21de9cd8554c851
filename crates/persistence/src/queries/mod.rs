// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `admins` - Administrator and session lookups
//! - `content` - Hero images, hero phrases, categories, tags, news and contacts
//! - `topics` - Topics with their category and tags
//!
//! Every function is generated as a `_sqlite` and a `_mysql` variant by
//! `backend_fn!`; the `Persistence` adapter in `lib.rs` picks one.

pub mod admins;
pub mod content;
pub mod topics;

pub use admins::{
    count_admins_mysql, count_admins_sqlite, get_admin_by_email_mysql, get_admin_by_email_sqlite,
    get_admin_by_id_mysql, get_admin_by_id_sqlite, get_session_by_token_mysql,
    get_session_by_token_sqlite, verify_password,
};
pub use content::{
    get_contact_mysql, get_contact_sqlite, list_categories_mysql, list_categories_sqlite,
    list_contacts_mysql, list_contacts_sqlite, list_hero_images_mysql, list_hero_images_sqlite,
    list_hero_phrases_mysql, list_hero_phrases_sqlite, list_news_mysql, list_news_sqlite,
    list_tags_mysql, list_tags_sqlite,
};
pub use topics::{get_topic_mysql, get_topic_sqlite, list_topics_mysql, list_topics_sqlite};
