// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server-rendered HTML.
//!
//! Pages are assembled as strings. Every value that originates from a
//! request or the database passes through [`escape_html`] before it is
//! written into markup.

mod admin;
mod listing;
mod public;
mod topics;

pub use admin::{contact_list, contact_show, dashboard, login};
pub use listing::listing_page;
pub use public::{contact_missing, home, topic};
pub use topics::{topic_form, topic_preview};

use axum::{http::StatusCode, response::Html};
use folio_domain::ResourceKind;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps a body in the public page shell.
fn document(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html lang=\"ja\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title></head><body>{body}</body></html>",
        escape_html(title)
    ))
}

/// Moves a bulk-form row up or down within its table.
const REORDER_SCRIPT: &str = "<script>\
document.addEventListener('click',function(e){\
var b=e.target.closest('[data-move]');if(!b)return;\
var r=b.closest('tr');\
if(b.dataset.move==='up'&&r.previousElementSibling){r.parentNode.insertBefore(r,r.previousElementSibling);}\
if(b.dataset.move==='down'&&r.nextElementSibling){r.parentNode.insertBefore(r.nextElementSibling,r);}\
});</script>";

/// Wraps a body in the admin console shell with its navigation.
fn admin_document(title: &str, body: &str) -> Html<String> {
    let mut nav: String = String::from("<nav><a href=\"/admin\">ダッシュボード</a>");
    for kind in ResourceKind::ALL {
        nav.push_str(&format!(
            " | <a href=\"/admin/{}\">{}</a>",
            kind.as_str(),
            kind.label()
        ));
    }
    nav.push_str(
        " | <a href=\"/admin/contacts\">お問い合わせ</a>\
<form method=\"post\" action=\"/logout\" style=\"display:inline\"> \
<button type=\"submit\">ログアウト</button></form></nav>",
    );

    document(
        title,
        &format!(
            "{nav}<main><h1>{}</h1>{body}</main>{REORDER_SCRIPT}",
            escape_html(title)
        ),
    )
}

/// Inline error message block; empty when there is no message.
fn error_block(message: Option<&str>) -> String {
    message.map_or_else(String::new, |message| {
        format!("<p class=\"error\" role=\"alert\">{}</p>", escape_html(message))
    })
}

const fn checked(value: bool) -> &'static str {
    if value { " checked" } else { "" }
}

const fn selected(value: bool) -> &'static str {
    if value { " selected" } else { "" }
}

/// Renders an error page.
pub fn error_page(status: StatusCode, message: &str, detail: Option<&str>) -> Html<String> {
    let detail: String = detail.map_or_else(String::new, |detail| {
        format!("<pre>{}</pre>", escape_html(detail))
    });
    document(
        message,
        &format!(
            "<h1>{}</h1><p>{}</p>{detail}<p><a href=\"/\">トップへ戻る</a></p>",
            status.as_u16(),
            escape_html(message)
        ),
    )
}
