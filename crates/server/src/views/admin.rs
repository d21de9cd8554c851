// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::response::Html;
use folio_api::{ContactListResponse, DashboardResponse};
use folio_domain::{Contact, ResourceKind};

use super::{admin_document, document, error_block, escape_html};

/// The sign-in page.
pub fn login(message: Option<&str>, email: &str) -> Html<String> {
    document(
        "ログイン",
        &format!(
            "<main><h1>ログイン</h1>{}<form method=\"post\" action=\"/login\">\
<label>メールアドレス <input type=\"email\" name=\"email\" value=\"{}\" required></label>\
<label>パスワード <input type=\"password\" name=\"password\" required></label>\
<button type=\"submit\">ログイン</button></form></main>",
            error_block(message),
            escape_html(email)
        ),
    )
}

/// The admin dashboard.
pub fn dashboard(email: &str, counts: &DashboardResponse) -> Html<String> {
    let rows: [(ResourceKind, usize); 6] = [
        (ResourceKind::Topics, counts.topic_count),
        (ResourceKind::HeroImages, counts.hero_image_count),
        (ResourceKind::HeroPhrases, counts.hero_phrase_count),
        (ResourceKind::Categories, counts.category_count),
        (ResourceKind::Tags, counts.tag_count),
        (ResourceKind::News, counts.news_count),
    ];

    let mut body: String = format!(
        "<p>{} でログイン中</p><table><tbody>",
        escape_html(email)
    );
    for (kind, count) in rows {
        body.push_str(&format!(
            "<tr><th><a href=\"/admin/{}\">{}</a></th><td>{count}</td></tr>",
            kind.as_str(),
            kind.label()
        ));
    }
    body.push_str(&format!(
        "<tr><th><a href=\"/admin/contacts\">お問い合わせ</a></th><td>{}</td></tr></tbody></table>",
        counts.contact_count
    ));

    admin_document("ダッシュボード", &body)
}

/// The contact inquiry list.
pub fn contact_list(response: &ContactListResponse) -> Html<String> {
    let mut body: String = format!(
        "<form method=\"get\" action=\"/admin/contacts\">\
<input type=\"search\" name=\"q\" value=\"{}\"> <button type=\"submit\">検索</button></form>\
<table><thead><tr><th>受信日時</th><th>お名前</th><th>メールアドレス</th><th></th></tr></thead><tbody>",
        escape_html(&response.query)
    );
    for contact in &response.contacts {
        body.push_str(&format!(
            "<tr><td>{}</td><td><a href=\"/admin/contacts/{}\">{}</a></td><td>{}</td>\
<td><form method=\"post\" action=\"/admin/contacts/{}/delete\"><button type=\"submit\">削除</button></form></td></tr>",
            escape_html(&contact.created_at),
            contact.id,
            escape_html(&contact.name),
            escape_html(&contact.email),
            contact.id
        ));
    }
    if response.contacts.is_empty() {
        body.push_str("<tr><td colspan=\"4\">お問い合わせはありません。</td></tr>");
    }
    body.push_str("</tbody></table>");

    admin_document("お問い合わせ", &body)
}

/// A single contact inquiry.
pub fn contact_show(contact: &Contact) -> Html<String> {
    admin_document(
        "お問い合わせ",
        &format!(
            "<dl><dt>受信日時</dt><dd>{}</dd><dt>お名前</dt><dd>{}</dd>\
<dt>メールアドレス</dt><dd>{}</dd><dt>電話番号</dt><dd>{}</dd>\
<dt>お問い合わせ内容</dt><dd>{}</dd></dl>\
<form method=\"post\" action=\"/admin/contacts/{}/delete\"><button type=\"submit\">削除</button></form>\
<p><a href=\"/admin/contacts\">一覧へ戻る</a></p>",
            escape_html(&contact.created_at),
            escape_html(&contact.name),
            escape_html(&contact.email),
            escape_html(contact.phone_number.as_deref().unwrap_or("-")),
            escape_html(&contact.message).replace('\n', "<br>"),
            contact.id
        ),
    )
}
