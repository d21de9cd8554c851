// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List pages of the orderable resources.
//!
//! Each page carries one bulk form holding every record in display order:
//! a hidden `ids` input per row, plus the row's `published` select and
//! editable text inputs where the resource has them. Delete buttons submit
//! separate forms through the `form` attribute, since forms cannot nest.

use axum::response::Html;
use folio_api::ResourceListing;
use folio_domain::{ResourceKind, Topic, TopicDetail};

use super::{admin_document, error_block, escape_html, selected};

/// Leading cells of a bulk-form row.
fn row_start(id: i64) -> String {
    format!(
        "<tr><td><button type=\"button\" data-move=\"up\">↑</button>\
<button type=\"button\" data-move=\"down\">↓</button>\
<input type=\"hidden\" name=\"ids\" value=\"{id}\"></td>"
    )
}

/// Trailing delete cell of a bulk-form row.
fn row_end(id: i64) -> String {
    format!("<td><button type=\"submit\" form=\"delete-{id}\">削除</button></td></tr>")
}

fn published_cell(is_published: bool) -> String {
    format!(
        "<td><select name=\"published\"><option value=\"1\"{}>公開</option>\
<option value=\"0\"{}>非公開</option></select></td>",
        selected(is_published),
        selected(!is_published)
    )
}

fn text_cell(name: &str, value: &str) -> String {
    format!(
        "<td><input name=\"{name}\" value=\"{}\"></td>",
        escape_html(value)
    )
}

fn delete_forms(kind: ResourceKind, ids: &[i64]) -> String {
    ids.iter()
        .map(|id| {
            format!(
                "<form id=\"delete-{id}\" method=\"post\" action=\"/admin/{}/{id}/delete\"></form>",
                kind.as_str()
            )
        })
        .collect()
}

fn topic_row(detail: &TopicDetail) -> String {
    let topic: &Topic = &detail.topic;
    let category: &str = detail
        .category
        .as_ref()
        .map_or("-", |category| category.name.as_str());
    let tags: String = detail
        .tags
        .iter()
        .map(|tag| format!("#{}", escape_html(&tag.name)))
        .collect::<Vec<String>>()
        .join(" ");

    format!(
        "{}<td>{}</td><td>{}</td><td>{tags}</td>{}\
<td><a href=\"/admin/topics/{id}/edit\">編集</a> <a href=\"/admin/topics/{id}/preview\">プレビュー</a></td>{}",
        row_start(topic.id),
        escape_html(&topic.title),
        escape_html(category),
        published_cell(topic.is_published),
        row_end(topic.id),
        id = topic.id
    )
}

/// Header cells and rows of the bulk table, plus the ids in row order.
fn table_rows(listing: &ResourceListing) -> (&'static str, String, Vec<i64>) {
    let mut rows: String = String::new();
    let mut ids: Vec<i64> = Vec::with_capacity(listing.len());

    let header: &'static str = match listing {
        ResourceListing::Topics(topics) => {
            for detail in topics {
                rows.push_str(&topic_row(detail));
                ids.push(detail.topic.id);
            }
            "<th></th><th>タイトル</th><th>カテゴリ</th><th>タグ</th><th>公開</th><th></th><th></th>"
        }
        ResourceListing::HeroImages(images) => {
            for image in images {
                rows.push_str(&row_start(image.id));
                rows.push_str(&format!(
                    "<td><img src=\"{}\" alt=\"{}\" width=\"160\"></td>{}",
                    escape_html(&image.image_url),
                    escape_html(image.alt_text.as_deref().unwrap_or_default()),
                    published_cell(image.is_published)
                ));
                rows.push_str(&row_end(image.id));
                ids.push(image.id);
            }
            "<th></th><th>画像</th><th>公開</th><th></th>"
        }
        ResourceListing::HeroPhrases(phrases) => {
            for phrase in phrases {
                rows.push_str(&row_start(phrase.id));
                rows.push_str(&text_cell("texts", &phrase.text));
                rows.push_str(&published_cell(phrase.is_published));
                rows.push_str(&row_end(phrase.id));
                ids.push(phrase.id);
            }
            "<th></th><th>フレーズ</th><th>公開</th><th></th>"
        }
        ResourceListing::Categories(categories) => {
            for category in categories {
                rows.push_str(&row_start(category.id));
                rows.push_str(&text_cell("names", &category.name));
                rows.push_str(&row_end(category.id));
                ids.push(category.id);
            }
            "<th></th><th>カテゴリ名</th><th></th>"
        }
        ResourceListing::Tags(tags) => {
            for tag in tags {
                rows.push_str(&row_start(tag.id));
                rows.push_str(&text_cell("names", &tag.name));
                rows.push_str(&row_end(tag.id));
                ids.push(tag.id);
            }
            "<th></th><th>タグ名</th><th></th>"
        }
        ResourceListing::News(news) => {
            for item in news {
                rows.push_str(&row_start(item.id));
                rows.push_str(&text_cell("titles", &item.title));
                rows.push_str(&text_cell(
                    "subtitles",
                    item.subtitle.as_deref().unwrap_or_default(),
                ));
                rows.push_str(&text_cell("urls", &item.url));
                rows.push_str(&format!(
                    "<td><input type=\"date\" name=\"interview_dates\" value=\"{}\"></td>",
                    escape_html(&item.interview_date)
                ));
                rows.push_str(&row_end(item.id));
                ids.push(item.id);
            }
            "<th></th><th>タイトル</th><th>サブタイトル</th><th>リンク</th><th>取材日</th><th></th>"
        }
    };

    (header, rows, ids)
}

/// The create form shown above a resource's list.
fn create_form(kind: ResourceKind) -> String {
    let action: String = format!("/admin/{}", kind.as_str());
    let sort_order: &str =
        "<label>表示順 <input type=\"number\" name=\"sort_order\"></label>";
    match kind {
        ResourceKind::Topics => {
            String::from("<p><a href=\"/admin/topics/new\">新規作成</a></p>")
        }
        ResourceKind::HeroImages => format!(
            "<form method=\"post\" action=\"{action}\" enctype=\"multipart/form-data\">\
<label>画像 <input type=\"file\" name=\"image\" accept=\".jpg,.jpeg,.png\"></label>\
<label>代替テキスト <input name=\"alt_text\"></label>\
<label><input type=\"checkbox\" name=\"is_published\"> 公開</label>{sort_order}\
<button type=\"submit\">追加</button></form>"
        ),
        ResourceKind::HeroPhrases => format!(
            "<form method=\"post\" action=\"{action}\">\
<label>フレーズ <input name=\"text\"></label>\
<label><input type=\"checkbox\" name=\"is_published\"> 公開</label>{sort_order}\
<button type=\"submit\">追加</button></form>"
        ),
        ResourceKind::Categories | ResourceKind::Tags => format!(
            "<form method=\"post\" action=\"{action}\">\
<label>{}名 <input name=\"name\"></label>{sort_order}\
<button type=\"submit\">追加</button></form>",
            kind.label()
        ),
        ResourceKind::News => format!(
            "<form method=\"post\" action=\"{action}\">\
<label>タイトル <input name=\"title\"></label>\
<label>サブタイトル <input name=\"subtitle\"></label>\
<label>リンク <input type=\"url\" name=\"url\"></label>\
<label>取材日 <input type=\"date\" name=\"interview_date\"></label>\
<button type=\"submit\">追加</button></form>"
        ),
    }
}

/// Renders a resource's list page.
///
/// `query` is the topic search; while searching, the page lists only the
/// matching topics and omits the bulk form, which must carry every record.
/// `message` is an inline error from a rejected submission.
pub fn listing_page(listing: &ResourceListing, query: &str, message: Option<&str>) -> Html<String> {
    let kind: ResourceKind = listing.kind();
    let (header, rows, ids): (&str, String, Vec<i64>) = table_rows(listing);

    let mut body: String = error_block(message);
    body.push_str(&create_form(kind));

    if kind == ResourceKind::Topics {
        body.push_str(&format!(
            "<form method=\"get\" action=\"/admin/topics\">\
<input type=\"search\" name=\"q\" value=\"{}\"> <button type=\"submit\">検索</button></form>",
            escape_html(query)
        ));
    }

    let table: String = format!("<table><thead><tr>{header}</tr></thead><tbody>{rows}</tbody></table>");
    if listing.is_empty() {
        body.push_str("<p>まだ登録がありません。</p>");
    } else if query.is_empty() {
        body.push_str(&format!(
            "<form method=\"post\" action=\"/admin/{}/bulk\">{table}\
<button type=\"submit\">並び順・公開状態を保存</button></form>",
            kind.as_str()
        ));
    } else {
        body.push_str(&table);
    }
    body.push_str(&delete_forms(kind, &ids));

    admin_document(kind.label(), &body)
}
