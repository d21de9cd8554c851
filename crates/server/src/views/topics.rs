// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::response::Html;
use folio_api::{TopicFormOptions, TopicRequest};
use folio_domain::{Topic, TopicDetail};

use super::{admin_document, checked, error_block, escape_html, selected};

fn text_input(label: &str, name: &str, value: Option<&str>) -> String {
    format!(
        "<label>{label} <input name=\"{name}\" value=\"{}\"></label>",
        escape_html(value.unwrap_or_default())
    )
}

/// The topic create/edit form.
///
/// `topic_id` is `None` when creating. `image_url` is the topic's current
/// image; uploading a new one replaces it, leaving the input empty keeps it.
pub fn topic_form(
    topic_id: Option<i64>,
    values: &TopicRequest,
    image_url: Option<&str>,
    options: &TopicFormOptions,
    message: Option<&str>,
) -> Html<String> {
    let (title, action): (&str, String) = topic_id.map_or_else(
        || ("トピック新規作成", String::from("/admin/topics")),
        |id| ("トピック編集", format!("/admin/topics/{id}")),
    );

    let mut categories: String = format!(
        "<option value=\"\"{}>なし</option>",
        selected(values.category_id.is_none())
    );
    for category in &options.categories {
        categories.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            category.id,
            selected(values.category_id == Some(category.id)),
            escape_html(&category.name)
        ));
    }

    let tags: String = options
        .tags
        .iter()
        .map(|tag| {
            format!(
                "<label><input type=\"checkbox\" name=\"tags\" value=\"{}\"{}> {}</label>",
                tag.id,
                checked(values.tag_ids.contains(&tag.id)),
                escape_html(&tag.name)
            )
        })
        .collect();

    let current_image: String = image_url.map_or_else(String::new, |url| {
        format!("<img src=\"{}\" alt=\"\" width=\"240\">", escape_html(url))
    });
    let sort_order: String = values
        .sort_order
        .map_or_else(String::new, |order| order.to_string());

    let body: String = format!(
        "{}<form method=\"post\" action=\"{action}\" enctype=\"multipart/form-data\">\
{}{}<label>本文 <textarea name=\"body\">{}</textarea></label>\
{current_image}<label>画像 <input type=\"file\" name=\"image\" accept=\".jpg,.jpeg,.png\"></label>\
{}{}{}{}\
<label>カテゴリ <select name=\"category_id\">{categories}</select></label>\
<fieldset><legend>タグ</legend>{tags}</fieldset>\
<label><input type=\"checkbox\" name=\"is_published\"{}> 公開</label>\
<label>表示順 <input type=\"number\" name=\"sort_order\" value=\"{sort_order}\"></label>\
<button type=\"submit\">保存</button></form><p><a href=\"/admin/topics\">一覧へ戻る</a></p>",
        error_block(message),
        text_input("タイトル", "title", Some(&values.title)),
        text_input("概要", "excerpt", values.excerpt.as_deref()),
        escape_html(&values.body),
        text_input("リンク1 タイトル", "link1_title", values.link1_title.as_deref()),
        text_input("リンク1 URL", "link1_url", values.link1_url.as_deref()),
        text_input("リンク2 タイトル", "link2_title", values.link2_title.as_deref()),
        text_input("リンク2 URL", "link2_url", values.link2_url.as_deref()),
        checked(values.is_published)
    );

    admin_document(title, &body)
}

/// Admin preview of a topic as the public page would show it.
pub fn topic_preview(detail: &TopicDetail) -> Html<String> {
    let topic: &Topic = &detail.topic;
    let status: &str = if topic.is_published {
        "公開中"
    } else {
        "非公開"
    };
    let image: String = topic.image_url.as_deref().map_or_else(String::new, |url| {
        format!("<img src=\"{}\" alt=\"\">", escape_html(url))
    });

    admin_document(
        "プレビュー",
        &format!(
            "<p>{status}</p><article><h2>{}</h2>{image}<div class=\"body\">{}</div></article>\
<p><a href=\"/admin/topics/{}/edit\">編集</a> <a href=\"/admin/topics\">一覧へ戻る</a></p>",
            escape_html(&topic.title),
            escape_html(&topic.body).replace('\n', "<br>"),
            topic.id
        ),
    )
}
