// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::response::Html;
use folio_api::HomePage;
use folio_domain::{Topic, TopicDetail};

use super::{document, escape_html};

fn topic_links(topic: &Topic) -> String {
    [
        (&topic.link1_title, &topic.link1_url),
        (&topic.link2_title, &topic.link2_url),
    ]
    .into_iter()
    .filter_map(|(title, url)| {
        url.as_deref().map(|url| {
            let label: &str = title.as_deref().unwrap_or(url);
            format!(
                "<li><a href=\"{}\" rel=\"noopener\">{}</a></li>",
                escape_html(url),
                escape_html(label)
            )
        })
    })
    .collect()
}

fn tag_list(detail: &TopicDetail) -> String {
    detail
        .tags
        .iter()
        .map(|tag| format!("<li>#{}</li>", escape_html(&tag.name)))
        .collect()
}

/// The public home page.
pub fn home(page: &HomePage) -> Html<String> {
    let mut body: String = String::from("<section id=\"hero\">");
    for image in &page.hero_images {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&image.image_url),
            escape_html(image.alt_text.as_deref().unwrap_or_default())
        ));
    }
    body.push_str("<ul class=\"phrases\">");
    for phrase in &page.hero_phrases {
        body.push_str(&format!("<li>{}</li>", escape_html(&phrase.text)));
    }
    body.push_str("</ul></section>");

    body.push_str("<section id=\"topics\"><h2>TOPICS</h2><ul class=\"filters\">");
    for category in &page.categories {
        body.push_str(&format!(
            "<li data-category=\"{}\">{}</li>",
            category.id,
            escape_html(&category.name)
        ));
    }
    for tag in &page.tags {
        body.push_str(&format!(
            "<li data-tag=\"{}\">#{}</li>",
            tag.id,
            escape_html(&tag.name)
        ));
    }
    body.push_str("</ul>");
    for detail in &page.topics {
        let topic: &Topic = &detail.topic;
        let category: String = detail
            .category
            .as_ref()
            .map_or_else(String::new, |category| {
                format!("<p class=\"category\">{}</p>", escape_html(&category.name))
            });
        let image: String = topic.image_url.as_deref().map_or_else(String::new, |url| {
            format!("<img src=\"{}\" alt=\"\">", escape_html(url))
        });
        body.push_str(&format!(
            "<article>{image}<h3><a href=\"/topics/{}\">{}</a></h3>{category}<p>{}</p><ul class=\"tags\">{}</ul></article>",
            topic.id,
            escape_html(&topic.title),
            escape_html(topic.excerpt.as_deref().unwrap_or_default()),
            tag_list(detail)
        ));
    }
    body.push_str("</section>");

    body.push_str("<section id=\"news\"><h2>NEWS</h2><ul>");
    for item in &page.news {
        let subtitle: String = item.subtitle.as_deref().map_or_else(String::new, |subtitle| {
            format!(" <small>{}</small>", escape_html(subtitle))
        });
        body.push_str(&format!(
            "<li><time>{}</time> <a href=\"{}\" rel=\"noopener\">{}</a>{subtitle}</li>",
            escape_html(&item.interview_date),
            escape_html(&item.url),
            escape_html(&item.title)
        ));
    }
    body.push_str("</ul></section>");

    body.push_str(
        "<section id=\"contact\"><h2>CONTACT</h2>\
<form method=\"post\" action=\"/contact\">\
<label>お名前 <input name=\"name\" required></label>\
<label>メールアドレス <input type=\"email\" name=\"email\" required></label>\
<label>電話番号 <input name=\"phone-number\"></label>\
<label>お問い合わせ内容 <textarea name=\"message\" required></textarea></label>\
<button type=\"submit\">送信</button></form></section>",
    );

    document("PORTFOLIO", &body)
}

/// A topic's public detail page.
pub fn topic(detail: &TopicDetail) -> Html<String> {
    let topic: &Topic = &detail.topic;
    let image: String = topic.image_url.as_deref().map_or_else(String::new, |url| {
        format!("<img src=\"{}\" alt=\"\">", escape_html(url))
    });
    let category: String = detail
        .category
        .as_ref()
        .map_or_else(String::new, |category| {
            format!("<p class=\"category\">{}</p>", escape_html(&category.name))
        });

    document(
        &topic.title,
        &format!(
            "<article><h1>{}</h1>{category}{image}<div class=\"body\">{}</div>\
<ul class=\"tags\">{}</ul><ul class=\"links\">{}</ul></article>\
<p><a href=\"/#topics\">一覧へ戻る</a></p>",
            escape_html(&topic.title),
            escape_html(&topic.body).replace('\n', "<br>"),
            tag_list(detail),
            topic_links(topic)
        ),
    )
}

/// Body of the 400 response to an incomplete contact submission.
pub fn contact_missing(message: &str) -> Html<String> {
    document(
        "CONTACT",
        &format!(
            "<p class=\"error\" role=\"alert\">{}</p><p><a href=\"/#contact\">戻る</a></p>",
            escape_html(message)
        ),
    )
}
