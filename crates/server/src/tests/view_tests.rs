// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{Router, http::StatusCode};

use crate::tests::helpers::{body_text, create_test_app_state, post_form, send, sign_in};
use crate::views::{error_page, escape_html};
use crate::{Environment, build_router};

#[test]
fn test_escape_html_covers_markup_and_quotes() {
    assert_eq!(
        escape_html("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("写真"), "写真");
}

#[test]
fn test_error_page_shows_detail_only_when_given() {
    let with_detail: String = error_page(StatusCode::NOT_FOUND, "Not Found", Some("Tag <9>")).0;
    assert!(with_detail.contains("<h1>404</h1>"));
    assert!(with_detail.contains("<pre>Tag &lt;9&gt;</pre>"));

    let without: String = error_page(StatusCode::NOT_FOUND, "Not Found", None).0;
    assert!(!without.contains("<pre>"));
}

#[tokio::test]
async fn test_development_reveals_error_detail() {
    let app: Router = build_router(create_test_app_state(Environment::Development));
    let cookie: String = sign_in(&app).await;

    let response = send(&app, post_form("/admin/tags/999/delete", Some(&cookie), &[])).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: String = body_text(response).await;
    assert!(body.contains("<pre>"));
    assert!(body.contains("999"));
}

#[tokio::test]
async fn test_production_hides_error_detail() {
    let app: Router = build_router(create_test_app_state(Environment::Production));
    let cookie: String = sign_in(&app).await;

    let response = send(&app, post_form("/admin/tags/999/delete", Some(&cookie), &[])).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: String = body_text(response).await;
    assert!(body.contains("Not Found"));
    assert!(!body.contains("<pre>"));
}
