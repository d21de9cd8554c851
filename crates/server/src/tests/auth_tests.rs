// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::{StatusCode, header};

use crate::tests::helpers::{
    ADMIN_EMAIL, body_text, create_test_app, get, location, post_form, send, sign_in,
};

#[tokio::test]
async fn test_login_sets_session_cookie_and_redirects() {
    let (_state, app) = create_test_app();

    let response = send(
        &app,
        post_form(
            "/login",
            None,
            &[("email", ADMIN_EMAIL), ("password", "correct-horse-battery")],
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
    let set_cookie: &str = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("folio_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=604800"));
}

#[tokio::test]
async fn test_wrong_password_rerenders_login_with_message() {
    let (_state, app) = create_test_app();

    let response = send(
        &app,
        post_form(
            "/login",
            None,
            &[("email", ADMIN_EMAIL), ("password", "nope")],
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body: String = body_text(response).await;
    assert!(body.contains("メールかパスワードが違います。"));
    assert!(body.contains("value=\"admin@example.com\""));
}

#[tokio::test]
async fn test_admin_routes_redirect_to_login_without_session() {
    let (_state, app) = create_test_app();

    for uri in ["/admin", "/admin/topics", "/admin/tags", "/admin/contacts"] {
        let response = send(&app, get(uri, None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/login", "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_session_cookie_redirects_to_login() {
    let (_state, app) = create_test_app();

    let response = send(&app, get("/admin", Some("folio_session=forged"))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_dashboard_renders_for_signed_in_admin() {
    let (_state, app) = create_test_app();
    let cookie: String = sign_in(&app).await;

    let response = send(&app, get("/admin", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: String = body_text(response).await;
    assert!(body.contains("ダッシュボード"));
    assert!(body.contains(ADMIN_EMAIL));
}

#[tokio::test]
async fn test_login_page_redirects_signed_in_admin() {
    let (_state, app) = create_test_app();
    let cookie: String = sign_in(&app).await;

    let response = send(&app, get("/login", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn test_logout_clears_cookie_and_ends_session() {
    let (_state, app) = create_test_app();
    let cookie: String = sign_in(&app).await;

    let response = send(&app, post_form("/logout", Some(&cookie), &[])).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let set_cookie: &str = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));

    let response = send(&app, get("/admin", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_session_cookie_found_among_others() {
    let (_state, app) = create_test_app();
    let cookie: String = sign_in(&app).await;

    let response = send(&app, get("/admin", Some(&format!("theme=dark; {cookie}")))).await;

    assert_eq!(response.status(), StatusCode::OK);
}
