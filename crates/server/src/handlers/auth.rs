// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    extract::{Form, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use folio_api::{ApiError, LoginRequest, LoginResponse, login, logout};
use tracing::info;

use crate::AppState;
use crate::error::HttpError;
use crate::forms::LoginForm;
use crate::session::{MaybeAdmin, clear_session_cookie, session_cookie, session_token};
use crate::views;

/// Handler for GET `/login`.
pub async fn handle_login_page(MaybeAdmin(admin): MaybeAdmin) -> Response {
    if admin.is_some() {
        return Redirect::to("/admin").into_response();
    }
    views::login(None, "").into_response()
}

/// Handler for POST `/login`.
///
/// Wrong credentials re-render the form with 401 and the submitted email.
pub async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, HttpError> {
    let request: LoginRequest = LoginRequest::from(form);
    let mut persistence = app_state.persistence.lock().await;

    match login(&mut persistence, &request) {
        Ok(LoginResponse {
            session_token,
            email,
            ..
        }) => {
            info!(email = %email, "Admin signed in");
            Ok((
                [(header::SET_COOKIE, session_cookie(&session_token))],
                Redirect::to("/admin"),
            )
                .into_response())
        }
        Err(ApiError::AuthenticationFailed { reason }) => Ok((
            StatusCode::UNAUTHORIZED,
            views::login(Some(&reason), &request.email),
        )
            .into_response()),
        Err(err) => Err(err.into()),
    }
}

/// Handler for POST `/logout`.
pub async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    if let Some(token) = session_token(&headers) {
        let mut persistence = app_state.persistence.lock().await;
        logout(&mut persistence, token)?;
        info!("Admin signed out");
    }

    Ok((
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/login"),
    )
        .into_response())
}
