//! HTTP Handlers

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use kernel::AuthContext;
use platform::client::ClientInfo;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::error::AuthError;
use crate::presentation::dto::LoginForm;
use crate::presentation::pages::login_page;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn show_login(auth: AuthContext) -> Html<String> {
    Html(login_page(None, "", auth.username()))
}

/// POST /login
///
/// Success redirects to `/` with the session cookie set. Failure re-renders
/// the form; the caller stays anonymous.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    client: ClientInfo,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let entered_username = form.username.clone();
    let input = SignInInput {
        username: form.username,
        password: form.password,
    };

    match use_case.execute(input, client).await {
        Ok(output) => {
            let cookie = state
                .config
                .session_cookie()
                .build_set_cookie(&output.session_token);
            ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        Err(e @ (AuthError::MissingCredentials | AuthError::InvalidCredentials)) => {
            e.log();
            Html(login_page(Some(&e.public_message()), &entered_username, None)).into_response()
        }
        Err(e) => {
            e.log();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(login_page(Some(&e.public_message()), &entered_username, None)),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Always clears the cookie and redirects, whatever state the session is in.
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        if let Err(e) = use_case.execute(&token).await {
            e.log();
        }
    }

    let cookie = state.config.session_cookie().build_delete_cookie();
    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}
