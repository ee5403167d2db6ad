//! Auth Middleware
//!
//! Resolves the session cookie on every request and stores the resulting
//! [`AuthContext`] in the request extensions, where handlers pick it up via
//! the `AuthContext` extractor.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use kernel::AuthContext;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AdminSessionRepository;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

/// Attach an [`AuthContext`] to the request. Never rejects.
///
/// ```ignore
/// app.layer(axum::middleware::from_fn_with_state(state, resolve_auth_context::<Repo>))
/// ```
pub async fn resolve_auth_context<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let context = use_case.resolve(token.as_deref()).await;

    req.extensions_mut().insert::<AuthContext>(context);

    next.run(req).await
}
