//! Auth Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(Arc::new(repo), config)
}

/// Create a generic Auth router for any repository implementation
///
/// Routes: `GET /login`, `POST /login`, `GET /logout`.
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route(
            "/login",
            get(handlers::show_login).post(handlers::login::<R>),
        )
        .route("/logout", get(handlers::logout::<R>))
        .with_state(state)
}
