//! Router assembly

use std::sync::Arc;

use auth::domain::repository::{AdminRepository, AdminSessionRepository};
use auth::{AuthConfig, AuthMiddlewareState, auth_router_generic, resolve_auth_context};
use axum::{Router, middleware};
use inventory::domain::probe::Prober;
use inventory::domain::repository::ServerRepository;
use inventory::inventory_router_generic;
use tower_http::trace::TraceLayer;

/// Build the full application: login/logout, the server inventory, and
/// the session middleware that attaches an `AuthContext` to every request.
pub fn build_app<A, S, P>(
    auth_repo: Arc<A>,
    server_repo: Arc<S>,
    prober: Arc<P>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    A: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
    S: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let auth_state = AuthMiddlewareState::new(auth_repo.clone(), auth_config.clone());

    Router::new()
        .merge(auth_router_generic(auth_repo, auth_config))
        .merge(inventory_router_generic(server_repo, prober))
        .layer(middleware::from_fn_with_state(
            auth_state,
            resolve_auth_context::<A>,
        ))
        .layer(TraceLayer::new_for_http())
}
