//! Inventory Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::probe::Prober;
use crate::domain::repository::ServerRepository;
use crate::infra::postgres::PgServerRepository;
use crate::infra::system_prober::SystemProber;
use crate::presentation::handlers::{self, InventoryAppState};

/// Create the Inventory router with PostgreSQL repository and system prober
pub fn inventory_router(repo: PgServerRepository, prober: SystemProber) -> Router {
    inventory_router_generic(Arc::new(repo), Arc::new(prober))
}

/// Create a generic Inventory router for any repository and prober
///
/// Handlers read the caller's `AuthContext` from request extensions, so the
/// auth middleware must wrap this router for admin routes to succeed.
pub fn inventory_router_generic<R, P>(repo: Arc<R>, prober: Arc<P>) -> Router
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let state = InventoryAppState { repo, prober };

    Router::new()
        .route("/", get(handlers::index::<R, P>))
        .route("/health", get(handlers::health::<R, P>))
        .route("/list", get(handlers::list_servers::<R, P>))
        .route("/add", post(handlers::add_server::<R, P>))
        .route("/update/{id}", put(handlers::update_server::<R, P>))
        .route("/delete/{id}", delete(handlers::delete_server::<R, P>))
        .route("/ping/{ip}", get(handlers::ping::<R, P>))
        .route("/telnet/{ip}/{port}", get(handlers::telnet::<R, P>))
        .with_state(state)
}
