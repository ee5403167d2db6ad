//! Presentation Layer
//!
//! HTTP handlers, HTML pages, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, resolve_auth_context};
pub use router::{auth_router, auth_router_generic};
