//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Admin and session entities, value objects, repository traits
//! - `application/` - Use cases (bootstrap, sign in, sign out, session check)
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - Login/logout handlers, HTML pages, auth middleware, router
//!
//! ## Features
//! - Single administrator identity, provisioned at start-up
//! - Server-side sessions referenced by an HMAC-signed cookie token
//! - Middleware that resolves every request into a [`kernel::AuthContext`]
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, plaintext zeroized after use
//! - Unknown username and wrong password are indistinguishable to the caller
//! - Tampered, unknown, or expired session cookies resolve to anonymous

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::bootstrap::{BootstrapAdmin, EnsureAdminUseCase};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::middleware::{AuthMiddlewareState, resolve_auth_context};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
