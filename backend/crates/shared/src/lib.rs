//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! `auth` and `inventory` crates:
//! - Common error types and result aliases
//! - Typed ID wrappers
//! - The per-request authentication context
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod auth_context;
pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

pub use auth_context::AuthContext;
pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
