//! Server Inventory Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Server records, input validation, probe outcomes, repository traits
//! - `application/` - Registry use cases and reachability probes
//! - `infra/` - PostgreSQL / in-memory stores and the system prober
//! - `presentation/` - JSON handlers, HTML index page, router
//!
//! ## Access Model
//! - Reads (`/`, `/list`) and probes are public
//! - Add, update, and delete require an admin [`kernel::AuthContext`];
//!   the check happens before any input validation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProbeConfig;
pub use error::{InventoryError, InventoryResult};
pub use infra::{
    memory::MemoryServerRepository, postgres::PgServerRepository, system_prober::SystemProber,
};
pub use presentation::router::{inventory_router, inventory_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
