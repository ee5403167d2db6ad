//! Presentation Layer
//!
//! HTTP handlers, HTML index page, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod pages;
pub mod router;

pub use handlers::InventoryAppState;
pub use router::{inventory_router, inventory_router_generic};
