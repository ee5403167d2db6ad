//! Application Layer - Use Cases
//!
//! Registry operations take the caller's [`AuthContext`] explicitly and
//! check it before looking at any input.

pub mod add_server;
pub mod config;
pub mod delete_server;
pub mod list_servers;
pub mod probe_host;
pub mod update_server;

pub use add_server::AddServerUseCase;
pub use delete_server::DeleteServerUseCase;
pub use list_servers::ListServersUseCase;
pub use probe_host::ProbeHostUseCase;
pub use update_server::UpdateServerUseCase;

use kernel::AuthContext;

use crate::error::InventoryResult;

/// Admin gate shared by the mutating use cases. Returns the admin's username.
fn require_admin(auth: &AuthContext) -> InventoryResult<&str> {
    Ok(auth.require_admin()?)
}
