//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer (PostgreSQL and in-memory).

use kernel::id::AdminSessionId;

use crate::domain::entity::{admin::Admin, admin_session::AdminSession};
use crate::domain::value_object::admin_name::AdminName;
use crate::error::AuthResult;

/// Admin credential store
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Persist a new admin credential
    async fn create(&self, admin: &Admin) -> AuthResult<()>;

    /// Exact-match lookup by username
    async fn find_by_username(&self, username: &AdminName) -> AuthResult<Option<Admin>>;

    /// Whether any admin credential exists
    async fn exists_any(&self) -> AuthResult<bool>;
}

/// Admin session store
#[trait_variant::make(AdminSessionRepository: Send)]
pub trait LocalAdminSessionRepository {
    async fn create(&self, session: &AdminSession) -> AuthResult<()>;

    /// Find a session by id, expired or not. Callers decide what expiry means.
    async fn find_by_id(&self, session_id: AdminSessionId) -> AuthResult<Option<AdminSession>>;

    /// Update session (last activity)
    async fn update(&self, session: &AdminSession) -> AuthResult<()>;

    /// Delete a session. Deleting an unknown session is not an error.
    async fn delete(&self, session_id: AdminSessionId) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
