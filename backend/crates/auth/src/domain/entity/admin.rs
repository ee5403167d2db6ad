//! Admin Entity
//!
//! The single privileged identity allowed to mutate the server registry.

use chrono::{DateTime, Utc};
use kernel::id::AdminId;

use crate::domain::value_object::{admin_name::AdminName, admin_password::AdminPassword};

/// Stored administrator credential
#[derive(Debug, Clone)]
pub struct Admin {
    pub admin_id: AdminId,
    pub username: AdminName,
    pub password_hash: AdminPassword,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(username: AdminName, password_hash: AdminPassword) -> Self {
        Self {
            admin_id: AdminId::new(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
