//! Admin Session Entity
//!
//! Represents an authenticated admin session.
//! Stored server-side; the browser only holds a signed reference to it.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{AdminId, AdminSessionId};

/// Admin session entity
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: AdminSessionId,
    pub admin_id: AdminId,
    /// Username at session creation, copied into the request's auth context
    pub username: String,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Client IP (optional, for logging)
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl AdminSession {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(
        admin_id: AdminId,
        username: impl Into<String>,
        client_ip: Option<String>,
        user_agent: Option<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            session_id: AdminSessionId::new(),
            admin_id,
            username: username.into(),
            expires_at_ms: (now + ttl).timestamp_millis(),
            client_ip,
            user_agent,
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    pub fn remaining_ms(&self) -> i64 {
        (self.expires_at_ms - Utc::now().timestamp_millis()).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_live() {
        let session = AdminSession::new(AdminId::new(), "admin", None, None, Duration::hours(12));
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > Duration::hours(11).num_milliseconds());
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let session = AdminSession::new(AdminId::new(), "admin", None, None, Duration::zero());
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }
}
