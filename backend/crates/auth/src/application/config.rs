//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime (12 hours)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "admin_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session TTL as a chrono duration
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::hours(12))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig::session(
            self.session_cookie_name.clone(),
            self.cookie_secure,
            self.cookie_same_site,
        )
        .with_max_age(self.session_ttl.as_secs() as i64)
    }
}
