//! Form DTOs (Data Transfer Objects)

use serde::Deserialize;

// ============================================================================
// Login
// ============================================================================

/// `application/x-www-form-urlencoded` body of `POST /login`
///
/// Missing fields deserialize as empty strings so the handler can report
/// them with a friendly message instead of a rejection.
#[derive(Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
