//! Authentication context
//!
//! [`AuthContext`] is resolved once per request by the auth middleware and
//! then handed explicitly to every use case that needs to know who is
//! calling. Mutating operations gate on [`AuthContext::require_admin`].

use crate::error::app_error::{AppError, AppResult};

/// Who is making the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthContext {
    /// No valid session
    #[default]
    Anonymous,
    /// Holder of a valid admin session
    Admin { username: String },
}

impl AuthContext {
    pub fn admin(username: impl Into<String>) -> Self {
        Self::Admin {
            username: username.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Admin { username } => Some(username),
            Self::Anonymous => None,
        }
    }

    /// Gate for admin-only operations.
    ///
    /// ## Returns
    /// The admin's username, or a 403 `"Unauthorized"` error.
    pub fn require_admin(&self) -> AppResult<&str> {
        self.username()
            .ok_or_else(|| AppError::forbidden("Unauthorized"))
    }
}

/// Reads the context placed in request extensions by the auth middleware.
/// Requests that never passed through it are treated as anonymous.
#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_anonymous_is_rejected() {
        let err = AuthContext::Anonymous.require_admin().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.message(), "Unauthorized");
    }

    #[test]
    fn test_admin_passes() {
        let ctx = AuthContext::admin("admin");
        assert!(ctx.is_admin());
        assert_eq!(ctx.require_admin().unwrap(), "admin");
    }

    #[test]
    fn test_default_is_anonymous() {
        assert_eq!(AuthContext::default(), AuthContext::Anonymous);
    }
}
