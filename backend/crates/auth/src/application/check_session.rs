//! Check Session Use Case
//!
//! Resolves a session cookie into the caller's [`AuthContext`].

use std::sync::Arc;

use kernel::AuthContext;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::AdminSessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve an optional cookie value into an auth context
    ///
    /// Never fails: anything short of a valid, live session is anonymous.
    pub async fn resolve(&self, session_token: Option<&str>) -> AuthContext {
        let Some(token) = session_token else {
            return AuthContext::Anonymous;
        };

        match self.get_session(token).await {
            Ok(session) => AuthContext::admin(session.username),
            Err(AuthError::SessionInvalid) => AuthContext::Anonymous,
            Err(e) => {
                e.log();
                AuthContext::Anonymous
            }
        }
    }

    /// Get session and update last activity
    pub async fn get_session(&self, session_token: &str) -> AuthResult<AdminSession> {
        let session_id = session_token::parse(&self.config, session_token)?;

        let mut session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Expired admin session removed");
            return Err(AuthError::SessionInvalid);
        }

        session.touch();
        if let Err(e) = self.session_repo.update(&session).await {
            tracing::warn!(error = %e, "Failed to update session activity");
        }

        Ok(session)
    }
}
