//! Sign Out Use Case
//!
//! Invalidates an admin session.

use std::sync::Arc;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::repository::AdminSessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session referenced by `session_token`
    ///
    /// A token with a bad signature yields `SessionInvalid`; callers clear
    /// the cookie regardless.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = session_token::parse(&self.config, session_token)?;
        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "Admin signed out");
        Ok(())
    }
}
