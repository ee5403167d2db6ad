//! Sign In Use Case
//!
//! Verifies the admin credential and opens a session.

use std::sync::Arc;

use platform::client::ClientInfo;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::entity::{admin::Admin, admin_session::AdminSession};
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::value_object::{admin_name::AdminName, admin_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SignInInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInInput")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    pub username: String,
}

/// Sign in use case
pub struct SignInUseCase<A, S>
where
    A: AdminRepository,
    S: AdminSessionRepository,
{
    admin_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, S> SignInUseCase<A, S>
where
    A: AdminRepository,
    S: AdminSessionRepository,
{
    pub fn new(admin_repo: Arc<A>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            admin_repo,
            session_repo,
            config,
        }
    }

    /// Check a username/password pair against the credential store
    ///
    /// ## Errors
    /// - [`AuthError::MissingCredentials`] if either field is blank
    /// - [`AuthError::InvalidCredentials`] for an unknown username *or* a
    ///   wrong password
    ///
    /// The username must match exactly. Surrounding whitespace is not
    /// stripped, so `" admin "` is a different (unknown) name.
    pub async fn verify(&self, submitted: &str, password: String) -> AuthResult<Admin> {
        if submitted.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let username = AdminName::new(submitted)
            .ok()
            .filter(|name| name.as_str() == submitted)
            .ok_or(AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let admin = self
            .admin_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !admin
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(admin)
    }

    /// Verify credentials and create a session
    pub async fn execute(&self, input: SignInInput, client: ClientInfo) -> AuthResult<SignInOutput> {
        let admin = match self.verify(&input.username, input.password).await {
            Ok(admin) => admin,
            Err(AuthError::InvalidCredentials) => {
                tracing::warn!(client_ip = ?client.ip, "Admin sign-in rejected");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        let session = AdminSession::new(
            admin.admin_id,
            admin.username.as_str(),
            client.ip_string(),
            client.user_agent.clone(),
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        tracing::info!(
            username = %admin.username,
            session_id = %session.session_id,
            client_ip = ?client.ip,
            "Admin signed in"
        );

        Ok(SignInOutput {
            session_token: session_token::issue(&self.config, session.session_id),
            username: admin.username.to_string(),
        })
    }
}
