//! Admin Bootstrap Use Case
//!
//! Guarantees an administrator exists before the server accepts requests.
//! Runs once at start-up; any error here aborts the process.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::{
    admin_name::AdminName,
    admin_password::{AdminPassword, RawPassword},
};
use crate::error::{AuthError, AuthResult};

/// Username used when none is configured
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Password used when none is configured
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Credentials to provision when the store has no admin
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

impl Default for BootstrapAdmin {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created { username: String },
    AlreadyPresent,
}

/// Ensure-admin use case
pub struct EnsureAdminUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> EnsureAdminUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { admin_repo, config }
    }

    pub async fn execute(&self, bootstrap: &BootstrapAdmin) -> AuthResult<BootstrapOutcome> {
        if self.admin_repo.exists_any().await? {
            tracing::debug!("Admin credential already present, skipping bootstrap");
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let username = AdminName::new(&bootstrap.username)?;
        let raw = RawPassword::new(bootstrap.password.clone())
            .map_err(|e| AuthError::InvalidAdminPassword(e.to_string()))?;

        if let Some(weakness) = raw.weakness() {
            tracing::warn!(
                username = %username,
                reason = %weakness,
                "Bootstrap admin password is weak; set ADMIN_PASSWORD to a stronger value"
            );
        }

        let password_hash = AdminPassword::from_raw(&raw, self.config.pepper())?;
        let admin = Admin::new(username, password_hash);
        self.admin_repo.create(&admin).await?;

        tracing::info!(
            admin_id = %admin.admin_id,
            username = %admin.username,
            "Default admin credential created"
        );

        Ok(BootstrapOutcome::Created {
            username: admin.username.to_string(),
        })
    }
}
