//! Delete Server Use Case

use std::sync::Arc;

use kernel::AuthContext;

use crate::application::require_admin;
use crate::domain::entities::ServerId;
use crate::domain::repository::ServerRepository;
use crate::error::{InventoryError, InventoryResult};

/// Delete Server Use Case (admin only)
pub struct DeleteServerUseCase<R>
where
    R: ServerRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteServerUseCase<R>
where
    R: ServerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, auth: &AuthContext, id: ServerId) -> InventoryResult<()> {
        let actor = require_admin(auth)?;

        if !self.repo.delete(id).await? {
            return Err(InventoryError::ServerNotFound);
        }

        tracing::info!(server_id = %id, actor = %actor, "Server deleted");
        Ok(())
    }
}
