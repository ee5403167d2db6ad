//! Add Server Use Case

use std::sync::Arc;

use kernel::AuthContext;

use crate::application::require_admin;
use crate::domain::entities::ServerRecord;
use crate::domain::repository::ServerRepository;
use crate::domain::value_objects::{ServerDraft, ServerInput};
use crate::error::InventoryResult;

/// Add Server Use Case (admin only)
pub struct AddServerUseCase<R>
where
    R: ServerRepository,
{
    repo: Arc<R>,
}

impl<R> AddServerUseCase<R>
where
    R: ServerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        auth: &AuthContext,
        input: &ServerInput,
    ) -> InventoryResult<ServerRecord> {
        let actor = require_admin(auth)?;
        let draft = ServerDraft::parse(input)?;

        let record = self.repo.insert(&draft).await?;

        tracing::info!(
            server_id = %record.id,
            ip = %record.ip,
            port = record.port,
            actor = %actor,
            "Server added"
        );

        Ok(record)
    }
}
