//! Update Server Use Case

use std::sync::Arc;

use kernel::AuthContext;

use crate::application::require_admin;
use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::repository::ServerRepository;
use crate::domain::value_objects::{ServerDraft, ServerInput};
use crate::error::{InventoryError, InventoryResult};

/// Update Server Use Case (admin only)
///
/// Replaces ip, name, and port; the id never changes.
pub struct UpdateServerUseCase<R>
where
    R: ServerRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateServerUseCase<R>
where
    R: ServerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        auth: &AuthContext,
        id: ServerId,
        input: &ServerInput,
    ) -> InventoryResult<ServerRecord> {
        let actor = require_admin(auth)?;
        let draft = ServerDraft::parse(input)?;

        let record = self
            .repo
            .update(id, &draft)
            .await?
            .ok_or(InventoryError::ServerNotFound)?;

        tracing::info!(
            server_id = %record.id,
            ip = %record.ip,
            port = record.port,
            actor = %actor,
            "Server updated"
        );

        Ok(record)
    }
}
