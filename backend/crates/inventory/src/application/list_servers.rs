//! List Servers Use Case

use std::sync::Arc;

use crate::domain::entities::ServerRecord;
use crate::domain::repository::ServerRepository;
use crate::error::InventoryResult;

/// List Servers Use Case (public)
pub struct ListServersUseCase<R>
where
    R: ServerRepository,
{
    repo: Arc<R>,
}

impl<R> ListServersUseCase<R>
where
    R: ServerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> InventoryResult<Vec<ServerRecord>> {
        self.repo.list().await
    }
}
