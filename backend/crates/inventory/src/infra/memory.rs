//! In-Memory Repository Implementation
//!
//! Ids start at 1 and are never reused, matching a database sequence.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::repository::ServerRepository;
use crate::domain::value_objects::ServerDraft;
use crate::error::InventoryResult;

struct State {
    servers: Vec<ServerRecord>,
    next_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory server store
#[derive(Clone, Default)]
pub struct MemoryServerRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryServerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn record_from(id: ServerId, draft: &ServerDraft) -> ServerRecord {
    ServerRecord {
        id,
        ip: draft.ip.as_str().to_string(),
        name: draft.name.as_str().to_string(),
        port: draft.port.get(),
    }
}

impl ServerRepository for MemoryServerRepository {
    async fn list(&self) -> InventoryResult<Vec<ServerRecord>> {
        // Insertion order is id order
        Ok(self.state.read().await.servers.clone())
    }

    async fn find_by_id(&self, id: ServerId) -> InventoryResult<Option<ServerRecord>> {
        let state = self.state.read().await;
        Ok(state.servers.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, draft: &ServerDraft) -> InventoryResult<ServerRecord> {
        let mut state = self.state.write().await;
        let id = ServerId(state.next_id);
        state.next_id += 1;

        let record = record_from(id, draft);
        state.servers.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: ServerId,
        draft: &ServerDraft,
    ) -> InventoryResult<Option<ServerRecord>> {
        let mut state = self.state.write().await;
        let Some(slot) = state.servers.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        *slot = record_from(id, draft);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: ServerId) -> InventoryResult<bool> {
        let mut state = self.state.write().await;
        let before = state.servers.len();
        state.servers.retain(|s| s.id != id);
        Ok(state.servers.len() < before)
    }

    async fn health_check(&self) -> InventoryResult<()> {
        Ok(())
    }
}
