//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::value_objects::ServerDraft;
use crate::error::InventoryResult;

/// Server store
///
/// Each write is atomic: it either fully applies or leaves the store
/// unchanged.
#[trait_variant::make(ServerRepository: Send)]
pub trait LocalServerRepository {
    /// All servers, ordered by id
    async fn list(&self) -> InventoryResult<Vec<ServerRecord>>;

    async fn find_by_id(&self, id: ServerId) -> InventoryResult<Option<ServerRecord>>;

    /// Store a new server and return it with its assigned id
    async fn insert(&self, draft: &ServerDraft) -> InventoryResult<ServerRecord>;

    /// Replace all fields of an existing server. `None` if `id` is unknown.
    async fn update(
        &self,
        id: ServerId,
        draft: &ServerDraft,
    ) -> InventoryResult<Option<ServerRecord>>;

    /// Remove a server. `false` if `id` is unknown.
    async fn delete(&self, id: ServerId) -> InventoryResult<bool>;

    /// Cheap round trip to the backing store
    async fn health_check(&self) -> InventoryResult<()>;
}
