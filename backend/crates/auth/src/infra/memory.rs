//! In-Memory Repository Implementations
//!
//! Used when no database is configured, and by tests. State lives behind a
//! single `tokio::sync::RwLock` and is lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::AdminSessionId;
use tokio::sync::RwLock;

use crate::domain::entity::{admin::Admin, admin_session::AdminSession};
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::value_object::admin_name::AdminName;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    admins: Vec<Admin>,
    sessions: HashMap<AdminSessionId, AdminSession>,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}

impl AdminRepository for MemoryAuthRepository {
    async fn create(&self, admin: &Admin) -> AuthResult<()> {
        let mut state = self.state.write().await;
        if state.admins.iter().any(|a| a.username == admin.username) {
            return Err(AuthError::Internal(format!(
                "admin '{}' already exists",
                admin.username
            )));
        }
        state.admins.push(admin.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &AdminName) -> AuthResult<Option<Admin>> {
        let state = self.state.read().await;
        Ok(state
            .admins
            .iter()
            .find(|a| &a.username == username)
            .cloned())
    }

    async fn exists_any(&self) -> AuthResult<bool> {
        Ok(!self.state.read().await.admins.is_empty())
    }
}

impl AdminSessionRepository for MemoryAuthRepository {
    async fn create(&self, session: &AdminSession) -> AuthResult<()> {
        self.state
            .write()
            .await
            .sessions
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: AdminSessionId) -> AuthResult<Option<AdminSession>> {
        let state = self.state.read().await;
        Ok(state.sessions.get(&session_id).cloned())
    }

    async fn update(&self, session: &AdminSession) -> AuthResult<()> {
        if let Some(stored) = self.state.write().await.sessions.get_mut(&session.session_id) {
            *stored = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, session_id: AdminSessionId) -> AuthResult<()> {
        self.state.write().await.sessions.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut state = self.state.write().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| s.expires_at_ms > now_ms);
        Ok((before - state.sessions.len()) as u64)
    }
}
