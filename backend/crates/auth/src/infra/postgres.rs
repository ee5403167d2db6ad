//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AdminId, AdminSessionId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{admin::Admin, admin_session::AdminSession};
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::value_object::{admin_name::AdminName, admin_password::AdminPassword};
use crate::error::AuthResult;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Admin Repository Implementation
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminRow {
    admin_id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = crate::error::AuthError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Admin {
            admin_id: AdminId::from_uuid(row.admin_id),
            username: AdminName::from_db(row.username),
            password_hash: AdminPassword::from_phc_string(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

impl AdminRepository for PgAuthRepository {
    async fn create(&self, admin: &Admin) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admins (admin_id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(admin.admin_id.as_uuid())
        .bind(admin.username.as_str())
        .bind(admin.password_hash.as_phc_string())
        .bind(admin.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_username(&self, username: &AdminName) -> AuthResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT admin_id, username, password_hash, created_at
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Admin::try_from).transpose()
    }

    async fn exists_any(&self) -> AuthResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM admins)")
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

// ============================================================================
// Admin Session Repository Implementation
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminSessionRow {
    session_id: Uuid,
    admin_id: Uuid,
    username: String,
    expires_at_ms: i64,
    client_ip: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl From<AdminSessionRow> for AdminSession {
    fn from(row: AdminSessionRow) -> Self {
        AdminSession {
            session_id: AdminSessionId::from_uuid(row.session_id),
            admin_id: AdminId::from_uuid(row.admin_id),
            username: row.username,
            expires_at_ms: row.expires_at_ms,
            client_ip: row.client_ip,
            user_agent: row.user_agent,
            created_at: row.created_at,
            last_activity_at: row.last_activity_at,
        }
    }
}

impl AdminSessionRepository for PgAuthRepository {
    async fn create(&self, session: &AdminSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_sessions (
                session_id,
                admin_id,
                username,
                expires_at_ms,
                client_ip,
                user_agent,
                created_at,
                last_activity_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.admin_id.as_uuid())
        .bind(&session.username)
        .bind(session.expires_at_ms)
        .bind(&session.client_ip)
        .bind(&session.user_agent)
        .bind(session.created_at)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: AdminSessionId) -> AuthResult<Option<AdminSession>> {
        let row = sqlx::query_as::<_, AdminSessionRow>(
            r#"
            SELECT
                session_id,
                admin_id,
                username,
                expires_at_ms,
                client_ip,
                user_agent,
                created_at,
                last_activity_at
            FROM admin_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdminSession::from))
    }

    async fn update(&self, session: &AdminSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE admin_sessions
            SET expires_at_ms = $2, last_activity_at = $3
            WHERE session_id = $1
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.expires_at_ms)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: AdminSessionId) -> AuthResult<()> {
        sqlx::query("DELETE FROM admin_sessions WHERE session_id = $1")
            .bind(session_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM admin_sessions WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(sessions_deleted = deleted, "Cleaned up expired admin sessions");

        Ok(deleted)
    }
}
