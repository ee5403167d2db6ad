//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::repository::ServerRepository;
use crate::domain::value_objects::ServerDraft;
use crate::error::{InventoryError, InventoryResult};

/// PostgreSQL-backed server store
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
}

impl PgServerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ServerRow {
    id: i64,
    ip: String,
    name: String,
    port: i32,
}

impl TryFrom<ServerRow> for ServerRecord {
    type Error = InventoryError;

    fn try_from(row: ServerRow) -> Result<Self, Self::Error> {
        let port = u16::try_from(row.port).map_err(|_| {
            InventoryError::Internal(format!("server {} has stored port {}", row.id, row.port))
        })?;
        Ok(ServerRecord {
            id: ServerId(row.id),
            ip: row.ip,
            name: row.name,
            port,
        })
    }
}

impl ServerRepository for PgServerRepository {
    async fn list(&self) -> InventoryResult<Vec<ServerRecord>> {
        let rows: Vec<ServerRow> =
            sqlx::query_as("SELECT id, ip, name, port FROM servers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(ServerRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: ServerId) -> InventoryResult<Option<ServerRecord>> {
        let row: Option<ServerRow> =
            sqlx::query_as("SELECT id, ip, name, port FROM servers WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;

        row.map(ServerRecord::try_from).transpose()
    }

    async fn insert(&self, draft: &ServerDraft) -> InventoryResult<ServerRecord> {
        let mut tx = self.pool.begin().await?;

        let row: ServerRow = sqlx::query_as(
            r#"
            INSERT INTO servers (ip, name, port)
            VALUES ($1, $2, $3)
            RETURNING id, ip, name, port
            "#,
        )
        .bind(draft.ip.as_str())
        .bind(draft.name.as_str())
        .bind(i32::from(draft.port.get()))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        ServerRecord::try_from(row)
    }

    async fn update(
        &self,
        id: ServerId,
        draft: &ServerDraft,
    ) -> InventoryResult<Option<ServerRecord>> {
        let mut tx = self.pool.begin().await?;

        let row: Option<ServerRow> = sqlx::query_as(
            r#"
            UPDATE servers
            SET ip = $2, name = $3, port = $4
            WHERE id = $1
            RETURNING id, ip, name, port
            "#,
        )
        .bind(id.get())
        .bind(draft.ip.as_str())
        .bind(draft.name.as_str())
        .bind(i32::from(draft.port.get()))
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        row.map(ServerRecord::try_from).transpose()
    }

    async fn delete(&self, id: ServerId) -> InventoryResult<bool> {
        let mut tx = self.pool.begin().await?;

        let affected = sqlx::query("DELETE FROM servers WHERE id = $1")
            .bind(id.get())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(affected > 0)
    }

    async fn health_check(&self) -> InventoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
