//! SQLite Store Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    NewStoreRecord, RepositoryError, StoreRecord, StoreRepositoryPort,
};

/// SQLite Store Repository
pub struct SqliteStoreRepository {
    pool: DbPool,
}

impl SqliteStoreRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StoreRow {
    id: i64,
    name: String,
    created_at: String,
}

impl TryFrom<StoreRow> for StoreRecord {
    type Error = RepositoryError;

    fn try_from(row: StoreRow) -> Result<Self, Self::Error> {
        Ok(StoreRecord {
            id: row.id,
            name: row.name,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl StoreRepositoryPort for SqliteStoreRepository {
    async fn insert(&self, store: &NewStoreRecord) -> Result<StoreRecord, RepositoryError> {
        let result = sqlx::query("INSERT INTO stores (name, created_at) VALUES (?, ?)")
            .bind(&store.name)
            .bind(store.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(StoreRecord {
            id: result.last_insert_rowid(),
            name: store.name.clone(),
            created_at: store.created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<StoreRecord>, RepositoryError> {
        let row: Option<StoreRow> =
            sqlx::query_as("SELECT id, name, created_at FROM stores WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(StoreRecord::try_from).transpose()
    }
}
