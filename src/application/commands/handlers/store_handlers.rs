//! Store Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::CreateStore;
use crate::application::error::ApplicationError;
use crate::application::ports::{NewStoreRecord, StoreRepositoryPort};
use crate::domain::store::{Store, StoreId, StoreName};

// ============================================================================
// CreateStore
// ============================================================================

/// CreateStore Handler
pub struct CreateStoreHandler {
    store_repo: Arc<dyn StoreRepositoryPort>,
}

impl CreateStoreHandler {
    pub fn new(store_repo: Arc<dyn StoreRepositoryPort>) -> Self {
        Self { store_repo }
    }

    pub async fn handle(&self, command: CreateStore) -> Result<Store, ApplicationError> {
        if let Some(requested_id) = command.id {
            tracing::debug!(requested_id, "Ignoring caller-supplied store id");
        }

        // 先校验再落库，非法请求不会产生记录
        let name = StoreName::new(command.name.unwrap_or_default())?;

        let record = self
            .store_repo
            .insert(&NewStoreRecord {
                name: name.as_str().to_string(),
                created_at: Utc::now(),
            })
            .await?;

        let store = Store::new(StoreId::new(record.id), name, record.created_at);

        tracing::info!(
            store_id = %store.id(),
            name = %store.name(),
            created_at = %store.created_at().to_rfc3339(),
            "Store created"
        );

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::StoreError;
    use crate::infrastructure::memory::InMemoryStoreRepository;

    fn handler() -> (CreateStoreHandler, Arc<InMemoryStoreRepository>) {
        let repo = Arc::new(InMemoryStoreRepository::new());
        (CreateStoreHandler::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let (handler, repo) = handler();

        let store = handler.handle(CreateStore::named("Boulangerie")).await.unwrap();

        assert_eq!(store.id().value(), 1);
        assert_eq!(store.name().as_str(), "Boulangerie");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_name_is_not_persisted() {
        let (handler, repo) = handler();

        let err = handler.handle(CreateStore::named("")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Store(StoreError::EmptyName)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected() {
        let (handler, repo) = handler();

        let err = handler.handle(CreateStore::default()).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Store(StoreError::EmptyName)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_supplied_id_is_ignored() {
        let (handler, _repo) = handler();
        let command = CreateStore {
            name: Some("FNAC".to_string()),
            id: Some(999),
        };

        let store = handler.handle(command).await.unwrap();

        assert_eq!(store.id().value(), 1);
    }
}
