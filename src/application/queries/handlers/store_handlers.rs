//! Store Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::StoreRepositoryPort;
use crate::application::queries::GetStore;
use crate::domain::store::{Store, StoreError};

/// GetStore Handler
pub struct GetStoreHandler {
    store_repo: Arc<dyn StoreRepositoryPort>,
}

impl GetStoreHandler {
    pub fn new(store_repo: Arc<dyn StoreRepositoryPort>) -> Self {
        Self { store_repo }
    }

    pub async fn handle(&self, query: GetStore) -> Result<Store, ApplicationError> {
        let record = self
            .store_repo
            .find_by_id(query.store_id.value())
            .await?
            .ok_or(StoreError::NotFound(query.store_id))?;

        Ok(Store::try_from(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NewStoreRecord;
    use crate::domain::store::StoreId;
    use crate::infrastructure::memory::InMemoryStoreRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_get_existing_store() {
        let repo = Arc::new(InMemoryStoreRepository::new());
        let record = repo
            .insert(&NewStoreRecord {
                name: "FNAC".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        let handler = GetStoreHandler::new(repo);

        let store = handler
            .handle(GetStore {
                store_id: StoreId::new(record.id),
            })
            .await
            .unwrap();

        assert_eq!(store.id().value(), record.id);
        assert_eq!(store.name().as_str(), "FNAC");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let handler = GetStoreHandler::new(Arc::new(InMemoryStoreRepository::new()));

        let err = handler
            .handle(GetStore {
                store_id: StoreId::new(1),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Store(StoreError::NotFound(id)) if id == StoreId::new(1)
        ));
    }
}
