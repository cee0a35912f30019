use crate::application::ports::CredentialProvider;
use crate::infrastructure::storage::secure_storage::SecureStorage;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

const ACCESS_TOKEN_KEY: &str = "access_token";
const LEGACY_ACCESS_TOKEN_KEY: &str = "auth_token";

/// Access-token store on top of secure storage. The canonical key is
/// `access_token`; older installs kept the token under `auth_token`, which
/// is honored once, migrated, and deleted.
pub struct TokenStore {
    storage: Arc<dyn SecureStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn SecureStorage>) -> Self {
        Self { storage }
    }

    pub async fn store_token(&self, token: &str) -> Result<(), AppError> {
        self.storage.store(ACCESS_TOKEN_KEY, token).await
    }

    pub async fn clear_token(&self) -> Result<(), AppError> {
        self.storage.delete(ACCESS_TOKEN_KEY).await?;
        let _ = self.storage.delete(LEGACY_ACCESS_TOKEN_KEY).await;
        Ok(())
    }

    async fn migrate_legacy_token(&self) -> Result<Option<String>, AppError> {
        let Some(token) = self.storage.retrieve(LEGACY_ACCESS_TOKEN_KEY).await? else {
            return Ok(None);
        };
        self.storage.store(ACCESS_TOKEN_KEY, &token).await?;
        let _ = self.storage.delete(LEGACY_ACCESS_TOKEN_KEY).await;
        info!("migrated access token from legacy storage key");
        Ok(Some(token))
    }
}

#[async_trait]
impl CredentialProvider for TokenStore {
    async fn access_token(&self) -> Result<Option<String>, AppError> {
        if let Some(token) = self.storage.retrieve(ACCESS_TOKEN_KEY).await? {
            return Ok(Some(token));
        }
        self.migrate_legacy_token().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::secure_storage::InMemorySecureStorage;

    fn setup_store() -> (TokenStore, Arc<InMemorySecureStorage>) {
        let storage = Arc::new(InMemorySecureStorage::new());
        let store = TokenStore::new(Arc::clone(&storage) as Arc<dyn SecureStorage>);
        (store, storage)
    }

    #[tokio::test]
    async fn returns_none_without_a_session() {
        let (store, _storage) = setup_store();
        assert!(store.access_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn canonical_key_wins_over_legacy() {
        let (store, storage) = setup_store();
        storage.store(ACCESS_TOKEN_KEY, "current").await.unwrap();
        storage
            .store(LEGACY_ACCESS_TOKEN_KEY, "stale")
            .await
            .unwrap();

        let token = store.access_token().await.unwrap();
        assert_eq!(token.as_deref(), Some("current"));

        // the legacy entry is untouched until the canonical one is gone
        let legacy = storage.retrieve(LEGACY_ACCESS_TOKEN_KEY).await.unwrap();
        assert_eq!(legacy.as_deref(), Some("stale"));
    }

    #[tokio::test]
    async fn legacy_token_is_honored_once_and_migrated() {
        let (store, storage) = setup_store();
        storage
            .store(LEGACY_ACCESS_TOKEN_KEY, "legacy-token")
            .await
            .unwrap();

        let token = store.access_token().await.unwrap();
        assert_eq!(token.as_deref(), Some("legacy-token"));

        let canonical = storage.retrieve(ACCESS_TOKEN_KEY).await.unwrap();
        assert_eq!(canonical.as_deref(), Some("legacy-token"));
        assert!(storage
            .retrieve(LEGACY_ACCESS_TOKEN_KEY)
            .await
            .unwrap()
            .is_none());

        // second read comes straight from the canonical key
        let token = store.access_token().await.unwrap();
        assert_eq!(token.as_deref(), Some("legacy-token"));
    }

    #[tokio::test]
    async fn clear_token_removes_both_keys() {
        let (store, storage) = setup_store();
        storage.store(ACCESS_TOKEN_KEY, "current").await.unwrap();
        storage
            .store(LEGACY_ACCESS_TOKEN_KEY, "stale")
            .await
            .unwrap();

        store.clear_token().await.unwrap();

        assert!(storage.retrieve(ACCESS_TOKEN_KEY).await.unwrap().is_none());
        assert!(storage
            .retrieve(LEGACY_ACCESS_TOKEN_KEY)
            .await
            .unwrap()
            .is_none());
        assert!(store.access_token().await.unwrap().is_none());
    }
}
