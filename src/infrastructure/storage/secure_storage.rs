use crate::shared::error::AppError;
use async_trait::async_trait;
use keyring::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// セキュアストレージのトレイト
#[async_trait]
pub trait SecureStorage: Send + Sync {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// OS keychain backed storage.
pub struct KeyringStorage {
    service: String,
}

impl KeyringStorage {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> anyhow::Result<Entry> {
        use anyhow::Context;
        Entry::new(&self.service, key).context("Failed to create keyring entry")
    }
}

#[async_trait]
impl SecureStorage for KeyringStorage {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        debug!("KeyringStorage: storing secret under key={key}");
        let entry = self.entry(key)?;
        entry.set_password(value)?;
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError> {
        let entry = self.entry(key)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let entry = self.entry(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory storage for tests and headless development.
#[derive(Default)]
pub struct InMemorySecureStorage {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySecureStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecureStorage for InMemorySecureStorage {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
