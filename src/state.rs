use crate::application::ports::{CredentialProvider, NoticeSink, ProductGateway};
use crate::application::services::InventoryService;
use crate::infrastructure::api::RestProductGateway;
use crate::infrastructure::notice_log::NoticeLog;
use crate::infrastructure::storage::{KeyringStorage, SecureStorage, TokenStore};
use crate::presentation::handlers::InventoryHandler;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use std::sync::Arc;

/// アプリケーション全体の状態を管理する構造体
#[derive(Clone)]
pub struct AppState {
    pub inventory_service: Arc<InventoryService>,
    pub inventory_handler: Arc<InventoryHandler>,
    pub token_store: Arc<TokenStore>,
    pub notices: Arc<NoticeLog>,
}

impl AppState {
    /// Wire the core against the OS keychain and the configured API.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let storage: Arc<dyn SecureStorage> = Arc::new(KeyringStorage::new(
            config.storage.keychain_service.clone(),
        ));
        Self::with_storage(config, storage)
    }

    /// Same wiring with a caller-supplied secret backend. Tests and
    /// headless tools pass an in-memory storage here.
    pub fn with_storage(
        config: &AppConfig,
        storage: Arc<dyn SecureStorage>,
    ) -> Result<Self, AppError> {
        config.validate().map_err(AppError::ConfigurationError)?;

        let token_store = Arc::new(TokenStore::new(storage));
        let gateway: Arc<dyn ProductGateway> = Arc::new(RestProductGateway::new(
            &config.api,
            Arc::clone(&token_store) as Arc<dyn CredentialProvider>,
        )?);
        let notices = Arc::new(NoticeLog::new());
        let inventory_service = Arc::new(InventoryService::new(
            gateway,
            Arc::clone(&notices) as Arc<dyn NoticeSink>,
        ));
        let inventory_handler = Arc::new(InventoryHandler::new(
            Arc::clone(&inventory_service),
            Arc::clone(&notices) as Arc<dyn NoticeSink>,
        ));

        Ok(Self {
            inventory_service,
            inventory_handler,
            token_store,
            notices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemorySecureStorage;

    #[test]
    fn wiring_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.api.base_url = "not-a-url".to_string();

        let storage: Arc<dyn SecureStorage> = Arc::new(InMemorySecureStorage::new());
        let result = AppState::with_storage(&config, storage);
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn wiring_builds_with_defaults() {
        let storage: Arc<dyn SecureStorage> = Arc::new(InMemorySecureStorage::new());
        let state = AppState::with_storage(&AppConfig::default(), storage);
        assert!(state.is_ok());
    }
}
