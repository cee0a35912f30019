use crate::shared::error::AppError;
use async_trait::async_trait;

/// Token source injected into the REST gateway at construction. `None`
/// means no session; requests then go out without an Authorization header
/// and the backend answers 401.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, AppError>;
}
