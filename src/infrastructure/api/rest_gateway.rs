use crate::application::ports::{CredentialProvider, ProductGateway};
use crate::domain::entities::{InventoryStats, Product, ProductDraft, ProductUpdate};
use crate::domain::value_objects::ProductId;
use crate::infrastructure::api::envelope::{decode_ack, decode_payload};
use crate::shared::config::ApiConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed implementation of the product gateway. The credential
/// provider is injected at construction; there is no global token lookup.
pub struct RestProductGateway {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl RestProductGateway {
    pub fn new(
        config: &ApiConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|err| AppError::ConfigurationError(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    async fn authorized_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, AppError> {
        let url = build_url(&self.base_url, path);
        debug!(%url, "inventory API request");
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        match self.credentials.access_token().await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }
}

#[async_trait]
impl ProductGateway for RestProductGateway {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let builder = self.authorized_request(Method::GET, "/api/products").await?;
        request_payload(builder).await
    }

    async fn fetch_stats(&self) -> Result<InventoryStats, AppError> {
        let builder = self
            .authorized_request(Method::GET, "/api/products/stats/all")
            .await?;
        request_payload(builder).await
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, AppError> {
        let builder = self
            .authorized_request(Method::POST, "/api/products")
            .await?
            .json(&draft);
        request_payload(builder).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, AppError> {
        let builder = self
            .authorized_request(Method::PUT, &format!("/api/products/{id}"))
            .await?
            .json(&update);
        request_payload(builder).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), AppError> {
        let builder = self
            .authorized_request(Method::DELETE, &format!("/api/products/{id}"))
            .await?;
        request_ack(builder).await
    }

    async fn toggle_availability(&self, id: ProductId) -> Result<(), AppError> {
        let builder = self
            .authorized_request(
                Method::PATCH,
                &format!("/api/products/{id}/toggle-availability"),
            )
            .await?;
        request_ack(builder).await
    }
}

async fn request_payload<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, AppError> {
    let body = successful_body(builder).await?;
    decode_payload(&body)
}

async fn request_ack(builder: RequestBuilder) -> Result<(), AppError> {
    let body = successful_body(builder).await?;
    decode_ack(&body)
}

async fn successful_body(builder: RequestBuilder) -> Result<String, AppError> {
    let response = builder
        .send()
        .await
        .map_err(|err| AppError::Network(err.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| AppError::Network(err.to_string()))?;

    if status.is_success() {
        return Ok(body);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Unauthorized(format!(
            "Inventory API refused the credential ({status})"
        ))),
        StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
            "Inventory API resource missing ({status})"
        ))),
        _ => Err(AppError::Api(format!(
            "Inventory API error ({status}): {body}"
        ))),
    }
}

fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
