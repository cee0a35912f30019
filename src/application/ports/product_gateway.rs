use crate::domain::entities::{InventoryStats, Product, ProductDraft, ProductUpdate};
use crate::domain::value_objects::ProductId;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// 商品APIへのゲートウェイポート
///
/// Implementations convert transport failures and non-success statuses into
/// `AppError` before returning; callers never see raw responses.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;

    async fn fetch_stats(&self) -> Result<InventoryStats, AppError>;

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, AppError>;

    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, AppError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), AppError>;

    /// Dedicated partial-update endpoint flipping the availability flag.
    async fn toggle_availability(&self, id: ProductId) -> Result<(), AppError>;
}
