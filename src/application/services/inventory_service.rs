use crate::application::ports::{NoticeSink, ProductGateway};
use crate::application::services::optimistic_store::{OptimisticStore, Settlement};
use crate::domain::entities::{
    FailureNotice, InventoryStats, Product, ProductDraft, ProductFilter, ProductUpdate,
};
use crate::domain::value_objects::ProductId;
use crate::shared::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

const TOGGLE_FAILURE_NOTICE: &str =
    "No se pudo cambiar la disponibilidad. Verifica tu conexión.";
const DELETE_FAILURE_NOTICE: &str = "No se pudo eliminar el producto.";

/// Application service behind the inventory screen. Owns the locally-held
/// product collection and the aggregate stats, and orchestrates the REST
/// gateway for every user intent.
pub struct InventoryService {
    gateway: Arc<dyn ProductGateway>,
    notices: Arc<dyn NoticeSink>,
    products: OptimisticStore<Product>,
    stats: RwLock<Option<InventoryStats>>,
    loading: AtomicBool,
}

impl InventoryService {
    pub fn new(gateway: Arc<dyn ProductGateway>, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            gateway,
            notices,
            products: OptimisticStore::new(),
            stats: RwLock::new(None),
            loading: AtomicBool::new(true),
        }
    }

    /// Initial load. The loading flag clears when the product fetch
    /// settles, success or not; a stats failure never fails the load.
    pub async fn load(&self) -> Result<(), AppError> {
        let result = self.refresh_products().await;
        if let Err(err) = self.refresh_stats().await {
            warn!("stats fetch failed during load: {err}");
        }
        self.loading.store(false, Ordering::Release);
        result
    }

    /// Wholesale refresh of products and stats from the backend.
    pub async fn refresh(&self) -> Result<(), AppError> {
        self.refresh_products().await?;
        self.refresh_stats().await
    }

    async fn refresh_products(&self) -> Result<(), AppError> {
        let products = self.gateway.list_products().await?;
        self.products.replace_all(products).await;
        Ok(())
    }

    async fn refresh_stats(&self) -> Result<(), AppError> {
        let stats = self.gateway.fetch_stats().await?;
        *self.stats.write().await = Some(stats);
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub async fn products(&self) -> Vec<Arc<Product>> {
        self.products.snapshot().await
    }

    pub async fn product(&self, id: ProductId) -> Option<Arc<Product>> {
        self.products.get(&id).await
    }

    /// View over the collection matching the filter. The underlying
    /// collection is never touched.
    pub async fn filtered_products(&self, filter: &ProductFilter) -> Vec<Arc<Product>> {
        self.products
            .snapshot()
            .await
            .into_iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    pub async fn stats(&self) -> Option<InventoryStats> {
        self.stats.read().await.clone()
    }

    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, AppError> {
        let created = self.gateway.create_product(draft).await?;
        if let Err(err) = self.refresh().await {
            warn!("refresh after create failed: {err}");
        }
        Ok(created)
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, AppError> {
        let updated = self.gateway.update_product(id, update).await?;
        if let Err(err) = self.refresh().await {
            warn!("refresh after update failed: {err}");
        }
        Ok(updated)
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<(), AppError> {
        match self.gateway.delete_product(id).await {
            Ok(()) => {
                if let Err(err) = self.refresh().await {
                    warn!("refresh after delete failed: {err}");
                }
                Ok(())
            }
            Err(err) => {
                warn!("delete failed for product {id}: {err}");
                self.notices
                    .record(FailureNotice::new(DELETE_FAILURE_NOTICE))
                    .await;
                Err(err)
            }
        }
    }

    /// Optimistic availability toggle. The flipped record is published
    /// immediately; on remote success only the stats are refreshed (the
    /// collection already holds the confirmed value), on failure the store
    /// reverts and a failure notice is recorded.
    pub async fn toggle_availability(&self, id: ProductId) -> Settlement {
        let gateway = Arc::clone(&self.gateway);
        let settlement = self
            .products
            .apply(&id, Product::with_toggled_availability, || async move {
                gateway.toggle_availability(id).await
            })
            .await;

        match &settlement {
            Settlement::Confirmed => {
                if let Err(err) = self.refresh_stats().await {
                    warn!("stats refresh after toggle failed: {err}");
                }
            }
            Settlement::Reverted(err) => {
                warn!("availability toggle reverted for product {id}: {err}");
                self.notices
                    .record(FailureNotice::new(TOGGLE_FAILURE_NOTICE))
                    .await;
            }
            Settlement::NotFound => {
                debug!("availability toggle for unknown product {id}");
            }
        }

        settlement
    }
}
