use crate::application::ports::NoticeSink;
use crate::application::services::{InventoryService, Settlement};
use crate::domain::entities::{ProductDraft, ProductFilter, ProductUpdate};
use crate::domain::value_objects::{Category, CategoryFilter, ProductId, MENU_CATEGORIES};
use crate::presentation::dto::inventory_dto::{
    CreateProductRequest, NoticeResponse, ProductQueryRequest, ProductResponse, StatsResponse,
    ToggleAvailabilityResponse, ToggleOutcome, UpdateProductRequest,
};
use crate::presentation::dto::Validate;
use crate::shared::error::AppError;
use std::sync::Arc;

/// View-facing facade over the inventory service. Every user intent from
/// the screen enters the core through here.
pub struct InventoryHandler {
    inventory_service: Arc<InventoryService>,
    notices: Arc<dyn NoticeSink>,
}

impl InventoryHandler {
    pub fn new(inventory_service: Arc<InventoryService>, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            inventory_service,
            notices,
        }
    }

    pub async fn load_inventory(&self) -> Result<(), AppError> {
        self.inventory_service.load().await
    }

    pub fn is_loading(&self) -> bool {
        self.inventory_service.is_loading()
    }

    /// Category options for the filter dropdown, `all` first.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec!["all".to_string()];
        categories.extend(MENU_CATEGORIES.iter().map(|c| c.to_string()));
        categories
    }

    pub async fn list_products(
        &self,
        request: ProductQueryRequest,
    ) -> Result<Vec<ProductResponse>, AppError> {
        request.validate().map_err(AppError::ValidationError)?;

        let filter = ProductFilter {
            search_term: request.search_term.unwrap_or_default().trim().to_string(),
            category: match request.category.as_deref() {
                Some(raw) => CategoryFilter::parse(raw).map_err(AppError::ValidationError)?,
                None => CategoryFilter::All,
            },
        };

        let products = self.inventory_service.filtered_products(&filter).await;
        Ok(products
            .iter()
            .map(|product| ProductResponse::from(product.as_ref()))
            .collect())
    }

    pub async fn get_stats(&self) -> Option<StatsResponse> {
        self.inventory_service.stats().await.map(StatsResponse::from)
    }

    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductResponse, AppError> {
        request.validate().map_err(AppError::ValidationError)?;

        let draft = ProductDraft {
            name: request.name.trim().to_string(),
            description: request.description,
            category: Category::new(request.category).map_err(AppError::ValidationError)?,
            price: request.price,
            image: request.image,
        };

        let created = self.inventory_service.create_product(draft).await?;
        Ok(ProductResponse::from(&created))
    }

    pub async fn update_product(
        &self,
        request: UpdateProductRequest,
    ) -> Result<ProductResponse, AppError> {
        request.validate().map_err(AppError::ValidationError)?;

        let id = parse_product_id(request.id)?;
        let update = ProductUpdate {
            name: request.name.map(|name| name.trim().to_string()),
            description: request.description,
            category: match request.category {
                Some(raw) => Some(Category::new(raw).map_err(AppError::ValidationError)?),
                None => None,
            },
            price: request.price,
            image: request.image,
            available: request.available,
        };

        let updated = self.inventory_service.update_product(id, update).await?;
        Ok(ProductResponse::from(&updated))
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        let id = parse_product_id(id)?;
        self.inventory_service.delete_product(id).await
    }

    pub async fn toggle_availability(
        &self,
        id: i64,
    ) -> Result<ToggleAvailabilityResponse, AppError> {
        let id = parse_product_id(id)?;
        let settlement = self.inventory_service.toggle_availability(id).await;

        let outcome = match settlement {
            Settlement::Confirmed => ToggleOutcome::Confirmed,
            Settlement::Reverted(_) => ToggleOutcome::Reverted,
            Settlement::NotFound => ToggleOutcome::NotFound,
        };
        let product = self
            .inventory_service
            .product(id)
            .await
            .map(|product| ProductResponse::from(product.as_ref()));

        Ok(ToggleAvailabilityResponse { outcome, product })
    }

    /// Drain pending failure notices for display.
    pub async fn take_notices(&self) -> Vec<NoticeResponse> {
        self.notices
            .drain()
            .await
            .into_iter()
            .map(NoticeResponse::from)
            .collect()
    }
}

fn parse_product_id(raw: i64) -> Result<ProductId, AppError> {
    ProductId::new(raw).map_err(AppError::ValidationError)
}
