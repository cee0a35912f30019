use crate::domain::entities::{FailureNotice, InventoryStats, Product};
use crate::presentation::dto::Validate;
use serde::{Deserialize, Serialize};

const MAX_NAME_LEN: usize = 120;
const MAX_DESCRIPTION_LEN: usize = 2_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub image: Option<String>,
    pub sales: u32,
    pub available: bool,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.as_str().to_string(),
            price: product.price,
            image: product.image.clone(),
            sales: product.sales,
            available: product.available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_products: u32,
    pub available_products: u32,
    pub unavailable_products: u32,
    pub average_price: f64,
}

impl From<InventoryStats> for StatsResponse {
    fn from(stats: InventoryStats) -> Self {
        Self {
            total_products: stats.total_products,
            available_products: stats.available_products,
            unavailable_products: stats.unavailable_products,
            average_price: stats.average_price,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryRequest {
    pub search_term: Option<String>,
    pub category: Option<String>,
}

impl Validate for ProductQueryRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(term) = &self.search_term {
            if term.len() > MAX_NAME_LEN {
                return Err("Search term is too long".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub image: Option<String>,
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".to_string());
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err("Product name is too long".to_string());
        }
        if let Some(description) = &self.description {
            if description.len() > MAX_DESCRIPTION_LEN {
                return Err("Product description is too long".to_string());
            }
        }
        if self.category.trim().is_empty() {
            return Err("Product category is required".to_string());
        }
        validate_price(self.price)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Product name cannot be blank".to_string());
            }
            if name.len() > MAX_NAME_LEN {
                return Err("Product name is too long".to_string());
            }
        }
        if let Some(description) = &self.description {
            if description.len() > MAX_DESCRIPTION_LEN {
                return Err("Product description is too long".to_string());
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err("Product category cannot be blank".to_string());
            }
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() {
        return Err("Product price must be a number".to_string());
    }
    if price < 0.0 {
        return Err("Product price cannot be negative".to_string());
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleOutcome {
    Confirmed,
    Reverted,
    NotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleAvailabilityResponse {
    pub outcome: ToggleOutcome,
    pub product: Option<ProductResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponse {
    pub id: String,
    pub message: String,
    pub occurred_at: i64,
}

impl From<FailureNotice> for NoticeResponse {
    fn from(notice: FailureNotice) -> Self {
        Self {
            id: notice.id.to_string(),
            message: notice.message,
            occurred_at: notice.occurred_at.timestamp_millis(),
        }
    }
}
