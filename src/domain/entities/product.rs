use crate::domain::value_objects::{Category, CategoryFilter, ProductId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sales: u32,
    pub available: bool,
}

impl super::Identifiable for Product {
    type Id = ProductId;

    fn entity_id(&self) -> ProductId {
        self.id
    }
}

impl Product {
    /// Copy with the availability flag flipped. The original is untouched;
    /// this is the patch shape the optimistic toggle publishes.
    pub fn with_toggled_availability(&self) -> Product {
        let mut next = self.clone();
        next.available = !next.available;
        next
    }

    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Create payload sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub price: f64,
    pub image: Option<String>,
}

/// Edit payload; absent fields are left unchanged by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// View filter over the collection. Never mutates what it filters.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search_term: String,
    pub category: CategoryFilter,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        product.matches_search(&self.search_term) && self.category.matches(&product.category)
    }
}
