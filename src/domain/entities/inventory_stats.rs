use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard cards. Missing fields decode
/// to zero so a partial stats payload never fails the whole screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub available_products: u32,
    #[serde(default)]
    pub unavailable_products: u32,
    #[serde(default)]
    pub average_price: f64,
}
