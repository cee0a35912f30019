pub mod inventory_stats;
pub mod notice;
pub mod product;

pub use inventory_stats::InventoryStats;
pub use notice::FailureNotice;
pub use product::{Product, ProductDraft, ProductFilter, ProductUpdate};

use std::hash::Hash;

/// Entity with a stable unique identifier, as required by collection
/// stores that patch one record at a time.
pub trait Identifiable {
    type Id: Clone + Eq + Hash + Send + Sync + 'static;

    fn entity_id(&self) -> Self::Id;
}
